//! Escaping for markup contexts.
//!
//! Record content is free-form text supplied by the data source; anything
//! interpolated into a structural markup context (the HTML card backend)
//! must have the five markup-special characters replaced so record content
//! can never inject structure.

/// Escape `&`, `<`, `>`, `"` and `'` for interpolation into markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of [`escape`], for round-trip checks only.
    fn unescape(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escapes_all_five_specials() {
        assert_eq!(
            escape(r#"<FROM> "alpine" & 'node'"#),
            "&lt;FROM&gt; &quot;alpine&quot; &amp; &#39;node&#39;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("cargo build --release"), "cargo build --release");
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let cases = [
            "RUN apt-get install -y build-essential && rm -rf /var/lib/apt/lists/*",
            r#"echo "<tag attr='v'>" > out.html"#,
            "a && b || c",
            "&amp; already escaped input is data, not markup",
        ];
        for case in cases {
            assert_eq!(unescape(&escape(case)), case);
        }
    }

    #[test]
    fn test_output_contains_no_raw_structural_characters() {
        let escaped = escape(r#"<script>alert("x")</script>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }
}
