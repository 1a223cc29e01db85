//! Plain-terminal backend for `stackdex show` and `stackdex list`.

use crate::{Card, NO_RESULTS_MESSAGE, SectionBody};
use colored::Colorize;
use stackdex_catalog::StackRecord;
use std::fmt::Write;

/// Render one card for the terminal.
pub fn render_card(card: &Card) -> String {
    let mut out = String::new();

    let badge = format!("[{}]", card.kind.label());
    let _ = writeln!(
        out,
        "{} {} {}  {}",
        card.kind.icon(),
        card.name.bold(),
        badge.dimmed(),
        card.build_tool.cyan()
    );
    let _ = writeln!(out, "{}", card.description);

    for section in &card.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.title.bold().underline());
        match &section.body {
            SectionBody::Block(text) => {
                for line in text.lines() {
                    let _ = writeln!(out, "  {line}");
                }
            }
            SectionBody::List { entries, executable } => {
                for entry in entries {
                    if *executable {
                        let _ = writeln!(out, "  {} {}", "$".green(), entry);
                    } else {
                        let _ = writeln!(out, "  {} {}", "•".yellow(), entry);
                    }
                }
            }
        }
    }

    out
}

/// One `list` line per record: id, name, kind badge, build tool.
pub fn render_listing(records: &[&StackRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE.dimmed());
    }

    let id_width = records.iter().map(|r| r.id.len()).max().unwrap_or(0);
    let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for record in records {
        // Pad before coloring; ANSI escapes would throw off the widths.
        let id = format!("{:id_width$}", record.id);
        let name = format!("{:name_width$}", record.name);
        let kind = format!("{:10}", record.kind.label());
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            id.bold(),
            name,
            kind.dimmed(),
            record.build_tool.cyan(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackdex_catalog::{StackKind, StackRecord};

    fn record() -> StackRecord {
        StackRecord {
            id: "go-grpc".to_string(),
            name: "Go (gRPC)".to_string(),
            kind: StackKind::Backend,
            build_tool: "go".to_string(),
            description: "gRPC microservices".to_string(),
            build_commands: vec!["go build ./...".to_string()],
            test_commands: Vec::new(),
            dockerfile: None,
            jenkinsfile: None,
            argocd_manifest: None,
            gotchas: vec!["regenerate stubs".to_string()],
        }
    }

    #[test]
    fn test_card_includes_present_sections_only() {
        colored::control::set_override(false);
        let out = render_card(&Card::from_record(&record()));

        assert!(out.contains("Go (gRPC)"));
        assert!(out.contains("Build"));
        assert!(out.contains("$ go build ./..."));
        assert!(out.contains("• regenerate stubs"));
        assert!(!out.contains("Test"));
        assert!(!out.contains("Dockerfile"));
    }

    #[test]
    fn test_empty_listing_shows_placeholder() {
        colored::control::set_override(false);
        let out = render_listing(&[]);
        assert!(out.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_listing_has_one_line_per_record() {
        colored::control::set_override(false);
        let a = record();
        let refs: Vec<&StackRecord> = vec![&a];
        let out = render_listing(&refs);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("go-grpc"));
    }
}
