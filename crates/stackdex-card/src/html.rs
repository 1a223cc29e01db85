//! HTML fragment backend.
//!
//! Emits self-contained fragments suitable for pasting into internal docs.
//! Every interpolated field goes through [`markup::escape`], so record
//! content can never inject structure. Copy affordances are emitted as
//! buttons whose `data-copy-target` points at the element holding the
//! source text.

use crate::{Card, NO_RESULTS_MESSAGE, SectionBody};
use stackdex_catalog::markup;
use std::fmt::Write;

/// Render a list of cards, or the no-results placeholder when empty.
pub fn render_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return format!(
            "<p class=\"no-results\">{}</p>\n",
            markup::escape(NO_RESULTS_MESSAGE)
        );
    }
    let mut out = String::new();
    for card in cards {
        out.push_str(&render_card(card));
    }
    out
}

/// Render one card as an `<article>` fragment.
pub fn render_card(card: &Card) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<article class=\"card\" id=\"{}\">", markup::escape(&card.id));
    let _ = writeln!(
        out,
        "  <header><span class=\"icon\">{}</span><h2>{}</h2><span class=\"badge badge-{}\">{}</span></header>",
        card.kind.icon(),
        markup::escape(&card.name),
        card.kind.label(),
        card.kind.label(),
    );
    let _ = writeln!(out, "  <p class=\"description\">{}</p>", markup::escape(&card.description));

    for section in &card.sections {
        let id = markup::escape(&section.id);
        let _ = writeln!(out, "  <section id=\"{id}\">");
        let _ = writeln!(out, "    <h3>{}</h3>", markup::escape(section.title));
        match &section.body {
            SectionBody::Block(text) => {
                let _ = writeln!(
                    out,
                    "    <pre><code id=\"{id}-text\">{}</code></pre>",
                    markup::escape(text)
                );
                let _ = writeln!(
                    out,
                    "    <button class=\"copy\" data-copy-target=\"{id}-text\">copy</button>"
                );
            }
            SectionBody::List { entries, executable } => {
                let class = if *executable { "commands" } else { "notes" };
                let _ = writeln!(out, "    <ul class=\"{class}\">");
                for (i, entry) in entries.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "      <li><code id=\"{id}-{i}\">{}</code><button class=\"copy\" data-copy-target=\"{id}-{i}\">copy</button></li>",
                        markup::escape(entry)
                    );
                }
                let _ = writeln!(out, "    </ul>");
            }
        }
        let _ = writeln!(out, "  </section>");
    }

    let _ = writeln!(out, "</article>");
    out
}
