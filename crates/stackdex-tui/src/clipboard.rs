//! Clipboard capability with a legacy fallback.
//!
//! Two strategies behind one `copy` entry point: the system clipboard via
//! arboard, and an OSC 52 escape sequence written to the terminal for
//! environments without one (SSH sessions, bare containers). A primary
//! failure falls back to OSC 52 exactly once; at most two attempts per
//! click, never more.

use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;

pub struct ClipboardWriter {
    system: Option<Clipboard>,
}

impl ClipboardWriter {
    /// Capability detection: a failed arboard init just means we go
    /// straight to OSC 52.
    pub fn new() -> Self {
        let system = Clipboard::new().ok();
        if system.is_none() {
            log::debug!("system clipboard unavailable, using OSC 52 only");
        }
        Self { system }
    }

    /// Place `text` on the clipboard. Errors only when both strategies fail.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(clipboard) = self.system.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => return Ok(()),
                Err(e) => log::debug!("system clipboard write failed, trying OSC 52: {e}"),
            }
        }
        copy_osc52(text)
    }
}

impl Default for ClipboardWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_osc52(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write OSC 52 clipboard sequence")
}

fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_wraps_base64_payload() {
        let seq = osc52_sequence("cargo build");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));

        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        let decoded = STANDARD.decode(payload).expect("valid base64");
        assert_eq!(decoded, b"cargo build");
    }

    #[test]
    fn test_osc52_handles_multiline_text() {
        let text = "FROM rust:1.85\nRUN cargo build --release";
        let seq = osc52_sequence(text);
        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        assert_eq!(STANDARD.decode(payload).expect("valid base64"), text.as_bytes());
    }
}
