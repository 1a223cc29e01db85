//! Light/dark theme handling.
//!
//! The chosen mode persists in `~/.stackdex/config.toml` and is written
//! atomically (temp file + rename). On startup the persisted value wins;
//! without one we fall back to the terminal's ambient signal (COLORFGBG
//! background index), defaulting to dark like most terminals.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Resolved colors for the current mode.
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Palette {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                selection_bg: Color::Rgb(45, 55, 72),
                success: Color::Green,
                error: Color::Red,
            },
            ThemeMode::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                border_focused: Color::Blue,
                selection_bg: Color::Rgb(203, 213, 225),
                success: Color::Green,
                error: Color::Red,
            },
        }
    }

    /// Badge color for a stack kind; unrecognized kinds get the muted default.
    pub fn badge(&self, kind: stackdex_catalog::StackKind) -> Color {
        use stackdex_catalog::StackKind;
        match kind {
            StackKind::Backend => Color::Green,
            StackKind::Frontend => Color::Magenta,
            StackKind::Ml => Color::Yellow,
            StackKind::Mobile => Color::Blue,
            StackKind::Data => Color::Cyan,
            StackKind::Infra => Color::LightBlue,
            StackKind::Other => self.muted,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Config {
    theme: Option<ThemeMode>,
}

fn config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Failed to get home directory")?;
    let stackdex_dir = home_dir.join(".stackdex");
    fs::create_dir_all(&stackdex_dir)?;
    Ok(stackdex_dir.join("config.toml"))
}

/// Persisted theme preference, if any.
pub fn load_preference() -> Option<ThemeMode> {
    let path = config_path().ok()?;
    let contents = fs::read_to_string(path).ok()?;
    let config: Config = toml::from_str(&contents).ok()?;
    config.theme
}

/// Persist the theme choice. Written on every toggle.
pub fn save_preference(mode: ThemeMode) -> Result<()> {
    let path = config_path()?;
    write_config(&path, mode)
}

fn write_config(path: &std::path::Path, mode: ThemeMode) -> Result<()> {
    let contents = toml::to_string(&Config { theme: Some(mode) })?;
    let temp_path = path.with_extension("toml.tmp");
    fs::write(&temp_path, &contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Initial mode: persisted preference first, ambient terminal signal otherwise.
pub fn initial_mode() -> ThemeMode {
    load_preference().unwrap_or_else(ambient_mode)
}

/// Ambient light/dark signal from COLORFGBG ("fg;bg"; bg 7 or 15 means a
/// light background). Missing or unparsable means dark, the common case.
fn ambient_mode() -> ThemeMode {
    ambient_mode_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn ambient_mode_from_colorfgbg(colorfgbg: Option<&str>) -> ThemeMode {
    if let Some(value) = colorfgbg {
        if let Some(bg_part) = value.split(';').next_back() {
            if let Ok(bg) = bg_part.trim().parse::<u8>() {
                if bg == 7 || bg == 15 {
                    return ThemeMode::Light;
                }
            }
        }
    }
    ThemeMode::Dark
}
