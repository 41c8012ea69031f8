// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

const PALETTE_ENV: &str = "NAIAD_TUI_PALETTE";
const PALETTE_ENV_FALLBACK: &str = "NAIAD_PALETTE";

/// Styles for the menu, optionally remapped through a user palette.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn color(&self, color: Ansi) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color as usize],
            None => color.into(),
        }
    }

    pub(crate) fn panel_border_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Blue))
    }

    pub(crate) fn nav_style(&self, active: bool) -> Style {
        let style = self.base_style().fg(self.color(Ansi::BrightWhite));
        if active {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Blue)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn entry_style(&self) -> Style {
        self.base_style()
    }

    /// Marked part of a name that contains the query.
    pub(crate) fn match_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Black)).bg(self.color(Ansi::Yellow))
    }

    /// Row under the cursor.
    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Cyan))
    }

    pub(crate) fn hint_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::BrightBlack))
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Red))
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    /// `fg,bg` followed by the 16 ANSI colors in order (black..bright_white).
    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts = value.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg and 16 ANSI colors), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let mut colors = parts.iter().map(|part| parse_palette_color(part));
        let fg = colors.next().unwrap_or(Ok(Color::Reset))?;
        let bg = colors.next().unwrap_or(Ok(Color::Reset))?;
        let mut ansi = [Color::Reset; 16];
        for (slot, color) in ansi.iter_mut().zip(colors) {
            *slot = color?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let found = match read_env(PALETTE_ENV)? {
        Some(found) => Some(found),
        None => read_env(PALETTE_ENV_FALLBACK)?,
    };
    let Some((name, value)) = found else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|error| ThemeError::InvalidEnv {
            name: name.to_owned(),
            value: format!("{trimmed} ({error})"),
        })
}

fn read_env(name: &'static str) -> Result<Option<(&'static str, String)>, ThemeError> {
    match env::var(name) {
        Ok(value) => Ok(Some((name, value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
            name: name.to_owned(),
            value: "<non-unicode>".to_owned(),
        }),
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` or X11-style `rgb:RR/GG/BB` (2 or 4 hex digits each).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest.split('/').map(parse_hex_channel).collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels.as_slice() else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(*r, *g, *b));
    }

    let hex = lower
        .strip_prefix('#')
        .or_else(|| lower.strip_prefix("0x"))
        .unwrap_or(lower.as_str());
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let parsed = match value.len() {
        2 => u8::from_str_radix(value, 16).ok(),
        4 => u16::from_str_radix(value, 16).ok().map(|wide| (wide >> 8) as u8),
        _ => None,
    };
    parsed.ok_or_else(|| format!("invalid rgb: component {value} (expected 2 or 4 hex digits)"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi> for Color {
    fn from(value: Ansi) -> Self {
        match value {
            Ansi::Black => Color::Black,
            Ansi::Red => Color::Red,
            Ansi::Green => Color::Green,
            Ansi::Yellow => Color::Yellow,
            Ansi::Blue => Color::Blue,
            Ansi::Magenta => Color::Magenta,
            Ansi::Cyan => Color::Cyan,
            Ansi::White => Color::Gray,
            Ansi::BrightBlack => Color::DarkGray,
            Ansi::BrightRed => Color::LightRed,
            Ansi::BrightGreen => Color::LightGreen,
            Ansi::BrightYellow => Color::LightYellow,
            Ansi::BrightBlue => Color::LightBlue,
            Ansi::BrightMagenta => Color::LightMagenta,
            Ansi::BrightCyan => Color::LightCyan,
            Ansi::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::{parse_palette_color, TuiPalette, TuiTheme};
    use ratatui::style::{Color, Modifier};

    #[test]
    fn palette_parses_hex_and_x11_colors() {
        let palette = TuiPalette::parse_csv(
            "#111111,rgb:22/22/22,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,0xFEFEFE",
        )
        .expect("palette");

        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi[1], Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi[15], Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_rejects_wrong_color_count() {
        let err = TuiPalette::parse_csv("#000000,#ffffff").unwrap_err();
        assert!(err.contains("expected 18"), "{err}");
    }

    #[test]
    fn color_parser_rejects_malformed_values() {
        assert!(parse_palette_color("").is_err());
        assert!(parse_palette_color("#12345").is_err());
        assert!(parse_palette_color("rgb:ff/ff").is_err());
        assert_eq!(parse_palette_color("rgb:ffff/8000/0000"), Ok(Color::Rgb(0xff, 0x80, 0)));
    }

    #[test]
    fn default_theme_marks_matches_on_yellow() {
        let theme = TuiTheme::default();
        assert_eq!(theme.match_style().bg, Some(Color::Yellow));
        assert!(theme.selection_style().add_modifier.contains(Modifier::REVERSED));
    }
}
