//! RGB-Farben mit Hex-Parsing (`#RGB` / `#RRGGBB`).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fehler beim Parsen einer Hex-Farbe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Leerer Eingabewert
    #[error("leerer Farbwert")]
    Empty,
    /// Kein `#RGB` oder `#RRGGBB` (Alpha wird abgelehnt)
    #[error("ungültige Hex-Farbe: {0:?}")]
    Malformed(String),
}

/// 8-Bit-RGB-Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#(?:([0-9a-fA-F]{3})|([0-9a-fA-F]{6}))$").expect("statisches Regex-Muster")
    })
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Erstellt eine Farbe aus Komponenten.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parst `#RGB` oder `#RRGGBB` (Groß-/Kleinschreibung egal, Whitespace wird getrimmt).
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let caps = hex_pattern()
            .captures(s)
            .ok_or_else(|| ColorParseError::Malformed(s.to_string()))?;

        let digits: String = if let Some(short) = caps.get(1) {
            short.as_str().chars().flat_map(|c| [c, c]).collect()
        } else if let Some(long) = caps.get(2) {
            long.as_str().to_string()
        } else {
            return Err(ColorParseError::Malformed(s.to_string()));
        };

        let value = u32::from_str_radix(&digits, 16)
            .map_err(|_| ColorParseError::Malformed(s.to_string()))?;
        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Normalisierte Hex-Darstellung (`#rrggbb`, Kleinbuchstaben).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lineare RGBA-Komponenten in [0, 1] für Shader/Renderer.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// Parst eine Farbliste, getrennt durch Kommas und/oder Whitespace.
///
/// Umschließende Anführungszeichen werden entfernt, ungültige Einträge verworfen.
pub fn parse_palette(input: &str) -> Vec<Rgb> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|s| s.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Rgb::parse_hex(s) {
            Ok(c) => Some(c),
            Err(e) => {
                log::debug!("Palette-Eintrag verworfen: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#F2F23A"), Ok(Rgb::new(0xf2, 0xf2, 0x3a)));
        assert_eq!(Rgb::parse_hex(" #abc "), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::parse_hex("#abc").map(Rgb::to_hex).as_deref(), Ok("#aabbcc"));
    }

    #[test]
    fn rejects_alpha_and_garbage() {
        assert!(matches!(
            Rgb::parse_hex("#ffffffff"),
            Err(ColorParseError::Malformed(_))
        ));
        assert!(matches!(
            Rgb::parse_hex("ffffff"),
            Err(ColorParseError::Malformed(_))
        ));
        assert_eq!(Rgb::parse_hex("  "), Err(ColorParseError::Empty));
    }

    #[test]
    fn palette_accepts_mixed_separators_and_quotes() {
        let colors = parse_palette("'#f00', \"#00ff00\"\n#00f  bogus #12345678");
        assert_eq!(
            colors,
            vec![
                Rgb::new(0xff, 0, 0),
                Rgb::new(0, 0xff, 0),
                Rgb::new(0, 0, 0xff)
            ]
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            c: Rgb,
        }
        let w: Wrapper = toml::from_str("c = \"#E94462\"").expect("gültiges TOML");
        assert_eq!(w.c, Rgb::new(0xe9, 0x44, 0x62));
        let out = toml::to_string(&w).expect("serialisierbar");
        assert!(out.contains("#e94462"));
    }
}
