//! Colors and theme tokens.
//!
//! Theme colors arrive as CSS custom property strings. Anything that fails
//! to parse is replaced by the matching fallback so a frame always has a
//! full palette.

use super::error::FxError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha replaced (clamped to [0, 1]).
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 },
            ..self
        }
    }

    /// `rgba(r, g, b, a)` string accepted by canvas and CSS.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Rgba {
    type Err = FxError;

    /// Parses `#rgb`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FxError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        let digits = hex
            .bytes()
            .map(hex_nibble)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(err)?;
        match digits[..] {
            [r, g, b] => Ok(Rgba::rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Rgba::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba {
                r: r1 << 4 | r0,
                g: g1 << 4 | g0,
                b: b1 << 4 | b0,
                a: (a1 << 4 | a0) as f32 / 255.0,
            }),
            _ => Err(err()),
        }
    }
}

pub const FALLBACK_PRIMARY: Rgba = Rgba::rgb(0x81, 0x8c, 0xf8);
pub const FALLBACK_SECONDARY: Rgba = Rgba::rgb(0xf4, 0x72, 0xb6);
pub const FALLBACK_BACKGROUND: Rgba = Rgba::rgb(0x0f, 0x17, 0x2a);
pub const STAR_CYAN: Rgba = Rgba::rgb(0x22, 0xd3, 0xee);

/// The two accents and the background the renderer draws with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub background: Rgba,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: FALLBACK_PRIMARY,
            secondary: FALLBACK_SECONDARY,
            background: FALLBACK_BACKGROUND,
        }
    }
}

impl ThemeColors {
    /// Builds a palette from raw token values; missing, empty or malformed
    /// tokens take the fallback color.
    pub fn from_tokens(
        primary: Option<&str>,
        secondary: Option<&str>,
        background: Option<&str>,
    ) -> Self {
        let fallback = Self::default();
        let pick = |raw: Option<&str>, default: Rgba| {
            raw.and_then(|s| s.parse::<Rgba>().ok()).unwrap_or(default)
        };
        Self {
            primary: pick(primary, fallback.primary),
            secondary: pick(secondary, fallback.secondary),
            background: pick(background, fallback.background),
        }
    }
}
