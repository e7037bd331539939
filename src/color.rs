use thiserror::Error;

/// Straight (non-premultiplied) RGBA fill color, components in 0..=1.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected #RRGGBB or #RRGGBBAA, got {0:?}")]
    BadFormat(String),
    #[error("bad hex digit: {0}")]
    BadDigit(#[from] std::num::ParseIntError),
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha channel replaced.
    pub fn alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    pub const CYAN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const MAGENTA: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    pub const YELLOW: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn hex(hex: &str) -> Result<Color, ColorParseError> {
        let digits = match hex.strip_prefix('#') {
            Some(d) if d.len() == 6 || d.len() == 8 => d,
            _ => return Err(ColorParseError::BadFormat(hex.to_string())),
        };

        let channel = |i: usize| -> Result<f32, ColorParseError> {
            Ok(u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)? as f32 / 255.0)
        };

        Ok(Color {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
            a: if digits.len() == 8 { channel(3)? } else { 1.0 },
        })
    }
}
