//! Colour helpers for the display layer
//!
//! Colour pickers hand back `#rrggbb` strings while the stored settings use
//! CSS `rgb(...)` notation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour {0:?} has fewer than six hex digits")]
    TooShort(String),

    #[error("colour {0:?} is not valid hex")]
    InvalidHex(String),
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse the last six hex digits of a string
    ///
    /// Any prefix (`#`, `0x`) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_settings::Rgb;
    ///
    /// let rgb = Rgb::from_hex("#0a7ce6").unwrap();
    /// assert_eq!(rgb, Rgb { r: 10, g: 124, b: 230 });
    /// assert_eq!(rgb.to_css(None), "rgb(10,124,230)");
    /// assert_eq!(rgb.to_css(Some(0.5)), "rgba(10,124,230,0.5)");
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .len()
            .checked_sub(6)
            .and_then(|start| hex.get(start..))
            .ok_or_else(|| ColorError::TooShort(hex.to_string()))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Render as CSS `rgb(r,g,b)`, or `rgba(r,g,b,a)` when `alpha` is given
    pub fn to_css(&self, alpha: Option<f32>) -> String {
        match alpha {
            None => format!("rgb({},{},{})", self.r, self.g, self.b),
            Some(a) => format!("rgba({},{},{},{})", self.r, self.g, self.b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colours_from_hex() {
        assert_eq!(
            Rgb::from_hex("#0a7ce6").unwrap().to_css(None),
            crate::DEFAULT_P1_COLOR
        );
        assert_eq!(
            Rgb::from_hex("952323").unwrap().to_css(None),
            crate::DEFAULT_P2_COLOR
        );
    }

    #[test]
    fn uppercase_and_prefixes() {
        assert_eq!(
            Rgb::from_hex("0xFFA500").unwrap(),
            Rgb {
                r: 255,
                g: 165,
                b: 0
            }
        );
    }

    #[test]
    fn rejects_short_and_invalid() {
        assert_eq!(
            Rgb::from_hex("#fff"),
            Err(ColorError::TooShort("#fff".to_string()))
        );
        assert_eq!(
            Rgb::from_hex("#zz0000"),
            Err(ColorError::InvalidHex("#zz0000".to_string()))
        );
        assert!(matches!(Rgb::from_hex("0ü000"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("+f0000"), Err(ColorError::InvalidHex(_))));
    }
}
