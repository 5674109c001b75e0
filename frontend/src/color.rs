use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (the `#` is optional).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let hex = input.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength(input.to_string()));
        }
        let num = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorError::InvalidDigit(input.to_string()))?;
        Ok(Self {
            r: (num >> 16) as u8,
            g: ((num >> 8) & 0xff) as u8,
            b: (num & 0xff) as u8,
        })
    }

    /// Shift every channel by `amount`, saturating at 0 and 255.
    pub fn shade(self, amount: i16) -> Self {
        let shift = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lighter (positive `amount`) or darker shade of a hex color.
pub fn derive_shade(base: &str, amount: i16) -> Result<String, ColorError> {
    Ok(Rgb::parse(base)?.shade(amount).to_string())
}

/// Like [`derive_shade`] but hands back `base` untouched when it does not
/// parse, so a bad table entry only loses its gradient.
pub fn shade_or_base(base: &str, amount: i16) -> String {
    derive_shade(base, amount).unwrap_or_else(|err| {
        log::warn!("color shade skipped: {}", err);
        base.to_string()
    })
}

/// `#RRGGBB` plus a two-digit alpha suffix, e.g. `with_alpha("#8B5CF6", "20")`.
pub fn with_alpha(base: &str, alpha_hex: &str) -> String {
    format!("{}{}", base, alpha_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_badge_shade() {
        assert_eq!(derive_shade("#FBBF24", -20).unwrap(), "#e7ab10");
    }

    #[test]
    fn lighter_progress_shade() {
        assert_eq!(derive_shade("#4F46E5", 30).unwrap(), "#6d64ff");
    }

    #[test]
    fn channels_saturate() {
        assert_eq!(derive_shade("#FFFFFF", 40).unwrap(), "#ffffff");
        assert_eq!(derive_shade("#050505", -20).unwrap(), "#000000");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(
            derive_shade("#FFF", 10),
            Err(ColorError::InvalidLength("#FFF".to_string()))
        );
        assert_eq!(
            derive_shade("#GG0000", 10),
            Err(ColorError::InvalidDigit("#GG0000".to_string()))
        );
        assert_eq!(shade_or_base("nope", 10), "nope");
    }

    #[test]
    fn alpha_suffix() {
        assert_eq!(with_alpha("#8B5CF6", "20"), "#8B5CF620");
    }
}
