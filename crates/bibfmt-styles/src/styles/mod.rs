//! Citation styles.
//!
//! One module per supported style; each provides a render function per
//! record type over the style's fixed literal templates, and a
//! [`renderer`](apa::renderer) lookup used to populate the registry.

pub mod apa;
pub mod gost;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported citation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// APA 7th edition.
    Apa,
    /// GOST R 7.0.5-2008.
    Gost,
}

impl Style {
    /// Every built-in style.
    pub const ALL: [Style; 2] = [Style::Apa, Style::Gost];
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Apa => f.write_str("APA"),
            Style::Gost => f.write_str("GOST"),
        }
    }
}

impl FromStr for Style {
    type Err = UnknownStyle;

    /// Parse a style selection token, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apa" => Ok(Style::Apa),
            "gost" => Ok(Style::Gost),
            _ => Err(UnknownStyle {
                token: s.to_string(),
            }),
        }
    }
}

/// An unrecognized style selection token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown citation style '{token}' (expected one of: apa, gost)")]
pub struct UnknownStyle {
    token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tokens() {
        assert_eq!("apa".parse::<Style>().unwrap(), Style::Apa);
        assert_eq!("GOST".parse::<Style>().unwrap(), Style::Gost);

        let err = "chicago".parse::<Style>().unwrap_err();
        assert!(
            err.to_string().contains("unknown citation style 'chicago'"),
            "Got: {}",
            err
        );
    }

    #[test]
    fn test_style_display() {
        assert_eq!(Style::Apa.to_string(), "APA");
        assert_eq!(Style::Gost.to_string(), "GOST");
    }
}
