//! Opaque colour values used when flattening transparent artwork.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Default flattening background (#0EA5E8).
    pub const DEFAULT_BACKGROUND: Self = Self::rgb(14, 165, 232);

    /// Parse a hex colour string (`#RGB` or `#RRGGBB`, `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let parsed: Srgb<u8> = s.trim().parse().map_err(|e| IconError::Parse {
            message: format!("Invalid hex colour '{}': {}", s, e),
            help: Some("Use #RGB or #RRGGBB format, e.g. #0EA5E8".to_string()),
        })?;

        Ok(Self::rgb(parsed.red, parsed.green, parsed.blue))
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::DEFAULT_BACKGROUND
    }
}

impl FromStr for Colour {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = IconError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
