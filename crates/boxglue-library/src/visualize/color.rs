use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use ecow::EcoString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::diag::{StrResult, bail};

/// An 8-bit sRGB color with alpha.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// A color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> StrResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            bail!("color `{}` contains non-hex characters", hex);
        }

        let nibble = |c: u8| -> StrResult<u8> {
            match (c as char).to_digit(16) {
                Some(d) => Ok(d as u8),
                None => bail!("color `{}` contains non-hex characters", hex),
            }
        };

        let bytes = digits.as_bytes();
        let mut channels = [0xffu8; 4];
        match bytes.len() {
            3 => {
                for (i, &c) in bytes.iter().enumerate() {
                    let d = nibble(c)?;
                    channels[i] = d * 16 + d;
                }
            }
            6 | 8 => {
                for (i, pair) in bytes.chunks(2).enumerate() {
                    channels[i] = nibble(pair[0])? * 16 + nibble(pair[1])?;
                }
            }
            n => bail!("color `{}` must have 3, 6 or 8 hex digits, found {}", hex, n),
        }

        let [r, g, b, a] = channels;
        Ok(Self::rgba(r, g, b, a))
    }

    /// The color as a lowercase hex string, omitting opaque alpha.
    pub fn to_hex(self) -> EcoString {
        if self.a == 0xff {
            ecow::eco_format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            ecow::eco_format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Debug for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = EcoString;

    fn from_str(s: &str) -> StrResult<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = EcoString::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
