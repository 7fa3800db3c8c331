// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Srgba8` color type and associated operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a color in the **sRGB** color space with 8 bits per channel.
///
/// This is the color every cell of a frame is stored as. The layout matches
/// the `Rgba8UnormSrgb` texel format, so a slice of `Srgba8` can be handed to
/// a graphics API as raw bytes without conversion.
///
/// In configuration files the color is written as a hex string
/// (`"#009600"` or `"#009600ff"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable,
)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(C)]
pub struct Srgba8 {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
    /// The alpha (opacity) channel, not gamma encoded.
    pub a: u8,
}

/// An error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid color '{}': expected '#RRGGBB' or '#RRGGBBAA'",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

impl Srgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a new `Srgba8` with explicit RGBA values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Srgba8` (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a color from a hex string (`#RRGGBB` or `#RRGGBBAA`, `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: hex.to_string(),
        };
        let digits = hex.trim().trim_start_matches('#');

        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Formats the color as a lowercase `#rrggbbaa` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Converts the color to linear-space floating point components.
    ///
    /// The RGB channels go through the sRGB transfer function, alpha is only normalized.
    pub fn to_linear(&self) -> [f32; 4] {
        [
            srgb_to_linear(self.r as f32 / 255.0),
            srgb_to_linear(self.g as f32 / 255.0),
            srgb_to_linear(self.b as f32 / 255.0),
            self.a as f32 / 255.0,
        ]
    }
}

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl TryFrom<String> for Srgba8 {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Srgba8> for String {
    fn from(color: Srgba8) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Srgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb_is_opaque() {
        let color = Srgba8::from_hex("#009600").unwrap();
        assert_eq!(color, Srgba8::rgb(0, 150, 0));
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_from_hex_with_alpha_and_no_hash() {
        let color = Srgba8::from_hex("14141480").unwrap();
        assert_eq!(color, Srgba8::new(20, 20, 20, 128));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Srgba8::from_hex("#12345").is_err());
        assert!(Srgba8::from_hex("#gg0000").is_err());
        assert!(Srgba8::from_hex("").is_err());
        assert!(Srgba8::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase_with_alpha() {
        assert_eq!(Srgba8::rgb(0, 150, 0).to_hex(), "#009600ff");
        assert_eq!(Srgba8::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_to_linear_endpoints() {
        assert_eq!(Srgba8::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Srgba8::WHITE.to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Srgba8::rgb(20, 20, 20)).unwrap();
        assert_eq!(json, "\"#141414ff\"");

        let parsed: Srgba8 = serde_json::from_str("\"#009600\"").unwrap();
        assert_eq!(parsed, Srgba8::rgb(0, 150, 0));

        assert!(serde_json::from_str::<Srgba8>("\"green\"").is_err());
    }

    #[test]
    fn test_pod_layout_is_four_bytes() {
        let pixels = [Srgba8::new(1, 2, 3, 4), Srgba8::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
