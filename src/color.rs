//! RGB colors and the repeat-tint blend.
//!
//! Colors are triples of floats in [0, 1] per channel, matching the
//! convention of PDF annotation color arrays. The tint operation blends
//! a base color toward white for repeat occurrences.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Create a color, clamping each channel into [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitint::color::Rgb;
    ///
    /// let yellow = Rgb::new(1.0, 1.0, 0.0);
    /// assert_eq!(yellow.r, 1.0);
    /// assert_eq!(yellow.b, 0.0);
    /// ```
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Parse a `#RRGGBB` hex color (the leading `#` is optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitint::color::Rgb;
    ///
    /// let c = Rgb::from_hex("#FFFF00").unwrap();
    /// assert_eq!(c, Rgb::new(1.0, 1.0, 0.0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor {
                value: hex.to_string(),
                reason: "expected 6 hex digits".to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| Error::InvalidColor {
                    value: hex.to_string(),
                    reason: "non-hex digit".to_string(),
                })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Blend this color toward white by the given whiteness factor.
    ///
    /// Each channel becomes `base + (1 - base) * whiteness`. Whiteness 0
    /// leaves the color unchanged; whiteness 1 yields pure white. The
    /// factor is clamped into [0, 1] before blending.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitint::color::Rgb;
    ///
    /// let red = Rgb::new(1.0, 0.0, 0.0);
    /// assert_eq!(red.tinted(0.0), red);
    /// assert_eq!(red.tinted(1.0), Rgb::new(1.0, 1.0, 1.0));
    /// ```
    pub fn tinted(&self, whiteness: f32) -> Rgb {
        let w = whiteness.clamp(0.0, 1.0);
        Rgb {
            r: self.r + (1.0 - self.r) * w,
            g: self.g + (1.0 - self.g) * w,
            b: self.b + (1.0 - self.b) * w,
        }
    }

    /// Channels as an array, in R, G, B order.
    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
