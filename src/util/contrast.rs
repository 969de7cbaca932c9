//! Readable foreground color for a colored background.
//!
//! DESIGN
//! ======
//! Perceived luminance uses the BT.601 weights
//! (`0.299 R + 0.587 G + 0.114 B`) on the 0-255 scale. Backgrounds brighter
//! than the threshold get dark text, everything else gets light text.
//! Thresholds may be given on either the 0-255 or the normalized 0-1 scale
//! and are compared on the 0-255 scale.
//!
//! The engine holds no state beyond its threshold, so one instance can be
//! shared by every card render.

#[cfg(test)]
#[path = "contrast_test.rs"]
mod contrast_test;

use super::color::{Rgb, parse_hex_rgb};
use crate::config::ClientConfig;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;
const CHANNEL_MAX: f64 = 255.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContrastError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("no background color could be determined")]
    UndeterminedColor,
}

/// Which foreground reads best on a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContrastResult {
    LightText,
    DarkText,
}

impl ContrastResult {
    /// CSS color value for the foreground text.
    pub fn css_color(self) -> &'static str {
        match self {
            Self::LightText => "#ffffff",
            Self::DarkText => "#111111",
        }
    }
}

/// Background color input: a hex string or explicit channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    Hex(String),
    Rgb(Rgb),
}

impl ColorSpec {
    /// Resolve to RGB channels.
    ///
    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidColorFormat`] when a hex string is not
    /// a 3- or 6-digit hex color.
    pub fn to_rgb(&self) -> Result<Rgb, ContrastError> {
        match self {
            Self::Hex(raw) => parse_hex_rgb(raw).ok_or_else(|| ContrastError::InvalidColorFormat(raw.clone())),
            Self::Rgb(rgb) => Ok(*rgb),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(raw: &str) -> Self {
        Self::Hex(raw.to_owned())
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// Luminance threshold on an explicit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LuminanceThreshold {
    /// 0-255 scale.
    Byte(f64),
    /// Normalized 0-1 scale.
    Unit(f64),
}

impl Default for LuminanceThreshold {
    fn default() -> Self {
        Self::Byte(crate::config::DEFAULT_CONTRAST_THRESHOLD)
    }
}

impl LuminanceThreshold {
    /// Infer the scale from a bare number: `[0, 1]` is normalized, anything
    /// larger is on the 0-255 scale.
    pub fn from_raw(value: f64) -> Self {
        if value <= 1.0 { Self::Unit(value) } else { Self::Byte(value) }
    }

    /// Threshold on the 0-255 scale.
    pub fn as_byte_scale(self) -> f64 {
        match self {
            Self::Byte(v) => v,
            Self::Unit(v) => v * CHANNEL_MAX,
        }
    }
}

/// Perceived luminance of `rgb` on the 0-255 scale.
pub fn perceived_luminance(rgb: Rgb) -> f64 {
    RED_WEIGHT * f64::from(rgb.r) + GREEN_WEIGHT * f64::from(rgb.g) + BLUE_WEIGHT * f64::from(rgb.b)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContrastEngine {
    threshold: LuminanceThreshold,
}

impl ContrastEngine {
    pub fn new(threshold: LuminanceThreshold) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(LuminanceThreshold::from_raw(config.contrast_threshold))
    }

    pub fn threshold(&self) -> LuminanceThreshold {
        self.threshold
    }

    /// Decide the foreground for a background color.
    ///
    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidColorFormat`] for malformed hex input.
    pub fn decide_contrast(&self, input: &ColorSpec) -> Result<ContrastResult, ContrastError> {
        let rgb = input.to_rgb()?;
        Ok(self.decide_rgb(rgb))
    }

    /// Decide the foreground for already-parsed channels.
    pub fn decide_rgb(&self, rgb: Rgb) -> ContrastResult {
        if perceived_luminance(rgb) > self.threshold.as_byte_scale() {
            ContrastResult::DarkText
        } else {
            ContrastResult::LightText
        }
    }

    /// Decide from the first resolvable color among ordered sources
    /// (e.g. inline style, then data attribute).
    ///
    /// # Errors
    ///
    /// Returns [`ContrastError::UndeterminedColor`] when every source is
    /// absent, and [`ContrastError::InvalidColorFormat`] (for the first
    /// malformed value) when sources were present but none parsed.
    pub fn decide_first(&self, sources: &[Option<&str>]) -> Result<ContrastResult, ContrastError> {
        let mut first_invalid: Option<&str> = None;
        for &raw in sources.iter().flatten() {
            match parse_hex_rgb(raw) {
                Some(rgb) => return Ok(self.decide_rgb(rgb)),
                None => {
                    first_invalid.get_or_insert(raw);
                }
            }
        }
        match first_invalid {
            Some(raw) => Err(ContrastError::InvalidColorFormat(raw.to_owned())),
            None => Err(ContrastError::UndeterminedColor),
        }
    }
}
