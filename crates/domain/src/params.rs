use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::DomainError;

pub const BRIGHTNESS_RANGE: RangeInclusive<f64> = 0.5..=2.0;
pub const CONTRAST_RANGE: RangeInclusive<f64> = 0.5..=2.0;
pub const GAMMA_RANGE: RangeInclusive<f64> = 0.1..=3.0;

/// The three scalar inputs of the ramp transfer function.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GammaParams {
    pub brightness: f64,
    pub contrast: f64,
    pub gamma: f64,
}

impl Default for GammaParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl GammaParams {
    /// Parameters that produce the identity ramp.
    pub const NEUTRAL: Self = Self {
        brightness: 1.0,
        contrast: 1.0,
        gamma: 1.0,
    };

    pub fn new(brightness: f64, contrast: f64, gamma: f64) -> Self {
        Self {
            brightness,
            contrast,
            gamma,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        check_field("brightness", self.brightness, &BRIGHTNESS_RANGE)?;
        check_field("contrast", self.contrast, &CONTRAST_RANGE)?;
        check_field("gamma", self.gamma, &GAMMA_RANGE)?;
        Ok(())
    }

    /// Forces every field into its range. Non-finite fields become neutral.
    pub fn clamped(self) -> Self {
        Self {
            brightness: clamp_field(self.brightness, &BRIGHTNESS_RANGE),
            contrast: clamp_field(self.contrast, &CONTRAST_RANGE),
            gamma: clamp_field(self.gamma, &GAMMA_RANGE),
        }
    }

    /// Rounds every field to two decimals, the precision presets are stored at.
    pub fn rounded(self) -> Self {
        Self {
            brightness: round2(self.brightness),
            contrast: round2(self.contrast),
            gamma: round2(self.gamma),
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

fn check_field(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteParam(name));
    }
    if !range.contains(&value) {
        return Err(DomainError::ParamOutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

fn clamp_field(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }
    value.clamp(*range.start(), *range.end())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
