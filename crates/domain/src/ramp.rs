use crate::GammaParams;

pub const RAMP_SIZE: usize = 256;
pub const RAMP_CHANNELS: usize = 3;

/// A 3×256 lookup table of 16-bit values, laid out red, green, blue.
///
/// The layout matches what display drivers expect for a device gamma ramp, so
/// [`RampTable::as_words`] can be handed to the OS as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampTable {
    channels: [[u16; RAMP_SIZE]; RAMP_CHANNELS],
}

impl RampTable {
    pub fn identity() -> Self {
        compute_ramp(GammaParams::NEUTRAL)
    }

    pub fn red(&self) -> &[u16; RAMP_SIZE] {
        &self.channels[0]
    }

    pub fn green(&self) -> &[u16; RAMP_SIZE] {
        &self.channels[1]
    }

    pub fn blue(&self) -> &[u16; RAMP_SIZE] {
        &self.channels[2]
    }

    pub fn as_words(&self) -> &[[u16; RAMP_SIZE]; RAMP_CHANNELS] {
        &self.channels
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Evaluates the transfer function for every ramp index.
///
/// `v = (i/255)^(1/g)`, then contrast pivots around mid-grey and brightness
/// scales the result, which is clamped to `[0, 1]` before widening to 16 bits.
/// All three channels receive the same curve.
pub fn compute_ramp(params: GammaParams) -> RampTable {
    let GammaParams {
        brightness,
        contrast,
        gamma,
    } = params;
    let exponent = 1.0 / gamma;

    let mut curve = [0_u16; RAMP_SIZE];
    for (index, slot) in curve.iter_mut().enumerate() {
        let v = (index as f64 / 255.0).powf(exponent);
        let level = (((v - 0.5) * contrast + 0.5) * brightness).clamp(0.0, 1.0);
        *slot = (level * 65535.0).round() as u16;
    }

    RampTable {
        channels: [curve; RAMP_CHANNELS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 5] = [0.5, 0.8, 1.0, 1.5, 2.0];
    const GAMMAS: [f64; 6] = [0.1, 0.4, 1.0, 1.7, 2.2, 3.0];

    #[test]
    fn neutral_params_produce_identity_ramp() {
        let ramp = compute_ramp(GammaParams::NEUTRAL);
        for index in 0..RAMP_SIZE {
            let expected = index as f64 / 255.0 * 65535.0;
            assert!((f64::from(ramp.red()[index]) - expected).abs() <= 0.5);
        }
        assert_eq!(ramp.red()[0], 0);
        assert_eq!(ramp.red()[255], 65535);
        assert_eq!(ramp.red()[1], 257);
    }

    #[test]
    fn ramp_is_monotonic_for_valid_params() {
        for brightness in SAMPLES {
            for contrast in SAMPLES {
                for gamma in GAMMAS {
                    let ramp = compute_ramp(GammaParams::new(brightness, contrast, gamma));
                    assert!(
                        ramp.red().windows(2).all(|pair| pair[0] <= pair[1]),
                        "non-monotonic ramp for b={brightness} c={contrast} g={gamma}"
                    );
                }
            }
        }
    }

    #[test]
    fn channels_share_one_curve() {
        let ramp = compute_ramp(GammaParams::new(1.3, 0.7, 2.2));
        assert_eq!(ramp.red(), ramp.green());
        assert_eq!(ramp.green(), ramp.blue());
    }

    #[test]
    fn high_brightness_saturates_at_full_scale() {
        let ramp = compute_ramp(GammaParams::new(2.0, 1.0, 1.0));
        assert_eq!(ramp.red()[128], 65535);
        assert_eq!(ramp.red()[255], 65535);
        assert_eq!(ramp.red()[0], 0);
    }

    #[test]
    fn high_contrast_clips_shadows_to_zero() {
        let ramp = compute_ramp(GammaParams::new(1.0, 2.0, 1.0));
        // (0 - 0.5) * 2 + 0.5 = -0.5 -> clamped to 0 for the darkest quarter
        assert_eq!(ramp.red()[0], 0);
        assert_eq!(ramp.red()[63], 0);
        assert_eq!(ramp.red()[255], 65535);
    }

    #[test]
    fn gamma_above_one_lifts_midtones() {
        let neutral = compute_ramp(GammaParams::NEUTRAL);
        let lifted = compute_ramp(GammaParams::new(1.0, 1.0, 2.2));
        assert!(lifted.red()[128] > neutral.red()[128]);
        assert!(!lifted.is_identity());
        assert!(RampTable::identity().is_identity());
    }
}
