mod error;
mod hotkey;
mod params;
mod preset;
mod ramp;

pub use error::DomainError;
pub use hotkey::{Hotkey, Modifier};
pub use params::{GammaParams, BRIGHTNESS_RANGE, CONTRAST_RANGE, GAMMA_RANGE};
pub use preset::{HotkeyAction, HotkeyBindings, Preset, PresetStore, DEFAULT_RESET_HOTKEY};
pub use ramp::{compute_ramp, RampTable, RAMP_CHANNELS, RAMP_SIZE};
