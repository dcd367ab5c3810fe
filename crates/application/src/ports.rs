use monitor_gamma_domain::{Hotkey, PresetStore, RampTable};

use crate::ApplicationError;

/// A display whose gamma ramp can be replaced.
///
/// Implementations must be shareable across threads: exit and crash hooks
/// restore the neutral ramp from outside the UI thread.
pub trait GammaRampDevice: Send + Sync {
    fn set_ramp(&self, ramp: &RampTable) -> Result<(), ApplicationError>;
}

pub trait PresetRepository {
    /// Loads the stored presets. A missing file is an empty store, a file that
    /// cannot be parsed is an error.
    fn load(&self) -> Result<PresetStore, ApplicationError>;

    /// Overwrites the stored presets with `store`.
    fn save(&self, store: &PresetStore) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub registered: Vec<Hotkey>,
    pub rejected: Vec<(Hotkey, String)>,
}

pub trait HotkeyRegistrar {
    /// Drops every registration this registrar holds and registers `hotkeys`.
    fn replace_all(&self, hotkeys: &[Hotkey]) -> Result<RegistrationReport, ApplicationError>;

    /// Returns hotkeys pressed since the last call, oldest first.
    fn drain_pressed(&self) -> Result<Vec<Hotkey>, ApplicationError>;
}
