mod error;
mod lifecycle;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use lifecycle::{restore_neutral, NeutralRestoreGuard};
pub use ports::{GammaRampDevice, HotkeyRegistrar, PresetRepository, RegistrationReport};
pub use service::ApplicationService;
pub use use_cases::{
    ApplyParamsCommand, ApplyPresetCommand, BootstrapCommand, DeletePresetCommand,
    DispatchHotkeysCommand, ListPresetsCommand, ResetDisplayCommand, SavePresetCommand,
    SetResetHotkeyCommand,
};
