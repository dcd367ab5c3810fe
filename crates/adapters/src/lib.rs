pub mod display;
pub mod hotkeys;
pub mod json;
pub mod presenters;

pub use display::{system_display, DetachedDisplay, DEFAULT_DISPLAY_DEVICE};
pub use hotkeys::{to_global_hotkey, DetachedHotkeys, GlobalHotkeyRegistrar};
pub use json::JsonPresetRepository;
pub use presenters::{
    present_hotkey, present_params, present_preset_row, present_ramp, present_reset_hotkey,
};
