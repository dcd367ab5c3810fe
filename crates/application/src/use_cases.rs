use monitor_gamma_domain::GammaParams;

#[derive(Debug, Clone, Default)]
pub struct BootstrapCommand;

#[derive(Debug, Clone, Copy)]
pub struct ApplyParamsCommand {
    pub params: GammaParams,
}

#[derive(Debug, Clone)]
pub struct SavePresetCommand {
    pub name: String,
    pub params: GammaParams,
    pub hotkey: String,
}

#[derive(Debug, Clone)]
pub struct DeletePresetCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ApplyPresetCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SetResetHotkeyCommand {
    pub hotkey: String,
}

#[derive(Debug, Clone, Default)]
pub struct ResetDisplayCommand;

#[derive(Debug, Clone, Default)]
pub struct ListPresetsCommand;

#[derive(Debug, Clone, Default)]
pub struct DispatchHotkeysCommand;
