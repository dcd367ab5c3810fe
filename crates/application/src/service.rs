use std::sync::Arc;

use monitor_gamma_domain::{
    compute_ramp, GammaParams, Hotkey, HotkeyAction, HotkeyBindings, Preset, PresetStore,
};
use tracing::{debug, info, warn};

use crate::{
    ApplicationError, ApplyParamsCommand, ApplyPresetCommand, BootstrapCommand,
    DeletePresetCommand, DispatchHotkeysCommand, GammaRampDevice, HotkeyRegistrar,
    ListPresetsCommand, PresetRepository, ResetDisplayCommand, SavePresetCommand,
    SetResetHotkeyCommand,
};

/// Owns the preset store and drives the display and hotkey ports.
///
/// Every mutation of the store re-registers the complete hotkey set and
/// rewrites the persisted file. Failures at the OS or file boundary are logged
/// and swallowed; only invalid input is reported back to the caller.
pub struct ApplicationService {
    repository: Box<dyn PresetRepository>,
    display: Arc<dyn GammaRampDevice>,
    hotkeys: Box<dyn HotkeyRegistrar>,
    store: PresetStore,
    bindings: HotkeyBindings,
    current: GammaParams,
}

impl ApplicationService {
    pub fn new(
        repository: Box<dyn PresetRepository>,
        display: Arc<dyn GammaRampDevice>,
        hotkeys: Box<dyn HotkeyRegistrar>,
    ) -> Self {
        Self {
            repository,
            display,
            hotkeys,
            store: PresetStore::default(),
            bindings: HotkeyBindings::default(),
            current: GammaParams::NEUTRAL,
        }
    }

    pub fn bootstrap(&mut self, _command: BootstrapCommand) {
        self.store = match self.repository.load() {
            Ok(store) => store,
            Err(error) => {
                warn!(%error, "preset file unreadable, starting with an empty store");
                PresetStore::default()
            }
        };
        info!(
            presets = self.store.len(),
            reset_hotkey = ?self.store.reset_hotkey().map(ToString::to_string),
            "preset store loaded"
        );
        self.refresh();
        self.push_ramp(self.current);
    }

    pub fn apply_params(&mut self, command: ApplyParamsCommand) -> GammaParams {
        self.current = command.params.clamped();
        self.push_ramp(self.current);
        self.current
    }

    pub fn save_preset(&mut self, command: SavePresetCommand) -> Result<Preset, ApplicationError> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "preset name must not be empty".to_string(),
            ));
        }
        command.params.validate()?;
        let hotkey = Hotkey::parse_optional(&command.hotkey)?;
        let preset = Preset::new(&command.name, command.params.rounded(), hotkey)?;

        if self.store.upsert(preset.clone()).is_some() {
            debug!(name = %preset.name, "preset overwritten");
        }
        info!(
            name = %preset.name,
            hotkey = ?preset.hotkey.as_ref().map(ToString::to_string),
            "preset saved"
        );
        self.refresh();
        Ok(preset)
    }

    pub fn delete_preset(
        &mut self,
        command: DeletePresetCommand,
    ) -> Result<Preset, ApplicationError> {
        let removed = self.store.remove(&command.name).ok_or_else(|| {
            ApplicationError::NotFound(format!("preset not found: {}", command.name))
        })?;
        info!(name = %removed.name, "preset deleted");
        self.refresh();
        Ok(removed)
    }

    pub fn apply_preset(
        &mut self,
        command: ApplyPresetCommand,
    ) -> Result<GammaParams, ApplicationError> {
        let params = self
            .store
            .get(&command.name)
            .map(|preset| preset.params)
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("preset not found: {}", command.name))
            })?;
        Ok(self.apply_params(ApplyParamsCommand { params }))
    }

    pub fn set_reset_hotkey(
        &mut self,
        command: SetResetHotkeyCommand,
    ) -> Result<(), ApplicationError> {
        let hotkey = Hotkey::parse_optional(&command.hotkey)?;
        info!(hotkey = ?hotkey.as_ref().map(ToString::to_string), "reset hotkey changed");
        self.store.set_reset_hotkey(hotkey);
        self.refresh();
        Ok(())
    }

    pub fn reset_display(&mut self, _command: ResetDisplayCommand) -> GammaParams {
        self.apply_params(ApplyParamsCommand {
            params: GammaParams::NEUTRAL,
        })
    }

    pub fn list_presets(&self, _command: ListPresetsCommand) -> Vec<Preset> {
        self.store.presets().cloned().collect()
    }

    /// Performs the actions of hotkeys pressed since the last call and returns
    /// the resulting parameters when at least one action fired.
    pub fn dispatch_hotkeys(&mut self, _command: DispatchHotkeysCommand) -> Option<GammaParams> {
        let pressed = match self.hotkeys.drain_pressed() {
            Ok(pressed) => pressed,
            Err(error) => {
                warn!(%error, "failed to read hotkey events");
                return None;
            }
        };

        let mut applied = None;
        for hotkey in pressed {
            let Some(action) = self.bindings.action_for(&hotkey).cloned() else {
                debug!(%hotkey, "ignoring press of an unbound hotkey");
                continue;
            };
            match &action {
                HotkeyAction::ApplyPreset { name, .. } => {
                    info!(%hotkey, preset = %name, "hotkey applies preset")
                }
                HotkeyAction::Reset => info!(%hotkey, "hotkey resets display"),
            }
            applied = Some(self.apply_params(ApplyParamsCommand {
                params: action.target_params(),
            }));
        }
        applied
    }

    pub fn current_params(&self) -> GammaParams {
        self.current
    }

    pub fn reset_hotkey(&self) -> Option<&Hotkey> {
        self.store.reset_hotkey()
    }

    pub fn bindings(&self) -> &HotkeyBindings {
        &self.bindings
    }

    fn refresh(&mut self) {
        self.bindings = self.store.bindings();
        match self.hotkeys.replace_all(&self.bindings.hotkeys()) {
            Ok(report) => {
                for (hotkey, reason) in &report.rejected {
                    warn!(%hotkey, %reason, "hotkey registration rejected");
                }
                debug!(registered = report.registered.len(), "hotkeys registered");
            }
            Err(error) => warn!(%error, "failed to re-register hotkeys"),
        }

        if let Err(error) = self.repository.save(&self.store) {
            warn!(%error, "failed to persist presets");
        }
    }

    fn push_ramp(&self, params: GammaParams) {
        let ramp = compute_ramp(params);
        match self.display.set_ramp(&ramp) {
            Ok(()) => debug!(
                brightness = params.brightness,
                contrast = params.contrast,
                gamma = params.gamma,
                "gamma ramp applied"
            ),
            Err(error) => warn!(%error, "failed to apply gamma ramp"),
        }
    }
}
