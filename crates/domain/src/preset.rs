use indexmap::IndexMap;

use crate::{DomainError, GammaParams, Hotkey};

pub const DEFAULT_RESET_HOTKEY: &str = "f9";

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub params: GammaParams,
    pub hotkey: Option<Hotkey>,
}

impl Preset {
    pub fn new(
        name: &str,
        params: GammaParams,
        hotkey: Option<Hotkey>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyPresetName);
        }
        params.validate()?;
        Ok(Self {
            name: name.to_string(),
            params,
            hotkey,
        })
    }
}

/// Named presets in save order plus the global reset hotkey.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetStore {
    presets: IndexMap<String, Preset>,
    reset_hotkey: Option<Hotkey>,
}

impl Default for PresetStore {
    fn default() -> Self {
        Self {
            presets: IndexMap::new(),
            reset_hotkey: Hotkey::parse(DEFAULT_RESET_HOTKEY).ok(),
        }
    }
}

impl PresetStore {
    pub fn new(reset_hotkey: Option<Hotkey>) -> Self {
        Self {
            presets: IndexMap::new(),
            reset_hotkey,
        }
    }

    /// Inserts or overwrites a preset. The saved entry always moves to the end
    /// so that it registers after every older binding.
    pub fn upsert(&mut self, preset: Preset) -> Option<Preset> {
        let previous = self.presets.shift_remove(&preset.name);
        self.presets.insert(preset.name.clone(), preset);
        previous
    }

    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        self.presets.shift_remove(name.trim())
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name.trim())
    }

    pub fn presets(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn reset_hotkey(&self) -> Option<&Hotkey> {
        self.reset_hotkey.as_ref()
    }

    pub fn set_reset_hotkey(&mut self, hotkey: Option<Hotkey>) {
        self.reset_hotkey = hotkey;
    }

    pub fn bindings(&self) -> HotkeyBindings {
        HotkeyBindings::derive(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HotkeyAction {
    ApplyPreset { name: String, params: GammaParams },
    Reset,
}

impl HotkeyAction {
    pub fn target_params(&self) -> GammaParams {
        match self {
            Self::ApplyPreset { params, .. } => *params,
            Self::Reset => GammaParams::NEUTRAL,
        }
    }
}

/// Hotkey → action table derived from a [`PresetStore`].
///
/// Presets register in save order and the reset hotkey registers last; a
/// later registration of the same hotkey replaces the earlier action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotkeyBindings {
    actions: IndexMap<Hotkey, HotkeyAction>,
}

impl HotkeyBindings {
    pub fn derive(store: &PresetStore) -> Self {
        let mut actions = IndexMap::new();
        for preset in store.presets() {
            if let Some(hotkey) = &preset.hotkey {
                actions.insert(
                    hotkey.clone(),
                    HotkeyAction::ApplyPreset {
                        name: preset.name.clone(),
                        params: preset.params,
                    },
                );
            }
        }
        if let Some(hotkey) = store.reset_hotkey() {
            actions.insert(hotkey.clone(), HotkeyAction::Reset);
        }
        Self { actions }
    }

    pub fn action_for(&self, hotkey: &Hotkey) -> Option<&HotkeyAction> {
        self.actions.get(hotkey)
    }

    pub fn hotkeys(&self) -> Vec<Hotkey> {
        self.actions.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotkey(text: &str) -> Hotkey {
        Hotkey::parse(text).expect("hotkey")
    }

    fn preset(name: &str, brightness: f64, key: Option<&str>) -> Preset {
        Preset::new(
            name,
            GammaParams::new(brightness, 1.0, 1.0),
            key.map(hotkey),
        )
        .expect("preset")
    }

    #[test]
    fn preset_requires_name_and_valid_params() {
        assert!(matches!(
            Preset::new("  ", GammaParams::NEUTRAL, None),
            Err(DomainError::EmptyPresetName)
        ));
        assert!(Preset::new("x", GammaParams::new(5.0, 1.0, 1.0), None).is_err());
        assert_eq!(preset(" night ", 1.0, None).name, "night");
    }

    #[test]
    fn default_store_uses_f9_for_reset() {
        let store = PresetStore::default();
        assert!(store.is_empty());
        assert_eq!(store.reset_hotkey(), Some(&hotkey("f9")));
    }

    #[test]
    fn upsert_overwrites_and_moves_to_end() {
        let mut store = PresetStore::default();
        store.upsert(preset("a", 1.0, None));
        store.upsert(preset("b", 1.1, None));
        let previous = store.upsert(preset("a", 1.2, None));

        assert_eq!(previous.map(|p| p.params.brightness), Some(1.0));
        let names: Vec<&str> = store.presets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(store.get("a").map(|p| p.params.brightness), Some(1.2));
    }

    #[test]
    fn bindings_cover_presets_and_reset() {
        let mut store = PresetStore::default();
        store.upsert(preset("day", 1.2, Some("f1")));
        store.upsert(preset("plain", 1.0, None));

        let bindings = store.bindings();
        assert_eq!(bindings.hotkeys(), vec![hotkey("f1"), hotkey("f9")]);
        assert_eq!(
            bindings.action_for(&hotkey("f9")),
            Some(&HotkeyAction::Reset)
        );
    }

    #[test]
    fn later_save_wins_a_shared_hotkey() {
        let mut store = PresetStore::default();
        store.upsert(preset("first", 1.1, Some("f2")));
        store.upsert(preset("second", 1.4, Some("f2")));

        let bindings = store.bindings();
        assert_eq!(bindings.hotkeys().len(), 2);
        assert!(matches!(
            bindings.action_for(&hotkey("f2")),
            Some(HotkeyAction::ApplyPreset { name, .. }) if name == "second"
        ));

        store.upsert(preset("first", 1.1, Some("f2")));
        assert!(matches!(
            store.bindings().action_for(&hotkey("f2")),
            Some(HotkeyAction::ApplyPreset { name, .. }) if name == "first"
        ));
    }

    #[test]
    fn alias_spellings_share_one_binding() {
        let mut store = PresetStore::default();
        store.upsert(preset("legacy", 1.2, Some("esc")));
        store.upsert(preset("captured", 1.8, Some("escape")));

        let bindings = store.bindings();
        assert_eq!(bindings.hotkeys(), vec![hotkey("escape"), hotkey("f9")]);
        assert!(matches!(
            bindings.action_for(&hotkey("esc")),
            Some(HotkeyAction::ApplyPreset { name, params })
                if name == "captured" && params.brightness == 1.8
        ));
    }

    #[test]
    fn reset_hotkey_overrides_a_preset_binding() {
        let mut store = PresetStore::default();
        store.upsert(preset("clash", 1.5, Some("f9")));
        assert_eq!(
            store.bindings().action_for(&hotkey("f9")),
            Some(&HotkeyAction::Reset)
        );
    }

    #[test]
    fn removing_a_preset_drops_its_binding() {
        let mut store = PresetStore::default();
        store.upsert(preset("gone", 1.5, Some("f3")));
        assert!(store.remove("gone").is_some());
        assert!(store.bindings().action_for(&hotkey("f3")).is_none());
        assert!(store.remove("gone").is_none());
    }

    #[test]
    fn reset_action_targets_neutral() {
        assert!(HotkeyAction::Reset.target_params().is_neutral());
    }
}
