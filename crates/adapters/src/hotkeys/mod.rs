mod keymap;

use std::cell::RefCell;
use std::collections::HashMap;

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use indexmap::IndexMap;
use monitor_gamma_application::{ApplicationError, HotkeyRegistrar, RegistrationReport};
use monitor_gamma_domain::Hotkey;
use tracing::{debug, warn};

pub use keymap::to_global_hotkey;

/// One OS registration per chord, in first-seen order. A later hotkey that
/// maps to an already planned chord takes that chord over.
fn plan_registrations(hotkeys: &[Hotkey]) -> (IndexMap<u32, (HotKey, Hotkey)>, Vec<(Hotkey, String)>) {
    let mut planned = IndexMap::new();
    let mut rejected = Vec::new();
    for hotkey in hotkeys {
        match to_global_hotkey(hotkey) {
            Ok(os_hotkey) => {
                planned.insert(os_hotkey.id(), (os_hotkey, hotkey.clone()));
            }
            Err(reason) => rejected.push((hotkey.clone(), reason)),
        }
    }
    (planned, rejected)
}

/// Process-wide hotkeys through the OS facility.
///
/// The OS listener delivers presses on its own thread into a channel; callers
/// drain that channel from the UI thread with
/// [`HotkeyRegistrar::drain_pressed`]. On Windows and macOS the manager must be
/// created on the thread that runs the window event loop.
pub struct GlobalHotkeyRegistrar {
    manager: GlobalHotKeyManager,
    active: RefCell<HashMap<u32, (HotKey, Hotkey)>>,
}

impl GlobalHotkeyRegistrar {
    pub fn new() -> Result<Self, ApplicationError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|error| ApplicationError::Hotkey(error.to_string()))?;
        Ok(Self {
            manager,
            active: RefCell::new(HashMap::new()),
        })
    }
}

impl HotkeyRegistrar for GlobalHotkeyRegistrar {
    fn replace_all(&self, hotkeys: &[Hotkey]) -> Result<RegistrationReport, ApplicationError> {
        let mut active = self.active.borrow_mut();
        let previous: Vec<(u32, HotKey)> =
            active.iter().map(|(id, (os_hotkey, _))| (*id, *os_hotkey)).collect();
        for (id, os_hotkey) in previous {
            match self.manager.unregister(os_hotkey) {
                Ok(()) => {
                    active.remove(&id);
                }
                Err(error) => warn!(%error, "hotkey unregistration failed, keeping it active"),
            }
        }

        let (planned, rejected) = plan_registrations(hotkeys);
        let mut report = RegistrationReport {
            registered: Vec::new(),
            rejected,
        };
        for (id, (os_hotkey, hotkey)) in planned {
            if let Some(entry) = active.get_mut(&id) {
                entry.1 = hotkey.clone();
                report.registered.push(hotkey);
                continue;
            }
            match self.manager.register(os_hotkey) {
                Ok(()) => {
                    debug!(%hotkey, "hotkey registered");
                    active.insert(id, (os_hotkey, hotkey.clone()));
                    report.registered.push(hotkey);
                }
                Err(error) => report.rejected.push((hotkey, error.to_string())),
            }
        }
        Ok(report)
    }

    fn drain_pressed(&self) -> Result<Vec<Hotkey>, ApplicationError> {
        let active = self.active.borrow();
        let mut pressed = Vec::new();
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if !matches!(event.state, HotKeyState::Pressed) {
                continue;
            }
            if let Some((_, hotkey)) = active.get(&event.id) {
                pressed.push(hotkey.clone());
            }
        }
        Ok(pressed)
    }
}

impl Drop for GlobalHotkeyRegistrar {
    fn drop(&mut self) {
        let registered: Vec<HotKey> = self
            .active
            .get_mut()
            .drain()
            .map(|(_, (os_hotkey, _))| os_hotkey)
            .collect();
        if !registered.is_empty() {
            let _ = self.manager.unregister_all(&registered);
        }
    }
}

/// Stands in when the OS hotkey facility cannot be opened; nothing ever fires.
#[derive(Debug, Default)]
pub struct DetachedHotkeys;

impl HotkeyRegistrar for DetachedHotkeys {
    fn replace_all(&self, hotkeys: &[Hotkey]) -> Result<RegistrationReport, ApplicationError> {
        debug!(count = hotkeys.len(), "global hotkeys unavailable, skipping registration");
        Ok(RegistrationReport::default())
    }

    fn drain_pressed(&self) -> Result<Vec<Hotkey>, ApplicationError> {
        Ok(Vec::new())
    }
}
