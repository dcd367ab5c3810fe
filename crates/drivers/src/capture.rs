use eframe::egui;
use monitor_gamma_adapters::to_global_hotkey;
use monitor_gamma_domain::{Hotkey, Modifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTarget {
    NewPreset,
    Reset,
}

/// Returns the first fresh key press in `events` as a hotkey.
pub fn first_pressed_hotkey(events: &[egui::Event]) -> Option<Hotkey> {
    events.iter().find_map(|event| match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } => hotkey_from_key(*key, *modifiers),
        _ => None,
    })
}

pub fn hotkey_from_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<Hotkey> {
    let mut held = Vec::new();
    if modifiers.ctrl {
        held.push(Modifier::Ctrl);
    }
    if modifiers.alt {
        held.push(Modifier::Alt);
    }
    if modifiers.shift {
        held.push(Modifier::Shift);
    }
    if modifiers.mac_cmd {
        held.push(Modifier::Super);
    }
    Hotkey::from_parts(&held, key.name()).ok()
}

/// Rejects captured keys the OS hotkey facility has no code for.
pub fn ensure_registrable(hotkey: &Hotkey) -> Result<(), String> {
    to_global_hotkey(hotkey)
        .map(|_| ())
        .map_err(|reason| format!("{hotkey} cannot be used as a global hotkey: {reason}"))
}
