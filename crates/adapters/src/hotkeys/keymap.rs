use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use monitor_gamma_domain::{Hotkey, Modifier};

/// Converts a normalized hotkey into the OS-level registration value.
pub fn to_global_hotkey(hotkey: &Hotkey) -> Result<HotKey, String> {
    let mut mods = Modifiers::empty();
    for modifier in hotkey.modifiers() {
        mods |= match modifier {
            Modifier::Ctrl => Modifiers::CONTROL,
            Modifier::Alt => Modifiers::ALT,
            Modifier::Shift => Modifiers::SHIFT,
            Modifier::Super => Modifiers::SUPER,
        };
    }

    let code = key_code(hotkey.key()).ok_or_else(|| format!("unsupported key {:?}", hotkey.key()))?;
    let mods = if mods.is_empty() { None } else { Some(mods) };
    Ok(HotKey::new(mods, code))
}

/// Looks up the canonical key token produced by [`Hotkey::parse`].
fn key_code(key: &str) -> Option<Code> {
    let code = match key {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        "f13" => Code::F13,
        "f14" => Code::F14,
        "f15" => Code::F15,
        "f16" => Code::F16,
        "f17" => Code::F17,
        "f18" => Code::F18,
        "f19" => Code::F19,
        "f20" => Code::F20,
        "f21" => Code::F21,
        "f22" => Code::F22,
        "f23" => Code::F23,
        "f24" => Code::F24,
        "space" => Code::Space,
        "enter" => Code::Enter,
        "tab" => Code::Tab,
        "escape" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" => Code::Delete,
        "insert" => Code::Insert,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,
        "up" => Code::ArrowUp,
        "down" => Code::ArrowDown,
        "left" => Code::ArrowLeft,
        "right" => Code::ArrowRight,
        "-" => Code::Minus,
        "=" => Code::Equal,
        "," => Code::Comma,
        "." => Code::Period,
        "/" => Code::Slash,
        "\\" => Code::Backslash,
        ";" => Code::Semicolon,
        "'" => Code::Quote,
        "`" => Code::Backquote,
        "[" => Code::BracketLeft,
        "]" => Code::BracketRight,
        "printscreen" => Code::PrintScreen,
        "scrolllock" => Code::ScrollLock,
        "pause" => Code::Pause,
        "num0" => Code::Numpad0,
        "num1" => Code::Numpad1,
        "num2" => Code::Numpad2,
        "num3" => Code::Numpad3,
        "num4" => Code::Numpad4,
        "num5" => Code::Numpad5,
        "num6" => Code::Numpad6,
        "num7" => Code::Numpad7,
        "num8" => Code::Numpad8,
        "num9" => Code::Numpad9,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> Result<HotKey, String> {
        to_global_hotkey(&Hotkey::parse(text).expect("hotkey"))
    }

    #[test]
    fn function_key_without_modifiers() {
        let hotkey = convert("F9").expect("convert");
        assert_eq!(hotkey.key, Code::F9);
        assert!(hotkey.mods.is_empty());
    }

    #[test]
    fn modifiers_map_to_os_flags() {
        let hotkey = convert("shift+ctrl+a").expect("convert");
        assert_eq!(hotkey.key, Code::KeyA);
        assert_eq!(hotkey.mods, Modifiers::CONTROL | Modifiers::SHIFT);
    }

    #[test]
    fn equal_chords_share_an_id() {
        let a = convert("ctrl+alt+up").expect("convert");
        let b = convert("alt+control+arrowup").expect("convert");
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn alias_spellings_reach_the_same_code() {
        assert_eq!(convert("esc").expect("esc").key, Code::Escape);
        assert_eq!(convert("numpad4").expect("numpad").key, Code::Numpad4);
        assert_eq!(convert("ctrl+minus").expect("minus").key, Code::Minus);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(convert("ctrl+volumeknob").is_err());
        assert!(convert("f25").is_err());
    }
}
