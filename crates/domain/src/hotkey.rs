use std::fmt::{Display, Formatter};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Shift => "shift",
            Self::Super => "super",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" => Some(Self::Ctrl),
            "alt" | "option" => Some(Self::Alt),
            "shift" => Some(Self::Shift),
            "super" | "win" | "windows" | "cmd" | "command" | "meta" => Some(Self::Super),
            _ => None,
        }
    }
}

/// A normalized global key combination such as `ctrl+shift+f1`.
///
/// Tokens are lowercase, modifiers come first in a fixed order and exactly
/// one non-modifier key ends the combination, so two spellings of the same
/// chord compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    modifiers: Vec<Modifier>,
    key: String,
}

impl Hotkey {
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let normalized = text.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidHotkey(text.to_string(), "empty"));
        }

        let mut modifiers = Vec::new();
        let mut key: Option<String> = None;
        for token in normalized.split('+').map(str::trim) {
            if token.is_empty() {
                return Err(DomainError::InvalidHotkey(text.to_string(), "empty key token"));
            }
            if token.contains(char::is_whitespace) {
                return Err(DomainError::InvalidHotkey(
                    text.to_string(),
                    "key tokens must not contain spaces",
                ));
            }
            if let Some(modifier) = Modifier::parse(token) {
                if !modifiers.contains(&modifier) {
                    modifiers.push(modifier);
                }
                continue;
            }
            if key.replace(canonical_key(token).to_string()).is_some() {
                return Err(DomainError::InvalidHotkey(
                    text.to_string(),
                    "more than one non-modifier key",
                ));
            }
        }

        let Some(key) = key else {
            return Err(DomainError::InvalidHotkey(
                text.to_string(),
                "a modifier needs a key",
            ));
        };
        modifiers.sort();
        Ok(Self { modifiers, key })
    }

    /// Parses optional user input where an empty string means "no hotkey".
    pub fn parse_optional(text: &str) -> Result<Option<Self>, DomainError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(text).map(Some)
    }

    pub fn from_parts(modifiers: &[Modifier], key: &str) -> Result<Self, DomainError> {
        let mut text = String::new();
        for modifier in modifiers {
            text.push_str(modifier.as_str());
            text.push('+');
        }
        text.push_str(key);
        Self::parse(&text)
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Display for Hotkey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        f.write_str(&self.key)
    }
}

/// Folds alternative spellings of one physical key onto a single token.
fn canonical_key(token: &str) -> &str {
    match token {
        "esc" => "escape",
        "return" => "enter",
        "del" => "delete",
        "ins" => "insert",
        "page_up" | "pgup" => "pageup",
        "page_down" | "pgdn" => "pagedown",
        "arrowup" => "up",
        "arrowdown" => "down",
        "arrowleft" => "left",
        "arrowright" => "right",
        "minus" => "-",
        "equal" | "equals" => "=",
        "comma" => ",",
        "period" => ".",
        "slash" => "/",
        "backslash" => "\\",
        "semicolon" => ";",
        "quote" => "'",
        "backtick" | "backquote" => "`",
        "openbracket" | "bracketleft" => "[",
        "closebracket" | "bracketright" => "]",
        "print_screen" => "printscreen",
        "scroll_lock" => "scrolllock",
        "numpad0" => "num0",
        "numpad1" => "num1",
        "numpad2" => "num2",
        "numpad3" => "num3",
        "numpad4" => "num4",
        "numpad5" => "num5",
        "numpad6" => "num6",
        "numpad7" => "num7",
        "numpad8" => "num8",
        "numpad9" => "num9",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_is_lowercased() {
        let hotkey = Hotkey::parse(" F9 ").expect("hotkey");
        assert_eq!(hotkey.to_string(), "f9");
        assert!(hotkey.modifiers().is_empty());
        assert_eq!(hotkey.key(), "f9");
    }

    #[test]
    fn modifiers_are_canonically_ordered() {
        let a = Hotkey::parse("Shift + Control + a").expect("hotkey");
        let b = Hotkey::parse("ctrl+shift+A").expect("hotkey");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "ctrl+shift+a");
    }

    #[test]
    fn aliases_collapse_to_one_modifier() {
        let hotkey = Hotkey::parse("cmd+win+f1").expect("hotkey");
        assert_eq!(hotkey.modifiers(), &[Modifier::Super]);
        assert_eq!(hotkey.to_string(), "super+f1");
    }

    #[test]
    fn rejects_malformed_combinations() {
        assert!(Hotkey::parse("").is_err());
        assert!(Hotkey::parse("ctrl+").is_err());
        assert!(Hotkey::parse("ctrl+shift").is_err());
        assert!(Hotkey::parse("a+b").is_err());
        assert!(Hotkey::parse("page up").is_err());
    }

    #[test]
    fn key_aliases_collapse_to_one_spelling() {
        assert_eq!(
            Hotkey::parse("esc").expect("esc"),
            Hotkey::parse("Escape").expect("escape")
        );
        assert_eq!(
            Hotkey::parse("ctrl+Return").expect("return").to_string(),
            "ctrl+enter"
        );
        assert_eq!(
            Hotkey::parse("alt+arrowup").expect("arrowup"),
            Hotkey::parse("alt+up").expect("up")
        );
        assert_eq!(Hotkey::parse("minus").expect("minus").key(), "-");
    }

    #[test]
    fn optional_parse_treats_blank_as_none() {
        assert_eq!(Hotkey::parse_optional("  ").expect("blank"), None);
        assert!(Hotkey::parse_optional("f2").expect("f2").is_some());
    }

    #[test]
    fn from_parts_matches_parse() {
        let built = Hotkey::from_parts(&[Modifier::Alt, Modifier::Ctrl], "Up").expect("hotkey");
        assert_eq!(built, Hotkey::parse("ctrl+alt+up").expect("hotkey"));
    }
}
