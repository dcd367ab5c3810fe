use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("gamma parameter {0} must be finite")]
    NonFiniteParam(&'static str),
    #[error("gamma parameter {name}={value} is outside [{min}, {max}]")]
    ParamOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("preset name must not be empty")]
    EmptyPresetName,
    #[error("invalid hotkey {0:?}: {1}")]
    InvalidHotkey(String, &'static str),
}
