use thiserror::Error;

/// Failures reported by an NFC capability provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NfcError {
    /// The radio is switched off in system settings.
    #[error("NFC is disabled")]
    Disabled,
    /// System settings could not be opened.
    #[error("unable to open NFC settings: {0}")]
    SettingsUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be one of `text` or `json`, got {value:?}")]
    InvalidOutput { var: &'static str, value: String },
}

/// Identifier values must fit a signed or unsigned byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier value {0} is not a byte")]
pub struct TagValueOutOfRange(pub i16);
