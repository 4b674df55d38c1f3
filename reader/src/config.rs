use crate::error::ConfigError;

pub const ENV_PRESENT: &str = "NFC_READER_PRESENT";
pub const ENV_ENABLED: &str = "NFC_READER_ENABLED";
pub const ENV_SETTINGS: &str = "NFC_READER_SETTINGS";
pub const ENV_OUTPUT: &str = "NFC_READER_OUTPUT";

/// How the screen is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether a provider exists at all. `false` behaves like a device without NFC.
    pub nfc_present: bool,
    /// Initial radio state of the simulated reader.
    pub nfc_enabled: bool,
    /// Whether opening system settings succeeds.
    pub settings_available: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nfc_present: true,
            nfc_enabled: true,
            settings_available: true,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_PRESENT) {
            config.nfc_present = parse_bool(ENV_PRESENT, &v)?;
        }
        if let Some(v) = lookup(ENV_ENABLED) {
            config.nfc_enabled = parse_bool(ENV_ENABLED, &v)?;
        }
        if let Some(v) = lookup(ENV_SETTINGS) {
            config.settings_available = parse_bool(ENV_SETTINGS, &v)?;
        }
        if let Some(v) = lookup(ENV_OUTPUT) {
            config.output = match v.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidOutput {
                        var: ENV_OUTPUT,
                        value: v,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
