//! Runtime settings parsed from environment variables.

pub const DEFAULT_MAX_INPUT_BYTES: u64 = 50 * 1024 * 1024;
pub const DEFAULT_MAX_OUTPUT_BYTES: u64 = 20 * 1024 * 1024;

pub const ENV_MAX_INPUT_BYTES: &str = "UTILKIT_MAX_INPUT_BYTES";
pub const ENV_MAX_OUTPUT_BYTES: &str = "UTILKIT_MAX_OUTPUT_BYTES";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Largest file or decoded base64 payload a tool will accept.
    pub max_input_bytes: u64,
    /// Largest payload returned inline as base64.
    pub max_output_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// Optional:
    /// - `UTILKIT_MAX_INPUT_BYTES`: default 50 MiB
    /// - `UTILKIT_MAX_OUTPUT_BYTES`: default 20 MiB
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_input_bytes: parse_bytes(
                ENV_MAX_INPUT_BYTES,
                lookup(ENV_MAX_INPUT_BYTES),
                defaults.max_input_bytes,
            )?,
            max_output_bytes: parse_bytes(
                ENV_MAX_OUTPUT_BYTES,
                lookup(ENV_MAX_OUTPUT_BYTES),
                defaults.max_output_bytes,
            )?,
        })
    }
}

fn parse_bytes(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}
