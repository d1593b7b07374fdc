//! Discord connection configuration and credentials.

use serde::Deserialize;

use crate::error::ConfigError;

const fn default_true() -> bool {
    true
}

/// `[discord]` section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordAppConfig {
    /// Set both command schemas on every guild the bot sees.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl Default for DiscordAppConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
        }
    }
}

/// Bot credentials. Only ever read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub application_id: Option<u64>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("application_id", &self.application_id)
            .finish()
    }
}

/// Read `NAME`, or the concatenation of `NAME_PART1` and `NAME_PART2`.
/// Blank values count as unset.
fn split_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    let whole = lookup(name).map(|v| v.trim().to_string());
    if let Some(value) = whole.filter(|v| !v.is_empty()) {
        return Some(value);
    }

    let part = |suffix: &str| {
        lookup(&format!("{name}_{suffix}"))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    let joined = format!("{}{}", part("PART1"), part("PART2"));
    (!joined.is_empty()).then_some(joined)
}

impl Credentials {
    pub const TOKEN_VAR: &'static str = "DISCORD_TOKEN";
    pub const CLIENT_ID_VAR: &'static str = "DISCORD_CLIENT_ID";

    /// Load credentials from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Credentials::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingField`] when no token is set, and
    /// [`ConfigError::InvalidValue`] when the client id is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = split_var(&lookup, Self::TOKEN_VAR).ok_or(ConfigError::MissingField {
            field: Self::TOKEN_VAR,
        })?;

        let application_id = split_var(&lookup, Self::CLIENT_ID_VAR)
            .map(|raw| {
                raw.parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        field: Self::CLIENT_ID_VAR,
                        reason: format!("`{raw}` is not a Discord application id"),
                    })
            })
            .transpose()?;

        Ok(Self {
            token,
            application_id,
        })
    }
}
