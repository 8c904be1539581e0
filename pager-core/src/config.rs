//! Process configuration read from the environment.

use std::{env, time::Duration};

use thiserror::Error;

use pager_utils::pagination::DEFAULT_COOLDOWN_SECS;

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const COOLDOWN_VAR: &str = "PAGINATOR_COOLDOWN_SECS";
const DELETE_ON_STOP_VAR: &str = "PAGINATOR_DELETE_ON_STOP";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value `{value}` for `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Bot settings resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    /// Idle timeout applied to every pagination session.
    pub cooldown: Duration,
    /// Delete paginated messages on stop instead of clearing their reactions.
    pub delete_on_stop: bool,
}

impl BotConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup(TOKEN_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        let cooldown_secs = match lookup(COOLDOWN_VAR) {
            Some(raw) => parse_cooldown(&raw)?,
            None => DEFAULT_COOLDOWN_SECS,
        };

        let delete_on_stop = match lookup(DELETE_ON_STOP_VAR) {
            Some(raw) => parse_flag(DELETE_ON_STOP_VAR, &raw)?,
            None => false,
        };

        Ok(Self {
            token,
            cooldown: Duration::from_secs(cooldown_secs),
            delete_on_stop,
        })
    }
}

fn parse_cooldown(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason| ConfigError::Invalid {
        key: COOLDOWN_VAR,
        value: raw.to_owned(),
        reason,
    };

    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid("expected whole seconds"))?;

    if secs == 0 {
        return Err(invalid("must be at least one second"));
    }

    Ok(secs)
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_owned(),
            reason: "expected a boolean",
        }),
    }
}
