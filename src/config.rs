use serenity::all::{ApplicationId, ChannelId, OnlineStatus};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PRESENCE: &str = "over the server";
const DEFAULT_STATUS: &str = "online";
const DEFAULT_MESSAGE_CACHE_SIZE: usize = 1000;

pub struct Config {
    pub discord_bot_token: String,
    pub application_id: ApplicationId,

    /// Channel every audit notification is posted to.
    pub log_channel_id: ChannelId,

    /// Activity text shown as "Watching <presence>".
    pub presence: String,
    pub status: OnlineStatus,

    /// Messages kept per channel so that edits and deletions can show the old content.
    pub message_cache_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` uses the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let application_id = parse_id(
            "DISCORD_APPLICATION_ID",
            required("DISCORD_APPLICATION_ID")?,
        )?;
        let log_channel_id = parse_id("LOG_CHANNEL_ID", required("LOG_CHANNEL_ID")?)?;

        let status = parse_status(
            &lookup("BOT_STATUS").unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        )?;

        let message_cache_size = match lookup("MESSAGE_CACHE_SIZE") {
            Some(value) => value.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "MESSAGE_CACHE_SIZE".to_string(),
                reason: e.to_string(),
                value,
            })?,
            None => DEFAULT_MESSAGE_CACHE_SIZE,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            application_id: ApplicationId::new(application_id),
            log_channel_id: ChannelId::new(log_channel_id),
            presence: lookup("BOT_PRESENCE").unwrap_or_else(|| DEFAULT_PRESENCE.to_string()),
            status,
            message_cache_size,
        })
    }
}

/// Parses a non-zero Discord snowflake.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "Discord IDs cannot be zero".to_string(),
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_status(value: &str) -> Result<OnlineStatus, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "online" => Ok(OnlineStatus::Online),
        "idle" => Ok(OnlineStatus::Idle),
        "dnd" => Ok(OnlineStatus::DoNotDisturb),
        "invisible" => Ok(OnlineStatus::Invisible),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "BOT_STATUS".to_string(),
            value: value.to_string(),
            reason: "expected one of online, idle, dnd, invisible".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DISCORD_BOT_TOKEN", "token"),
        ("DISCORD_APPLICATION_ID", "1234"),
        ("LOG_CHANNEL_ID", "5678"),
    ];

    /// Tests loading a configuration with only the required variables.
    ///
    /// Expected: Ok with defaults for presence, status and cache size
    #[test]
    fn loads_required_with_defaults() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.application_id.get(), 1234);
        assert_eq!(config.log_channel_id.get(), 5678);
        assert_eq!(config.presence, DEFAULT_PRESENCE);
        assert_eq!(config.status, OnlineStatus::Online);
        assert_eq!(config.message_cache_size, DEFAULT_MESSAGE_CACHE_SIZE);
    }

    /// Tests that optional variables override the defaults.
    ///
    /// Expected: Ok with the provided presence, status and cache size
    #[test]
    fn optional_values_override_defaults() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("BOT_PRESENCE", "the logs"));
        vars.push(("BOT_STATUS", "DND"));
        vars.push(("MESSAGE_CACHE_SIZE", "50"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.presence, "the logs");
        assert_eq!(config.status, OnlineStatus::DoNotDisturb);
        assert_eq!(config.message_cache_size, 50);
    }

    /// Tests that a missing log channel is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("LOG_CHANNEL_ID"))
    #[test]
    fn missing_log_channel_is_rejected() {
        let result = Config::from_lookup(lookup_from(&REQUIRED[..2]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "LOG_CHANNEL_ID"
        ));
    }

    /// Tests that non-numeric and zero IDs are rejected.
    ///
    /// Expected: Err(InvalidEnvVar) for both
    #[test]
    fn invalid_ids_are_rejected() {
        for bad in ["general", "0"] {
            let mut vars = REQUIRED.to_vec();
            vars[2] = ("LOG_CHANNEL_ID", bad);

            let result = Config::from_lookup(lookup_from(&vars));

            assert!(matches!(
                result,
                Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
            ));
        }
    }

    /// Tests that an unknown status string is rejected.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn unknown_status_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("BOT_STATUS", "sleepy"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
