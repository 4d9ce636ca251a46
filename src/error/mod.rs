//! Error types for the audit bot.
//!
//! `AppError` is the top-level error type. Startup failures (bad configuration, failed
//! gateway login) propagate to `main` through it. At runtime errors never leave an event
//! handler: notification delivery failures are logged and dropped, and command failures
//! are logged and reported back to the invoking user.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// An interaction named a command the bot has no handler for.
    ///
    /// # Fields
    /// - Name of the command as sent by Discord
    #[error("Command not found: {0}")]
    UnknownCommand(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
