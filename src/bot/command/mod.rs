//! Slash command dispatch.
//!
//! Commands are looked up by name in a static table. Registering them with Discord is
//! done outside the bot.

use serenity::all::{CommandInteraction, Context};

use crate::error::AppError;

pub mod ping;

/// Names of every command the bot answers.
pub const COMMANDS: &[&str] = &[ping::NAME];

/// Runs the command named by the interaction.
///
/// # Arguments
/// - `ctx` - Discord context used to reply
/// - `command` - The command interaction received from Discord
///
/// # Returns
/// - `Ok(())` - The command ran and replied
/// - `Err(AppError::UnknownCommand)` - No command with that name exists
/// - `Err(AppError::DiscordErr)` - The command failed to reply
pub async fn dispatch(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    match command.data.name.as_str() {
        ping::NAME => ping::run(ctx, command).await,
        other => Err(AppError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_ping() {
        assert_eq!(COMMANDS, &["ping"]);
    }
}
