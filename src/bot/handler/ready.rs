//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Logs who the bot is and where
//! it posts, sets the configured presence and checks the log channel.

use serenity::all::{ActivityData, Context, OnlineStatus, Ready};

use crate::{bot::command::COMMANDS, service::log_channel::LogChannel};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `log_channel` - Channel notifications are posted to, resolved once here
/// - `presence` - Activity text shown as "Watching <presence>"
/// - `status` - Online status to display
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    log_channel: &LogChannel,
    presence: &str,
    status: OnlineStatus,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord (application {}), watching {} as {:?}, logging to channel {}",
        ready.user.name,
        ready.application.id,
        presence,
        status,
        log_channel.id()
    );

    tracing::debug!("Answering commands: {}", COMMANDS.join(", "));

    ctx.set_presence(Some(ActivityData::watching(presence)), status);

    log_channel.resolve(&ctx).await;
}
