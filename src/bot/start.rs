use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::log_channel::LogChannel;

/// Gateway intents the audit bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_EMOJIS_AND_STICKERS
        | GatewayIntents::GUILD_INTEGRATIONS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
}

/// Starts the Discord bot in a blocking manner
///
/// Builds the client with the audit event handler and runs it until the gateway
/// connection shuts down.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let handler = Handler::new(
        LogChannel::new(config.log_channel_id),
        config.presence.clone(),
        config.status,
    );

    // Deleted and edited messages can only show their old content if it was cached
    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = config.message_cache_size;

    let mut client = Client::builder(&config.discord_bot_token, intents())
        .application_id(config.application_id)
        .cache_settings(cache_settings)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
