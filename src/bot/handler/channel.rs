//! Channel event handlers for guild channels.
//!
//! Category names are looked up in the cache. A channel update is only logged when the
//! previous state was cached, since there is nothing to compare against otherwise.

use serenity::all::{Context, GuildChannel, Message};

use crate::{
    bot::handler::lookup::channel_name, service::audit::channel, service::log_channel::LogChannel,
};

/// Handles the channel_create event when a channel is created in a guild.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `created` - The newly created guild channel
pub async fn handle_channel_create(log_channel: &LogChannel, ctx: Context, created: GuildChannel) {
    let category = channel_name(&ctx, created.guild_id, created.parent_id);

    log_channel
        .send(&ctx, channel::channel_created(&created, category.as_deref()))
        .await;
}

/// Handles the channel_update event when a channel is updated in a guild.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `old` - Previous channel state if it was cached
/// - `new` - Updated channel state from Discord
pub async fn handle_channel_update(
    log_channel: &LogChannel,
    ctx: Context,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let Some(old) = old else {
        tracing::debug!(
            "Channel {} ({}) updated but previous state was not cached",
            new.name,
            new.id
        );
        return;
    };

    let old_category = channel_name(&ctx, old.guild_id, old.parent_id);
    let new_category = channel_name(&ctx, new.guild_id, new.parent_id);

    log_channel
        .send_some(
            &ctx,
            channel::channel_updated(
                &old,
                &new,
                old_category.as_deref(),
                new_category.as_deref(),
            ),
        )
        .await;
}

/// Handles the channel_delete event when a channel is deleted from a guild.
pub async fn handle_channel_delete(
    log_channel: &LogChannel,
    ctx: Context,
    deleted: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let category = channel_name(&ctx, deleted.guild_id, deleted.parent_id);

    log_channel
        .send(&ctx, channel::channel_deleted(&deleted, category.as_deref()))
        .await;
}
