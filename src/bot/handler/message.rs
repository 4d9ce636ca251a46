//! Message event handlers.
//!
//! Deletion events only carry IDs. Content and author are read from the message cache,
//! whose size is set by `MESSAGE_CACHE_SIZE`.

use serenity::all::{ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent};

use crate::{service::audit::message, service::log_channel::LogChannel};

fn cached_message(
    ctx: &Context,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Option<Message> {
    ctx.cache
        .message(channel_id, message_id)
        .map(|cached| Message::clone(&cached))
}

/// Loads a message from the cache, falling back to the HTTP API.
async fn fetch_message(
    ctx: &Context,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Option<Message> {
    match channel_id.message(ctx, message_id).await {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::debug!(
                "Failed to fetch message {} in channel {}: {}",
                message_id,
                channel_id,
                e
            );
            None
        }
    }
}

/// Handles the message_delete event for guild messages.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `channel_id` - Channel the message was deleted from
/// - `message_id` - ID of the deleted message
/// - `guild_id` - Guild of the channel, `None` for direct messages
pub async fn handle_message_delete(
    log_channel: &LogChannel,
    ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    let cached = cached_message(&ctx, channel_id, message_id);

    log_channel
        .send(
            &ctx,
            message::message_deleted(channel_id, message_id, cached.as_ref()),
        )
        .await;
}

/// Handles the message_delete_bulk event, posting one notification for the batch.
pub async fn handle_message_delete_bulk(
    log_channel: &LogChannel,
    ctx: Context,
    channel_id: ChannelId,
    message_ids: Vec<MessageId>,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    let messages: Vec<(MessageId, Option<String>)> = message_ids
        .into_iter()
        .map(|id| {
            let content = cached_message(&ctx, channel_id, id).map(|message| message.content);
            (id, content)
        })
        .collect();

    log_channel
        .send(&ctx, message::messages_bulk_deleted(&messages))
        .await;
}

/// Handles the message_update event.
///
/// The old message comes from the cache only; an uncached edit is still logged with
/// its old content unknown. The new message is fetched once when the cache did not
/// apply the update. Nothing is posted when neither content nor pinned state changed.
pub async fn handle_message_update(
    log_channel: &LogChannel,
    ctx: Context,
    old: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    if event.guild_id.is_none() {
        return;
    }

    let new = match new {
        Some(new) => new,
        None => match fetch_message(&ctx, event.channel_id, event.id).await {
            Some(fetched) => fetched,
            None => {
                tracing::debug!(
                    "Message {} in channel {} could not be loaded, skipping update",
                    event.id,
                    event.channel_id
                );
                return;
            }
        },
    };

    if old.is_none() {
        tracing::debug!(
            "Message {} in channel {} was not cached before the edit",
            event.id,
            event.channel_id
        );
    }

    log_channel
        .send_some(&ctx, message::message_updated(old.as_ref(), &new))
        .await;
}
