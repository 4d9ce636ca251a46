//! Reaction event handlers.
//!
//! Reaction events carry no message content, so the message is loaded first. For
//! removals it is always fetched over HTTP, because cached messages do not track
//! reaction counts.

use serenity::all::{Context, Reaction};

use crate::{service::audit::reaction, service::log_channel::LogChannel};

/// Handles the reaction_add event.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for loading the message and sending
/// - `added` - The reaction that was added
pub async fn handle_reaction_add(log_channel: &LogChannel, ctx: Context, added: Reaction) {
    if added.guild_id.is_none() {
        return;
    }

    let message = match added.message(&ctx).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(
                "Failed to load message {} in channel {} for added reaction: {}",
                added.message_id,
                added.channel_id,
                e
            );
            return;
        }
    };

    log_channel
        .send(&ctx, reaction::reaction_added(&message, &added.emoji))
        .await;
}

/// Handles the reaction_remove event.
///
/// Only logged once no reaction of that emoji is left on the message.
pub async fn handle_reaction_remove(log_channel: &LogChannel, ctx: Context, removed: Reaction) {
    if removed.guild_id.is_none() {
        return;
    }

    let message = match removed
        .channel_id
        .message(&ctx.http, removed.message_id)
        .await
    {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(
                "Failed to fetch message {} in channel {} for removed reaction: {}",
                removed.message_id,
                removed.channel_id,
                e
            );
            return;
        }
    };

    let notification = reaction::reaction_removed(&message, &removed.emoji);
    if notification.is_none() {
        tracing::debug!(
            "Reaction {} still present on message {}, not logging removal",
            removed.emoji,
            removed.message_id
        );
    }

    log_channel.send_some(&ctx, notification).await;
}
