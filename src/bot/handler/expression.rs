//! Emoji and sticker event handlers.
//!
//! Both events deliver the guild's complete current set. The previous set comes from
//! the snapshot store; without one there is nothing to compare against and the update
//! is only recorded.

use std::collections::HashMap;

use serenity::all::{Context, Emoji, EmojiId, GuildId, Sticker, StickerId};

use crate::service::{
    audit::{emoji, sticker},
    log_channel::LogChannel,
    snapshot::ExpressionSnapshots,
};

/// Handles the guild_emojis_update event.
///
/// # Arguments
/// - `log_channel` - Channel the notifications are posted to
/// - `snapshots` - Store holding the previous emoji set of each guild
/// - `ctx` - Discord context for sending
/// - `guild_id` - Guild whose emojis changed
/// - `current` - Every emoji the guild has now
pub async fn handle_emojis_update(
    log_channel: &LogChannel,
    snapshots: &ExpressionSnapshots,
    ctx: Context,
    guild_id: GuildId,
    current: HashMap<EmojiId, Emoji>,
) {
    let Some(previous) = snapshots.replace_emojis(guild_id, current.clone()).await else {
        tracing::debug!(
            "No previous emoji set for guild {}, recorded {} emojis",
            guild_id,
            current.len()
        );
        return;
    };

    log_channel
        .send_all(&ctx, emoji::emojis_changed(&previous, &current))
        .await;
}

/// Handles the guild_stickers_update event.
pub async fn handle_stickers_update(
    log_channel: &LogChannel,
    snapshots: &ExpressionSnapshots,
    ctx: Context,
    guild_id: GuildId,
    current: HashMap<StickerId, Sticker>,
) {
    let Some(previous) = snapshots.replace_stickers(guild_id, current.clone()).await else {
        tracing::debug!(
            "No previous sticker set for guild {}, recorded {} stickers",
            guild_id,
            current.len()
        );
        return;
    };

    log_channel
        .send_all(&ctx, sticker::stickers_changed(&previous, &current))
        .await;
}
