//! Thread event handlers.
//!
//! Parent channel names come from the cache; a thread snapshot only carries the
//! parent's ID.

use serenity::all::{Context, GuildChannel, PartialGuildChannel};

use crate::{
    bot::handler::lookup::channel_name, service::audit::thread, service::log_channel::LogChannel,
};

/// Handles the thread_create event.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `thread` - The newly created thread
pub async fn handle_thread_create(log_channel: &LogChannel, ctx: Context, thread: GuildChannel) {
    let parent = channel_name(&ctx, thread.guild_id, thread.parent_id);

    log_channel
        .send(&ctx, thread::thread_created(&thread, parent.as_deref()))
        .await;
}

/// Handles the thread_update event.
///
/// Sent on every update; the old name shows as `Unknown` when the previous state was
/// not cached.
pub async fn handle_thread_update(
    log_channel: &LogChannel,
    ctx: Context,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let parent = channel_name(&ctx, new.guild_id, new.parent_id);
    let old_name = old.as_ref().map(|thread| thread.name.as_str());

    log_channel
        .send(
            &ctx,
            thread::thread_updated(old_name, &new, parent.as_deref()),
        )
        .await;
}

/// Handles the thread_delete event.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `partial` - IDs of the deleted thread, always present
/// - `full` - The thread as last cached, if it was
pub async fn handle_thread_delete(
    log_channel: &LogChannel,
    ctx: Context,
    partial: PartialGuildChannel,
    full: Option<GuildChannel>,
) {
    let parent = channel_name(&ctx, partial.guild_id, Some(partial.parent_id));
    let name = full.as_ref().map(|thread| thread.name.as_str());

    log_channel
        .send(
            &ctx,
            thread::thread_deleted(name, partial.id, parent.as_deref()),
        )
        .await;
}
