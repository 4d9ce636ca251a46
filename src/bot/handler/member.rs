//! Member event handlers for guild members.
//!
//! Member updates can produce several notifications, one per kind of change. The
//! guild's roles are read from the cache to name the member's current roles.

use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, Timestamp, User};

use crate::{
    bot::handler::lookup::guild_roles, service::audit::member, service::log_channel::LogChannel,
};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for sending
/// - `new_member` - The member that joined
pub async fn handle_guild_member_addition(
    log_channel: &LogChannel,
    ctx: Context,
    new_member: Member,
) {
    log_channel
        .send(&ctx, member::member_joined(&new_member))
        .await;
}

/// Handles the guild_member_removal event when a member leaves a guild.
///
/// The leave time is the time the event was received.
pub async fn handle_guild_member_removal(
    log_channel: &LogChannel,
    ctx: Context,
    _guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    log_channel
        .send(&ctx, member::member_left(&user, Timestamp::now()))
        .await;
}

/// Handles the guild_member_update event.
///
/// # Arguments
/// - `log_channel` - Channel the notifications are posted to
/// - `ctx` - Discord context for cache lookups and sending
/// - `old` - Previous member state if it was cached
/// - `new` - Updated member state if the cache applied the update
/// - `event` - Raw update event
pub async fn handle_guild_member_update(
    log_channel: &LogChannel,
    ctx: Context,
    old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let (Some(old), Some(new)) = (old, new) else {
        tracing::debug!(
            "Member {} in guild {} updated but previous state was not cached",
            event.user.id,
            event.guild_id
        );
        return;
    };

    let roles = guild_roles(&ctx, new.guild_id);

    log_channel
        .send_all(&ctx, member::member_updated(&old, &new, &roles))
        .await;
}
