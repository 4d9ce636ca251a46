//! Role event handlers for guild roles.

use serenity::all::{Context, GuildId, Role, RoleId};

use crate::{service::audit::role, service::log_channel::LogChannel};

/// Handles the guild_role_create event when a role is created in a guild.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for sending
/// - `new` - The newly created role from Discord
pub async fn handle_guild_role_create(log_channel: &LogChannel, ctx: Context, new: Role) {
    log_channel.send(&ctx, role::role_created(&new)).await;
}

/// Handles the guild_role_update event when a role is updated in a guild.
///
/// Logged only when the previous role state was cached and a tracked field changed.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for sending
/// - `old` - Previous role state if available
/// - `new` - Updated role state from Discord
pub async fn handle_guild_role_update(
    log_channel: &LogChannel,
    ctx: Context,
    old: Option<Role>,
    new: Role,
) {
    let Some(old) = old else {
        tracing::debug!(
            "Role {} ({}) in guild {} updated but previous state was not cached",
            new.name,
            new.id,
            new.guild_id
        );
        return;
    };

    log_channel
        .send_some(&ctx, role::role_updated(&old, &new))
        .await;
}

/// Handles the guild_role_delete event when a role is deleted from a guild.
///
/// # Arguments
/// - `log_channel` - Channel the notification is posted to
/// - `ctx` - Discord context for sending
/// - `guild_id` - ID of the guild the role was deleted from
/// - `removed_role_id` - ID of the deleted role
/// - `removed_role` - Role data if it was in cache
pub async fn handle_guild_role_delete(
    log_channel: &LogChannel,
    ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    removed_role: Option<Role>,
) {
    tracing::debug!("Role {} deleted from guild {}", removed_role_id, guild_id);

    log_channel
        .send(
            &ctx,
            role::role_deleted(removed_role_id, removed_role.as_ref()),
        )
        .await;
}
