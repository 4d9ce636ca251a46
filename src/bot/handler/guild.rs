//! Guild event handlers.
//!
//! `guild_create` fires for every guild on startup and when the bot joins one. It seeds
//! the expression snapshot store so later emoji and sticker updates can be diffed, and
//! requests the full member list so member updates have a cached old state to compare.

use serenity::all::{ChunkGuildFilter, Context, Guild, GuildId, UnavailableGuild};

use crate::{
    bot::handler::lookup::guild_name,
    service::{audit::guild, log_channel::LogChannel, snapshot::ExpressionSnapshots},
};

/// Whether the gateway left members out of the guild payload.
///
/// Large guilds only ship a subset of their members with `guild_create`.
fn needs_member_chunk(cached_members: usize, member_count: u64) -> bool {
    (cached_members as u64) < member_count
}

/// Handles the guild_create event when a guild becomes available or the bot joins one.
///
/// # Arguments
/// - `snapshots` - Store seeded with the guild's emojis and stickers
/// - `ctx` - Discord context for requesting member chunks
/// - `guild` - Full guild data from Discord
/// - `_is_new` - Whether the bot just joined (unused)
pub async fn handle_guild_create(
    snapshots: &ExpressionSnapshots,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, cached_members: {}, {} emojis, {} stickers",
        guild.name,
        guild.id,
        guild.member_count,
        guild.members.len(),
        guild.emojis.len(),
        guild.stickers.len()
    );

    // Members arrive as GUILD_MEMBERS_CHUNK events and are stored by the cache.
    // Requires the GUILD_MEMBERS privileged intent.
    if needs_member_chunk(guild.members.len(), guild.member_count) {
        ctx.shard.chunk_guild(guild.id, None, false, ChunkGuildFilter::None, None);
    }

    snapshots.seed(guild.id, guild.emojis, guild.stickers).await;
}

/// Handles the guild_delete event.
///
/// An outage (`unavailable`) keeps the stored sets; leaving the guild drops them.
pub async fn handle_guild_delete(
    snapshots: &ExpressionSnapshots,
    _ctx: Context,
    incomplete: UnavailableGuild,
) {
    if incomplete.unavailable {
        tracing::debug!("Guild {} became unavailable", incomplete.id);
        return;
    }

    tracing::info!("Removed from guild {}", incomplete.id);
    snapshots.remove(incomplete.id).await;
}

/// Handles the guild_integrations_update event.
pub async fn handle_integrations_update(
    log_channel: &LogChannel,
    ctx: Context,
    guild_id: GuildId,
) {
    let name = guild_name(&ctx, guild_id);

    log_channel
        .send(&ctx, guild::integrations_updated(guild_id, name.as_deref()))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the decision to request the remaining members of a guild.
    ///
    /// Expected: a chunk request only while fewer members are cached than the guild has
    #[test]
    fn requests_members_only_when_payload_is_partial() {
        assert!(needs_member_chunk(75_000, 250_000));
        assert!(!needs_member_chunk(120, 120));
        assert!(!needs_member_chunk(0, 0));
    }
}
