//! Cache lookups shared by the event handlers.
//!
//! Each lookup copies what it needs out of the cache so no cache reference is held
//! across an await.

use std::collections::HashMap;

use serenity::all::{ChannelId, Context, GuildId, Role, RoleId};

/// Name of a guild channel, if the guild and channel are cached.
pub fn channel_name(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: Option<ChannelId>,
) -> Option<String> {
    let channel_id = channel_id?;
    let guild = ctx.cache.guild(guild_id)?;
    guild
        .channels
        .get(&channel_id)
        .map(|channel| channel.name.clone())
}

pub fn guild_name(ctx: &Context, guild_id: GuildId) -> Option<String> {
    ctx.cache.guild(guild_id).map(|guild| guild.name.clone())
}

/// The guild's roles, empty when the guild is not cached.
pub fn guild_roles(ctx: &Context, guild_id: GuildId) -> HashMap<RoleId, Role> {
    ctx.cache
        .guild(guild_id)
        .map(|guild| guild.roles.clone())
        .unwrap_or_default()
}
