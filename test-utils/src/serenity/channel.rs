//! Test factories for creating Serenity GuildChannel objects.

use serenity::all::{GuildChannel, PermissionOverwrite};

use super::TEST_GUILD_ID;

/// Raw Discord channel type for guild text channels.
pub const TEXT: u8 = 0;
/// Raw Discord channel type for guild voice channels.
pub const VOICE: u8 = 2;
/// Raw Discord channel type for categories.
pub const CATEGORY: u8 = 4;
/// Raw Discord channel type for public threads.
pub const PUBLIC_THREAD: u8 = 11;

/// Creates a test Serenity GuildChannel.
///
/// The channel is not NSFW, has no topic, no slowmode and no permission overwrites.
/// Use [`create_test_overwrite`] and push onto `permission_overwrites` to add some.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Raw Discord channel type (see the constants in this module)
/// - `parent_id` - Category (or parent channel for threads), if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "type": kind,
        "name": name,
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": 0,
        "topic": null,
        "nsfw": false,
        "rate_limit_per_user": 0,
        "permission_overwrites": [],
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Creates a channel permission overwrite.
///
/// # Arguments
/// - `target_id` - Role or user ID the overwrite applies to
/// - `member` - `true` for a member overwrite, `false` for a role overwrite
/// - `allow` - Raw allowed permission bits
/// - `deny` - Raw denied permission bits
///
/// # Panics
/// - If the JSON cannot be deserialized into a PermissionOverwrite
pub fn create_test_overwrite(target_id: u64, member: bool, allow: u64, deny: u64) -> PermissionOverwrite {
    serde_json::from_value(serde_json::json!({
        "id": target_id.to_string(),
        "type": if member { 1 } else { 0 },
        "allow": allow.to_string(),
        "deny": deny.to_string(),
    }))
    .expect("Failed to create test permission overwrite - invalid JSON structure")
}
