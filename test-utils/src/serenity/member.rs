//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::{user::user_json, TEST_GUILD_ID};

/// Creates a test Serenity Member of the shared test guild.
///
/// The member joined on 2021-01-01, is not boosting, has no guild avatar and no
/// active timeout. Role order in `role_ids` is preserved.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Guild nickname, if any
/// - `role_ids` - IDs of the roles the member holds
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, username),
        "guild_id": TEST_GUILD_ID.to_string(),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2021-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
