//! Test factory for creating Serenity Emoji objects.

use serenity::all::Emoji;

use super::user::user_json;

/// Creates a test custom guild Emoji.
///
/// The emoji is static (not animated), available and requires colons. When
/// `creator` is given, the emoji carries the uploading user the way the gateway
/// sends it to bots with the Manage Expressions permission.
///
/// # Panics
/// - If the JSON cannot be deserialized into an Emoji (indicates invalid test data)
pub fn create_test_emoji(emoji_id: u64, name: &str, creator: Option<(u64, &str)>) -> Emoji {
    serde_json::from_value(serde_json::json!({
        "id": emoji_id.to_string(),
        "name": name,
        "animated": false,
        "available": true,
        "managed": false,
        "require_colons": true,
        "roles": [],
        "user": creator.map(|(id, username)| user_json(id, username)),
    }))
    .expect("Failed to create test emoji - invalid JSON structure")
}
