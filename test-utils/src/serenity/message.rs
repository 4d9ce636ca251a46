//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::{user::user_json, TEST_GUILD_ID};

/// Creates a test guild Message.
///
/// The message is a plain default message sent on 2024-01-01 without attachments,
/// embeds or mentions.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `author` - `(user_id, username)` of the author
/// - `content` - Message text
/// - `pinned` - Whether the message is pinned
/// - `reactions` - `(unicode emoji, count)` pairs currently on the message
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: (u64, &str),
    content: &str,
    pinned: bool,
    reactions: &[(&str, u64)],
) -> Message {
    let reactions: Vec<serde_json::Value> = reactions
        .iter()
        .map(|(emoji, count)| {
            serde_json::json!({
                "count": count,
                "count_details": { "burst": 0, "normal": count },
                "me": false,
                "me_burst": false,
                "burst_colors": [],
                "emoji": { "id": null, "name": emoji },
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "author": user_json(author.0, author.1),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": reactions,
        "pinned": pinned,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
