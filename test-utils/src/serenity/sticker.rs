//! Test factory for creating Serenity Sticker objects.

use serenity::all::Sticker;

use super::TEST_GUILD_ID;

/// Creates a test guild Sticker in PNG format.
///
/// # Arguments
/// - `sticker_id` - Discord sticker ID (snowflake)
/// - `name` - Sticker name
/// - `tags` - Related emoji name; Discord sends tags as one comma separated string
///
/// # Panics
/// - If the JSON cannot be deserialized into a Sticker (indicates invalid test data)
pub fn create_test_sticker(sticker_id: u64, name: &str, tags: &str) -> Sticker {
    serde_json::from_value(serde_json::json!({
        "id": sticker_id.to_string(),
        "name": name,
        "description": null,
        "tags": tags,
        "type": 2,
        "format_type": 1,
        "available": true,
        "guild_id": TEST_GUILD_ID.to_string(),
    }))
    .expect("Failed to create test sticker - invalid JSON structure")
}
