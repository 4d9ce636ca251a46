//! Channel audit notifications.
//!
//! Category names are resolved by the caller from the cache, since a channel
//! snapshot only carries its parent's ID.

use serenity::all::{ChannelType, GuildChannel, Mentionable};

use crate::{
    model::notification::{colour, Notification},
    service::audit::permission::diff_overwrites,
    util::format::{or_none, relative_time},
};

fn channel_summary(channel: &GuildChannel, category: Option<&str>) -> String {
    format!(
        "**Name:** `{}`\n**ID:** `{}`\n**Type:** `{}`\n**Category:** {}\n**NSFW:** `{}`\n**Created At:** {}",
        channel.name,
        channel.id,
        channel.kind.name(),
        or_none(category),
        channel.nsfw,
        relative_time(channel.id.created_at()),
    )
}

pub fn channel_created(channel: &GuildChannel, category: Option<&str>) -> Notification {
    Notification::new(
        "Channel Created",
        channel_summary(channel, category),
        colour::CREATED,
    )
}

pub fn channel_deleted(channel: &GuildChannel, category: Option<&str>) -> Notification {
    Notification::new(
        "Channel Deleted",
        channel_summary(channel, category),
        colour::DELETED,
    )
}

/// Compares two snapshots of a channel.
///
/// Tracks name, NSFW flag and category for every channel, slowmode and topic when
/// both snapshots are text channels, and the permission overwrites.
///
/// # Arguments
/// - `old` / `new` - Channel before and after the update
/// - `old_category` / `new_category` - Names of the respective parent categories
///
/// # Returns
/// - `Some(Notification)` - At least one tracked field changed
/// - `None` - Nothing tracked changed
pub fn channel_updated(
    old: &GuildChannel,
    new: &GuildChannel,
    old_category: Option<&str>,
    new_category: Option<&str>,
) -> Option<Notification> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(format!("**Name:** `{}` -> `{}`", old.name, new.name));
    }

    if old.nsfw != new.nsfw {
        changes.push(format!("**NSFW:** `{}` -> `{}`", old.nsfw, new.nsfw));
    }

    if old.parent_id != new.parent_id {
        changes.push(format!(
            "**Category:** `{}` -> `{}`",
            or_none(old_category),
            or_none(new_category)
        ));
    }

    if old.kind == ChannelType::Text && new.kind == ChannelType::Text {
        let old_slowmode = old.rate_limit_per_user.unwrap_or(0);
        let new_slowmode = new.rate_limit_per_user.unwrap_or(0);
        if old_slowmode != new_slowmode {
            changes.push(format!(
                "**Slowmode:** `{}` seconds -> `{}` seconds",
                old_slowmode, new_slowmode
            ));
        }

        if old.topic != new.topic {
            changes.push(format!(
                "**Topic:** `{}` -> `{}`",
                or_none(old.topic.as_deref()),
                or_none(new.topic.as_deref())
            ));
        }
    }

    changes.extend(diff_overwrites(
        &old.permission_overwrites,
        &new.permission_overwrites,
    ));

    if changes.is_empty() {
        return None;
    }

    Some(Notification::new(
        "Channel Updated",
        format!(
            "**Channel:** {} (`{}`)\n**Type:** `{}`\n\n{}",
            new.id.mention(),
            new.id,
            new.kind.name(),
            changes.join("\n")
        ),
        colour::UPDATED,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        channel::{CATEGORY, TEXT, VOICE},
        create_test_channel, create_test_overwrite,
    };

    /// Tests the created template.
    ///
    /// Expected: one notification naming the channel, its ID, type and category
    #[test]
    fn created_contains_name_id_and_category() {
        let channel = create_test_channel(100, "general", TEXT, Some(10));

        let notification = channel_created(&channel, Some("Lobby"));

        assert_eq!(notification.title, "Channel Created");
        assert_eq!(notification.colour, colour::CREATED);
        assert!(notification.description.contains("**Name:** `general`"));
        assert!(notification.description.contains("**ID:** `100`"));
        assert!(notification.description.contains("**Type:** `text`"));
        assert!(notification.description.contains("**Category:** Lobby"));
        assert!(notification.description.contains("**NSFW:** `false`"));
    }

    #[test]
    fn deleted_without_category_shows_none() {
        let channel = create_test_channel(101, "voice-chat", VOICE, None);

        let notification = channel_deleted(&channel, None);

        assert_eq!(notification.title, "Channel Deleted");
        assert_eq!(notification.colour, colour::DELETED);
        assert!(notification.description.contains("**Category:** None"));
    }

    /// Tests that categories use the same templates as other channels.
    ///
    /// Expected: one created and one deleted notification typed as category
    #[test]
    fn category_created_and_deleted_are_logged() {
        let category = create_test_channel(10, "Lobby", CATEGORY, None);

        let created = channel_created(&category, None);
        let deleted = channel_deleted(&category, None);

        assert_eq!(created.title, "Channel Created");
        assert!(created.description.contains("**Name:** `Lobby`"));
        assert!(created.description.contains("**ID:** `10`"));
        assert!(created.description.contains("**Type:** `category`"));
        assert_eq!(deleted.title, "Channel Deleted");
        assert!(deleted.description.contains("**Type:** `category`"));
    }

    /// Tests that an update without tracked changes is silent.
    ///
    /// Expected: None
    #[test]
    fn unchanged_channel_sends_nothing() {
        let old = create_test_channel(100, "general", TEXT, Some(10));
        let mut new = old.clone();
        new.position = 5;

        assert!(channel_updated(&old, &new, Some("Lobby"), Some("Lobby")).is_none());
    }

    /// Tests that every tracked field lands in a single notification.
    ///
    /// Expected: one notification with name, NSFW, category, slowmode and topic lines
    #[test]
    fn collects_all_changes_in_one_notification() {
        let old = create_test_channel(100, "general", TEXT, Some(10));
        let mut new = create_test_channel(100, "chat", TEXT, Some(11));
        new.nsfw = true;
        new.rate_limit_per_user = Some(30);
        new.topic = Some("Be nice".to_string());

        let notification = channel_updated(&old, &new, Some("Lobby"), Some("Archive")).unwrap();
        let lines: Vec<&str> = notification.description.lines().collect();

        assert_eq!(notification.title, "Channel Updated");
        assert!(notification.description.starts_with("**Channel:** <#100> (`100`)"));
        assert!(lines.contains(&"**Name:** `general` -> `chat`"));
        assert!(lines.contains(&"**NSFW:** `false` -> `true`"));
        assert!(lines.contains(&"**Category:** `Lobby` -> `Archive`"));
        assert!(lines.contains(&"**Slowmode:** `0` seconds -> `30` seconds"));
        assert!(lines.contains(&"**Topic:** `None` -> `Be nice`"));
    }

    /// Tests that slowmode and topic are only compared between text channels.
    ///
    /// Expected: None when a category changes only its topic
    #[test]
    fn topic_ignored_for_non_text_channels() {
        let old = create_test_channel(10, "Lobby", CATEGORY, None);
        let mut new = old.clone();
        new.topic = Some("ignored".to_string());

        assert!(channel_updated(&old, &new, None, None).is_none());
    }

    /// Tests that overwrite changes alone trigger a notification listing each once.
    ///
    /// Expected: one added, one updated and one removed line, keyed by target ID
    #[test]
    fn overwrite_changes_are_listed_by_target() {
        let mut old = create_test_channel(100, "general", TEXT, None);
        old.permission_overwrites = vec![
            create_test_overwrite(200, false, 1 << 10, 0),
            create_test_overwrite(300, false, 1 << 10, 0),
        ];
        let mut new = old.clone();
        new.permission_overwrites = vec![
            create_test_overwrite(200, false, 1 << 10, 1 << 11),
            create_test_overwrite(400, true, 1 << 11, 0),
        ];

        let description = channel_updated(&old, &new, None, None).unwrap().description;

        assert_eq!(description.matches("**Updated Overwrite:** `200`").count(), 1);
        assert_eq!(description.matches("**Added Overwrite:** `400`").count(), 1);
        assert_eq!(description.matches("**Removed Overwrite:** `300`").count(), 1);
        assert_eq!(description.matches("Overwrite:**").count(), 3);
    }
}
