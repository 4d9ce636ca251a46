//! Emoji audit notifications.
//!
//! Emoji changes arrive as the guild's whole emoji set; [`emojis_changed`] turns the
//! previous and current set into per-emoji created, updated and deleted notifications.

use std::collections::HashMap;

use serenity::all::{Emoji, EmojiId};

use crate::{
    model::notification::{colour, Notification},
    util::format::UNKNOWN,
};

fn creator(emoji: &Emoji) -> String {
    emoji
        .user
        .as_ref()
        .map(|user| user.tag())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn emoji_created(emoji: &Emoji) -> Notification {
    Notification::new(
        "Emoji Created",
        format!(
            "**Emoji:** {} (`{}`)\n**Name:** `{}`\n**URL:** [Link]({})\n**Animated:** `{}`\n**Created By:** {}",
            emoji,
            emoji.id,
            emoji.name,
            emoji.url(),
            emoji.animated,
            creator(emoji)
        ),
        colour::CREATED,
    )
}

/// Compares two snapshots of an emoji; only the name is tracked.
pub fn emoji_updated(old: &Emoji, new: &Emoji) -> Option<Notification> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(format!("**Name:** `{}` -> `{}`", old.name, new.name));
    }

    if changes.is_empty() {
        return None;
    }

    Some(Notification::new(
        "Emoji Updated",
        format!(
            "**Emoji:** {} (`{}`)\n{}\n**URL:** [Link]({})\n**Animated:** `{}`\n**Updated By:** {}",
            new,
            new.id,
            changes.join("\n"),
            new.url(),
            new.animated,
            creator(new)
        ),
        colour::UPDATED,
    ))
}

pub fn emoji_deleted(emoji: &Emoji) -> Notification {
    Notification::new(
        "Emoji Deleted",
        format!(
            "**Emoji:** `{}` (`{}`)\n**URL:** [Link]({})\n**Animated:** `{}`",
            emoji.name,
            emoji.id,
            emoji.url(),
            emoji.animated
        ),
        colour::DELETED,
    )
}

/// Diffs a guild's previous emoji set against its current one.
///
/// Notifications are ordered created, updated, deleted; each group by emoji ID.
pub fn emojis_changed(
    old: &HashMap<EmojiId, Emoji>,
    new: &HashMap<EmojiId, Emoji>,
) -> Vec<Notification> {
    let mut new_ids: Vec<EmojiId> = new.keys().copied().collect();
    new_ids.sort();
    let mut old_ids: Vec<EmojiId> = old.keys().copied().collect();
    old_ids.sort();

    let created = new_ids
        .iter()
        .filter(|id| !old.contains_key(*id))
        .map(|id| emoji_created(&new[id]));

    let updated = new_ids
        .iter()
        .filter_map(|id| old.get(id).and_then(|before| emoji_updated(before, &new[id])));

    let deleted = old_ids
        .iter()
        .filter(|id| !new.contains_key(*id))
        .map(|id| emoji_deleted(&old[id]));

    created.chain(updated).chain(deleted).collect()
}
