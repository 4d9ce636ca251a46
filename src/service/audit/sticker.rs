//! Sticker audit notifications.
//!
//! Like emojis, sticker changes arrive as the guild's whole sticker set and are diffed
//! by [`stickers_changed`].

use std::collections::HashMap;

use serenity::all::{Sticker, StickerId};

use crate::{
    model::notification::{colour, Notification},
    util::format::or_none,
};

/// `name (`id`)`, followed by the related emoji tags when the sticker has any.
fn sticker_heading(sticker: &Sticker) -> String {
    let tags: Vec<&str> = sticker
        .tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        format!("**Sticker:** {} (`{}`)", sticker.name, sticker.id)
    } else {
        format!(
            "**Sticker:** {} (`{}`) - {}",
            sticker.name,
            sticker.id,
            tags.join(", ")
        )
    }
}

fn with_sticker_image(notification: Notification, sticker: &Sticker) -> Notification {
    match sticker.image_url() {
        Some(url) => notification.with_image(url),
        None => notification,
    }
}

pub fn sticker_created(sticker: &Sticker) -> Notification {
    with_sticker_image(
        Notification::new("Sticker Created", sticker_heading(sticker), colour::CREATED),
        sticker,
    )
}

/// Compares two snapshots of a sticker.
///
/// Tracks name, description and tags.
pub fn sticker_updated(old: &Sticker, new: &Sticker) -> Option<Notification> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(format!("**Name:** `{}` -> `{}`", old.name, new.name));
    }
    if old.description != new.description {
        changes.push(format!(
            "**Description:** `{}` -> `{}`",
            or_none(old.description.as_deref()),
            or_none(new.description.as_deref())
        ));
    }
    if old.tags != new.tags {
        changes.push(format!(
            "**Tags:** `{}` -> `{}`",
            or_none(Some(&old.tags.join(", "))),
            or_none(Some(&new.tags.join(", ")))
        ));
    }

    if changes.is_empty() {
        return None;
    }

    Some(with_sticker_image(
        Notification::new(
            "Sticker Updated",
            format!("{}\n{}", sticker_heading(new), changes.join("\n")),
            colour::UPDATED,
        ),
        new,
    ))
}

pub fn sticker_deleted(sticker: &Sticker) -> Notification {
    Notification::new(
        "Sticker Deleted",
        format!("**Sticker:** {} (`{}`)", sticker.name, sticker.id),
        colour::DELETED,
    )
}

/// Diffs a guild's previous sticker set against its current one.
///
/// Notifications are ordered created, updated, deleted; each group by sticker ID.
pub fn stickers_changed(
    old: &HashMap<StickerId, Sticker>,
    new: &HashMap<StickerId, Sticker>,
) -> Vec<Notification> {
    let mut new_ids: Vec<StickerId> = new.keys().copied().collect();
    new_ids.sort();
    let mut old_ids: Vec<StickerId> = old.keys().copied().collect();
    old_ids.sort();

    let mut notifications = Vec::new();

    for id in &new_ids {
        if !old.contains_key(id) {
            notifications.push(sticker_created(&new[id]));
        }
    }
    for id in &new_ids {
        let updated = old
            .get(id)
            .and_then(|before| sticker_updated(before, &new[id]));
        if let Some(notification) = updated {
            notifications.push(notification);
        }
    }
    for id in &old_ids {
        if !new.contains_key(id) {
            notifications.push(sticker_deleted(&old[id]));
        }
    }

    notifications
}
