//! Message audit notifications.
//!
//! Deletion events only carry IDs, so content and author come from the message cache
//! and fall back to `Unknown` for messages the bot never saw.

use serenity::all::{ChannelId, Mentionable, Message, MessageId};

use crate::{
    model::notification::{colour, Notification},
    util::format::UNKNOWN,
};

/// Logs a single deleted message.
///
/// # Arguments
/// - `channel_id` - Channel the message was deleted from
/// - `message_id` - ID of the deleted message
/// - `cached` - The message as last seen in the cache, if it was cached
pub fn message_deleted(
    channel_id: ChannelId,
    message_id: MessageId,
    cached: Option<&Message>,
) -> Notification {
    let (content, author) = match cached {
        Some(message) => (
            message.content.clone(),
            message.author.id.mention().to_string(),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    Notification::new(
        "Message Deleted",
        format!(
            "**Message ID:** {}\n**Content:** {}\n**Channel:** {}\n**Author:** {}",
            message_id,
            content,
            channel_id.mention(),
            author
        ),
        colour::DELETED,
    )
}

/// Logs a bulk deletion, one line per message.
///
/// # Arguments
/// - `messages` - Deleted message IDs paired with their cached content, if any
pub fn messages_bulk_deleted(messages: &[(MessageId, Option<String>)]) -> Notification {
    let lines: Vec<String> = messages
        .iter()
        .map(|(id, content)| {
            format!(
                "ID: {}, Content: {}",
                id,
                content.as_deref().unwrap_or(UNKNOWN)
            )
        })
        .collect();

    Notification::new(
        "Bulk Message Delete",
        format!(
            "**Number of Messages:** {}\n\n{}",
            messages.len(),
            lines.join("\n")
        ),
        colour::DELETED,
    )
}

fn pinned_status(message: &Message) -> &'static str {
    if message.pinned {
        "Pinned"
    } else {
        "Unpinned"
    }
}

/// Compares two snapshots of a message.
///
/// Tracks content and pinned state. Embeds being attached to a link (which Discord
/// reports as a message update) do not produce a notification. Without an old snapshot
/// the edit is still logged, with the old content shown as `Unknown`.
pub fn message_updated(old: Option<&Message>, new: &Message) -> Option<Notification> {
    let old_content = match old {
        Some(old) if old.content == new.content && old.pinned == new.pinned => return None,
        Some(old) => old.content.as_str(),
        None => UNKNOWN,
    };

    Some(Notification::new(
        "Message Updated",
        format!(
            "**Old Message Content:** {}\n**New Message Content:** {}\n**Pinned Status:** {}\n**Channel:** {}\n**Author:** {}",
            old_content,
            new.content,
            pinned_status(new),
            new.channel_id.mention(),
            new.author.id.mention()
        ),
        colour::UPDATED,
    ))
}
