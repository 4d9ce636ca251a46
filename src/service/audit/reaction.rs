use serenity::all::{Mentionable, Message, ReactionType};

use crate::model::notification::{colour, Notification};

fn same_emoji(a: &ReactionType, b: &ReactionType) -> bool {
    match (a, b) {
        (ReactionType::Custom { id: a, .. }, ReactionType::Custom { id: b, .. }) => a == b,
        (ReactionType::Unicode(a), ReactionType::Unicode(b)) => a == b,
        _ => false,
    }
}

/// How many reactions of `emoji` the message currently carries.
pub fn remaining_count(message: &Message, emoji: &ReactionType) -> u64 {
    message
        .reactions
        .iter()
        .find(|reaction| same_emoji(&reaction.reaction_type, emoji))
        .map(|reaction| reaction.count)
        .unwrap_or(0)
}

fn reaction_summary(message: &Message, emoji: &ReactionType) -> String {
    format!(
        "**Message ID:** {}\n**Content:** {}\n**Channel:** {}\n**Author:** {}\n**Reaction Emoji:** {}",
        message.id,
        message.content,
        message.channel_id.mention(),
        message.author.id.mention(),
        emoji
    )
}

pub fn reaction_added(message: &Message, emoji: &ReactionType) -> Notification {
    Notification::new(
        "Message Reaction Added",
        reaction_summary(message, emoji),
        colour::CREATED,
    )
}

/// Logs a removed reaction once the last reaction of that emoji is gone.
///
/// `message` must reflect the state after the removal.
///
/// # Returns
/// - `Some(Notification)` - No reaction of `emoji` remains on the message
/// - `None` - Other users still carry the reaction
pub fn reaction_removed(message: &Message, emoji: &ReactionType) -> Option<Notification> {
    if remaining_count(message, emoji) != 0 {
        return None;
    }

    Some(Notification::new(
        "Message Reaction Removed",
        reaction_summary(message, emoji),
        colour::DELETED,
    ))
}
