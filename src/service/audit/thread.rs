use serenity::all::{ChannelId, GuildChannel};

use crate::{
    model::notification::{colour, Notification},
    util::format::UNKNOWN,
};

fn thread_summary(name: &str, id: ChannelId, parent: Option<&str>) -> String {
    format!(
        "**Thread Name:** {}\n**Thread ID:** {}\n**Thread Parent Channel:** {}",
        name,
        id,
        parent.unwrap_or(UNKNOWN)
    )
}

pub fn thread_created(thread: &GuildChannel, parent: Option<&str>) -> Notification {
    Notification::new(
        "Thread Created",
        thread_summary(&thread.name, thread.id, parent),
        colour::CREATED,
    )
}

/// Logs a thread update.
///
/// The gateway only sends thread updates when something about the thread changed, so
/// this always produces a notification. `old_name` is `None` when the previous state
/// was not cached.
pub fn thread_updated(
    old_name: Option<&str>,
    new: &GuildChannel,
    parent: Option<&str>,
) -> Notification {
    Notification::new(
        "Thread Updated",
        format!(
            "**Old Thread Name:** {}\n**New Thread Name:** {}\n**Thread ID:** {}\n**Thread Parent Channel:** {}",
            old_name.unwrap_or(UNKNOWN),
            new.name,
            new.id,
            parent.unwrap_or(UNKNOWN)
        ),
        colour::UPDATED,
    )
}

/// Logs a thread deletion; the name is only known if the thread was cached.
pub fn thread_deleted(name: Option<&str>, id: ChannelId, parent: Option<&str>) -> Notification {
    Notification::new(
        "Thread Deleted",
        thread_summary(name.unwrap_or(UNKNOWN), id, parent),
        colour::DELETED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{channel::PUBLIC_THREAD, create_test_channel};

    #[test]
    fn created_contains_name_id_and_parent() {
        let thread = create_test_channel(500, "bug-reports", PUBLIC_THREAD, Some(100));

        let notification = thread_created(&thread, Some("general"));

        assert_eq!(notification.title, "Thread Created");
        assert_eq!(
            notification.description,
            "**Thread Name:** bug-reports\n**Thread ID:** 500\n**Thread Parent Channel:** general"
        );
    }

    #[test]
    fn updated_with_uncached_old_state() {
        let thread = create_test_channel(500, "bugs", PUBLIC_THREAD, Some(100));

        let notification = thread_updated(None, &thread, None);

        assert_eq!(notification.colour, colour::UPDATED);
        assert!(notification.description.contains("**Old Thread Name:** Unknown"));
        assert!(notification.description.contains("**New Thread Name:** bugs"));
        assert!(notification.description.contains("**Thread Parent Channel:** Unknown"));
    }

    #[test]
    fn deleted_keeps_id_when_name_unknown() {
        let notification = thread_deleted(None, ChannelId::new(501), Some("general"));

        assert_eq!(notification.title, "Thread Deleted");
        assert!(notification.description.contains("**Thread Name:** Unknown"));
        assert!(notification.description.contains("**Thread ID:** 501"));
    }
}
