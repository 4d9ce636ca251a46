//! Member audit notifications.
//!
//! Unlike the other update events, a member update is split into one notification per
//! kind of change (each role added or removed, nickname, boost, avatar, timeout), so that
//! moderators can scan the log channel by embed title.

use std::collections::HashMap;

use serenity::all::{Member, Mentionable, Role, RoleId, Timestamp, User};

use crate::{
    model::notification::{colour, Notification},
    util::format::{or_none, relative_time, UNKNOWN},
};

fn joined(member: &Member) -> String {
    member
        .joined_at
        .map(relative_time)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn member_heading(member: &Member) -> String {
    format!("**Member:** {} (`{}`)", member.user.id.mention(), member.user.id)
}

/// Names of the member's roles in the order Discord lists them.
fn role_list(member: &Member, roles: &HashMap<RoleId, Role>) -> String {
    let names: Vec<&str> = member
        .roles
        .iter()
        .filter_map(|id| roles.get(id).map(|role| role.name.as_str()))
        .collect();

    or_none(Some(&names.join(", "))).to_string()
}

pub fn member_joined(member: &Member) -> Notification {
    Notification::new(
        "Member Joined",
        format!(
            "{}\n**Username:** {}\n**Account Creation Date:** {}\n**Server Join Date:** {}",
            member_heading(member),
            member.user.tag(),
            relative_time(member.user.id.created_at()),
            joined(member)
        ),
        colour::INFO,
    )
}

/// Logs a member leaving; `left_at` is the time the event was received.
pub fn member_left(user: &User, left_at: Timestamp) -> Notification {
    Notification::new(
        "Member Left",
        format!(
            "**Member:** {} (`{}`)\n**Username:** {}\n**Account Creation Date:** {}\n**Server Leave Date:** {}",
            user.id.mention(),
            user.id,
            user.tag(),
            relative_time(user.id.created_at()),
            relative_time(left_at)
        ),
        colour::DELETED,
    )
}

/// Compares two snapshots of a member.
///
/// # Arguments
/// - `old` / `new` - Member before and after the update
/// - `roles` - The guild's roles, used to name the member's roles
///
/// # Returns
/// One notification per detected change, in this order: roles added, roles removed,
/// nickname, boost, avatar, timeout. Empty when nothing tracked changed.
pub fn member_updated(
    old: &Member,
    new: &Member,
    roles: &HashMap<RoleId, Role>,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    let current_roles = role_list(new, roles);
    let role_change = |title: &str, role_id: &RoleId, accent: u32| {
        Notification::new(
            title,
            format!(
                "{}\n**Role:** {} (`{}`)\n\n**Username:** {} (`{}`)\n**Account Creation Date:** {}\n**Server Join Date:** {}\n**Current Roles:** {}",
                member_heading(new),
                role_id.mention(),
                role_id,
                new.user.tag(),
                new.user.id,
                relative_time(new.user.id.created_at()),
                joined(new),
                current_roles
            ),
            accent,
        )
    };

    for role_id in new.roles.iter().filter(|id| !old.roles.contains(*id)) {
        notifications.push(role_change("Role Added", role_id, colour::CREATED));
    }

    for role_id in old.roles.iter().filter(|id| !new.roles.contains(*id)) {
        notifications.push(role_change("Role Removed", role_id, colour::DELETED));
    }

    if old.nick != new.nick {
        notifications.push(Notification::new(
            "Nickname Updated",
            format!(
                "{}\n**Old Nickname:** {}\n**New Nickname:** {}",
                member_heading(new),
                or_none(old.nick.as_deref()),
                or_none(new.nick.as_deref())
            ),
            colour::INFO,
        ));
    }

    match (old.premium_since, new.premium_since) {
        (None, Some(_)) => notifications.push(Notification::new(
            "Member Boosted",
            format!("{} has started boosting the server.", member_heading(new)),
            colour::BOOST,
        )),
        (Some(_), None) => notifications.push(Notification::new(
            "Boost Removed",
            format!("{} has stopped boosting the server.", member_heading(new)),
            colour::DELETED,
        )),
        _ => {}
    }

    if old.avatar != new.avatar {
        notifications.push(
            Notification::new(
                "Avatar Updated",
                format!("{} updated their avatar.", member_heading(new)),
                colour::AVATAR,
            )
            .with_image(new.face()),
        );
    }

    if old.communication_disabled_until != new.communication_disabled_until {
        notifications.push(Notification::new(
            "Timeout Updated",
            format!(
                "{}\n**Timeout Until:** {}",
                member_heading(new),
                new.communication_disabled_until
                    .map(relative_time)
                    .unwrap_or_else(|| "None".to_string())
            ),
            colour::TIMEOUT,
        ));
    }

    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_member, create_test_role, create_test_user};

    const ROLE_A: u64 = 111;
    const ROLE_B: u64 = 222;
    const ROLE_C: u64 = 333;

    fn guild_roles() -> HashMap<RoleId, Role> {
        [
            create_test_role(ROLE_A, "Alpha", 0, 1),
            create_test_role(ROLE_B, "Beta", 0, 2),
            create_test_role(ROLE_C, "Gamma", 0, 3),
        ]
        .into_iter()
        .map(|role| (role.id, role))
        .collect()
    }

    #[test]
    fn joined_contains_mention_id_and_tag() {
        let member = create_test_member(1, "alice", None, &[]);

        let notification = member_joined(&member);

        assert_eq!(notification.title, "Member Joined");
        assert!(notification.description.starts_with("**Member:** <@1> (`1`)"));
        assert!(notification.description.contains("**Username:** alice"));
        assert!(notification.description.contains("**Server Join Date:** <t:1609459200:R>"));
    }

    #[test]
    fn left_uses_leave_time() {
        let user = create_test_user(1, "alice");
        let left_at = Timestamp::from_unix_timestamp(1_700_000_000).unwrap();

        let notification = member_left(&user, left_at);

        assert_eq!(notification.title, "Member Left");
        assert!(notification.description.contains("**Server Leave Date:** <t:1700000000:R>"));
    }

    /// Tests that an update without tracked changes is silent.
    ///
    /// Expected: empty list
    #[test]
    fn unchanged_member_sends_nothing() {
        let member = create_test_member(1, "alice", Some("Al"), &[ROLE_A]);

        assert!(member_updated(&member, &member.clone(), &guild_roles()).is_empty());
    }

    /// Tests role set changes {A, B} -> {B, C}.
    ///
    /// Expected: exactly two notifications, "Role Added" for C and "Role Removed" for A
    #[test]
    fn role_changes_send_one_notification_per_role() {
        let old = create_test_member(1, "alice", None, &[ROLE_A, ROLE_B]);
        let new = create_test_member(1, "alice", None, &[ROLE_B, ROLE_C]);

        let notifications = member_updated(&old, &new, &guild_roles());

        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].title, "Role Added");
        assert!(notifications[0].description.contains("**Role:** <@&333> (`333`)"));
        assert_eq!(notifications[1].title, "Role Removed");
        assert!(notifications[1].description.contains("**Role:** <@&111> (`111`)"));
        assert!(notifications[1].description.ends_with("**Current Roles:** Beta, Gamma"));
    }

    #[test]
    fn nickname_change_is_logged() {
        let old = create_test_member(1, "alice", None, &[]);
        let new = create_test_member(1, "alice", Some("Al"), &[]);

        let notifications = member_updated(&old, &new, &guild_roles());

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Nickname Updated");
        assert!(notifications[0]
            .description
            .ends_with("**Old Nickname:** None\n**New Nickname:** Al"));
    }

    #[test]
    fn boost_start_and_stop_are_logged() {
        let old = create_test_member(1, "alice", None, &[]);
        let mut new = old.clone();
        new.premium_since = Some(Timestamp::from_unix_timestamp(1_700_000_000).unwrap());

        let started = member_updated(&old, &new, &guild_roles());
        let stopped = member_updated(&new, &old, &guild_roles());

        assert_eq!(started.len(), 1);
        assert_eq!(started[0].title, "Member Boosted");
        assert_eq!(stopped.len(), 1);
        assert_eq!(stopped[0].title, "Boost Removed");
    }

    #[test]
    fn timeout_change_is_logged() {
        let old = create_test_member(1, "alice", None, &[]);
        let mut new = old.clone();
        new.communication_disabled_until =
            Some(Timestamp::from_unix_timestamp(1_700_000_000).unwrap());

        let notifications = member_updated(&old, &new, &guild_roles());

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Timeout Updated");
        assert!(notifications[0]
            .description
            .ends_with("**Timeout Until:** <t:1700000000:R>"));
    }
}
