//! Role audit notifications.

use serenity::all::{Mentionable, Role, RoleId};

use crate::{
    model::notification::{colour, Notification},
    service::audit::permission::permission_names,
    util::format::or_none,
};

fn hex(role: &Role) -> String {
    format!("{:x}", role.colour.0)
}

fn role_details(role: &Role) -> String {
    format!(
        "**Color:** `{}`\n**Permissions:** {}\n**Hoist:** `{}`\n**Mentionable:** `{}`",
        hex(role),
        or_none(Some(&permission_names(role.permissions))),
        role.hoist,
        role.mentionable
    )
}

pub fn role_created(role: &Role) -> Notification {
    Notification::new(
        "Role Created",
        format!(
            "**Role:** {} (`{}`)\n**Name:** `{}`\n{}",
            role.id.mention(),
            role.id,
            role.name,
            role_details(role)
        ),
        colour::CREATED,
    )
}

/// Logs a role deletion.
///
/// Discord only sends the deleted role's ID; the details are shown when the role was
/// still in the cache.
pub fn role_deleted(role_id: RoleId, role: Option<&Role>) -> Notification {
    let description = match role {
        Some(role) => format!(
            "**Role:** `{}` (`{}`)\n{}",
            role.name,
            role_id,
            role_details(role)
        ),
        None => format!("**Role:** `{}`", role_id),
    };

    Notification::new("Role Deleted", description, colour::DELETED)
}

/// Compares two snapshots of a role.
///
/// Tracks name, colour, permissions, hoist and mentionable.
pub fn role_updated(old: &Role, new: &Role) -> Option<Notification> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(format!("**Name:** `{}` -> `{}`", old.name, new.name));
    }
    if old.colour != new.colour {
        changes.push(format!("**Color:** `{}` -> `{}`", hex(old), hex(new)));
    }
    if old.permissions != new.permissions {
        changes.push(format!(
            "**Permissions:** `{}` -> `{}`",
            permission_names(old.permissions),
            permission_names(new.permissions)
        ));
    }
    if old.hoist != new.hoist {
        changes.push(format!("**Hoist:** `{}` -> `{}`", old.hoist, new.hoist));
    }
    if old.mentionable != new.mentionable {
        changes.push(format!(
            "**Mentionable:** `{}` -> `{}`",
            old.mentionable, new.mentionable
        ));
    }

    if changes.is_empty() {
        return None;
    }

    Some(Notification::new(
        "Role Updated",
        format!(
            "**Role:** {} (`{}`)\n{}",
            new.id.mention(),
            new.id,
            changes.join("\n")
        ),
        colour::UPDATED,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::Permissions;
    use test_utils::serenity::{create_test_role, role::create_test_role_with_permissions};

    /// Tests the created template.
    ///
    /// Expected: one notification with mention, ID, name, hex colour and "None" permissions
    #[test]
    fn created_contains_name_and_id() {
        let role = create_test_role(111, "Moderator", 0x00ff00, 3);

        let notification = role_created(&role);

        assert_eq!(notification.title, "Role Created");
        assert!(notification.description.starts_with("**Role:** <@&111> (`111`)"));
        assert!(notification.description.contains("**Name:** `Moderator`"));
        assert!(notification.description.contains("**Color:** `ff00`"));
        assert!(notification.description.contains("**Permissions:** None"));
    }

    #[test]
    fn deleted_uncached_role_shows_only_id() {
        let notification = role_deleted(RoleId::new(222), None);

        assert_eq!(notification.description, "**Role:** `222`");
        assert_eq!(notification.colour, colour::DELETED);
    }

    #[test]
    fn deleted_cached_role_shows_details() {
        let role = create_test_role_with_permissions(222, "Muted", 0, 1, 1 << 11);

        let notification = role_deleted(role.id, Some(&role));

        assert!(notification.description.starts_with("**Role:** `Muted` (`222`)"));
        assert!(notification
            .description
            .contains(&permission_names(Permissions::SEND_MESSAGES)));
    }

    /// Tests that an update without tracked changes is silent.
    ///
    /// Expected: None when only the position moved
    #[test]
    fn unchanged_role_sends_nothing() {
        let old = create_test_role(111, "Moderator", 0x00ff00, 3);
        let new = create_test_role(111, "Moderator", 0x00ff00, 4);

        assert!(role_updated(&old, &new).is_none());
    }

    #[test]
    fn lists_each_changed_field() {
        let old = create_test_role(111, "Moderator", 0x00ff00, 3);
        let mut new = create_test_role_with_permissions(111, "Mods", 0xff0000, 3, 1 << 11);
        new.hoist = true;
        new.mentionable = true;

        let notification = role_updated(&old, &new).unwrap();
        let lines: Vec<&str> = notification.description.lines().collect();

        assert_eq!(lines[0], "**Role:** <@&111> (`111`)");
        assert_eq!(lines[1], "**Name:** `Moderator` -> `Mods`");
        assert_eq!(lines[2], "**Color:** `ff00` -> `ff0000`");
        assert!(lines[3].starts_with("**Permissions:** `` -> `"));
        assert_eq!(lines[4], "**Hoist:** `false` -> `true`");
        assert_eq!(lines[5], "**Mentionable:** `false` -> `true`");
    }
}
