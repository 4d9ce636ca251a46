//! Permission rendering and channel permission overwrite diffing.

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions};

/// Renders a permission set as a comma separated list of human readable names.
///
/// Returns an empty string for an empty set; callers decide how to show that.
pub fn permission_names(permissions: Permissions) -> String {
    permissions.get_permission_names().join(", ")
}

/// Allow and deny lists of a single overwrite, as shown in channel update logs.
pub fn overwrite_details(overwrite: &PermissionOverwrite) -> String {
    format!(
        "**Allow:** [{}]\n\n**Deny:** [{}]",
        permission_names(overwrite.allow),
        permission_names(overwrite.deny)
    )
}

/// Role or user ID an overwrite targets.
fn overwrite_target(kind: &PermissionOverwriteType) -> Option<u64> {
    match kind {
        PermissionOverwriteType::Member(user_id) => Some(user_id.get()),
        PermissionOverwriteType::Role(role_id) => Some(role_id.get()),
        _ => None,
    }
}

/// Compares two overwrite sets keyed by target ID.
///
/// Emits, in this order, one line per overwrite of `new` that is absent from `old`
/// ("Added") or whose allow or deny set differs ("Updated"), then one line per
/// overwrite of `old` whose target no longer appears in `new` ("Removed").
/// Overwrites of unknown target kinds are ignored.
pub fn diff_overwrites(old: &[PermissionOverwrite], new: &[PermissionOverwrite]) -> Vec<String> {
    let find = |set: &[PermissionOverwrite], target: u64| {
        set.iter()
            .find(|o| overwrite_target(&o.kind) == Some(target))
            .cloned()
    };

    let mut changes = Vec::new();

    for new_overwrite in new {
        let Some(target) = overwrite_target(&new_overwrite.kind) else {
            continue;
        };

        match find(old, target) {
            None => changes.push(format!(
                "**Added Overwrite:** `{}` - {}",
                target,
                overwrite_details(new_overwrite)
            )),
            Some(old_overwrite)
                if old_overwrite.allow != new_overwrite.allow
                    || old_overwrite.deny != new_overwrite.deny =>
            {
                changes.push(format!(
                    "**Updated Overwrite:** `{}` - {}",
                    target,
                    overwrite_details(new_overwrite)
                ))
            }
            Some(_) => {}
        }
    }

    for old_overwrite in old {
        let Some(target) = overwrite_target(&old_overwrite.kind) else {
            continue;
        };

        if find(new, target).is_none() {
            changes.push(format!("**Removed Overwrite:** `{}`", target));
        }
    }

    changes
}
