use serenity::all::GuildId;

use crate::{
    model::notification::{colour, Notification},
    util::format::UNKNOWN,
};

/// Logs that a guild's integrations (bots, webhooks, linked services) changed.
///
/// Discord does not say what changed, only which guild.
pub fn integrations_updated(guild_id: GuildId, guild_name: Option<&str>) -> Notification {
    Notification::new(
        "Guild Integrations Updated",
        format!(
            "**Guild:** {} (`{}`)",
            guild_name.unwrap_or(UNKNOWN),
            guild_id
        ),
        colour::INFO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_guild_name_and_id() {
        let notification = integrations_updated(GuildId::new(900), Some("Test Guild"));

        assert_eq!(notification.title, "Guild Integrations Updated");
        assert_eq!(notification.description, "**Guild:** Test Guild (`900`)");
        assert_eq!(notification.colour, colour::INFO);
    }
}
