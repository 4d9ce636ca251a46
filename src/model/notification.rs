//! Audit notification model.
//!
//! A `Notification` is the formatted summary of one gateway event. Audit functions
//! produce them from entity snapshots; the log channel turns each into one embed.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::util::format::truncate_description;

/// Embed accent colours shared by every audit notification.
pub mod colour {
    /// Something was created or added.
    pub const CREATED: u32 = 0x2ecc71;
    /// Something was deleted or removed.
    pub const DELETED: u32 = 0xe74c3c;
    /// Something was changed.
    pub const UPDATED: u32 = 0xf39c12;
    /// Informational events (joins, nickname changes, integrations).
    pub const INFO: u32 = 0x3498db;
    pub const BOOST: u32 = 0xf1c40f;
    pub const AVATAR: u32 = 0x9b59b6;
    pub const TIMEOUT: u32 = 0xe67e22;
}

/// One formatted audit log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub colour: u32,
    /// Image URL shown large at the bottom of the embed.
    pub image: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            colour,
            image: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Builds the embed posted to the log channel.
    ///
    /// The description is truncated to Discord's embed description limit, the current
    /// time is attached as embed timestamp and the footer names the bot.
    ///
    /// # Arguments
    /// - `footer_name` - Bot username shown in the footer
    /// - `footer_icon` - Bot avatar URL shown next to the footer text
    pub fn to_embed(&self, footer_name: &str, footer_icon: &str) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(&self.title)
            .description(truncate_description(&self.description))
            .color(self.colour)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new(footer_name).icon_url(footer_icon));

        if let Some(image) = &self.image {
            embed = embed.image(image);
        }

        embed
    }
}
