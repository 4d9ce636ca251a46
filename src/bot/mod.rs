//! Discord gateway client for the audit bot.
//!
//! The client receives guild events, turns each into notifications and posts them to
//! the configured log channel. Slash commands are answered through the same handler.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel, thread and role events
//! - `GUILD_MEMBERS` - Member joins, leaves and updates (privileged intent)
//! - `GUILD_MODERATION` - Moderation state of guild members
//! - `GUILD_EMOJIS_AND_STICKERS` - Emoji and sticker updates
//! - `GUILD_INTEGRATIONS` - Integration updates
//! - `GUILD_MESSAGES` - Message edits and deletions
//! - `GUILD_MESSAGE_REACTIONS` - Reactions being added and removed
//! - `MESSAGE_CONTENT` - Message content for edit and deletion logs (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
