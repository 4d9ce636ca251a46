//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, Member, GuildChannel, etc.) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would deliver.
//!
//! Factories take the handful of fields a test usually cares about. Tests that need
//! to vary anything else mutate the returned struct directly, since every Serenity
//! model field is public.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `channel::create_test_overwrite` - Create channel PermissionOverwrite objects
//! - `emoji::create_test_emoji` - Create Serenity Emoji objects
//! - `sticker::create_test_sticker` - Create Serenity Sticker objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod emoji;
pub mod member;
pub mod message;
pub mod role;
pub mod sticker;
pub mod user;

/// Guild ID shared by every factory so that created objects belong together.
pub const TEST_GUILD_ID: u64 = 900000000000000000;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, create_test_overwrite};
pub use emoji::create_test_emoji;
pub use member::create_test_member;
pub use message::create_test_message;
pub use role::create_test_role;
pub use sticker::create_test_sticker;
pub use user::create_test_user;
