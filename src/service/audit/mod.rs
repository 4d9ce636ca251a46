//! Audit notification formatting.
//!
//! Every function in this module is pure: it takes entity snapshots (plus whatever the
//! caller resolved from the cache, such as category or role names) and returns the
//! notifications to post. Created and deleted events always yield a notification;
//! updated events yield one only when a tracked field differs between the old and new
//! snapshot. Keeping gateway and HTTP access out of here lets the formatting be tested
//! against plain Serenity model values.

pub mod channel;
pub mod emoji;
pub mod guild;
pub mod member;
pub mod message;
pub mod permission;
pub mod reaction;
pub mod role;
pub mod sticker;
pub mod thread;
