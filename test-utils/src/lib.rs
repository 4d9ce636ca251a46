//! Auditboard Test Utils
//!
//! Provides shared testing utilities for the auditboard bot. Audit formatting works on
//! plain Serenity model values, so tests need realistic `Role`, `Member`, `GuildChannel`
//! and friends without a gateway connection. The factories in [`serenity`] build those
//! values by deserializing JSON shaped like Discord's API payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn role_added() {
//!     let role = create_test_role(111, "Admin", 0xFF0000, 10);
//!     let old = create_test_member(1, "alice", None, &[]);
//!     let new = create_test_member(1, "alice", None, &[111]);
//!     // Feed into the audit functions...
//! }
//! ```

pub mod serenity;
