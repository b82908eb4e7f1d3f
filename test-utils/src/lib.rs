//! Profile Card Test Utils
//!
//! Provides shared testing utilities for the profile card application. Tests of the
//! Discord boundary need Serenity model objects shaped exactly like the ones Discord's
//! REST API returns; this crate builds them from JSON so tests never touch the network.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role, create_test_user};
//!
//! #[test]
//! fn converts_member() {
//!     let member = create_test_member(111, "abc", Some("0001"), Some("a1b2"), &[222]);
//!     let role = create_test_role(222, "Moderator", 0x3498db, Some("🛡️"));
//!     let user = create_test_user(111, "abc", Some("Abc Person"), None, 64);
//!     // Convert into domain models...
//! }
//! ```

pub mod serenity;
