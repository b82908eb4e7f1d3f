//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Member, User, Role) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return from the member search, user and role endpoints.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn test_role_merge() {
//!     let member = create_test_member(123456789, "abc", Some("0001"), None, &[111111111]);
//!     let admin_role = create_test_role(111111111, "Admin", 0xFF0000, None);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod member;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;

/// Pads an image hash to Discord's 32 character hex format.
///
/// Animated hashes keep their `a_` prefix and are padded to 34 characters.
/// Serenity rejects hashes that are not valid hex of the expected length, so
/// short test values like `"abc123"` become `"abc12300000000000000000000000000"`.
pub fn pad_image_hash(hash: &str) -> String {
    if hash.starts_with("a_") {
        format!("{:0<34}", hash)
    } else {
        format!("{:0<32}", hash)
    }
}
