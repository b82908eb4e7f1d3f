//! Discord domain models.
//!
//! Request-scoped snapshots of the Discord objects the profile page needs. Each
//! model is converted from its Serenity counterpart at the data layer boundary so
//! the service layer never depends on Serenity's wire structures.

pub mod guild_member;
pub mod role;
pub mod user;

pub use guild_member::GuildMember;
pub use role::GuildRole;
pub use user::UserProfile;
