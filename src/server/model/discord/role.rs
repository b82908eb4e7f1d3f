//! Discord guild role domain model.
//!
//! Provides the domain model for roles in the guild's role catalog, keeping only
//! the display properties the profile page renders.

use serenity::all::Role;

/// Discord role within a guild with display properties.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub id: u64,
    /// Role display name.
    pub name: String,
    /// Role color as a 24-bit RGB integer. `0` means the role has no color.
    pub color: u32,
    /// Unicode emoji configured as the role icon.
    pub unicode_emoji: Option<String>,
}

impl GuildRole {
    /// Converts a Serenity role to a domain model at the data layer boundary.
    ///
    /// # Arguments
    /// - `role` - Role object from the guild role catalog
    ///
    /// # Returns
    /// - `GuildRole` - Domain model with the id unwrapped to u64
    pub fn from_serenity(role: Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name,
            color: role.colour.0,
            unicode_emoji: role.unicode_emoji,
        }
    }
}
