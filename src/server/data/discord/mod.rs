//! Discord REST data access.
//!
//! The profile pipeline reaches Discord only through the [`DiscordDirectory`] trait.
//! [`DiscordRepository`] implements it on top of Serenity's `Http` client; tests swap
//! in [`mock::MockDiscordDirectory`]. Repository methods return domain models,
//! converting Serenity structs at this boundary.
//!
//! Every method distinguishes "not found" (`Ok(None)` / empty) from upstream failure
//! (`Err`) so callers can log failures without changing what the user sees.

pub mod guild_member;
pub mod role;
pub mod user;

#[cfg(test)]
pub mod mock;

use serenity::http::Http;
use std::future::Future;

use crate::server::{
    error::AppError,
    model::discord::{GuildMember, GuildRole, UserProfile},
};

/// Read-only view of the Discord directory used to assemble profiles.
pub trait DiscordDirectory: Send + Sync {
    /// Searches guild members by username prefix and returns the first match.
    fn search_member(
        &self,
        guild_id: u64,
        query: &str,
    ) -> impl Future<Output = Result<Option<GuildMember>, AppError>> + Send;

    /// Fetches user details, `Ok(None)` when Discord answers 404.
    fn get_user(
        &self,
        user_id: u64,
    ) -> impl Future<Output = Result<Option<UserProfile>, AppError>> + Send;

    /// Fetches every role defined in the guild.
    fn get_guild_roles(
        &self,
        guild_id: u64,
    ) -> impl Future<Output = Result<Vec<GuildRole>, AppError>> + Send;
}

/// Repository for Discord REST lookups authorized with the bot token.
pub struct DiscordRepository<'a> {
    /// Serenity HTTP client carrying the bot credential.
    http: &'a Http,
}

impl<'a> DiscordRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client authorized with the bot token
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }
}

impl DiscordDirectory for DiscordRepository<'_> {
    async fn search_member(
        &self,
        guild_id: u64,
        query: &str,
    ) -> Result<Option<GuildMember>, AppError> {
        self.search_first_member(guild_id, query).await
    }

    async fn get_user(&self, user_id: u64) -> Result<Option<UserProfile>, AppError> {
        self.get_user_profile(user_id).await
    }

    async fn get_guild_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, AppError> {
        self.get_role_catalog(guild_id).await
    }
}

/// Returns true when Serenity reports a Discord 404 response.
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => {
            http_err.status_code().map(|status| status.as_u16()) == Some(404)
        }
        _ => false,
    }
}
