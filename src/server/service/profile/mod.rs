//! Member profile assembly pipeline.
//!
//! Resolves a username to a guild member, then fetches the member's user details
//! and the guild role catalog concurrently, and finally decodes badges and merges
//! roles into a [`MemberProfile`].

use dioxus_logger::tracing;

use crate::server::{
    data::discord::DiscordDirectory, error::AppError, model::profile::MemberProfile,
};

#[cfg(test)]
mod test;

pub struct ProfileService<'a, D: DiscordDirectory> {
    directory: &'a D,
    guild_id: u64,
}

impl<'a, D: DiscordDirectory> ProfileService<'a, D> {
    pub fn new(directory: &'a D, guild_id: u64) -> Self {
        Self {
            directory,
            guild_id,
        }
    }

    /// Builds the profile of the first guild member matching `username`.
    ///
    /// No user or role lookup is made when the search finds nobody. The user and
    /// role lookups do not depend on each other and run concurrently.
    ///
    /// # Arguments
    /// - `username` - Search query, passed to Discord unvalidated
    ///
    /// # Returns
    /// - `Ok(Some(MemberProfile))` - Member found and fully assembled
    /// - `Ok(None)` - No matching member, or the matched user no longer exists
    /// - `Err(AppError)` - Discord request failed
    pub async fn get_profile(&self, username: &str) -> Result<Option<MemberProfile>, AppError> {
        let Some(member) = self
            .directory
            .search_member(self.guild_id, username)
            .await?
        else {
            tracing::warn!("No member matching {:?} in guild {}", username, self.guild_id);
            return Ok(None);
        };

        let (user, catalog) = tokio::join!(
            self.directory.get_user(member.user_id),
            self.directory.get_guild_roles(self.guild_id)
        );

        let Some(user) = user? else {
            tracing::warn!("Member {} matched but user lookup found nothing", member.user_id);
            return Ok(None);
        };
        let catalog = catalog?;

        let profile = MemberProfile::assemble(member, user, &catalog);

        tracing::debug!(
            "Assembled profile for {} with {} badge(s) and {} role(s)",
            profile.member.user_id,
            profile.badges.len(),
            profile.roles.len()
        );

        Ok(Some(profile))
    }
}
