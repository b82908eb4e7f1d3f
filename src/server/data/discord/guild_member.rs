use dioxus_logger::tracing;
use serenity::all::GuildId;

use crate::server::{
    data::discord::DiscordRepository, error::AppError, model::discord::GuildMember,
};

impl DiscordRepository<'_> {
    /// Searches guild members whose username or nickname starts with `query`.
    ///
    /// Calls `GET /guilds/{guild_id}/members/search` with a limit of one, since only
    /// the first match is displayed.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to search, must be non-zero
    /// - `query` - Username query taken verbatim from the request path
    ///
    /// # Returns
    /// - `Ok(Some(GuildMember))` - First matching member
    /// - `Ok(None)` - No member matched
    /// - `Err(AppError::DiscordErr)` - Transport or authorization failure
    pub async fn search_first_member(
        &self,
        guild_id: u64,
        query: &str,
    ) -> Result<Option<GuildMember>, AppError> {
        let members = self
            .http
            .search_guild_members(GuildId::new(guild_id), query, Some(1))
            .await?;

        tracing::debug!(
            "Member search for {:?} in guild {} returned {} result(s)",
            query,
            guild_id,
            members.len()
        );

        Ok(members.into_iter().next().map(GuildMember::from_serenity))
    }
}
