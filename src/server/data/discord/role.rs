use dioxus_logger::tracing;
use serenity::all::GuildId;

use crate::server::{data::discord::DiscordRepository, error::AppError, model::discord::GuildRole};

impl DiscordRepository<'_> {
    /// Fetches the guild's role catalog via `GET /guilds/{guild_id}/roles`.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildRole>)` - Every role in the guild, in Discord's order
    /// - `Err(AppError::DiscordErr)` - Transport or authorization failure
    pub async fn get_role_catalog(&self, guild_id: u64) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        tracing::debug!("Fetched {} roles for guild {}", roles.len(), guild_id);

        Ok(roles.into_iter().map(GuildRole::from_serenity).collect())
    }
}
