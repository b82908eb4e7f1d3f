use dioxus_logger::tracing;
use serenity::all::UserId;

use crate::server::{
    data::discord::{is_not_found, DiscordRepository},
    error::AppError,
    model::discord::UserProfile,
};

impl DiscordRepository<'_> {
    /// Fetches a user's banner, flags and global display name via `GET /users/{user_id}`.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found
    /// - `Ok(None)` - Discord answered 404
    /// - `Err(AppError::DiscordErr)` - Any other failure
    pub async fn get_user_profile(&self, user_id: u64) -> Result<Option<UserProfile>, AppError> {
        match self.http.get_user(UserId::new(user_id)).await {
            Ok(user) => Ok(Some(UserProfile::from_serenity(user))),
            Err(e) if is_not_found(&e) => {
                tracing::debug!("User {} not found", user_id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
