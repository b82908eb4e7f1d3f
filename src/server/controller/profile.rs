use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::profile::ProfileDto,
    server::{
        data::discord::{DiscordDirectory, DiscordRepository},
        error::AppError,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// GET /api/profile/{username} - Get the profile of the first guild member matching `username`
///
/// Searches the configured guild for the username, then returns the member's
/// avatar, banner, display name, badges and roles. No authentication is required.
///
/// # Path Parameters
/// - `username`: Member search query, forwarded to Discord unvalidated
///
/// # Returns
/// - `200 OK`: JSON ProfileDto
/// - `404 Not Found`: No member matched the query
/// - `500 Internal Server Error`: Discord request failed (details logged only)
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Profile requested for {:?}", username);

    let directory = DiscordRepository::new(&state.discord_http);
    let profile = profile_dto(&directory, state.guild_id, &state.cdn_url, &username).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Resolves `username` against any directory and renders the response DTO.
///
/// # Returns
/// - `Ok(ProfileDto)`: Member found and fully resolved
/// - `Err(AppError::NotFound)`: No member or user matched the query
/// - `Err(AppError::DiscordErr)`: An upstream lookup failed
pub async fn profile_dto<D: DiscordDirectory>(
    directory: &D,
    guild_id: u64,
    cdn_url: &str,
    username: &str,
) -> Result<ProfileDto, AppError> {
    let profile_service = ProfileService::new(directory, guild_id);

    let Some(profile) = profile_service.get_profile(username).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok(profile.into_dto(cdn_url))
}
