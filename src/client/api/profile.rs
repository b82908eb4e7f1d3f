use url::Url;

use crate::{client::model::error::ApiError, model::profile::ProfileDto};

use super::helper::{get, parse_response, send_request};

/// Only used to percent-encode the username as a single path segment.
const PROFILE_API_BASE: &str = "http://localhost/api/profile";

/// Get the profile of the first guild member matching `username`
pub async fn get_profile(username: &str) -> Result<ProfileDto, ApiError> {
    let url = profile_path(username)?;

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Builds `/api/profile/{username}` with `/`, `?`, `#` and spaces in the username escaped.
fn profile_path(username: &str) -> Result<String, ApiError> {
    let invalid = |e: String| ApiError {
        status: 500,
        message: format!("Failed to build profile URL: {}", e),
    };

    let mut url = Url::parse(PROFILE_API_BASE).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("base URL cannot have path segments".to_string()))?
        .push(username);

    Ok(url.path().to_string())
}
