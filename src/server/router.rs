use axum::{routing::get, Router};

use crate::server::{controller::profile::get_profile, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/profile/{username}", get(get_profile))
}
