//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources
//! needed to assemble profiles. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! Nothing in the state is mutable; every profile request allocates its own
//! member, user and role data and discards it when the response is sent.

use serenity::http::Http;
use std::sync::Arc;

/// Application state containing shared resources and configuration.
///
/// All fields use cheap-to-clone types:
/// - `Arc<Http>` is a reference-counted pointer
/// - `u64` is `Copy`
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Discord HTTP client authorized with the bot token.
    pub discord_http: Arc<Http>,

    /// Guild whose members are searched.
    pub guild_id: u64,

    /// Base URL of Discord's image CDN for avatar and banner links.
    pub cdn_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `discord_http` - Discord HTTP client for REST calls
    /// - `guild_id` - Guild whose members are searched
    /// - `cdn_url` - Base URL of Discord's image CDN
    pub fn new(discord_http: Arc<Http>, guild_id: u64, cdn_url: String) -> Self {
        Self {
            discord_http,
            guild_id,
            cdn_url,
        }
    }
}
