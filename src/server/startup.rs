use serenity::http::Http;
use std::sync::Arc;

use crate::server::config::Config;

/// Builds the Discord REST client used for every profile lookup.
///
/// Serenity's `Http` prefixes the token with `Bot ` and targets the versioned
/// Discord API base, so the pipeline only deals with typed endpoints. The client
/// keeps its own connection pool and is shared across requests through `AppState`.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
///
/// # Returns
/// - `Arc<Http>` - Shared Discord HTTP client
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}
