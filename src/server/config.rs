use crate::server::error::{config::ConfigError, AppError};

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

pub struct Config {
    pub discord_bot_token: String,
    pub discord_guild_id: u64,

    pub discord_cdn_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;
        let discord_guild_id = std::env::var("DISCORD_GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_GUILD_ID".to_string()))?;

        Ok(Self {
            discord_bot_token,
            discord_guild_id: parse_guild_id(&discord_guild_id)?,
            discord_cdn_url: DISCORD_CDN_URL.to_string(),
        })
    }
}

/// Parses a guild snowflake, rejecting zero since Discord never issues it.
fn parse_guild_id(value: &str) -> Result<u64, ConfigError> {
    let guild_id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "DISCORD_GUILD_ID".to_string(),
            reason: e.to_string(),
        })?;

    if guild_id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: "DISCORD_GUILD_ID".to_string(),
            reason: "guild id must be non-zero".to_string(),
        });
    }

    Ok(guild_id)
}
