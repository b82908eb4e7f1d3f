use crate::server::{
    data::discord::mock::{DirectoryCall, FailingEndpoint, MockDiscordDirectory},
    error::AppError,
    model::discord::{GuildMember, GuildRole, UserProfile},
    service::profile::ProfileService,
};

mod get_profile;

const GUILD_ID: u64 = 900000000000000001;
const USER_ID: u64 = 123456789;

fn test_member(role_ids: Vec<u64>) -> GuildMember {
    GuildMember {
        user_id: USER_ID,
        username: "abc".to_string(),
        discriminator: "0001".to_string(),
        avatar_hash: Some("a1b2c3".to_string()),
        role_ids,
    }
}

fn test_user(global_name: Option<&str>, public_flags: u64) -> UserProfile {
    UserProfile {
        id: USER_ID,
        username: "abc".to_string(),
        global_name: global_name.map(str::to_string),
        banner_hash: None,
        public_flags,
    }
}

fn test_role(id: u64, name: &str, color: u32) -> GuildRole {
    GuildRole {
        id,
        name: name.to_string(),
        color,
        unicode_emoji: None,
    }
}
