//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::pad_image_hash;

/// Creates a test Serenity Member shaped like a guild member search result.
///
/// The nested user object carries the username, discriminator and avatar hash;
/// the member itself carries the ordered role id list. Guild-specific fields
/// (nickname, boost date, timeout) are left empty.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `discriminator` - Legacy 4 digit tag, `None` for migrated accounts
/// - `avatar_hash` - Optional avatar hash (padded to 32 characters if shorter)
/// - `role_ids` - Role IDs in the order Discord returns them
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    user_id: u64,
    username: &str,
    discriminator: Option<&str>,
    avatar_hash: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": "1",
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": discriminator.unwrap_or("0"),
            "global_name": null,
            "avatar": avatar_hash.map(pad_image_hash),
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2021-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
