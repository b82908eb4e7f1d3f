//! Test factory for creating Serenity User objects.

use serenity::all::User;

use super::pad_image_hash;

/// Creates a test Serenity User shaped like a `GET /users/{id}` response.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `global_name` - Optional display name
/// - `banner_hash` - Optional banner hash (padded to 32 characters if shorter)
/// - `public_flags` - Badge bitfield
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// // HypeSquad Bravery member with a display name and no banner
/// let user = create_test_user(123456789, "abc", Some("Abc Person"), None, 1 << 6);
/// assert_eq!(user.global_name.as_deref(), Some("Abc Person"));
/// ```
pub fn create_test_user(
    user_id: u64,
    username: &str,
    global_name: Option<&str>,
    banner_hash: Option<&str>,
    public_flags: u32,
) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "banner": banner_hash.map(pad_image_hash),
        "accent_color": null,
        "bot": false,
        "public_flags": public_flags,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
