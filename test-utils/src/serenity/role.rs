//! Test factory for creating Serenity Role objects.
//!
//! Roles are built the way `GET /guilds/{guild_id}/roles` returns them. Only the
//! fields the profile page displays are configurable.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable display fields.
///
/// All other fields are set to reasonable defaults (position 0, not hoisted,
/// not managed, not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 24-bit RGB integer, `0` for "no color"
/// - `unicode_emoji` - Optional emoji shown next to the role name
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Admin", 0xFF0000, Some("🛡️"));
/// assert_eq!(role.colour.0, 0xFF0000);
///
/// // Role with zero color (default/no color)
/// let role = create_test_role(987654321, "Member", 0, None);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, unicode_emoji: Option<&str>) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": unicode_emoji,
        "position": 0,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
