use serde::{Deserialize, Serialize};

/// Render-ready profile of a guild member.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProfileDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub user_id: u64,
    pub username: String,
    /// `username#discriminator`
    pub tag: String,
    pub display_name: String,
    pub avatar_url: String,
    pub banner_url: Option<String>,
    pub badges: Vec<String>,
    pub roles: Vec<RoleDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RoleDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub id: u64,
    pub name: String,
    /// CSS hex color, `None` renders the neutral swatch.
    pub color: Option<String>,
    pub unicode_emoji: Option<String>,
}

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}
