//! Member profile assembly.
//!
//! Combines the member search result, the user details and the guild role catalog
//! into a single profile, then renders it into the `ProfileDto` sent to the client.

use crate::{
    model::profile::{ProfileDto, RoleDto},
    server::model::{
        badge::decode_badges,
        discord::{GuildMember, GuildRole, UserProfile},
    },
};

/// Fully resolved profile of one guild member for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProfile {
    pub member: GuildMember,
    pub user: UserProfile,
    pub badges: Vec<&'static str>,
    /// Member roles found in the catalog, in member order.
    pub roles: Vec<GuildRole>,
}

impl MemberProfile {
    /// Decodes badges and merges roles for a resolved member.
    ///
    /// # Arguments
    /// - `member` - Member from the guild search
    /// - `user` - Details of the same user
    /// - `catalog` - All roles of the guild
    pub fn assemble(member: GuildMember, user: UserProfile, catalog: &[GuildRole]) -> Self {
        let badges = decode_badges(user.public_flags);
        let roles = merge_roles(&member.role_ids, catalog);

        Self {
            member,
            user,
            badges,
            roles,
        }
    }

    /// `username#discriminator`, using the user's current username.
    pub fn tag(&self) -> String {
        format!("{}#{}", self.user.username, self.member.discriminator)
    }

    /// Global display name when set and non-empty, otherwise the tag.
    pub fn display_name(&self) -> String {
        self.user
            .global_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.tag())
    }

    /// Converts the profile into the DTO rendered by the client.
    ///
    /// # Arguments
    /// - `cdn_url` - Base URL of Discord's image CDN
    pub fn into_dto(self, cdn_url: &str) -> ProfileDto {
        let tag = self.tag();
        let display_name = self.display_name();

        ProfileDto {
            user_id: self.member.user_id,
            avatar_url: avatar_url(cdn_url, self.member.user_id, self.member.avatar_hash.as_deref()),
            banner_url: self
                .user
                .banner_hash
                .as_deref()
                .map(|hash| banner_url(cdn_url, self.user.id, hash)),
            username: self.user.username,
            tag,
            display_name,
            badges: self.badges.into_iter().map(str::to_string).collect(),
            roles: self
                .roles
                .into_iter()
                .map(|role| RoleDto {
                    id: role.id,
                    name: role.name,
                    color: role_color(role.color),
                    unicode_emoji: role.unicode_emoji,
                })
                .collect(),
        }
    }
}

/// Looks up each member role id in the guild catalog.
///
/// Output keeps the member's ordering. Ids missing from the catalog are skipped.
pub fn merge_roles(member_role_ids: &[u64], catalog: &[GuildRole]) -> Vec<GuildRole> {
    member_role_ids
        .iter()
        .filter_map(|role_id| catalog.iter().find(|role| role.id == *role_id))
        .cloned()
        .collect()
}

/// Avatar image URL, falling back to Discord's default avatar when no hash is set.
pub fn avatar_url(cdn_url: &str, user_id: u64, avatar_hash: Option<&str>) -> String {
    match avatar_hash {
        Some(hash) => format!("{}/avatars/{}/{}.png", cdn_url, user_id, hash),
        None => format!("{}/embed/avatars/0.png", cdn_url),
    }
}

pub fn banner_url(cdn_url: &str, user_id: u64, banner_hash: &str) -> String {
    format!("{}/banners/{}/{}.png?size=512", cdn_url, user_id, banner_hash)
}

/// CSS hex color for a role swatch.
///
/// Discord uses `0` for roles without a color, so `0` yields `None` and an
/// explicit black cannot be told apart from an unset color.
pub fn role_color(color: u32) -> Option<String> {
    (color != 0).then(|| format!("#{:06x}", color))
}
