use serenity::all::Member;

/// A guild member as returned by the member search endpoint.
///
/// Holds the account identity shown on the profile (username, discriminator,
/// avatar) and the member's role ids in the order Discord lists them.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Account username.
    pub username: String,
    /// Legacy 4 digit tag, `"0"` for accounts migrated to unique usernames.
    pub discriminator: String,
    /// Avatar image hash, if the user has set one.
    pub avatar_hash: Option<String>,
    /// Role IDs assigned to the member, in member order.
    pub role_ids: Vec<u64>,
}

impl GuildMember {
    /// Converts a Serenity member to a domain model at the data layer boundary.
    ///
    /// # Arguments
    /// - `member` - Member object from the guild member search
    ///
    /// # Returns
    /// - `GuildMember` - Domain model with ids unwrapped to u64
    pub fn from_serenity(member: Member) -> Self {
        let discriminator = member
            .user
            .discriminator
            .map(|d| format!("{:04}", d.get()))
            .unwrap_or_else(|| "0".to_string());

        Self {
            user_id: member.user.id.get(),
            username: member.user.name,
            discriminator,
            avatar_hash: member.user.avatar.map(|hash| hash.to_string()),
            role_ids: member.roles.iter().map(|role_id| role_id.get()).collect(),
        }
    }
}
