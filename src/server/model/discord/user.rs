use serenity::all::User;

/// Extended profile attributes fetched from `GET /users/{id}`.
///
/// Independent of the member search result; the two only share the user id.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Discord user ID as a u64.
    pub id: u64,
    /// Account username.
    pub username: String,
    /// Display name chosen by the user, shown in place of the username.
    pub global_name: Option<String>,
    /// Banner image hash, if the user has set one.
    pub banner_hash: Option<String>,
    /// Badge bitfield, `0` when Discord omits it.
    pub public_flags: u64,
}

impl UserProfile {
    /// Converts a Serenity user to a domain model at the data layer boundary.
    pub fn from_serenity(user: User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name,
            global_name: user.global_name,
            banner_hash: user.banner.map(|hash| hash.to_string()),
            public_flags: user
                .public_flags
                .map(|flags| u64::from(flags.bits()))
                .unwrap_or(0),
        }
    }
}
