//! In-memory [`DiscordDirectory`] for unit testing without Discord.

use std::sync::{Arc, Mutex};

use crate::server::{
    data::discord::DiscordDirectory,
    error::AppError,
    model::discord::{GuildMember, GuildRole, UserProfile},
};

/// A directory call recorded by the mock, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    SearchMember { guild_id: u64, query: String },
    GetUser { user_id: u64 },
    GetGuildRoles { guild_id: u64 },
}

/// Endpoint whose next call should fail with an upstream error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailingEndpoint {
    SearchMember,
    GetUser,
    GetGuildRoles,
}

/// Serves fixed members, users and roles and records every call.
///
/// Member search matches when the username starts with the query, like Discord's
/// prefix search. An empty query matches the first member.
#[derive(Clone, Default)]
pub struct MockDiscordDirectory {
    members: Vec<GuildMember>,
    users: Vec<UserProfile>,
    roles: Vec<GuildRole>,
    failing: Option<FailingEndpoint>,
    calls: Arc<Mutex<Vec<DirectoryCall>>>,
}

impl MockDiscordDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: GuildMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_role(mut self, role: GuildRole) -> Self {
        self.roles.push(role);
        self
    }

    pub fn failing(mut self, endpoint: FailingEndpoint) -> Self {
        self.failing = Some(endpoint);
        self
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DirectoryCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail_if(&self, endpoint: FailingEndpoint) -> Result<(), AppError> {
        if self.failing == Some(endpoint) {
            return Err(serenity::Error::Other("connection reset by peer").into());
        }
        Ok(())
    }
}

impl DiscordDirectory for MockDiscordDirectory {
    async fn search_member(
        &self,
        guild_id: u64,
        query: &str,
    ) -> Result<Option<GuildMember>, AppError> {
        self.record(DirectoryCall::SearchMember {
            guild_id,
            query: query.to_string(),
        });
        self.fail_if(FailingEndpoint::SearchMember)?;

        Ok(self
            .members
            .iter()
            .find(|m| m.username.starts_with(query))
            .cloned())
    }

    async fn get_user(&self, user_id: u64) -> Result<Option<UserProfile>, AppError> {
        self.record(DirectoryCall::GetUser { user_id });
        self.fail_if(FailingEndpoint::GetUser)?;

        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn get_guild_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, AppError> {
        self.record(DirectoryCall::GetGuildRoles { guild_id });
        self.fail_if(FailingEndpoint::GetGuildRoles)?;

        Ok(self.roles.clone())
    }
}
