use super::*;

/// Tests assembling a profile for a matching member.
///
/// Verifies that badges are decoded from the user's flags and that roles are
/// merged in member order with unknown role ids dropped.
///
/// Expected: Ok with assembled profile
#[tokio::test]
async fn assembles_profile_for_matching_member() -> Result<(), AppError> {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![2, 404, 1]))
        .with_user(test_user(Some("Abc Person"), (1 << 6) | (1 << 9)))
        .with_role(test_role(1, "Admin", 0xFF0000))
        .with_role(test_role(2, "Member", 0));

    let service = ProfileService::new(&directory, GUILD_ID);
    let profile = service.get_profile("abc").await?.expect("profile");

    assert_eq!(profile.display_name(), "Abc Person");
    assert_eq!(profile.badges, vec!["HypeSquad Bravery", "Early Supporter"]);
    let role_names: Vec<&str> = profile.roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(role_names, vec!["Member", "Admin"]);

    Ok(())
}

/// Tests that every stage is called with the configured guild and resolved user.
///
/// Expected: search first, then user and role lookups for the matched member
#[tokio::test]
async fn queries_configured_guild_and_resolved_user() -> Result<(), AppError> {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![]))
        .with_user(test_user(None, 0));

    ProfileService::new(&directory, GUILD_ID)
        .get_profile("ab")
        .await?;

    let calls = directory.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        DirectoryCall::SearchMember {
            guild_id: GUILD_ID,
            query: "ab".to_string()
        }
    );
    assert!(calls.contains(&DirectoryCall::GetUser { user_id: USER_ID }));
    assert!(calls.contains(&DirectoryCall::GetGuildRoles { guild_id: GUILD_ID }));

    Ok(())
}

/// Tests the not-found short circuit.
///
/// Verifies that when the search matches nobody no dependent lookup is made.
///
/// Expected: Ok(None) with a single search call recorded
#[tokio::test]
async fn stops_after_empty_search() -> Result<(), AppError> {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![1]))
        .with_user(test_user(None, 0));

    let profile = ProfileService::new(&directory, GUILD_ID)
        .get_profile("nobody")
        .await?;

    assert!(profile.is_none());
    assert_eq!(
        directory.calls(),
        vec![DirectoryCall::SearchMember {
            guild_id: GUILD_ID,
            query: "nobody".to_string()
        }]
    );

    Ok(())
}

/// Tests a member whose user record is gone.
///
/// Expected: Ok(None) rather than a partially rendered profile
#[tokio::test]
async fn returns_none_when_user_missing() -> Result<(), AppError> {
    let directory = MockDiscordDirectory::new().with_member(test_member(vec![]));

    let profile = ProfileService::new(&directory, GUILD_ID)
        .get_profile("abc")
        .await?;

    assert!(profile.is_none());

    Ok(())
}

/// Tests that a failing search is reported as an error, not as "not found".
///
/// Expected: Err(DiscordErr) and no dependent lookups
#[tokio::test]
async fn propagates_search_failure() {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![]))
        .failing(FailingEndpoint::SearchMember);

    let result = ProfileService::new(&directory, GUILD_ID)
        .get_profile("abc")
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert_eq!(directory.calls().len(), 1);
}

/// Tests that a failing role catalog fetch fails the whole profile.
///
/// Expected: Err(DiscordErr)
#[tokio::test]
async fn propagates_role_catalog_failure() {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![1]))
        .with_user(test_user(None, 0))
        .failing(FailingEndpoint::GetGuildRoles);

    let result = ProfileService::new(&directory, GUILD_ID)
        .get_profile("abc")
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
}

/// Tests that a failing user fetch fails the whole profile.
///
/// Expected: Err(DiscordErr)
#[tokio::test]
async fn propagates_user_failure() {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![]))
        .failing(FailingEndpoint::GetUser);

    let result = ProfileService::new(&directory, GUILD_ID)
        .get_profile("abc")
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
}

/// Tests a member without roles or badges.
///
/// Expected: Ok with empty badge and role lists and tag as display name
#[tokio::test]
async fn assembles_profile_without_roles_or_badges() -> Result<(), AppError> {
    let directory = MockDiscordDirectory::new()
        .with_member(test_member(vec![]))
        .with_user(test_user(None, 0))
        .with_role(test_role(1, "Admin", 0xFF0000));

    let profile = ProfileService::new(&directory, GUILD_ID)
        .get_profile("abc")
        .await?
        .expect("profile");

    assert!(profile.badges.is_empty());
    assert!(profile.roles.is_empty());
    assert_eq!(profile.display_name(), "abc#0001");

    Ok(())
}
