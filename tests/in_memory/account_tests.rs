//! Account lifecycle tests spanning the auth and user services.

use crate::in_memory::helpers::runtime;
use gantt::account::{
    adapters::memory::{
        InMemorySessionStore, InMemoryUserRepository, PlainTextPasswordHasher, RandomTokenIssuer,
    },
    domain::UserDraft,
    ports::UserRepositoryError,
    services::{
        AuthError, AuthService, LoginRequest, RegisterRequest, UpdateProfileRequest, UserService,
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type MemoryAuthService = AuthService<
    InMemoryUserRepository,
    PlainTextPasswordHasher,
    RandomTokenIssuer,
    InMemorySessionStore,
    DefaultClock,
>;

/// Builds an auth service and a user service over one shared repository.
fn services() -> (
    MemoryAuthService,
    UserService<InMemoryUserRepository, DefaultClock>,
) {
    let users = Arc::new(InMemoryUserRepository::new());
    let auth = AuthService::new(
        Arc::clone(&users),
        Arc::new(PlainTextPasswordHasher::new()),
        Arc::new(RandomTokenIssuer::new()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(DefaultClock),
    );
    let user_service = UserService::new(users, Arc::new(DefaultClock));
    (auth, user_service)
}

/// Tests the full register, login, restore, and logout sequence.
#[rstest]
fn registration_then_login_round_trip(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (auth, _) = services();

    let user = rt.block_on(auth.register(RegisterRequest::new(
        "ines",
        "ines@example.com",
        "hunter2",
    )))?;

    let session = rt.block_on(auth.login(LoginRequest::new("ines@example.com", "hunter2")))?;
    assert_eq!(session.user(), &user);

    let restored = rt.block_on(auth.restore())?.expect("session present");
    assert_eq!(restored.token(), session.token());

    rt.block_on(auth.logout())?;
    assert!(rt.block_on(auth.restore())?.is_none());
    Ok(())
}

/// Tests that profile edits made through the user service are visible on
/// the next login.
#[rstest]
fn profile_updates_are_visible_after_login(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (auth, user_service) = services();

    let user = rt.block_on(auth.register(RegisterRequest::new(
        "ines",
        "ines@example.com",
        "hunter2",
    )))?;

    rt.block_on(user_service.update_profile(
        user.id(),
        UpdateProfileRequest::new("ines-v").with_avatar_url("https://cdn.example.com/ines.png"),
    ))?;

    let session = rt.block_on(auth.login(LoginRequest::new("ines@example.com", "hunter2")))?;
    assert_eq!(session.user().username(), "ines-v");
    assert_eq!(
        session.user().avatar_url(),
        Some("https://cdn.example.com/ines.png")
    );
    Ok(())
}

/// Tests that the email uniqueness rule holds across both write paths.
#[rstest]
fn duplicate_email_is_rejected_across_services(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (auth, user_service) = services();

    rt.block_on(user_service.create(UserDraft::new(
        "ines",
        "ines@example.com",
        "plain:hunter2",
    )))?;

    let result = rt.block_on(auth.register(RegisterRequest::new(
        "imposter",
        "ines@example.com",
        "other",
    )));

    assert!(matches!(
        result,
        Err(AuthError::Repository(UserRepositoryError::DuplicateEmail(email)))
            if email == "ines@example.com"
    ));
    Ok(())
}
