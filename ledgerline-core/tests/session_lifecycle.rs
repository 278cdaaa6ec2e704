//! Session lifecycle tests
//!
//! Exercise login, logout, expiry handling, and the periodic refresh task
//! through the public context, with the artificial latency disabled and the
//! tokio clock paused where timing matters.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use ledgerline_core::adapters::demo::{demo_user, DEMO_EMAIL, DEMO_PASSWORD};
use ledgerline_core::adapters::InMemoryTokenStore;
use ledgerline_core::config::Config;
use ledgerline_core::domain::TokenCodec;
use ledgerline_core::ports::TokenStore;
use ledgerline_core::{Credentials, Error, LedgerlineContext, Role};

fn test_config() -> Config {
    let mut config = Config::default();
    config.simulate_latency = false;
    config
}

fn context_with_store() -> (LedgerlineContext, Arc<InMemoryTokenStore>) {
    let store = Arc::new(InMemoryTokenStore::new());
    let ctx = LedgerlineContext::with_store(test_config(), Arc::clone(&store) as Arc<dyn TokenStore>);
    (ctx, store)
}

fn demo_credentials() -> Credentials {
    Credentials::new(DEMO_EMAIL, DEMO_PASSWORD)
}

#[tokio::test]
async fn test_login_with_demo_credentials_succeeds() {
    let (ctx, store) = context_with_store();

    let user = ctx.session_service.login(&demo_credentials()).await.unwrap();
    assert_eq!(user.email, DEMO_EMAIL);
    assert_eq!(user.role, Role::User);

    // Token expiry is the configured 15 minutes out
    let token = store.load().unwrap().unwrap();
    let remaining = token.expires_at - Utc::now();
    assert!(remaining > Duration::minutes(14));
    assert!(remaining <= Duration::minutes(15));

    assert_eq!(ctx.session_service.current_user(), Some(user));
}

#[tokio::test]
async fn test_login_with_wrong_credentials_fails() {
    let (ctx, store) = context_with_store();

    let err = ctx
        .session_service
        .login(&Credentials::new("other@example.com", "hunter2"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_email_is_rejected_before_the_backend() {
    let (ctx, _) = context_with_store();
    let err = ctx
        .session_service
        .login(&Credentials::new("not-an-email", "password123"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (ctx, store) = context_with_store();
    ctx.session_service.login(&demo_credentials()).await.unwrap();

    ctx.session_service.logout().unwrap();
    assert!(store.load().unwrap().is_none());
    assert!(ctx.session_service.current_user().is_none());

    // A second logout on an empty store still succeeds
    ctx.session_service.logout().unwrap();
}

#[tokio::test]
async fn test_expired_token_reads_as_no_session_and_is_cleared() {
    let (ctx, store) = context_with_store();

    // Plant a token that expired a minute ago
    let codec = TokenCodec::new(Duration::minutes(15));
    let stale = codec.mint_at(&demo_user(), Utc::now() - Duration::minutes(16));
    store.save(&stale).unwrap();

    assert!(ctx.session_service.current_user().is_none());
    assert!(store.load().unwrap().is_none(), "stale token must be cleared");
}

#[tokio::test(start_paused = true)]
async fn test_refresh_task_extends_a_near_expiry_session() {
    let mut config = test_config();
    // Token expires inside the refresh threshold, so the first periodic
    // check (at 60s) must reissue it
    config.token_expiration_minutes = 3;
    config.refresh_threshold_minutes = 5;
    config.refresh_check_interval_secs = 60;

    let store = Arc::new(InMemoryTokenStore::new());
    let ctx = LedgerlineContext::with_store(config, Arc::clone(&store) as Arc<dyn TokenStore>);

    ctx.session_service.login(&demo_credentials()).await.unwrap();
    let before = store.load().unwrap().unwrap();

    let task = ctx.session_service.spawn_refresh_task();
    tokio::time::sleep(StdDuration::from_secs(61)).await;

    let after = store.load().unwrap().unwrap();
    assert!(after.expires_at > before.expires_at, "token was not extended");
    assert!(!task.is_finished());

    task.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_refresh_task_stops_after_logout() {
    let mut config = test_config();
    config.refresh_check_interval_secs = 60;
    let store = Arc::new(InMemoryTokenStore::new());
    let ctx = LedgerlineContext::with_store(config, Arc::clone(&store) as Arc<dyn TokenStore>);

    ctx.session_service.login(&demo_credentials()).await.unwrap();
    let task = ctx.session_service.spawn_refresh_task();

    ctx.session_service.logout().unwrap();
    tokio::time::sleep(StdDuration::from_secs(61)).await;

    assert!(task.is_finished(), "task must exit once the session is gone");
    assert!(store.load().unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_task_handle_drop_cancels_the_timer() {
    let (ctx, _) = context_with_store();
    ctx.session_service.login(&demo_credentials()).await.unwrap();

    let task = ctx.session_service.spawn_refresh_task();
    drop(task);

    // Nothing to assert beyond "no panic and time can move on": the abort
    // on drop is what keeps the timer from leaking
    tokio::time::sleep(StdDuration::from_secs(120)).await;
    assert!(ctx.session_service.current_user().is_some());
}
