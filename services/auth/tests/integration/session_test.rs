use porchlight_auth::domain::repository::SessionStore;
use porchlight_auth::infra::memory::InMemorySessionStore;
use porchlight_auth::usecase::session::{CheckSessionUseCase, RevokeSessionUseCase};

use crate::helpers::ADMIN_EMAIL;

#[tokio::test]
async fn should_not_authenticate_an_absent_token() {
    let uc = CheckSessionUseCase {
        sessions: InMemorySessionStore::default(),
    };
    assert!(!uc.execute(None).await.unwrap());
}

#[tokio::test]
async fn should_not_authenticate_unknown_or_malformed_tokens() {
    let uc = CheckSessionUseCase {
        sessions: InMemorySessionStore::default(),
    };
    assert!(!uc.execute(Some("")).await.unwrap());
    assert!(!uc.execute(Some("definitely not a token")).await.unwrap());
}

#[tokio::test]
async fn should_authenticate_an_issued_token() {
    let sessions = InMemorySessionStore::default();
    let token = sessions.create(ADMIN_EMAIL).await.unwrap();

    let uc = CheckSessionUseCase { sessions };
    assert!(uc.execute(Some(&token)).await.unwrap());
}

#[tokio::test]
async fn should_not_authenticate_an_expired_session() {
    let sessions = InMemorySessionStore::with_ttl(-1);
    let token = sessions.create(ADMIN_EMAIL).await.unwrap();

    let uc = CheckSessionUseCase { sessions };
    assert!(!uc.execute(Some(&token)).await.unwrap());
}

#[tokio::test]
async fn should_revoke_idempotently() {
    let sessions = InMemorySessionStore::default();
    let token = sessions.create(ADMIN_EMAIL).await.unwrap();

    let revoke = RevokeSessionUseCase {
        sessions: sessions.clone(),
    };
    revoke.execute(Some(&token)).await.unwrap();
    revoke.execute(Some(&token)).await.unwrap();
    revoke.execute(None).await.unwrap();

    let check = CheckSessionUseCase { sessions };
    assert!(!check.execute(Some(&token)).await.unwrap());
}
