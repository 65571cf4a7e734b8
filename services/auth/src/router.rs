use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use porchlight_core::health::{healthz, readyz};
use porchlight_core::middleware::request_id_layer;

use crate::domain::repository::MailerPort;
use crate::handlers::code::request_code;
use crate::handlers::session::{check_session, create_session, revoke_session};
use crate::state::AppState;

pub fn build_router<M>(state: AppState<M>) -> Router
where
    M: MailerPort + Clone + Send + Sync + 'static,
{
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login code
        .route("/auth/code", post(request_code::<M>))
        // Session
        .route("/auth/session", post(create_session::<M>))
        .route("/auth/session", get(check_session::<M>))
        .route("/auth/session", delete(revoke_session::<M>))
        .layer(
            tower::ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
