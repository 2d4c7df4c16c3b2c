use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use rolelink_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    health::{healthz, readyz},
    role::get_role,
    user::get_user,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users/{username}", get(get_user))
        // Roles
        .route("/roles/{role_name}", get(get_role))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
