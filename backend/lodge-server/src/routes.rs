use crate::api::users::users;
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/probe/liveness", get(health::liveness_check))
        .route("/probe/readiness", get(health::readiness_check))
        .nest("/api/users", user_routes())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(users::login))
        .route("/register", post(users::register))
        .route("/authorize/guest", post(users::authorize_guest))
        .route("/authorize/host", post(users::authorize_host))
        .route("/change-password/{id}", put(users::change_password))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::edit_user)
                .delete(users::delete_user),
        )
}
