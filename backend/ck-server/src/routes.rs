use crate::AppState;
use crate::health;
use crate::web::{checkin, dashboard, login, reset, session};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use http::{HeaderValue, header::CACHE_CONTROL};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Login and password reset
        .route("/", get(login::login_page).post(login::login_submit))
        .route("/reset-password", get(reset::missing_token))
        .route(
            "/reset-password/{token}",
            get(reset::reset_page).post(reset::reset_submit),
        )
        // Dashboard
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/dashboard/logout",
            get(dashboard::confirm_logout).post(login::logout),
        )
        // Check-in screens
        .route("/dashboard/check-in/{slug}", get(checkin::roster))
        .route(
            "/dashboard/check-in/{slug}/{id}/confirm",
            get(checkin::confirm),
        )
        .route("/dashboard/check-in/{slug}/{id}", post(checkin::commit))
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ))
                // Every navigation passes the session gate first
                .layer(middleware::from_fn_with_state(state.clone(), session::gate)),
        )
        .with_state(state)
}
