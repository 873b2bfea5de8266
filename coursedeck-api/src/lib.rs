//! coursedeck-api library - HTTP surface for the course catalog
//!
//! Exposes the catalog core (browse, search, interest filtering,
//! recommendations) together with the user, progress, review, and admin
//! surfaces. All persistent state lives in the remote document store; this
//! service holds no state of its own beyond the injected clients.

use axum::Router;
use coursedeck_catalog::{Catalog, CourseStore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog facade (read side, fallback-protected)
    pub catalog: Catalog,
    /// Raw store client for the write surfaces (users, reviews, admin)
    pub store: Arc<dyn CourseStore>,
    /// Admin bearer token; empty disables admin auth checking
    pub admin_token: String,
}

impl AppState {
    /// Create new application state around an injected store client
    pub fn new(store: Arc<dyn CourseStore>, admin_token: String) -> Self {
        Self {
            catalog: Catalog::new(store.clone()),
            store,
            admin_token,
        }
    }
}

/// Build application router
///
/// Admin routes require the bearer token; everything else is public
/// (browsing works without an account, matching the catalog contract).
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{delete, get, post, put};

    // Admin routes (require bearer token)
    let admin = Router::new()
        .route("/api/admin/courses", post(api::create_course))
        .route("/api/admin/courses/:id", put(api::replace_course))
        .route("/api/admin/courses/:id", delete(api::delete_course))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::admin_auth_middleware,
        ));

    // Public routes
    let public = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/courses", get(api::list_courses))
        .route("/api/courses/:id", get(api::get_course))
        .route("/api/courses/:id/reviews", get(api::list_reviews))
        .route("/api/courses/:id/reviews", post(api::post_review))
        .route("/api/search", get(api::search_courses))
        .route("/api/recommended", get(api::recommended_courses))
        .route("/api/interests", get(api::courses_by_interests))
        .route("/api/categories", get(api::list_categories))
        .route("/api/users", post(api::create_user))
        .route("/api/users/:uid", get(api::get_user))
        .route("/api/users/:uid/interests", put(api::update_interests))
        .route("/api/users/:uid/enroll", post(api::enroll_course))
        .route("/api/users/:uid/favorites", post(api::toggle_favorite))
        .route(
            "/api/users/:uid/progress/:course_id",
            get(api::get_progress),
        )
        .route(
            "/api/users/:uid/progress/:course_id",
            put(api::update_progress),
        )
        .merge(api::health_routes());

    // The dashboard is a browser client on another origin, so CORS is
    // part of the contract, not an extra.
    Router::new()
        .merge(admin)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
