//! HTTP API handlers for coursedeck-api

pub mod admin;
pub mod auth;
pub mod buildinfo;
pub mod courses;
pub mod health;
pub mod progress;
pub mod recommend;
pub mod reviews;
pub mod search;
pub mod users;

pub use admin::{create_course, delete_course, replace_course};
pub use auth::admin_auth_middleware;
pub use buildinfo::get_build_info;
pub use courses::{get_course, list_categories, list_courses};
pub use health::health_routes;
pub use progress::{get_progress, update_progress};
pub use recommend::{courses_by_interests, recommended_courses};
pub use reviews::{list_reviews, post_review};
pub use search::search_courses;
pub use users::{create_user, enroll_course, get_user, toggle_favorite, update_interests};
