//! Course browsing API: paginated listing, single-record fetch, categories

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use coursedeck_catalog::pagination::page;
use coursedeck_common::Course;

use crate::AppState;

/// Query parameters for course listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Continuation cursor: id of the last course of the previous page
    pub cursor: Option<String>,

    /// Page size (courses per page)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    12
}

/// Paginated course listing response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// GET /api/courses?cursor=ID&page_size=N
///
/// One page of the catalog in canonical ascending-id order. An unknown
/// cursor restarts from the first course; a broken or empty store serves
/// the fallback dataset, never an error.
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CourseListResponse>, CourseError> {
    if query.page_size == 0 {
        return Err(CourseError::InvalidPageSize);
    }

    let catalog = state.catalog.fetch_all().await;
    let page = page(&catalog, query.cursor.as_deref(), query.page_size);

    Ok(Json(CourseListResponse {
        courses: page.items,
        next_cursor: page.next_cursor,
        has_more: page.has_more,
    }))
}

/// GET /api/courses/:id
///
/// Single normalized course; 404 when the record is absent.
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, CourseError> {
    let course = state
        .catalog
        .fetch_one(&course_id)
        .await
        .map_err(|e| CourseError::StoreError(e.to_string()))?
        .ok_or(CourseError::NotFound(course_id))?;

    Ok(Json(course))
}

/// GET /api/categories
///
/// Sorted, deduplicated category names across the catalog.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().await)
}

/// Course API errors
#[derive(Debug)]
pub enum CourseError {
    InvalidPageSize,
    NotFound(String),
    StoreError(String),
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CourseError::InvalidPageSize => {
                (StatusCode::BAD_REQUEST, "page_size must be positive".to_string())
            }
            CourseError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Course not found: {}", id))
            }
            CourseError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
