//! Admin course management
//!
//! These handlers sit behind the bearer-token middleware. Course records are
//! stored raw; responses echo the normalized view so the caller sees exactly
//! what the catalog will serve.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use coursedeck_catalog::normalize::normalize_course;
use coursedeck_common::Course;

use crate::AppState;

const COURSES_PATH: &str = "courses";

/// POST /api/admin/courses
///
/// Allocates the next free numeric key so the new record is visible to the
/// catalog's numeric-key scan.
pub async fn create_course(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<(StatusCode, Json<Course>), AdminError> {
    if !raw.is_object() {
        return Err(AdminError::InvalidRecord);
    }

    let id = next_course_id(&state).await?;
    state
        .store
        .write(&format!("{}/{}", COURSES_PATH, id), &raw)
        .await
        .map_err(|e| AdminError::StoreError(e.to_string()))?;

    info!(course_id = %id, "Created course");
    Ok((StatusCode::CREATED, Json(normalize_course(&id, &raw))))
}

/// PUT /api/admin/courses/:id
pub async fn replace_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(raw): Json<Value>,
) -> Result<Json<Course>, AdminError> {
    if !raw.is_object() {
        return Err(AdminError::InvalidRecord);
    }
    if id.parse::<u64>().is_err() {
        return Err(AdminError::InvalidCourseId(id));
    }

    state
        .store
        .write(&format!("{}/{}", COURSES_PATH, id), &raw)
        .await
        .map_err(|e| AdminError::StoreError(e.to_string()))?;

    info!(course_id = %id, "Replaced course");
    Ok(Json(normalize_course(&id, &raw)))
}

/// DELETE /api/admin/courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AdminError> {
    state
        .store
        .delete(&format!("{}/{}", COURSES_PATH, id))
        .await
        .map_err(|e| AdminError::StoreError(e.to_string()))?;

    info!(course_id = %id, "Deleted course");
    Ok(StatusCode::NO_CONTENT)
}

/// Next free numeric key under the courses node: one past the highest
/// existing numeric key, starting at 1 on an empty node.
async fn next_course_id(state: &AppState) -> Result<String, AdminError> {
    let node = state
        .store
        .read(COURSES_PATH)
        .await
        .map_err(|e| AdminError::StoreError(e.to_string()))?;

    let max = match node {
        Some(Value::Object(map)) => map
            .keys()
            .filter_map(|k| k.parse::<u64>().ok())
            .max()
            .unwrap_or(0),
        _ => 0,
    };

    Ok((max + 1).to_string())
}

/// Admin API errors
#[derive(Debug)]
pub enum AdminError {
    InvalidRecord,
    InvalidCourseId(String),
    StoreError(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AdminError::InvalidRecord => (
                StatusCode::BAD_REQUEST,
                "Course record must be a JSON object".to_string(),
            ),
            AdminError::InvalidCourseId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Course id must be numeric: {}", id),
            ),
            AdminError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
