//! Per-course progress tracking
//!
//! Progress records live under `progress/{uid}/{courseId}`. The percent is
//! always derived from lesson counts; reaching 100% marks the course
//! completed on the user profile.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use coursedeck_common::UserProgress;

use crate::api::users::load_user;
use crate::AppState;

/// Request body for a progress update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub completed_lessons: u64,
    pub total_lessons: u64,
}

/// GET /api/users/:uid/progress/:course_id
pub async fn get_progress(
    State(state): State<AppState>,
    Path((uid, course_id)): Path<(String, String)>,
) -> Result<Json<UserProgress>, ProgressError> {
    let value = state
        .store
        .read(&format!("progress/{}/{}", uid, course_id))
        .await
        .map_err(|e| ProgressError::StoreError(e.to_string()))?
        .ok_or_else(|| ProgressError::NotFound(course_id.clone()))?;

    let progress: UserProgress =
        serde_json::from_value(value).map_err(|e| ProgressError::StoreError(e.to_string()))?;
    Ok(Json(progress))
}

/// PUT /api/users/:uid/progress/:course_id
///
/// Recomputes the derived percent, refreshes `lastAccessed`, and on 100%
/// appends the course to the user's completed set (idempotent).
pub async fn update_progress(
    State(state): State<AppState>,
    Path((uid, course_id)): Path<(String, String)>,
    Json(request): Json<UpdateProgressRequest>,
) -> Result<Json<UserProgress>, ProgressError> {
    if request.completed_lessons > request.total_lessons {
        return Err(ProgressError::InvalidLessonCounts);
    }

    let percent = UserProgress::percent(request.completed_lessons, request.total_lessons);
    let progress = UserProgress {
        course_id: course_id.clone(),
        progress: percent,
        completed_lessons: request.completed_lessons,
        total_lessons: request.total_lessons,
        last_accessed: chrono::Utc::now().timestamp_millis(),
    };

    let value =
        serde_json::to_value(&progress).map_err(|e| ProgressError::StoreError(e.to_string()))?;
    state
        .store
        .write(&format!("progress/{}/{}", uid, course_id), &value)
        .await
        .map_err(|e| ProgressError::StoreError(e.to_string()))?;

    if percent == 100 {
        mark_completed(&state, &uid, &course_id).await?;
        info!(uid = %uid, course_id = %course_id, "Course completed");
    }

    Ok(Json(progress))
}

async fn mark_completed(
    state: &AppState,
    uid: &str,
    course_id: &str,
) -> Result<(), ProgressError> {
    let mut user = match load_user(state, uid).await {
        Ok(user) => user,
        // Progress can exist before a profile does; nothing to mark then.
        Err(crate::api::users::UserError::NotFound(_)) => return Ok(()),
        Err(e) => return Err(ProgressError::StoreError(format!("{:?}", e))),
    };

    if user.completed_courses.iter().any(|id| id == course_id) {
        return Ok(());
    }
    user.completed_courses.push(course_id.to_string());

    state
        .store
        .update(
            &format!("users/{}", uid),
            &json!({ "completedCourses": user.completed_courses }),
        )
        .await
        .map_err(|e| ProgressError::StoreError(e.to_string()))?;

    Ok(())
}

/// Progress API errors
#[derive(Debug)]
pub enum ProgressError {
    InvalidLessonCounts,
    NotFound(String),
    StoreError(String),
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProgressError::InvalidLessonCounts => (
                StatusCode::BAD_REQUEST,
                "completedLessons cannot exceed totalLessons".to_string(),
            ),
            ProgressError::NotFound(course_id) => (
                StatusCode::NOT_FOUND,
                format!("No progress recorded for course: {}", course_id),
            ),
            ProgressError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
