//! User profile surface: signup, interests, enrollment, favorites
//!
//! Profiles live under `users/{uid}`. Writes are last-write-wins against
//! the remote store; this service does not arbitrate concurrent edits.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use coursedeck_common::{User, UserProgress};

use crate::AppState;

/// Request body for profile creation (signup)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request body for replacing the interest set
#[derive(Debug, Deserialize)]
pub struct UpdateInterestsRequest {
    pub interests: Vec<String>,
}

/// Request body naming a course
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub course_id: String,
}

/// POST /api/users
///
/// Creates the profile record at signup with empty interest and course
/// sets. Replaces an existing record with the same uid.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), UserError> {
    if request.uid.trim().is_empty() || request.email.trim().is_empty() {
        return Err(UserError::InvalidProfile);
    }

    let user = User::new(request.uid, request.email, request.display_name);
    write_user(&state, &user).await?;

    info!(uid = %user.uid, "Created user profile");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:uid
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<User>, UserError> {
    let user = load_user(&state, &uid).await?;
    Ok(Json(user))
}

/// PUT /api/users/:uid/interests
///
/// Replaces the user's interest set (interest selection screen semantics:
/// the client always sends the full set).
pub async fn update_interests(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(request): Json<UpdateInterestsRequest>,
) -> Result<Json<User>, UserError> {
    let mut user = load_user(&state, &uid).await?;
    user.interests = request.interests;

    state
        .store
        .update(
            &format!("users/{}", uid),
            &json!({ "interests": user.interests }),
        )
        .await
        .map_err(|e| UserError::StoreError(e.to_string()))?;

    Ok(Json(user))
}

/// POST /api/users/:uid/enroll
///
/// Appends the course to the user's enrolled set (idempotent) and seeds a
/// zeroed progress record carrying the course's lesson count.
pub async fn enroll_course(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(request): Json<CourseRef>,
) -> Result<Json<User>, UserError> {
    let mut user = load_user(&state, &uid).await?;

    if !user.enrolled_courses.contains(&request.course_id) {
        user.enrolled_courses.push(request.course_id.clone());
        state
            .store
            .update(
                &format!("users/{}", uid),
                &json!({ "enrolledCourses": user.enrolled_courses }),
            )
            .await
            .map_err(|e| UserError::StoreError(e.to_string()))?;

        // Lesson count comes from the catalog; an unknown course enrolls
        // with zero lessons rather than failing.
        let total_lessons = state
            .catalog
            .fetch_one(&request.course_id)
            .await
            .ok()
            .flatten()
            .map(|course| course.lessons)
            .unwrap_or(0);

        let progress = UserProgress {
            course_id: request.course_id.clone(),
            progress: 0,
            completed_lessons: 0,
            total_lessons,
            last_accessed: chrono::Utc::now().timestamp_millis(),
        };
        let value = serde_json::to_value(&progress)
            .map_err(|e| UserError::StoreError(e.to_string()))?;
        state
            .store
            .write(
                &format!("progress/{}/{}", uid, request.course_id),
                &value,
            )
            .await
            .map_err(|e| UserError::StoreError(e.to_string()))?;

        info!(uid = %uid, course_id = %request.course_id, "Enrolled user in course");
    }

    Ok(Json(user))
}

/// POST /api/users/:uid/favorites
///
/// Toggles the course in the user's favorite set.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(request): Json<CourseRef>,
) -> Result<Json<User>, UserError> {
    let mut user = load_user(&state, &uid).await?;

    if let Some(pos) = user
        .favorite_courses
        .iter()
        .position(|id| *id == request.course_id)
    {
        user.favorite_courses.remove(pos);
    } else {
        user.favorite_courses.push(request.course_id.clone());
    }

    state
        .store
        .update(
            &format!("users/{}", uid),
            &json!({ "favoriteCourses": user.favorite_courses }),
        )
        .await
        .map_err(|e| UserError::StoreError(e.to_string()))?;

    Ok(Json(user))
}

pub(crate) async fn load_user(state: &AppState, uid: &str) -> Result<User, UserError> {
    let value = state
        .store
        .read(&format!("users/{}", uid))
        .await
        .map_err(|e| UserError::StoreError(e.to_string()))?
        .ok_or_else(|| UserError::NotFound(uid.to_string()))?;

    serde_json::from_value(value).map_err(|e| UserError::StoreError(e.to_string()))
}

async fn write_user(state: &AppState, user: &User) -> Result<(), UserError> {
    let value = serde_json::to_value(user).map_err(|e| UserError::StoreError(e.to_string()))?;
    state
        .store
        .write(&format!("users/{}", user.uid), &value)
        .await
        .map_err(|e| UserError::StoreError(e.to_string()))
}

/// User API errors
#[derive(Debug)]
pub enum UserError {
    InvalidProfile,
    NotFound(String),
    StoreError(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UserError::InvalidProfile => {
                (StatusCode::BAD_REQUEST, "uid and email are required".to_string())
            }
            UserError::NotFound(uid) => {
                (StatusCode::NOT_FOUND, format!("User not found: {}", uid))
            }
            UserError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
