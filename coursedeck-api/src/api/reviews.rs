//! Course reviews: listing and posting
//!
//! Reviews live under `reviews/{courseId}` keyed by generated id. Posting a
//! review recomputes the course's average rating (one decimal) and review
//! count on the stored record, so the catalog reflects reviews immediately.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use coursedeck_common::Review;

use crate::AppState;

/// Request body for posting a review
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReviewRequest {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: u32,
    pub comment: String,
}

/// GET /api/courses/:id/reviews
///
/// All reviews for a course, oldest first. A course with no reviews yields
/// an empty list, not an error.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<Review>>, ReviewError> {
    let reviews = fetch_reviews(&state, &course_id).await?;
    Ok(Json(reviews))
}

/// POST /api/courses/:id/reviews
///
/// Stores the review under a generated key, then updates the course's
/// rating and review count.
pub async fn post_review(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(request): Json<PostReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ReviewError> {
    if !(1..=5).contains(&request.rating) {
        return Err(ReviewError::InvalidRating(request.rating));
    }

    let review = Review {
        id: String::new(), // assigned by the store push below
        course_id: course_id.clone(),
        user_id: request.user_id,
        user_name: request.user_name.unwrap_or_else(|| "Anonymous".to_string()),
        rating: request.rating,
        comment: request.comment,
        timestamp: chrono::Utc::now().timestamp_millis(),
    };

    let value =
        serde_json::to_value(&review).map_err(|e| ReviewError::StoreError(e.to_string()))?;
    let path = format!("reviews/{}", course_id);
    let key = state
        .store
        .push(&path, &value)
        .await
        .map_err(|e| ReviewError::StoreError(e.to_string()))?;

    // Backfill the generated id onto the stored record
    state
        .store
        .update(&format!("{}/{}", path, key), &json!({ "id": key }))
        .await
        .map_err(|e| ReviewError::StoreError(e.to_string()))?;

    let stored = Review {
        id: key,
        ..review
    };

    refresh_course_rating(&state, &course_id).await?;

    info!(course_id = %course_id, rating = stored.rating, "Stored course review");

    Ok((StatusCode::CREATED, Json(stored)))
}

async fn fetch_reviews(state: &AppState, course_id: &str) -> Result<Vec<Review>, ReviewError> {
    let node = state
        .store
        .read(&format!("reviews/{}", course_id))
        .await
        .map_err(|e| ReviewError::StoreError(e.to_string()))?;

    let Some(node) = node else {
        return Ok(Vec::new());
    };
    let Some(map) = node.as_object() else {
        return Ok(Vec::new());
    };

    let mut reviews: Vec<Review> = map
        .values()
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect();
    reviews.sort_by_key(|review: &Review| review.timestamp);
    Ok(reviews)
}

/// Recompute the course's average rating and review count from all stored
/// reviews and write them back onto the course record.
async fn refresh_course_rating(state: &AppState, course_id: &str) -> Result<(), ReviewError> {
    let reviews = fetch_reviews(state, course_id).await?;
    if reviews.is_empty() {
        return Ok(());
    }

    let sum: u32 = reviews.iter().map(|r| r.rating).sum();
    let avg = sum as f64 / reviews.len() as f64;
    let rounded = (avg * 10.0).round() / 10.0;

    state
        .store
        .update(
            &format!("courses/{}", course_id),
            &json!({ "rating": rounded, "reviewCount": reviews.len() }),
        )
        .await
        .map_err(|e| ReviewError::StoreError(e.to_string()))?;

    Ok(())
}

/// Review API errors
#[derive(Debug)]
pub enum ReviewError {
    InvalidRating(u32),
    StoreError(String),
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ReviewError::InvalidRating(rating) => (
                StatusCode::BAD_REQUEST,
                format!("Rating must be 1..=5, got {}", rating),
            ),
            ReviewError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
