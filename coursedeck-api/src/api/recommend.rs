//! Interest-based filtering and recommendations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use coursedeck_catalog::interests::filter_by_interests;
use coursedeck_catalog::recommend::recommend;
use coursedeck_common::Course;

use crate::AppState;

/// Query parameters for the recommendation endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Comma-separated interest names
    #[serde(default)]
    pub interests: String,

    /// Maximum number of recommendations
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    6
}

/// Query parameters for the interest filter endpoint
#[derive(Debug, Deserialize)]
pub struct InterestsQuery {
    /// Comma-separated interest names; empty matches everything
    #[serde(default)]
    pub interests: String,
}

/// Recommendation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub interests: Vec<String>,
    pub courses: Vec<Course>,
}

/// Split a comma-separated interest list, dropping blanks
fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// GET /api/recommended?interests=a,b&limit=n
///
/// Top-N courses for the interest set, ranked by relevance score. An
/// interest set matching nothing yields an empty list; the caller decides
/// whether to fall back to an unfiltered listing.
pub async fn recommended_courses(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<RecommendResponse>, RecommendError> {
    if query.limit == 0 {
        return Err(RecommendError::InvalidLimit);
    }

    let interests = parse_interests(&query.interests);
    let catalog = state.catalog.fetch_all().await;
    let courses = recommend(&interests, &catalog, query.limit);

    Ok(Json(RecommendResponse { interests, courses }))
}

/// GET /api/interests?interests=a,b
///
/// Catalog filtered to courses matching any interest; an empty interest
/// set returns the whole catalog.
pub async fn courses_by_interests(
    State(state): State<AppState>,
    Query(query): Query<InterestsQuery>,
) -> Json<RecommendResponse> {
    let interests = parse_interests(&query.interests);
    let catalog = state.catalog.fetch_all().await;
    let courses = filter_by_interests(&interests, &catalog);

    Json(RecommendResponse { interests, courses })
}

/// Recommendation API errors
#[derive(Debug)]
pub enum RecommendError {
    InvalidLimit,
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecommendError::InvalidLimit => {
                (StatusCode::BAD_REQUEST, "limit must be positive".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interests_splits_and_trims() {
        assert_eq!(
            parse_interests("programming, design ,,  "),
            vec!["programming", "design"]
        );
        assert!(parse_interests("").is_empty());
    }
}
