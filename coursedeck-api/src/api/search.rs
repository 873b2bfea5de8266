//! Free-text course search

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use coursedeck_catalog::search::search;
use coursedeck_common::Course;

use crate::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text search term; empty matches everything
    #[serde(default)]
    pub q: String,
}

/// Search response with results and metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub courses: Vec<Course>,
}

/// GET /api/search?q=term
///
/// Case-insensitive substring search across title, description, instructor,
/// category, and tags. Results keep catalog order; no ranking.
pub async fn search_courses(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let catalog = state.catalog.fetch_all().await;
    let courses = search(&query.q, &catalog);

    Json(SearchResponse {
        query: query.q,
        total_results: courses.len(),
        courses,
    })
}
