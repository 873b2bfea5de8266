//! Recommendation scorer
//!
//! Ranks interest-filtered courses by a weighted relevance score and
//! returns a bounded top-N list. The score is an internal ranking artifact;
//! it is never attached to the returned courses.
//!
//! Score per course:
//! - +10 for an exact category match
//! - +5 per matching tag
//! - +3 per interest found as a substring of title or description
//! - +2 × rating
//! - +2 when students > 1000 (popularity bonus)

use crate::interests::filter_by_interests;
use coursedeck_common::Course;
use tracing::debug;

/// Popularity threshold for the student-count bonus
const POPULARITY_THRESHOLD: u64 = 1000;

/// Top-`limit` courses for the given interest set.
///
/// The input is reduced through the interest filter first; when that yields
/// nothing the result is empty; callers decide whether to widen to an
/// unfiltered list, this scorer never does it implicitly.
pub fn recommend(interests: &[String], courses: &[Course], limit: usize) -> Vec<Course> {
    let filtered = filter_by_interests(interests, courses);
    if filtered.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();

    let mut scored: Vec<(f64, Course)> = filtered
        .into_iter()
        .map(|course| (relevance_score(&course, &lowered), course))
        .collect();

    // Stable sort keeps the canonical id order for full ties, which makes
    // the output deterministic.
    scored.sort_by(|(score_a, course_a), (score_b, course_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                course_b
                    .rating
                    .partial_cmp(&course_a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    debug!(
        candidates = scored.len(),
        limit, "Scored interest-filtered courses"
    );

    scored
        .into_iter()
        .take(limit)
        .map(|(_, course)| course)
        .collect()
}

/// Weighted relevance of one course against a lowercased interest set
pub(crate) fn relevance_score(course: &Course, interests: &[String]) -> f64 {
    let mut score = 0.0;

    let category = course.category.to_lowercase();
    if interests.iter().any(|i| *i == category) {
        score += 10.0;
    }

    let tag_matches = course
        .tags
        .iter()
        .filter(|tag| interests.iter().any(|i| *i == tag.to_lowercase()))
        .count();
    score += tag_matches as f64 * 5.0;

    let title = course.title.to_lowercase();
    let description = course.description.to_lowercase();
    let content_matches = interests
        .iter()
        .filter(|i| title.contains(i.as_str()) || description.contains(i.as_str()))
        .count();
    score += content_matches as f64 * 3.0;

    score += course.rating * 2.0;

    if course.students > POPULARITY_THRESHOLD {
        score += 2.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_course;
    use serde_json::json;

    fn interests(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scenario_category_rating_popularity() {
        let course = normalize_course(
            "1",
            &json!({
                "title": "JavaScript Fundamentals",
                "description": "...",
                "category": "programming",
                "tags": ["javascript"],
                "rating": 4.8,
                "students": 1250
            }),
        );
        // category 10 + rating 9.6 + popularity 2; no tag or content hits
        let score = relevance_score(&course, &interests(&["programming"]));
        assert!((score - 21.6).abs() < 1e-9);
    }

    #[test]
    fn test_tag_and_content_contributions() {
        let course = normalize_course(
            "2",
            &json!({
                "title": "Rust for Systems",
                "description": "Memory-safe rust programming",
                "category": "Programming",
                "tags": ["rust", "systems"],
                "rating": 4.0,
                "students": 100
            }),
        );
        // tag "rust" 5 + content "rust" in title+description counts once (3)
        // + rating 8.0; no category or popularity
        let score = relevance_score(&course, &interests(&["rust"]));
        assert!((score - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_filter_result_means_empty_recommendation() {
        let courses = vec![normalize_course(
            "1",
            &json!({"title": "Cooking", "description": "Pasta", "category": "Cooking", "tags": ["pasta"]}),
        )];
        assert!(recommend(&interests(&["welding"]), &courses, 6).is_empty());
    }

    #[test]
    fn test_limit_bounds_result() {
        let courses: Vec<_> = (0..20)
            .map(|i| {
                normalize_course(
                    &i.to_string(),
                    &json!({"category": "Programming", "rating": 4.0}),
                )
            })
            .collect();
        let result = recommend(&interests(&["programming"]), &courses, 6);
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_sorted_by_score_then_rating() {
        let courses = vec![
            // id 0: category match only, rating 4.0 -> 10 + 8 = 18
            normalize_course(
                "0",
                &json!({"category": "Design", "rating": 4.0, "students": 10, "tags": ["d0"]}),
            ),
            // id 1: category + tag match, rating 3.0 -> 10 + 5 + 6 = 21
            normalize_course(
                "1",
                &json!({"category": "Design", "rating": 3.0, "students": 10, "tags": ["design"]}),
            ),
            // id 2: category match only, rating 4.5 -> 10 + 9 = 19
            normalize_course(
                "2",
                &json!({"category": "Design", "rating": 4.5, "students": 10, "tags": ["d2"]}),
            ),
        ];
        let result = recommend(&interests(&["design"]), &courses, 10);
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "0"]);
    }

    #[test]
    fn test_score_tie_breaks_on_rating() {
        let courses = vec![
            normalize_course(
                "0",
                &json!({"category": "Design", "rating": 4.0, "students": 2000, "tags": ["a"]}),
            ),
            // same score components except rating traded for popularity:
            // id 1 has rating 5.0 and no bonus -> equal score, higher rating
            normalize_course(
                "1",
                &json!({"category": "Design", "rating": 5.0, "students": 500, "tags": ["b"]}),
            ),
        ];
        // id 0: 10 + 8 + 2 = 20; id 1: 10 + 10 = 20 -> rating breaks the tie
        let result = recommend(&interests(&["design"]), &courses, 2);
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "0"]);
    }

    #[test]
    fn test_full_tie_preserves_input_order() {
        let courses = vec![
            normalize_course("0", &json!({"category": "Design", "rating": 4.0, "students": 10, "tags": ["x"]})),
            normalize_course("1", &json!({"category": "Design", "rating": 4.0, "students": 10, "tags": ["y"]})),
        ];
        let result = recommend(&interests(&["design"]), &courses, 2);
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn test_empty_interests_rank_whole_catalog() {
        // Empty interest set passes the filter unchanged, so recommendation
        // degrades to a rating-weighted top-N
        let courses = vec![
            normalize_course("0", &json!({"rating": 3.0})),
            normalize_course("1", &json!({"rating": 5.0, "students": 50})),
        ];
        let result = recommend(&[], &courses, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }
}
