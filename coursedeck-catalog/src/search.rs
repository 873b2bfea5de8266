//! Free-text search over the catalog
//!
//! Case-insensitive substring match; no ranking, input order is preserved.

use coursedeck_common::Course;

/// Filter `courses` to those matching `query`.
///
/// An empty or whitespace-only query matches everything. A course matches
/// when the query appears (case-insensitively) in its title, description,
/// instructor, category, or any tag.
pub fn search(query: &str, courses: &[Course]) -> Vec<Course> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return courses.to_vec();
    }

    courses
        .iter()
        .filter(|course| matches_term(course, &term))
        .cloned()
        .collect()
}

fn matches_term(course: &Course, term: &str) -> bool {
    course.title.to_lowercase().contains(term)
        || course.description.to_lowercase().contains(term)
        || course.instructor.to_lowercase().contains(term)
        || course.category.to_lowercase().contains(term)
        || course.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_course;
    use serde_json::json;

    fn sample() -> Vec<Course> {
        vec![
            normalize_course(
                "0",
                &json!({
                    "title": "JavaScript Fundamentals",
                    "description": "Web programming from scratch",
                    "instructor": "Sarah Johnson",
                    "category": "Programming",
                    "tags": ["javascript", "web-development"]
                }),
            ),
            normalize_course(
                "1",
                &json!({
                    "title": "Photography Masterclass",
                    "description": "Composition and lighting",
                    "instructor": "Alex Rodriguez",
                    "category": "Photography",
                    "tags": ["lightroom"]
                }),
            ),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let courses = sample();
        let result = search("", &courses);
        assert_eq!(result.len(), courses.len());
        let result = search("   ", &courses);
        assert_eq!(result.len(), courses.len());
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let result = search("JAVASCRIPT", &sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "0");
    }

    #[test]
    fn test_matches_across_fields() {
        let courses = sample();
        assert_eq!(search("sarah", &courses).len(), 1); // instructor
        assert_eq!(search("lighting", &courses).len(), 1); // description
        assert_eq!(search("photog", &courses).len(), 1); // category
        assert_eq!(search("lightroom", &courses).len(), 1); // tag
    }

    #[test]
    fn test_substring_of_tag_matches() {
        let result = search("web-dev", &sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "0");
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search("quantum chemistry", &sample()).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let courses = sample();
        // "o" appears in both courses; order must stay 0 then 1
        let result = search("o", &courses);
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1"]);
    }
}
