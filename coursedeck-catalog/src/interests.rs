//! Interest-based catalog filtering
//!
//! Boolean membership test of a user's interest set against each course.
//! The predicate is a monotone OR: adding an interest can only grow the
//! result set.

use coursedeck_common::Course;

/// Filter `courses` to those matching any of `interests`.
///
/// An empty interest set matches everything (show-everything fallback, not
/// match-nothing). A course is included at most once, when any interest:
/// 1. equals its category (case-insensitive), or
/// 2. equals any of its tags (case-insensitive), or
/// 3. appears as a substring of its title or description (case-insensitive).
pub fn filter_by_interests(interests: &[String], courses: &[Course]) -> Vec<Course> {
    if interests.is_empty() {
        return courses.to_vec();
    }

    let lowered: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();

    courses
        .iter()
        .filter(|course| matches_any_interest(course, &lowered))
        .cloned()
        .collect()
}

/// Membership predicate shared with the recommendation scorer.
///
/// `interests` must already be lowercased.
pub(crate) fn matches_any_interest(course: &Course, interests: &[String]) -> bool {
    let category = course.category.to_lowercase();
    let category_match = interests.iter().any(|i| *i == category);

    let tag_match = course
        .tags
        .iter()
        .any(|tag| interests.iter().any(|i| *i == tag.to_lowercase()));

    let title = course.title.to_lowercase();
    let description = course.description.to_lowercase();
    let content_match = interests
        .iter()
        .any(|i| title.contains(i.as_str()) || description.contains(i.as_str()));

    category_match || tag_match || content_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_course;
    use serde_json::json;

    fn sample() -> Vec<Course> {
        vec![
            normalize_course(
                "1",
                &json!({
                    "title": "JavaScript Fundamentals",
                    "description": "Web programming from scratch",
                    "category": "Programming",
                    "tags": ["javascript", "web-development"]
                }),
            ),
            normalize_course(
                "2",
                &json!({
                    "title": "UI/UX Design Principles",
                    "description": "Design thinking for digital products",
                    "category": "Design",
                    "tags": ["ui", "ux"]
                }),
            ),
            normalize_course(
                "3",
                &json!({
                    "title": "Business Strategy",
                    "description": "Programming your organization for growth",
                    "category": "Business",
                    "tags": ["strategy"]
                }),
            ),
        ]
    }

    fn interests(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_interests_match_everything() {
        let courses = sample();
        assert_eq!(filter_by_interests(&[], &courses).len(), courses.len());
    }

    #[test]
    fn test_category_match_is_exact_case_insensitive() {
        let result = filter_by_interests(&interests(&["programming"]), &sample());
        // Course 1 by category, course 3 by description substring
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let result = filter_by_interests(&interests(&["ux"]), &sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_content_match_is_substring() {
        let result = filter_by_interests(&interests(&["strategy"]), &sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn test_course_included_once_despite_multiple_matches() {
        // "design" hits course 2 by category, tag-adjacent title, and description
        let result = filter_by_interests(&interests(&["design"]), &sample());
        assert_eq!(result.iter().filter(|c| c.id == "2").count(), 1);
    }

    #[test]
    fn test_adding_interest_never_shrinks_result() {
        let courses = sample();
        let base = filter_by_interests(&interests(&["ux"]), &courses);
        let widened = filter_by_interests(&interests(&["ux", "business"]), &courses);
        assert!(widened.len() >= base.len());
        for course in &base {
            assert!(widened.iter().any(|c| c.id == course.id));
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_by_interests(&interests(&["gardening"]), &sample()).is_empty());
    }
}
