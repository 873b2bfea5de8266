//! Cursor-based pagination over the in-memory catalog
//!
//! The backing store is always fetched in full, so there is no server-side
//! cursor; the continuation token is simply the id of the last course on
//! the previous page.

use coursedeck_common::Course;

/// One page of courses plus continuation metadata
#[derive(Debug, Clone)]
pub struct CoursePage {
    /// Courses in canonical (ascending id) order
    pub items: Vec<Course>,
    /// Cursor for the next page; `None` when this page is empty or ends
    /// the catalog
    pub next_cursor: Option<String>,
    /// Whether at least one course remains after this page
    pub has_more: bool,
}

/// Slice one page out of the ordered course list.
///
/// `cursor` is the id of the last course of the previous page; the page
/// starts at the course immediately after it. `None` (or a cursor that
/// matches no known id) starts from the first course.
///
/// # Examples
/// ```
/// use coursedeck_catalog::pagination::page;
/// use coursedeck_catalog::normalize::normalize_course;
/// use serde_json::json;
///
/// let courses: Vec<_> = (0..10)
///     .map(|i| normalize_course(&i.to_string(), &json!({})))
///     .collect();
///
/// let first = page(&courses, None, 3);
/// assert_eq!(first.items.len(), 3);
/// assert_eq!(first.next_cursor.as_deref(), Some("2"));
/// assert!(first.has_more);
/// ```
pub fn page(courses: &[Course], cursor: Option<&str>, page_size: usize) -> CoursePage {
    // Unknown cursors restart from the top rather than erroring
    let start = cursor
        .and_then(|c| courses.iter().position(|course| course.id == c))
        .map(|pos| pos + 1)
        .unwrap_or(0);

    let end = (start + page_size).min(courses.len());
    let items: Vec<Course> = courses[start..end].to_vec();
    let has_more = end < courses.len();

    let next_cursor = if has_more {
        items.last().map(|course| course.id.clone())
    } else {
        None
    };

    CoursePage {
        items,
        next_cursor,
        has_more,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_course;
    use serde_json::json;

    fn courses(n: u64) -> Vec<Course> {
        (0..n)
            .map(|i| normalize_course(&i.to_string(), &json!({})))
            .collect()
    }

    fn ids(page: &CoursePage) -> Vec<&str> {
        page.items.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_first_page() {
        let list = courses(10);
        let p = page(&list, None, 3);
        assert_eq!(ids(&p), vec!["0", "1", "2"]);
        assert_eq!(p.next_cursor.as_deref(), Some("2"));
        assert!(p.has_more);
    }

    #[test]
    fn test_continuation() {
        let list = courses(10);
        let p = page(&list, Some("2"), 3);
        assert_eq!(ids(&p), vec!["3", "4", "5"]);
        assert_eq!(p.next_cursor.as_deref(), Some("5"));
    }

    #[test]
    fn test_final_partial_page() {
        let list = courses(10);
        let p = page(&list, Some("8"), 3);
        assert_eq!(ids(&p), vec!["9"]);
        assert!(!p.has_more);
        assert!(p.next_cursor.is_none());
    }

    #[test]
    fn test_exact_boundary_final_page() {
        let list = courses(6);
        let p = page(&list, Some("2"), 3);
        assert_eq!(ids(&p), vec!["3", "4", "5"]);
        assert!(!p.has_more);
        // Slice includes the last course, so there is no continuation
        assert!(p.next_cursor.is_none());
    }

    #[test]
    fn test_unknown_cursor_restarts() {
        let list = courses(10);
        let p = page(&list, Some("no-such-id"), 3);
        assert_eq!(ids(&p), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_cursor_at_last_item_yields_empty_page() {
        let list = courses(4);
        let p = page(&list, Some("3"), 3);
        assert!(p.items.is_empty());
        assert!(!p.has_more);
        assert!(p.next_cursor.is_none());
    }

    #[test]
    fn test_empty_input() {
        let p = page(&[], None, 5);
        assert!(p.items.is_empty());
        assert!(!p.has_more);
        assert!(p.next_cursor.is_none());
    }

    #[test]
    fn test_full_walk_covers_list_exactly_once() {
        let list = courses(10);
        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        let mut sizes = Vec::new();

        loop {
            let p = page(&list, cursor.as_deref(), 3);
            sizes.push(p.items.len());
            seen.extend(p.items.iter().map(|c| c.id.clone()));
            if !p.has_more {
                break;
            }
            cursor = p.next_cursor;
        }

        assert_eq!(sizes, vec![3, 3, 3, 1]);
        let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(seen, expected);
    }
}
