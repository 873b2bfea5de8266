//! Record normalizer
//!
//! Catalog records in the store are loosely typed and partially populated:
//! field names differ between import generations (`title` vs `course_name`
//! vs `name`), numeric fields arrive as numbers or strings, and whole
//! attributes go missing. This module maps any raw record onto a fully
//! populated canonical [`Course`]. It is pure and total: a malformed or
//! completely empty record still yields a Course via deterministic
//! defaults, and nothing outside this module ever sees unnormalized data.

use coursedeck_common::{Course, Difficulty};
use serde_json::Value;

/// Default rating when the raw record has none
const DEFAULT_RATING: f64 = 4.5;
/// Default duration string
const DEFAULT_DURATION: &str = "10 hours";
/// Default category
const DEFAULT_CATEGORY: &str = "Programming";

/// Normalize one raw catalog record into a canonical Course.
///
/// `id` is the record's key in the store (decimal text for catalog slots).
/// Field resolution per attribute: primary field name, else legacy
/// alternate(s), else the documented default.
pub fn normalize_course(id: &str, raw: &Value) -> Course {
    // Numeric id drives the synthesized defaults; non-numeric keys only
    // occur in fallback/test data and degrade to 0.
    let id_num: u64 = id.parse().unwrap_or(0);

    let difficulty_raw = string_field(raw, &["difficulty", "course_level"])
        .unwrap_or_else(|| "Intermediate".to_string());
    let difficulty = Difficulty::from_raw(&difficulty_raw);

    let category =
        string_field(raw, &["category"]).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let title = string_field(raw, &["title", "course_name", "name"])
        .unwrap_or_else(|| format!("Course {}", id));
    let description = string_field(raw, &["description", "course_description"])
        .unwrap_or_else(|| {
            format!(
                "Learn {} and practical exercises in this {} course.",
                category, difficulty_raw
            )
        });
    let instructor = string_field(raw, &["instructor", "course_author", "author"])
        .unwrap_or_else(|| format!("Instructor {}", id_num.div_ceil(5).max(1)));
    let duration = string_field(raw, &["duration", "course_duration"])
        .unwrap_or_else(|| DEFAULT_DURATION.to_string());

    let image_url = string_field(raw, &["imageUrl", "url", "course_image"])
        .unwrap_or_else(|| placeholder_image_url(&title));
    let url = string_field(raw, &["url"])
        .unwrap_or_else(|| format!("https://example.com/course/{}", id));

    // Display filler, not real data: students/lessons synthesized from the
    // id when the record carries none.
    let students = numeric_field(raw, &["students", "course_students"])
        .map(|n| n.max(0.0) as u64)
        .unwrap_or(1000 + id_num * 100);
    let lessons = numeric_field(raw, &["lessons", "course_lessons"])
        .map(|n| n.max(0.0) as u64)
        .unwrap_or(20 + (id_num % 30));

    let rating = numeric_field(raw, &["rating", "course_rating"]).unwrap_or(DEFAULT_RATING);
    let price = numeric_field(raw, &["price", "course_price"]).unwrap_or(0.0);

    let tags = tags_field(raw).unwrap_or_else(|| vec![category.to_lowercase()]);

    Course {
        id: id.to_string(),
        title,
        description,
        instructor,
        duration,
        category,
        difficulty,
        rating,
        price,
        students,
        lessons,
        tags,
        image_url,
        url,
    }
}

/// First present, non-empty string among the named fields
fn string_field(raw: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| raw.get(name))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First field that coerces to a finite number.
///
/// Accepts JSON numbers and numeric-looking strings; NaN and unparseable
/// values are skipped so they can never leak into a Course.
fn numeric_field(raw: &Value, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .filter_map(|name| raw.get(name))
        .filter_map(coerce_number)
        .find(|n| n.is_finite())
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Tags array, dropping non-string entries; `None` when absent or empty
fn tags_field(raw: &Value) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .get("tags")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn placeholder_image_url(title: &str) -> String {
    format!(
        "https://placehold.co/600x400/1a1a1a/ffffff?text={}",
        urlencode(title)
    )
}

/// Minimal percent-encoding for the placeholder image text
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_is_fully_populated() {
        let course = normalize_course("3", &json!({}));
        assert_eq!(course.id, "3");
        assert_eq!(course.title, "Course 3");
        assert_eq!(course.category, "Programming");
        assert_eq!(course.difficulty, Difficulty::Intermediate);
        assert_eq!(course.duration, "10 hours");
        assert_eq!(course.rating, 4.5);
        assert_eq!(course.price, 0.0);
        assert_eq!(course.students, 1300); // 1000 + 3*100
        assert_eq!(course.lessons, 23); // 20 + (3 % 30)
        assert_eq!(course.tags, vec!["programming"]);
        assert!(!course.description.is_empty());
        assert!(!course.instructor.is_empty());
        assert!(course.image_url.starts_with("https://"));
        assert!(course.url.ends_with("/course/3"));
    }

    #[test]
    fn test_non_object_record_is_fully_populated() {
        // Totality holds even for records that are not objects at all
        let course = normalize_course("7", &json!("garbage"));
        assert_eq!(course.title, "Course 7");
        assert_eq!(course.students, 1700);
    }

    #[test]
    fn test_legacy_field_names_resolve() {
        let raw = json!({
            "course_name": "Legacy Title",
            "course_description": "Legacy description",
            "course_author": "Legacy Author",
            "course_duration": "6 weeks",
            "course_rating": 3.9,
            "course_price": 19,
            "course_students": 42,
            "course_lessons": 7,
        });
        let course = normalize_course("1", &raw);
        assert_eq!(course.title, "Legacy Title");
        assert_eq!(course.description, "Legacy description");
        assert_eq!(course.instructor, "Legacy Author");
        assert_eq!(course.duration, "6 weeks");
        assert_eq!(course.rating, 3.9);
        assert_eq!(course.price, 19.0);
        assert_eq!(course.students, 42);
        assert_eq!(course.lessons, 7);
    }

    #[test]
    fn test_primary_field_wins_over_legacy() {
        let raw = json!({"title": "Primary", "course_name": "Legacy"});
        assert_eq!(normalize_course("1", &raw).title, "Primary");
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let raw = json!({"rating": "4.2", "price": " 15 ", "students": "800"});
        let course = normalize_course("1", &raw);
        assert_eq!(course.rating, 4.2);
        assert_eq!(course.price, 15.0);
        assert_eq!(course.students, 800);
    }

    #[test]
    fn test_non_numeric_values_fall_back_to_defaults() {
        let raw = json!({"rating": "five stars", "price": {"amount": 3}, "lessons": "NaN"});
        let course = normalize_course("2", &raw);
        assert_eq!(course.rating, 4.5);
        assert_eq!(course.price, 0.0);
        assert_eq!(course.lessons, 22); // 20 + (2 % 30)
    }

    #[test]
    fn test_difficulty_normalization() {
        assert_eq!(
            normalize_course("1", &json!({"difficulty": "Advanced"})).difficulty,
            Difficulty::Advanced
        );
        assert_eq!(
            normalize_course("1", &json!({"difficulty": "ninja"})).difficulty,
            Difficulty::Intermediate
        );
        assert_eq!(
            normalize_course("1", &json!({"course_level": "expert"})).difficulty,
            Difficulty::Expert
        );
    }

    #[test]
    fn test_description_default_mentions_category_and_difficulty() {
        let raw = json!({"category": "Design", "difficulty": "beginner"});
        let course = normalize_course("1", &raw);
        assert!(course.description.contains("Design"));
        assert!(course.description.contains("beginner"));
    }

    #[test]
    fn test_tags_default_to_lowercased_category() {
        let course = normalize_course("1", &json!({"category": "Data Science"}));
        assert_eq!(course.tags, vec!["data science"]);
    }

    #[test]
    fn test_tags_drop_non_string_entries() {
        let raw = json!({"tags": ["rust", 7, null, "systems"]});
        assert_eq!(normalize_course("1", &raw).tags, vec!["rust", "systems"]);
    }

    #[test]
    fn test_image_url_falls_back_through_url() {
        let raw = json!({"url": "https://example.com/c", "title": "T"});
        let course = normalize_course("1", &raw);
        assert_eq!(course.image_url, "https://example.com/c");
        assert_eq!(course.url, "https://example.com/c");
    }

    #[test]
    fn test_placeholder_image_encodes_title() {
        let course = normalize_course("1", &json!({"title": "UI/UX Design"}));
        assert_eq!(
            course.image_url,
            "https://placehold.co/600x400/1a1a1a/ffffff?text=UI%2FUX+Design"
        );
    }

    #[test]
    fn test_lessons_formula_wraps_at_thirty() {
        assert_eq!(normalize_course("31", &json!({})).lessons, 21); // 20 + (31 % 30)
    }
}
