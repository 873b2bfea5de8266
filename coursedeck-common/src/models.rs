//! Canonical data models
//!
//! The remote document store speaks camelCase JSON (`imageUrl`,
//! `enrolledCourses`, `lastAccessed`), so every model serializes with
//! `rename_all = "camelCase"` to stay wire-compatible.

use serde::{Deserialize, Serialize};

/// Course difficulty level
///
/// Closed set; raw records carry free-form strings which are mapped onto
/// this enum by the record normalizer. Serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Map a raw difficulty string onto the canonical set.
    ///
    /// Accepts exactly the eight literal forms (lowercase and Capitalized);
    /// anything else normalizes to `Intermediate`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "beginner" | "Beginner" => Difficulty::Beginner,
            "intermediate" | "Intermediate" => Difficulty::Intermediate,
            "advanced" | "Advanced" => Difficulty::Advanced,
            "expert" | "Expert" => Difficulty::Expert,
            _ => Difficulty::Intermediate,
        }
    }

    /// Lowercase canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

/// Canonical course record, post-normalization
///
/// Every field is populated: the record normalizer substitutes documented
/// defaults for anything missing or mistyped in the raw record, so no
/// `Option` leaks past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub price: f64,
    /// Enrollment count. When absent from the raw record this is display
    /// filler derived from the id, not real data.
    pub students: u64,
    pub lessons: u64,
    pub tags: Vec<String>,
    pub image_url: String,
    pub url: String,
}

/// User profile, owned by the user store
///
/// The catalog core only reads `interests`; everything else belongs to the
/// enrollment/favorites/progress surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    #[serde(default)]
    pub favorite_courses: Vec<String>,
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Fresh profile as created at signup: empty interest and course sets.
    pub fn new(uid: String, email: String, display_name: Option<String>) -> Self {
        Self {
            uid,
            email,
            display_name,
            interests: Vec::new(),
            enrolled_courses: Vec::new(),
            favorite_courses: Vec::new(),
            completed_courses: Vec::new(),
            is_admin: false,
        }
    }
}

/// Per-user, per-course progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub course_id: String,
    /// Integer percent in [0, 100], derived from lesson counts
    pub progress: u32,
    pub completed_lessons: u64,
    pub total_lessons: u64,
    /// Unix milliseconds
    pub last_accessed: i64,
}

impl UserProgress {
    /// Derived percent: `round(100 * completed / total)`, 0 when the course
    /// has no lessons.
    pub fn percent(completed_lessons: u64, total_lessons: u64) -> u32 {
        if total_lessons == 0 {
            return 0;
        }
        let completed = completed_lessons.min(total_lessons);
        ((completed as f64 / total_lessons as f64) * 100.0).round() as u32
    }
}

/// Course review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub course_id: String,
    pub user_id: String,
    pub user_name: String,
    /// Integer rating 1..=5
    pub rating: u32,
    pub comment: String,
    /// Unix milliseconds
    pub timestamp: i64,
}
