//! Fixed fallback dataset
//!
//! Served whenever the live store errors out or comes back empty, so
//! browsing keeps working without the remote database. The records are kept
//! in *raw* form and run through the same normalizer as live data; the
//! fallback path must never diverge from the live path.

use serde_json::{json, Value};

/// Fallback catalog as ordered (key, raw record) pairs.
///
/// Keys continue the decimal catalog-slot convention of the live store.
pub fn fallback_records() -> Vec<(String, Value)> {
    let records = [
        json!({
            "title": "JavaScript Fundamentals",
            "description": "Master the basics of JavaScript programming with hands-on exercises and real-world projects.",
            "instructor": "Sarah Johnson",
            "duration": "8 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=JavaScript+Fundamentals",
            "url": "https://example.com/course/1",
            "difficulty": "beginner",
            "price": 49,
            "rating": 4.8,
            "students": 1250,
            "lessons": 24,
            "category": "Programming",
            "tags": ["javascript", "programming", "beginner", "web-development"]
        }),
        json!({
            "title": "React Development Mastery",
            "description": "Build modern web applications with React, including hooks, context, and state management.",
            "instructor": "Mike Chen",
            "duration": "12 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=React+Development",
            "url": "https://example.com/course/2",
            "difficulty": "intermediate",
            "price": 79,
            "rating": 4.9,
            "students": 890,
            "lessons": 32,
            "category": "Programming",
            "tags": ["react", "javascript", "frontend", "web-development"]
        }),
        json!({
            "title": "UI/UX Design Principles",
            "description": "Learn the fundamentals of user interface and user experience design for digital products.",
            "instructor": "Emma Davis",
            "duration": "10 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=UI%2FUX+Design",
            "url": "https://example.com/course/3",
            "difficulty": "beginner",
            "price": 59,
            "rating": 4.7,
            "students": 1100,
            "lessons": 28,
            "category": "Design",
            "tags": ["ui", "ux", "design", "figma", "prototyping"]
        }),
        json!({
            "title": "Digital Marketing Strategy",
            "description": "Comprehensive guide to digital marketing including SEO, social media, and content marketing.",
            "instructor": "David Wilson",
            "duration": "15 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=Digital+Marketing",
            "url": "https://example.com/course/4",
            "difficulty": "intermediate",
            "price": 89,
            "rating": 4.6,
            "students": 750,
            "lessons": 35,
            "category": "Marketing",
            "tags": ["marketing", "seo", "social-media", "content-marketing"]
        }),
        json!({
            "title": "Python for Data Science",
            "description": "Learn Python programming specifically for data analysis, visualization, and machine learning.",
            "instructor": "Dr. Lisa Park",
            "duration": "20 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=Python+Data+Science",
            "url": "https://example.com/course/5",
            "difficulty": "intermediate",
            "price": 99,
            "rating": 4.9,
            "students": 1500,
            "lessons": 45,
            "category": "Data Science",
            "tags": ["python", "data-science", "machine-learning", "pandas", "numpy"]
        }),
        json!({
            "title": "Photography Masterclass",
            "description": "Advanced photography techniques covering composition, lighting, and post-processing.",
            "instructor": "Alex Rodriguez",
            "duration": "18 hours",
            "imageUrl": "https://placehold.co/600x400/1a1a1a/ffffff?text=Photography+Masterclass",
            "url": "https://example.com/course/6",
            "difficulty": "advanced",
            "price": 129,
            "rating": 4.8,
            "students": 650,
            "lessons": 40,
            "category": "Photography",
            "tags": ["photography", "lightroom", "photoshop", "composition"]
        }),
    ];

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ((i + 1).to_string(), record))
        .collect()
}
