//! coursedeck-catalog - course catalog core library
//!
//! Pure library surface consumed by the HTTP service:
//! - Store access with graceful fallback to a fixed sample dataset
//! - Record normalization of heterogeneous raw course records
//! - Cursor-based pagination over the in-memory catalog
//! - Free-text search, interest filtering, and recommendation scoring
//!
//! All list operations work over the full normalized in-memory catalog;
//! that is O(n) per call, which is fine at the hundreds-to-low-thousands
//! scale this catalog runs at.

pub mod catalog;
pub mod fallback;
pub mod interests;
pub mod normalize;
pub mod pagination;
pub mod recommend;
pub mod search;
pub mod store;

pub use catalog::Catalog;
pub use pagination::{page, CoursePage};
pub use store::{CourseStore, HttpCourseStore, MemoryStore, StoreError};
