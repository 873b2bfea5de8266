//! Catalog store access
//!
//! Fetches raw catalog records from the remote document store and turns
//! them into the canonical in-memory course list every other operation
//! works over. Failure policy: a broken or empty live store degrades to the
//! fixed fallback dataset; callers never see a low-level store error from
//! `fetch_all`, only a populated list.

use crate::fallback::fallback_records;
use crate::normalize::normalize_course;
use crate::store::{CourseStore, StoreError};
use coursedeck_common::Course;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Store node holding the course catalog
const COURSES_PATH: &str = "courses";

/// Catalog facade over an injected store client
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn CourseStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Fetch and normalize the full catalog in ascending id order.
    ///
    /// Reads the `courses` node first and falls back to the store root
    /// (older datasets keep course slots at the top level). Only keys that
    /// are non-negative decimal integers count as catalog slots; anything
    /// else is non-course data co-located in the same tree. A store error
    /// or an empty result yields the fallback dataset instead.
    pub async fn fetch_all(&self) -> Vec<Course> {
        let raw = match self.read_catalog_node().await {
            Ok(Some(value)) => value,
            Ok(None) => {
                info!("No catalog data in store, serving fallback dataset");
                return self.fallback_courses();
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed, serving fallback dataset");
                return self.fallback_courses();
            }
        };

        let courses = normalize_entries(&raw);
        if courses.is_empty() {
            info!("Catalog node held no course slots, serving fallback dataset");
            return self.fallback_courses();
        }

        debug!(count = courses.len(), "Fetched catalog from store");
        courses
    }

    /// Fetch a single course by id; `None` when the record is absent.
    ///
    /// Unlike `fetch_all`, a store failure here propagates to the caller.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<Course>, StoreError> {
        let raw = match self.store.read_child(COURSES_PATH, id).await? {
            Some(value) => Some(value),
            None => self.store.read_child("", id).await?,
        };

        Ok(raw.map(|value| normalize_course(id, &value)))
    }

    /// Sorted, deduplicated category names across the catalog
    pub async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .fetch_all()
            .await
            .into_iter()
            .map(|course| course.category)
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    async fn read_catalog_node(&self) -> Result<Option<Value>, StoreError> {
        // Permission models differ between deployments: the courses node
        // may be denied while the root is readable, so an error on the
        // first read still tries the root.
        match self.store.read(COURSES_PATH).await {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => {
                debug!("No courses node, trying store root");
                self.store.read("").await
            }
            Err(e) => {
                warn!(error = %e, "Courses node read failed, trying store root");
                self.store.read("").await
            }
        }
    }

    fn fallback_courses(&self) -> Vec<Course> {
        // Identical normalizer path as live data, by construction
        fallback_records()
            .iter()
            .map(|(key, raw)| normalize_course(key, raw))
            .collect()
    }
}

/// Filter a raw tree to catalog slots and normalize them in key order
fn normalize_entries(raw: &Value) -> Vec<Course> {
    let Some(map) = raw.as_object() else {
        return Vec::new();
    };

    let mut slots: Vec<(u64, &String, &Value)> = map
        .iter()
        .filter_map(|(key, value)| key.parse::<u64>().ok().map(|n| (n, key, value)))
        .collect();
    slots.sort_by_key(|(n, _, _)| *n);

    slots
        .into_iter()
        .map(|(_, key, value)| normalize_course(key, value))
        .collect()
}
