//! # Coursedeck Common Library
//!
//! Shared code for the Coursedeck services including:
//! - Canonical data models (Course, User, UserProgress, Review)
//! - Common error type
//! - Configuration loading and layered settings resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Course, Difficulty, Review, User, UserProgress};
