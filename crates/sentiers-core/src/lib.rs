//! Sentiers Core - Domain models, dataset loading, and configuration
//!
//! This crate contains the trail domain model, the dataset loader port with its
//! file and HTTP adapters, layered configuration, and the persisted theme preference.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod ports;
pub mod preferences;

pub use error::{Result, SentiersError};
pub use models::{Catalog, Theme, TrailRecord, TrailType, ViewMode};
