//! Gear Tracker
//!
//! REST JSON server tracking production equipment: a catalog of equipment
//! grouped in sets, its assignment to shooting projects and draft lists, and
//! detection of double-booked gear across overlapping shooting schedules.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub repository: repository::Repository,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository.clone(), config.auth.clone());

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            repository,
        }
    }
}
