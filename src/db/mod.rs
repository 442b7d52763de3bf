//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema sync
//! - SQLite pragma configuration
//! - Repository layer for forms and submissions

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{FormRepository, MemoryRepository, Repository, StoreError};
