//! Error types for Obsidion.
//!
//! This crate provides the error types shared by every Obsidion crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Cache and store failures are surfaced to callers unmodified. Use
//! [`ObsidionError::is_cache_unavailable`] and
//! [`ObsidionError::is_store_unavailable`] to classify them.
//!
//! # Examples
//!
//! ```
//! use obsidion_error::{CacheError, CacheErrorKind, ObsidionResult};
//!
//! fn read_cache() -> ObsidionResult<Vec<u8>> {
//!     Err(CacheError::new(CacheErrorKind::Unavailable("connection refused".into())))?
//! }
//!
//! let err = read_cache().unwrap_err();
//! assert!(err.is_cache_unavailable());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod config;
mod database;
mod error;
mod json;
mod settings;

pub use cache::{CacheError, CacheErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{ObsidionError, ObsidionErrorKind, ObsidionResult};
pub use json::JsonError;
pub use settings::{SettingsError, SettingsErrorKind};
