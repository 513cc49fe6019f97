//! Error types for the partlog-core library.
//!
//! Field extraction itself is total and never fails; errors here come from
//! the record store and configuration handling around it.

use thiserror::Error;

/// Main error type for the partlog library.
#[derive(Error, Debug)]
pub enum PartlogError {
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the part record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or parse the store file.
    #[error("failed to load store: {0}")]
    Load(String),

    /// Failed to write the store file.
    #[error("failed to save store: {0}")]
    Save(String),

    /// No record with the given id.
    #[error("no record with id {0}")]
    NotFound(u64),
}

/// Result type for the partlog library.
pub type Result<T> = std::result::Result<T, PartlogError>;
