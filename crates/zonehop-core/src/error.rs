//! Error types for zonehop operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZonehopError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Empty roster: at least one timezone entry is required")]
    EmptyRoster,
}

pub type Result<T> = std::result::Result<T, ZonehopError>;
