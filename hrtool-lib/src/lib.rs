//! Core library for HR Tool.
//!
//! Holds the horse record store and its local persistence, plus the derived
//! views (search, list rows, breeding options) and the finance calculator that
//! the front ends render.

use thiserror::Error;

pub mod finance;
pub mod fs;
pub mod repository;
pub mod views;

pub use repository::Repository;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Name is required.")]
    NameRequired,
    #[error("Unable to locate a home directory")]
    NoHome,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed horse data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed configuration: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Unable to serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
