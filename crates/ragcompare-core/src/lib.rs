//! ragcompare core — configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{Config, OpenAiSettings, SearchSettings};
pub use error::{Error, Result};
