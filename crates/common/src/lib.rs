//! Common types and utilities for the blue/green demo services

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
pub use models::Environment;
