//! Configuration module for the reputation hub
//!
//! Supports loading configuration from files and environment variables.

mod settings;

pub use settings::*;
