//! Configuration module for Splitly
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitlyPaths;
pub use settings::Settings;
