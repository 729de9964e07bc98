//! Splitly - group expense splitting from the terminal
//!
//! This library provides the core functionality for the Splitly application.
//! Members form groups, log expenses paid by one member and shared among
//! several, and Splitly works out net balances and the payments that settle
//! the group.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `ledger`: The balance calculator and settlement matcher (pure functions)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, groups, expenses, settlements)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal tables
//! - `reports`: The group report
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `splitly` binary
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use splitly::config::{paths::SplitlyPaths, settings::Settings};
//!
//! let paths = SplitlyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SplitlyError;
