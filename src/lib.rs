//! # Roster
//!
//! A repository layer for organizational units, sites, and personnel that
//! enforces uniqueness and referential integrity on a SQLite store, usable
//! both as a library and through the `roster` binary.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! roster = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use roster::config::StoreConfig;
//! use roster::repo::Repositories;
//! use roster::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(StoreConfig::with_data_dir("./data")).unwrap();
//! store.initialize().unwrap();
//!
//! let repos = Repositories::new(Arc::new(store));
//! let unit = repos.units.create("Engineering").unwrap();
//! ```
//!
//! Every mutation returns [`error::Result`]: a business-rule rejection is
//! `Err(Error::Rejected(_))`, anything else is a store fault. Use
//! [`types::MutationResult::from_result`] to turn rejections into a
//! `success`/`message` pair for display.
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod repo;
pub mod store;
pub mod types;
pub mod validation;
