//! Database layer for taskberry.
//!
//! A single SQLite table, `task`, holds every record. Each store operation
//! opens its own connection from a [`db::StoreConfig`] and closes it before
//! returning; there is no pooling and no cross-call caching.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskberry::db::{db::StoreConfig, tasks::Tasks};
//! use taskberry::libs::task::Task;
//!
//! let tasks = Tasks::new(StoreConfig::new("taskberry.db"))?;
//! let mut task = Task::new("Buy milk", "Errand", false);
//! tasks.save(&mut task)?;
//! # Ok::<(), taskberry::db::error::StoreError>(())
//! ```

/// Connection opening and database location.
pub mod db;

/// Store-level error type.
pub mod error;

/// CRUD operations over the `task` table.
pub mod tasks;
