//! # TaskBerry
//!
//! A command-line personal task manager. Tasks have a title, an optional
//! category, an importance flag and a completion flag, and are kept in a
//! local SQLite file.
//!
//! ## Features
//!
//! - **Task Store**: CRUD over a single `task` table, one connection per operation
//! - **Free-form arguments**: `add Buy milk --category Errand --important` without quoting
//! - **Listings**: important tasks first, completed tasks hidden unless asked for
//! - **Configuration**: database path from `--db`, `TASKBERRY_DB` or `config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskberry::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
