//! Core library modules for taskberry.
//!
//! - **task**: the `Task` value and query filters
//! - **parser**: title / category / importance derivation from raw arguments
//! - **config**, **data_storage**: settings and per-user file locations
//! - **view**, **messages**: terminal output
//!
//! ```rust
//! use taskberry::libs::parser::parse_fields;
//!
//! let tokens: Vec<String> = ["Buy", "milk", "--cat", "Errand"].iter().map(|s| s.to_string()).collect();
//! let fields = parse_fields(&tokens).unwrap();
//! assert_eq!(fields.title, "Buy milk");
//! assert_eq!(fields.category, "Errand");
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod parser;
pub mod task;
pub mod view;
