//! yasta Core Library
//!
//! This is the core library for yasta, a small task runner that keeps named
//! shell commands in a TOML file. It provides all the business logic for
//! reading and writing the task table and for running tasks.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`task_manager`] - High-level interface used by the CLI
//! - [`execution`] - Shell execution and recursive task resolution
//! - [`store`] - Loading and saving the config file
//! - [`configs`] - Task definitions as stored in the `yasta-tasks` table
//! - [`arguments`] - Parsing of `key=value` task assignments
//! - [`results`] - Records produced while running tasks
//! - [`types`] - Common error types and type aliases
//!
//! ## Config format
//!
//! ```toml
//! [yasta-tasks]
//! lint = "cargo clippy --all-targets"
//! test = "cargo test"
//! ci = ["lint", "test", "cargo build --release"]
//! ```
//!
//! Entries of a list that name another task run that task; everything else is
//! passed to the shell.

pub mod arguments;
pub mod configs;
pub mod execution;
pub mod results;
pub mod store;
pub mod task_manager;
pub mod types;

// Re-export the main types for easier usage
pub use configs::tasks::{TaskDefinition, TaskMapping};
pub use results::{ExecutionError, ExecutionResult};
pub use task_manager::{RunOptions, TaskManager, TaskManagerConfig};
pub use types::{YastaError, YastaResult};
