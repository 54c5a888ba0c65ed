use std::path::PathBuf;

use thiserror::Error;

/// The main error type for yasta operations
#[derive(Debug, Error)]
pub enum YastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config file '{}' has no [{table}] table, run `yasta init` first", path.display())]
    TasksTableMissing { path: PathBuf, table: String },

    #[error("Config file '{}' already defines [{table}], use --force to overwrite it", path.display())]
    TasksAlreadyInitialized { path: PathBuf, table: String },

    #[error("Task '{0}' not found")]
    TaskNotFound(String),

    #[error("Malformed argument '{argument}': {reason}")]
    MalformedArgument { argument: String, reason: String },

    #[error("Circular task reference detected: {}", .0.join(" -> "))]
    CyclicReference(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for yasta operations
pub type YastaResult<T> = Result<T, YastaError>;
