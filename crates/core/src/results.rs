//! Result types for task execution
//!
//! This module contains the records produced while running tasks, providing a
//! centralized location for output structures.

/// Outcome of one literal shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub command: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Text recorded for a failed command: its stderr, or a description of the
    /// exit status when nothing was captured.
    pub fn error_message(&self) -> String {
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// A command that failed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    pub command: String,
    pub error: String,
}

impl From<&ExecutionResult> for ExecutionError {
    fn from(result: &ExecutionResult) -> Self {
        Self {
            command: result.command.clone(),
            error: result.error_message(),
        }
    }
}
