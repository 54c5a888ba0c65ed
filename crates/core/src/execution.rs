//! Task execution module
//!
//! This module handles the actual execution of tasks: running literal commands
//! through the shell and resolving references between tasks.

pub mod command;
pub mod runner;

pub use command::{OutputMode, ShellCommandExecutor, ShellRunner};
pub use runner::{TaskRunner, TaskRunnerConfig};
