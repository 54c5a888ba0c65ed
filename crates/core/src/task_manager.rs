//! High-level task management interface
//!
//! This module provides the [`TaskManager`] which serves as the primary interface
//! for every CLI operation. It owns the parsed config file and the task table,
//! and writes changes straight back to disk.
//!
//! ## Example
//!
//! ```rust,no_run
//! use yasta_core::task_manager::{RunOptions, TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> yasta_core::types::YastaResult<()> {
//! let mut manager = TaskManager::load(TaskManagerConfig {
//!     config_path: PathBuf::from("pyproject.toml"),
//! })?;
//!
//! manager.add_tasks(&["lint=cargo clippy", "ci=[lint,cargo test]"])?;
//! let errors = manager.run_task("ci", RunOptions::default())?;
//! println!("{} command(s) failed", errors.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::arguments::parse_task_assignments;
use crate::configs::tasks::{default_tasks, TaskMapping, TASKS_TABLE};
use crate::execution::{OutputMode, ShellCommandExecutor, TaskRunner, TaskRunnerConfig};
use crate::results::ExecutionError;
use crate::store::{self, TaskDocument};
use crate::types::{YastaError, YastaResult};

/// Configuration for loading a task manager
pub struct TaskManagerConfig {
    pub config_path: PathBuf,
}

/// Options for a single `run`
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    pub ignore_failed: bool,
    pub output_mode: OutputMode,
}

/// High-level task manager that encapsulates all config and run operations
pub struct TaskManager {
    config_path: PathBuf,
    tasks: TaskMapping,
}

impl TaskManager {
    /// Load the task table from an existing config file
    pub fn load(config: TaskManagerConfig) -> YastaResult<Self> {
        let tasks = store::load(&config.config_path)?;
        Ok(Self {
            config_path: config.config_path,
            tasks,
        })
    }

    /// Write the default task table, creating the file if needed.
    ///
    /// An existing task table is only replaced when `force` is set.
    pub fn init(config: TaskManagerConfig, force: bool) -> YastaResult<Self> {
        let document = TaskDocument::open_or_empty(&config.config_path)?;
        if document.has_tasks() && !force {
            return Err(YastaError::TasksAlreadyInitialized {
                path: config.config_path,
                table: TASKS_TABLE.to_string(),
            });
        }

        let manager = Self {
            config_path: config.config_path,
            tasks: default_tasks(),
        };
        manager.save()?;
        info!("Initialized tasks in {}", manager.config_path.display());
        Ok(manager)
    }

    pub fn tasks(&self) -> &TaskMapping {
        &self.tasks
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Merge `key=value` assignments into the task table and save.
    ///
    /// Returns the names that were added or replaced.
    pub fn add_tasks<S: AsRef<str>>(&mut self, assignments: &[S]) -> YastaResult<Vec<String>> {
        let parsed = parse_task_assignments(assignments)?;
        let names = parsed.keys().cloned().collect();
        self.tasks.extend(parsed);
        self.save()?;
        Ok(names)
    }

    /// Remove a task and save
    pub fn delete_task(&mut self, name: &str) -> YastaResult<()> {
        if self.tasks.shift_remove(name).is_none() {
            return Err(YastaError::TaskNotFound(name.to_string()));
        }
        self.save()?;
        info!("Deleted task '{}'", name);
        Ok(())
    }

    /// Run a task through the host shell and return the commands that failed
    pub fn run_task(&self, name: &str, options: RunOptions) -> YastaResult<Vec<ExecutionError>> {
        let runner = TaskRunner::new(
            ShellCommandExecutor::new(options.output_mode),
            TaskRunnerConfig {
                ignore_failed: options.ignore_failed,
            },
        );
        runner.execute(&self.tasks, name)
    }

    fn save(&self) -> YastaResult<()> {
        if !store::save(&self.config_path, &self.tasks) {
            return Err(YastaError::Config(format!(
                "Failed to write config file {}",
                self.config_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::configs::tasks::{TaskDefinition, DEFAULT_TEST_COMMAND};
    use crate::store::load;

    fn config(path: &Path) -> TaskManagerConfig {
        TaskManagerConfig {
            config_path: path.to_path_buf(),
        }
    }

    #[test]
    fn test_init_writes_default_task() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");

        TaskManager::init(config(&path), false).unwrap();

        let tasks = load(&path).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks["test"], TaskDefinition::Literal(DEFAULT_TEST_COMMAND.into()));
    }

    #[test]
    fn test_init_keeps_unrelated_tables() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(&path, "[project]\nname = \"demo\"\n").unwrap();

        TaskManager::init(config(&path), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[project]"));
        assert!(content.contains("name = \"demo\""));
        assert!(load(&path).unwrap().contains_key("test"));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(&path, "[yasta-tasks]\nlint = \"cargo clippy\"\n").unwrap();

        let err = TaskManager::init(config(&path), false).err().unwrap();
        assert!(matches!(err, YastaError::TasksAlreadyInitialized { .. }));
        assert!(load(&path).unwrap().contains_key("lint"));

        TaskManager::init(config(&path), true).unwrap();
        let tasks = load(&path).unwrap();
        assert!(!tasks.contains_key("lint"));
        assert!(tasks.contains_key("test"));
    }

    #[test]
    fn test_add_then_reload() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        TaskManager::init(config(&path), false).unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        let added = manager.add_tasks(&["a=1", "b=[x,y]"]).unwrap();
        assert_eq!(added, vec!["a", "b"]);

        let tasks = load(&path).unwrap();
        assert_eq!(tasks["a"], TaskDefinition::Literal("1".into()));
        assert_eq!(
            tasks["b"],
            TaskDefinition::Sequence(vec!["x".into(), "y".into()])
        );
        assert!(tasks.contains_key("test"));
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(
            &path,
            "[yasta-tasks]\nfirst = \"echo 1\"\nsecond = \"echo 2\"\n",
        )
        .unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        manager.add_tasks(&["first=echo one"]).unwrap();

        let tasks = load(&path).unwrap();
        let names: Vec<&str> = tasks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(tasks["first"], TaskDefinition::Literal("echo one".into()));
    }

    #[test]
    fn test_add_rejects_malformed_argument_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        TaskManager::init(config(&path), false).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        let err = manager.add_tasks(&["ok=1", "broken"]).unwrap_err();

        assert!(matches!(err, YastaError::MalformedArgument { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_delete_task() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(&path, "[yasta-tasks]\na = \"echo a\"\nb = \"echo b\"\n").unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        manager.delete_task("a").unwrap();

        let tasks = load(&path).unwrap();
        assert!(!tasks.contains_key("a"));
        assert!(tasks.contains_key("b"));
    }

    #[test]
    fn test_write_failure_is_reported_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_dir = temp_dir.path().join("project");
        fs::create_dir(&project_dir).unwrap();
        let path = project_dir.join("pyproject.toml");
        fs::write(&path, "[yasta-tasks]\na = \"echo a\"\n").unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        fs::remove_dir_all(&project_dir).unwrap();

        let err = manager.add_tasks(&["b=echo b"]).unwrap_err();
        assert!(matches!(err, YastaError::Config(_)));
        assert_eq!(
            err.to_string(),
            format!(
                "Configuration error: Failed to write config file {}",
                path.display()
            )
        );
    }

    #[test]
    fn test_delete_missing_task() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(&path, "[yasta-tasks]\na = \"echo a\"\n").unwrap();

        let mut manager = TaskManager::load(config(&path)).unwrap();
        let err = manager.delete_task("missing").unwrap_err();

        assert!(matches!(err, YastaError::TaskNotFound(name) if name == "missing"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");

        let err = TaskManager::load(config(&path)).err().unwrap();
        assert!(matches!(err, YastaError::ConfigNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_task_through_shell() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        fs::write(
            &path,
            "[yasta-tasks]\nok = \"true\"\nbad = \"exit 1\"\nall = [\"ok\", \"bad\", \"ok\"]\n",
        )
        .unwrap();
        let manager = TaskManager::load(config(&path)).unwrap();

        assert!(manager.run_task("ok", RunOptions::default()).unwrap().is_empty());

        let errors = manager.run_task("all", RunOptions::default()).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].command, "exit 1");

        let errors = manager
            .run_task(
                "all",
                RunOptions {
                    ignore_failed: true,
                    ..RunOptions::default()
                },
            )
            .unwrap();
        assert_eq!(errors.len(), 1);
    }
}
