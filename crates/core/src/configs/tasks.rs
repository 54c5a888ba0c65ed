use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the top-level table that holds the task definitions
pub const TASKS_TABLE: &str = "yasta-tasks";

/// Config file used when no `--path` is given
pub const DEFAULT_CONFIG_FILE: &str = "pyproject.toml";

/// Command written by `yasta init`
pub const DEFAULT_TEST_COMMAND: &str = "echo 'You do not have any tests.'";

/// A single task: either one shell command or an ordered list of entries.
///
/// Each entry of a sequence is resolved by name first: if it matches another
/// task in the same table it runs that task, otherwise it is handed to the
/// shell as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskDefinition {
    Literal(String),
    Sequence(Vec<String>),
}

impl fmt::Display for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskDefinition::Literal(command) => f.write_str(command),
            TaskDefinition::Sequence(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for TaskDefinition {
    fn from(command: &str) -> Self {
        TaskDefinition::Literal(command.to_string())
    }
}

impl From<Vec<String>> for TaskDefinition {
    fn from(items: Vec<String>) -> Self {
        TaskDefinition::Sequence(items)
    }
}

/// Task name to definition, in document order
pub type TaskMapping = IndexMap<String, TaskDefinition>;

/// The tasks table written by `yasta init`
pub fn default_tasks() -> TaskMapping {
    let mut tasks = TaskMapping::new();
    tasks.insert("test".to_string(), DEFAULT_TEST_COMMAND.into());
    tasks
}

/// Decode the value stored under [`TASKS_TABLE`]
pub fn parse_tasks_table(value: toml::Value) -> Result<TaskMapping, toml::de::Error> {
    value.try_into()
}
