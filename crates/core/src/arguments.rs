//! Parsing of `key=value` task assignments given to `yasta add`

use crate::configs::tasks::{TaskDefinition, TaskMapping};
use crate::types::{YastaError, YastaResult};

/// Parse `key=value` pairs into task definitions.
///
/// A value wrapped in brackets (`ci=[lint,test]`) becomes a sequence split on
/// commas; anything else is a literal command. Later keys override earlier ones.
pub fn parse_task_assignments<S: AsRef<str>>(arguments: &[S]) -> YastaResult<TaskMapping> {
    let mut tasks = TaskMapping::new();
    for argument in arguments {
        let (key, definition) = parse_task_assignment(argument.as_ref())?;
        tasks.insert(key, definition);
    }
    Ok(tasks)
}

fn parse_task_assignment(argument: &str) -> YastaResult<(String, TaskDefinition)> {
    if argument.matches('=').count() != 1 {
        return Err(malformed(argument, "expected exactly one '=' (key=value)"));
    }
    let (key, value) = argument
        .split_once('=')
        .ok_or_else(|| malformed(argument, "expected exactly one '=' (key=value)"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(malformed(argument, "task name must not be empty"));
    }

    let definition = match value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) if value.len() > 1 => TaskDefinition::Sequence(split_sequence(inner)),
        _ => TaskDefinition::Literal(value.to_string()),
    };

    Ok((key.to_string(), definition))
}

fn split_sequence(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|item| item.trim().to_string()).collect()
}

fn malformed(argument: &str, reason: &str) -> YastaError {
    YastaError::MalformedArgument {
        argument: argument.to_string(),
        reason: reason.to_string(),
    }
}
