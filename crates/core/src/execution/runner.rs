//! Recursive task runner
//!
//! This module resolves a task name against the task table and runs it,
//! following references to other tasks and collecting the commands that fail.

use colored::*;
use tracing::{debug, warn};

use crate::configs::tasks::{TaskDefinition, TaskMapping};
use crate::execution::command::ShellRunner;
use crate::results::{ExecutionError, ExecutionResult};
use crate::types::{YastaError, YastaResult};

/// Configuration for the task runner
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskRunnerConfig {
    /// Keep running the remaining entries of a sequence after a failure
    pub ignore_failed: bool,
}

/// Runs tasks through a [`ShellRunner`], one command at a time
pub struct TaskRunner<R: ShellRunner> {
    shell: R,
    config: TaskRunnerConfig,
}

/// State shared across one top-level `execute` call
struct RunState {
    errors: Vec<ExecutionError>,
    /// Task names currently being resolved, outermost first
    chain: Vec<String>,
}

impl RunState {
    fn enter(&mut self, task_name: &str) -> YastaResult<()> {
        if self.chain.iter().any(|name| name == task_name) {
            let mut cycle = self.chain.clone();
            cycle.push(task_name.to_string());
            return Err(YastaError::CyclicReference(cycle));
        }
        self.chain.push(task_name.to_string());
        Ok(())
    }

    fn leave(&mut self) {
        self.chain.pop();
    }
}

impl<R: ShellRunner> TaskRunner<R> {
    pub fn new(shell: R, config: TaskRunnerConfig) -> Self {
        Self { shell, config }
    }

    /// Run `target` and return every command that failed.
    ///
    /// Failing commands are collected rather than raised. Unless
    /// `ignore_failed` is set, a sequence stops at the first failure and so
    /// does every sequence enclosing it.
    pub fn execute(&self, tasks: &TaskMapping, target: &str) -> YastaResult<Vec<ExecutionError>> {
        let definition = tasks
            .get(target)
            .ok_or_else(|| YastaError::TaskNotFound(target.to_string()))?;

        print_running(target, 0);

        let mut state = RunState {
            errors: Vec::new(),
            chain: Vec::new(),
        };
        state.enter(target)?;
        self.run_definition(tasks, definition, &mut state, 1)?;
        state.leave();

        debug!(
            "Task '{}' finished with {} failed command(s)",
            target,
            state.errors.len()
        );
        Ok(state.errors)
    }

    fn run_definition(
        &self,
        tasks: &TaskMapping,
        definition: &TaskDefinition,
        state: &mut RunState,
        indent: usize,
    ) -> YastaResult<()> {
        match definition {
            TaskDefinition::Literal(item) => self.run_item(tasks, item, state, indent),
            TaskDefinition::Sequence(items) => {
                for item in items {
                    print_running(item, indent);
                    self.run_item(tasks, item, state, indent + 2)?;
                    if !state.errors.is_empty() && !self.config.ignore_failed {
                        return Ok(());
                    }
                }
                Ok(())
            }
        }
    }

    /// Run an entry that is either the name of another task or a shell command
    fn run_item(
        &self,
        tasks: &TaskMapping,
        item: &str,
        state: &mut RunState,
        indent: usize,
    ) -> YastaResult<()> {
        match tasks.get(item) {
            Some(definition) => {
                debug!("Resolving task reference '{}'", item);
                state.enter(item)?;
                self.run_definition(tasks, definition, state, indent + 2)?;
                state.leave();
                Ok(())
            }
            None => {
                self.run_command(item, state, indent);
                Ok(())
            }
        }
    }

    fn run_command(&self, command: &str, state: &mut RunState, indent: usize) {
        match self.shell.run(command) {
            Ok(result) if result.success() => print_success(&result, indent),
            Ok(result) => {
                let error = ExecutionError::from(&result);
                print_failure(&error.error, indent);
                state.errors.push(error);
            }
            Err(e) => {
                warn!("Failed to start command '{}': {}", command, e);
                let error = ExecutionError {
                    command: command.to_string(),
                    error: format!("failed to start command: {}", e),
                };
                print_failure(&error.error, indent);
                state.errors.push(error);
            }
        }
    }
}

fn pad(indent: usize) -> String {
    " ".repeat(indent)
}

fn print_running(name: &str, indent: usize) {
    println!(
        "{}{} {} {}",
        pad(indent),
        "Running".yellow().bold(),
        format!("'{}'", name).blue().bold(),
        "command".yellow().bold()
    );
}

fn print_success(result: &ExecutionResult, indent: usize) {
    for line in result.stdout.trim_end().lines() {
        println!("{}{}", pad(indent), line);
    }
    println!("{}{}", pad(indent), "✓ Success".green().bold());
}

fn print_failure(message: &str, indent: usize) {
    println!(
        "{}{}",
        pad(indent),
        format!("✗ Error: {}", message).red().bold()
    );
}
