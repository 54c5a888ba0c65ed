//! Shell command execution
//!
//! Literal task commands are handed to the host shell (`sh -c` on Unix,
//! `cmd /C` on Windows) so pipes, globbing and redirects behave the way they
//! would when typed by hand.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::results::ExecutionResult;
use crate::types::YastaResult;

/// What happens to a command's stdout and stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect output and hand it back in the [`ExecutionResult`]
    #[default]
    Capture,
    /// Let the command write straight to the terminal
    Stream,
}

/// Runs one literal command to completion
pub trait ShellRunner {
    fn run(&self, command: &str) -> YastaResult<ExecutionResult>;
}

impl<R: ShellRunner + ?Sized> ShellRunner for &R {
    fn run(&self, command: &str) -> YastaResult<ExecutionResult> {
        (**self).run(command)
    }
}

/// [`ShellRunner`] backed by the host shell
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandExecutor {
    output_mode: OutputMode,
}

impl ShellCommandExecutor {
    pub fn new(output_mode: OutputMode) -> Self {
        Self { output_mode }
    }

    fn shell_command(cmd: &str) -> Command {
        if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(cmd);
            command
        } else {
            let mut command = Command::new("sh");
            command.arg("-c").arg(cmd);
            command
        }
    }
}

impl ShellRunner for ShellCommandExecutor {
    fn run(&self, cmd: &str) -> YastaResult<ExecutionResult> {
        debug!("Spawning shell command: {}", cmd);
        let mut command = Self::shell_command(cmd);

        let result = match self.output_mode {
            OutputMode::Capture => {
                let output = command.stdin(Stdio::inherit()).output()?;
                ExecutionResult {
                    command: cmd.to_string(),
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            OutputMode::Stream => {
                let status = command.status()?;
                ExecutionResult {
                    command: cmd.to_string(),
                    exit_code: status.code(),
                    stdout: String::new(),
                    stderr: String::new(),
                }
            }
        };

        trace!("Command '{}' finished with {:?}", cmd, result.exit_code);
        Ok(result)
    }
}
