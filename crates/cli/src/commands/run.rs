use anyhow::Result;
use colored::*;
use tracing::debug;
use yasta_core::execution::OutputMode;
use yasta_core::results::ExecutionError;
use yasta_core::task_manager::{RunOptions, TaskManager, TaskManagerConfig};

use crate::table::Table;

pub fn execute(config: TaskManagerConfig, target: &str, force: bool, stream: bool) -> Result<()> {
    let manager = TaskManager::load(config)?;
    debug!(
        "Loaded {} task(s) from {}",
        manager.tasks().len(),
        manager.config_path().display()
    );

    let options = RunOptions {
        ignore_failed: force,
        output_mode: if stream {
            OutputMode::Stream
        } else {
            OutputMode::Capture
        },
    };

    let errors = manager
        .run_task(target, options)
        .map_err(|e| anyhow::anyhow!("Failed to run task: {}", e))?;

    println!();
    report(&errors);

    if !errors.is_empty() {
        anyhow::bail!("Task '{}' failed", target);
    }
    Ok(())
}

/// Print a success banner, or the failed commands as a table
pub fn report(errors: &[ExecutionError]) {
    if errors.is_empty() {
        println!(
            "{} {}",
            "✓".green().bold(),
            "No errors occurred".green().bold()
        );
        return;
    }

    println!(
        "{} {}",
        "✗".red().bold(),
        format!("{} error(s) occurred!", errors.len()).red().bold()
    );
    print!("{}", error_table(errors).render());
}

fn error_table(errors: &[ExecutionError]) -> Table {
    let mut table = Table::new("Command", "Error");
    for error in errors {
        table.add_row(error.command.as_str(), error.error.as_str());
    }
    table
}
