use anyhow::Result;
use colored::*;
use yasta_core::task_manager::{TaskManager, TaskManagerConfig};

pub fn execute(config: TaskManagerConfig, command: &str) -> Result<()> {
    let mut manager = TaskManager::load(config)?;

    manager
        .delete_task(command)
        .map_err(|e| anyhow::anyhow!("Failed to delete task: {}", e))?;

    println!("{} Deleted task {}", "✓".green().bold(), command.cyan());

    Ok(())
}
