use anyhow::Result;
use colored::*;
use yasta_core::task_manager::{TaskManager, TaskManagerConfig};

pub fn execute(config: TaskManagerConfig, assignments: &[String]) -> Result<()> {
    let mut manager = TaskManager::load(config)?;

    let names = manager
        .add_tasks(assignments)
        .map_err(|e| anyhow::anyhow!("Failed to add tasks: {}", e))?;

    for name in names {
        let Some(definition) = manager.tasks().get(&name) else {
            continue;
        };
        println!(
            "{} {} {}",
            "✓".green().bold(),
            name.cyan().bold(),
            format!("= {}", definition).dimmed()
        );
    }

    Ok(())
}
