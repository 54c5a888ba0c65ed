use anyhow::Result;
use colored::*;
use yasta_core::task_manager::{TaskManager, TaskManagerConfig};

pub fn execute(config: TaskManagerConfig, force: bool) -> Result<()> {
    let manager = TaskManager::init(config, force)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tasks: {}", e))?;

    println!(
        "{} {}",
        "✓".green().bold(),
        format!("Created tasks in {}", manager.config_path().display()).green()
    );
    for name in manager.tasks().keys() {
        println!("  {}", name.cyan());
    }

    Ok(())
}
