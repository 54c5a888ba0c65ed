use anyhow::{Context, Result};
use colored::*;
use yasta_core::task_manager::{TaskManager, TaskManagerConfig};

use crate::table::Table;

pub fn execute(config: TaskManagerConfig, json: bool) -> Result<()> {
    let manager = TaskManager::load(config)?;

    if json {
        let rendered = serde_json::to_string_pretty(manager.tasks())
            .context("Failed to encode tasks as JSON")?;
        println!("{}", rendered);
        return Ok(());
    }

    if manager.tasks().is_empty() {
        println!("  {}", "No tasks defined".dimmed());
        return Ok(());
    }

    let mut table = Table::new("Task", "Command");
    for (name, definition) in manager.tasks() {
        table.add_row(name.as_str(), definition.to_string());
    }
    print!("{}", table.render());

    Ok(())
}
