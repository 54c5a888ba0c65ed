use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yasta_core::configs::tasks::DEFAULT_CONFIG_FILE;
use yasta_core::task_manager::TaskManagerConfig;

mod commands;
mod table;

/// yasta - Yet another simple task runner
#[derive(Parser)]
#[command(name = "yasta")]
#[command(about = "Run named shell commands stored in a TOML file")]
#[command(version)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
    /// Path to the config file holding the [yasta-tasks] table
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    path: PathBuf,
}

impl ConfigArgs {
    fn manager_config(self) -> TaskManagerConfig {
        TaskManagerConfig {
            config_path: self.path,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the tasks table with a sample task
    Init {
        #[command(flatten)]
        config: ConfigArgs,
        /// Replace an existing tasks table
        #[arg(short, long)]
        force: bool,
    },
    /// Add or replace tasks, e.g. `lint="cargo clippy"` or `ci=[lint,test]`
    Add {
        /// Tasks in key=value form
        #[arg(required = true)]
        tasks: Vec<String>,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Remove a task
    Delete {
        /// Name of the task to remove
        command: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Run a task
    Run {
        /// Name of the task to run
        command: String,
        #[command(flatten)]
        config: ConfigArgs,
        /// Keep running the remaining commands after a failure
        #[arg(short, long)]
        force: bool,
        /// Stream command output to the terminal instead of capturing it
        #[arg(short, long)]
        stream: bool,
    },
    /// List the configured tasks
    Show {
        #[command(flatten)]
        config: ConfigArgs,
        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config, force } => commands::init::execute(config.manager_config(), force),
        Commands::Add { tasks, config } => commands::add::execute(config.manager_config(), &tasks),
        Commands::Delete { command, config } => {
            commands::delete::execute(config.manager_config(), &command)
        }
        Commands::Run {
            command,
            config,
            force,
            stream,
        } => commands::run::execute(config.manager_config(), &command, force, stream),
        Commands::Show { config, json } => commands::show::execute(config.manager_config(), json),
    }
}
