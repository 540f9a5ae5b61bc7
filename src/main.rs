//! Recplan CLI entry point

use std::process::ExitCode;

use clap::Parser;

use recplan::cli::{
    app::{load_merged_config, run_plan, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, PlanOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
    query_cmd::{run_estimate, run_formats, run_qualities},
};
use recplan::domain::config::{AppConfig, Priority};
use recplan::domain::recording::Duration;
use recplan::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Estimate {
            format,
            quality,
            duration,
            json,
        }) => {
            return run_estimate(format.into(), quality.into(), &duration, json);
        }
        Some(Commands::Formats { json }) => {
            return run_formats(json);
        }
        Some(Commands::Qualities {
            recording_type,
            format,
            json,
        }) => {
            return run_qualities(&recording_type, format.into(), json);
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        recording_type: cli.recording_type.clone(),
        prioritize: cli.prioritize.map(|p| Priority::from(p).to_string()),
        max_size_mb: cli.max_size_mb,
        duration: cli.duration.clone(),
        json: if cli.json { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Parse duration
    let duration = match config.duration.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => Some(d),
            Err(e) => {
                presenter.error(&format!("Invalid duration: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => None,
    };

    let options = PlanOptions {
        recording_type: config.recording_type_or_default(),
        priority: config.priority_or_default(),
        max_size_mb: config.max_size_mb,
        duration,
        json: config.json_or_default(),
    };

    run_plan(options)
}
