//! Main app runner for planning

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{plan_recording, PlanInput};
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;

use super::args::PlanOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load the config file and merge CLI overrides on top of it
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };
    file_config.merge(cli_config)
}

/// Run the planner and present the chosen configuration
pub fn run_plan(options: PlanOptions) -> ExitCode {
    let presenter = Presenter::new();

    let outcome = plan_recording(&PlanInput {
        recording_type: options.recording_type,
        priority: options.priority,
        max_size_mb: options.max_size_mb,
        duration: options.duration,
    });

    if options.json {
        return match serde_json::to_string_pretty(&outcome) {
            Ok(payload) => {
                presenter.output(&payload);
                ExitCode::SUCCESS
            }
            Err(e) => {
                presenter.error(&format!("Failed to encode plan: {}", e));
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let config = &outcome.configuration;
    presenter.key_value(
        "format",
        &format!("{} (.{})", config.format.label(), config.extension()),
    );
    presenter.key_value("quality", config.quality.as_str());
    presenter.key_value("sample_rate", &format!("{} Hz", config.sample_rate_hz));
    presenter.key_value("channels", config.channels.as_str());
    presenter.key_value(
        "noise_reduction",
        if config.noise_reduction { "on" } else { "off" },
    );
    presenter.key_value(
        "bitrate_mode",
        if config.vbr { "variable" } else { "constant" },
    );
    if let Some(size_mb) = outcome.estimated_size_mb {
        presenter.key_value("estimated_size", &presenter.format_size(size_mb));
    }

    presenter.info(&outcome.advice);

    // The engine degrades silently; surfacing a missed cap is this
    // caller's job.
    if outcome.constraint_met == Some(false) {
        if let (Some(cap), Some(size_mb)) = (options.max_size_mb, outcome.estimated_size_mb) {
            presenter.warn(&format!(
                "Predicted size {} exceeds the {} cap; this is the smallest achievable configuration",
                presenter.format_size(size_mb),
                presenter.format_size(cap)
            ));
        }
    }

    ExitCode::SUCCESS
}
