//! Catalog query command handlers (estimate, formats, qualities)

use std::process::ExitCode;

use serde_json::json;

use crate::domain::advisory::recommended_qualities;
use crate::domain::catalog::{AudioFormat, Quality, ALL_FORMATS, ALL_QUALITIES};
use crate::domain::recording::{Duration, RecordingType};
use crate::domain::selection::{estimate_file_size, BYTES_PER_MB};

use super::app::{EXIT_ERROR, EXIT_USAGE_ERROR};
use super::presenter::Presenter;

/// Run the estimate subcommand
pub fn run_estimate(
    format: AudioFormat,
    quality: Quality,
    duration: &str,
    json: bool,
) -> ExitCode {
    let presenter = Presenter::new();

    let duration: Duration = match duration.parse() {
        Ok(d) => d,
        Err(e) => {
            presenter.error(&format!("Invalid duration: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let size_mb = estimate_file_size(format, quality, duration);

    if json {
        let payload = json!({
            "format": format.as_str(),
            "quality": quality.as_str(),
            "duration": duration.to_string(),
            "estimated_size_mb": size_mb,
        });
        return emit_json(&presenter, &payload);
    }

    presenter.key_value("format", format.label());
    presenter.key_value("quality", quality.as_str());
    presenter.key_value("duration", &duration.to_string());
    presenter.key_value("estimated_size", &presenter.format_size(size_mb));
    ExitCode::SUCCESS
}

/// Run the formats subcommand
pub fn run_formats(json: bool) -> ExitCode {
    let presenter = Presenter::new();

    if json {
        let payload: Vec<_> = ALL_FORMATS
            .iter()
            .map(|format| {
                let costs: serde_json::Map<String, serde_json::Value> = ALL_QUALITIES
                    .iter()
                    .map(|q| (q.as_str().to_string(), json!(mb_per_minute(*format, *q))))
                    .collect();
                json!({
                    "name": format.as_str(),
                    "label": format.label(),
                    "extension": format.extension(),
                    "lossless": format.is_lossless(),
                    "vbr": format.supports_vbr(),
                    "compression_ratio": format.compression_ratio(),
                    "mb_per_minute": costs,
                })
            })
            .collect();
        return emit_json(&presenter, &json!(payload));
    }

    for format in ALL_FORMATS {
        let costs = ALL_QUALITIES
            .iter()
            .map(|q| format!("{} {:.2}", q.as_str(), mb_per_minute(*format, *q)))
            .collect::<Vec<_>>()
            .join(", ");
        presenter.key_value(
            format.as_str(),
            &format!(
                "{} | {} | {} MB/min",
                format.label(),
                if format.is_lossless() { "lossless" } else { "lossy" },
                costs
            ),
        );
    }
    ExitCode::SUCCESS
}

/// Run the qualities subcommand
pub fn run_qualities(recording_type: &str, format: AudioFormat, json: bool) -> ExitCode {
    let presenter = Presenter::new();

    let resolved = RecordingType::from_label(recording_type);
    let tiers = recommended_qualities(resolved, format);

    if json {
        let payload = json!({
            "recording_type": resolved.as_str(),
            "format": format.as_str(),
            "recommended": tiers.iter().map(|q| q.as_str()).collect::<Vec<_>>(),
        });
        return emit_json(&presenter, &payload);
    }

    presenter.key_value("recording_type", resolved.as_str());
    presenter.key_value("format", format.as_str());
    presenter.key_value(
        "recommended",
        &tiers
            .iter()
            .map(|q| q.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    ExitCode::SUCCESS
}

fn mb_per_minute(format: AudioFormat, quality: Quality) -> f64 {
    let mb = format.byte_cost_per_minute(quality) as f64 / BYTES_PER_MB;
    (mb * 100.0).round() / 100.0
}

fn emit_json(presenter: &Presenter, payload: &serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => {
            presenter.output(&text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            presenter.error(&format!("Failed to encode output: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
