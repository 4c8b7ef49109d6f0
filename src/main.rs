//! Online Food Order Predictor - Main Entry Point
//!
//! Loads the pre-trained artifacts once, then runs the interactive form
//! loop: collect a customer record, transform it, score it, render the
//! verdict.

use anyhow::{Context, Result};
use food_order_predictor::{
    artifacts::Artifacts, config::AppConfig, form, inference::InferenceContext,
    metrics::SessionMetrics, types::prediction::PredictionResult,
};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config)?;

    info!("Starting online food order predictor");

    // Missing artifacts abort here, before any form interaction.
    let artifacts = Artifacts::load_from_dir(&config.artifacts.dir)?;
    let mut context = InferenceContext::new(artifacts);
    info!(
        features = context.feature_count(),
        classes = ?context.class_labels(),
        "Inference context initialized"
    );

    let metrics = SessionMetrics::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Online Food Order Prediction")?;
    writeln!(
        output,
        "Predicts whether a customer will order food online."
    )?;

    loop {
        let record = form::collect_record(&mut input, &mut output)?;

        let started = Instant::now();

        // Transform failures drop this interaction; the loaded artifacts
        // stay usable for the next one.
        let features = match context.transform(&record) {
            Ok(features) => features,
            Err(e) => {
                error!(error = %e, "Failed to preprocess input");
                writeln!(output, "Error while processing input: {}", e)?;
                continue;
            }
        };

        let prediction = context.predict(&features)?;
        render_prediction(&mut output, &prediction)?;

        metrics.record_prediction(started.elapsed(), &prediction.label);

        write!(
            output,
            "\nPress Enter for another prediction, or type 'exit' to quit: "
        )?;
        output.flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 || answer.trim().eq_ignore_ascii_case("exit") {
            break;
        }
    }

    metrics.print_summary();

    Ok(())
}

/// Initialize the tracing subscriber from the logging configuration.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.logging.level)
        .context("Invalid logging.level in configuration")?;

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

/// Render the verdict in its display style.
fn render_prediction<W: Write>(output: &mut W, prediction: &PredictionResult) -> Result<()> {
    writeln!(output, "---")?;
    writeln!(output, "{}", prediction.headline())?;
    writeln!(output, "{}", prediction.probability_line()?)?;
    Ok(())
}
