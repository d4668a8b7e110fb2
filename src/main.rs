mod analysis;
mod config;
mod data;
mod loader;
mod output;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use analysis::{classify_levels, compute_momentum, detect_levels};
use config::AppConfig;
use loader::{load_prices, validate_series};
use output::print_report;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    run(&config)
}

fn run(config: &AppConfig) -> Result<()> {
    let input_path = &config.input_path;
    if !Path::new(input_path).exists() {
        bail!("input file {:?} does not exist", input_path);
    }

    let points = load_prices(input_path)
        .with_context(|| format!("failed to load price series from {:?}", input_path))?;
    validate_series(&points)?;

    let start = points.first().unwrap();
    let end = points.last().unwrap();
    println!(
        "Loaded {} price points spanning {} to {}",
        points.len(),
        start.timestamp.format("%Y-%m-%d %H:%M"),
        end.timestamp.format("%Y-%m-%d %H:%M"),
    );

    let prices: Vec<f64> = points.iter().map(|point| point.price).collect();

    let levels = detect_levels(&prices, config.num_levels, config.precision)?;
    println!("Detected {} price levels", levels.len());

    let momentum = compute_momentum(
        &prices,
        config.fast_period,
        config.slow_period,
        config.signal_period,
    )?;

    let classified = classify_levels(&prices, &levels, config.tolerance)?;

    print_report(&points, &classified, &momentum);

    Ok(())
}
