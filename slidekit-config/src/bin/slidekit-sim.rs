use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use slidekit_config::{CarouselSettings, SettingsSource, Simulation, Step};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "slidekit-sim",
    about = "Run a scripted carousel session and print a snapshot per step"
)]
struct Cli {
    /// Settings file (TOML or JSON). Falls back to $SLIDEKIT_CONFIG_PATH,
    /// $SLIDEKIT_CONFIG_JSON, then slidekit.toml/json in the working dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of real items in the carousel
    #[arg(long, default_value_t = 5)]
    items: usize,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 300.0)]
    width: f32,
    /// Print the resolved settings as TOML and exit
    #[arg(long)]
    print_settings: bool,
    /// Steps: next, prev, jump:N, drag:DX, swipe:left|right, wait:MS,
    /// resize:W, freeze, thaw, reset
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (settings, source) = match &cli.config {
        Some(path) => (
            CarouselSettings::load_from_file(path)?,
            SettingsSource::File(path.clone()),
        ),
        None => CarouselSettings::load_from_env()?,
    };
    tracing::info!(?source, "carousel settings loaded");

    if cli.print_settings {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let options = settings
        .into_options()
        .context("carousel settings failed validation")?;
    let mut sim = Simulation::new(options, cli.items, cli.width)
        .context("failed to mount carousel")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &sim.snapshot())?;
    writeln!(out)?;
    for step in cli.steps {
        let report = sim.apply(step);
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }

    let host = sim.finish();
    tracing::info!(
        writes = host.offsets().len(),
        elapsed_ms = host.now().as_millis() as u64,
        "simulation finished"
    );
    Ok(())
}
