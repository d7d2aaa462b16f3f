//! GeoSlim CLI - Shapefile conversion and GeoJSON coordinate optimization

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geojson::FeatureCollection;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use geoslim_algorithms::optimize::{optimize_collection, OptimizeParams};
use geoslim_core::io::{read_feature_collection, read_features, write_feature_collection};

// ─── Pipeline paths ─────────────────────────────────────────────────────

const SHAPEFILE_PATH: &str = "cb_2024_us_cd119_500k.shp";
const CONVERTED_PATH: &str = "districts-2024.geojson";
const OPTIMIZED_PATH: &str = "districts-2024-optimized.geojson";

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "geoslim")]
#[command(author, version, about = "Shapefile conversion and GeoJSON coordinate optimization", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the district shapefile into a pretty-printed FeatureCollection
    Convert,
    /// Shrink the converted GeoJSON by truncating coordinate precision
    Optimize {
        /// Decimal digits kept in every coordinate
        #[arg(short, long, default_value = "5")]
        precision: u32,
        /// Simplify polygon rings
        #[arg(short, long)]
        simplify: bool,
        /// Pretty-print the output instead of minifying it
        #[arg(long)]
        pretty: bool,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn file_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(metadata.len())
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

// ─── Subcommands ────────────────────────────────────────────────────────

fn convert() -> Result<()> {
    let input = Path::new(SHAPEFILE_PATH);
    let output = Path::new(CONVERTED_PATH);
    info!("Reading shapefile from: {}", input.display());

    let pb = spinner("Converting to GeoJSON...");
    let features = read_features(input).context("Failed to read shapefile")?;
    pb.finish_and_clear();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let pb = spinner("Writing output...");
    write_feature_collection(&collection, output, true).context("Failed to write GeoJSON")?;
    pb.finish_and_clear();

    println!("Converted to {}", output.display());
    println!("  Features: {}", collection.features.len());

    if let Some(feature) = collection.features.first() {
        if let Some(properties) = &feature.properties {
            println!("\nSample properties from first feature:");
            println!("{}", serde_json::to_string_pretty(properties)?);
        }
    }

    Ok(())
}

fn optimize(params: OptimizeParams) -> Result<()> {
    let input = Path::new(CONVERTED_PATH);
    let output = Path::new(OPTIMIZED_PATH);

    let pb = spinner("Reading GeoJSON...");
    let mut collection = read_feature_collection(input).context("Failed to read GeoJSON")?;
    pb.finish_and_clear();

    let original_size = file_size(input)?;
    println!("Original features: {}", collection.features.len());
    println!("Original size: {:.2} MB", megabytes(original_size));

    let start = Instant::now();
    let stats = optimize_collection(&mut collection, &params);
    debug!("Optimization took {:.2?}", start.elapsed());
    debug!("Positions remaining: {}", stats.positions_out);
    println!("Processed {} coordinates", stats.positions_in);

    let pb = spinner("Writing output...");
    write_feature_collection(&collection, output, !params.minify)
        .context("Failed to write output")?;
    pb.finish_and_clear();

    let new_size = file_size(output)?;
    let reduction = (1.0 - new_size as f64 / original_size as f64) * 100.0;

    println!("\nOptimized GeoJSON written to {}", output.display());
    println!("New size: {:.2} MB", megabytes(new_size));
    println!("Reduction: {:.1}%", reduction);

    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Convert => convert()?,
        Commands::Optimize {
            precision,
            simplify,
            pretty,
        } => optimize(OptimizeParams {
            precision,
            simplify,
            minify: !pretty,
            ..Default::default()
        })?,
    }

    Ok(())
}
