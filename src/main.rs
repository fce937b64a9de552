//! chromapipe - batch color pipeline driver
//!
//! Entry point for the CLI binary. Probes BMP headers for dimensions and
//! runs the full conversion pipeline over raw RGB streams.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use chromapipe::bmp;
use chromapipe::config::{Config, RawDimensions};
use chromapipe::{transform_with, Strategy};

/// Command-line arguments for chromapipe
#[derive(Parser, Debug)]
#[command(name = "chromapipe")]
#[command(version, about = "RGB/YCbCr 4:2:0 chroma subsampling pipeline", long_about = None)]
struct Args {
    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a BMP header and report the decoded dimensions
    Probe {
        /// BMP file to inspect
        file: PathBuf,
    },

    /// Run the full pipeline over a raw RGB stream
    Convert {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input raw RGB file
        #[arg(short, long, env = "CHROMAPIPE_INPUT")]
        input: Option<PathBuf>,

        /// Output raw RGB file
        #[arg(short, long, env = "CHROMAPIPE_OUTPUT")]
        output: Option<PathBuf>,

        /// Image width in pixels (raw streams carry no metadata)
        #[arg(long)]
        width: Option<usize>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<usize>,

        /// Numeric strategy for the conversion matrices
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Probe { file } => probe(&file),
        Command::Convert {
            config,
            input,
            output,
            width,
            height,
            strategy,
        } => convert(config, input, output, width, height, strategy),
    }
}

fn probe(file: &PathBuf) -> Result<()> {
    let header = bmp::BmpHeader::read_from_file(file)
        .context(format!("Failed to read BMP header from {}", file.display()))?;

    info!(
        width = header.width,
        height = header.height,
        bits_per_pixel = header.bits_per_pixel,
        "BMP header decoded"
    );
    println!(
        "Image size: {}x{} pixels ({} bpp, data at offset {})",
        header.width, header.height, header.bits_per_pixel, header.data_offset
    );
    Ok(())
}

fn convert(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
    strategy: Option<Strategy>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let mut config = Config::load(&path)?.with_overrides(input, output, strategy);
            if let (Some(width), Some(height)) = (width, height) {
                config.dimensions = RawDimensions { width, height };
                config.validate()?;
            }
            config
        }
        None => {
            // No config file: every field must come from the CLI.
            let input = input.context("--input is required without a config file")?;
            let output = output.context("--output is required without a config file")?;
            let width = width.context("--width is required without a config file")?;
            let height = height.context("--height is required without a config file")?;
            let config = Config {
                input,
                output,
                strategy: strategy.unwrap_or_default(),
                dimensions: RawDimensions { width, height },
            };
            config.validate()?;
            config
        }
    };

    let RawDimensions { width, height } = config.dimensions;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        strategy = %config.strategy,
        width,
        height,
        "starting conversion"
    );

    let pixels = bmp::read_raw_rgb(&config.input, width * height).context(format!(
        "Failed to read raw RGB stream from {}",
        config.input.display()
    ))?;
    debug!(pixels = pixels.len(), "input loaded");

    let converted = transform_with(config.strategy, &pixels, width, height)?;

    bmp::write_raw_rgb(&config.output, &converted).context(format!(
        "Failed to write output to {}",
        config.output.display()
    ))?;

    info!("conversion complete");
    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("chromapipe={log_level}")));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
