//! ZoomFollow CLI — drive the follow controller outside a host.
//!
//! Usage:
//!   zoomfollow simulate [OPTIONS]    Run a scripted cursor path through the controller
//!   zoomfollow properties [OPTIONS]  Show the settings panel the host would display
//!   zoomfollow check                 Sample the real cursor once

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zoomfollow_common::logging::{init_logging, LoggingConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "zoomfollow",
    about = "Zoom into a capture layer and keep the mouse cursor centered",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted cursor path through a follow session
    Simulate {
        /// Cursor samples as `x,y;x,y;...`; use `-` for a tick without a cursor
        #[arg(short, long)]
        path: String,

        /// Number of ticks to run (defaults to the path length)
        #[arg(long)]
        ticks: Option<usize>,

        /// Host settings file (`source`, `zoom`, `smoothness`)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Target layer name
        #[arg(long)]
        layer: Option<String>,

        /// Zoom factor [1.0, 4.0]
        #[arg(long)]
        zoom: Option<f64>,

        /// Smoothing factor (0.0, 1.0]
        #[arg(long)]
        smoothing: Option<f64>,

        /// Source width reported by the simulated host
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Source height reported by the simulated host
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Simulated frame rate
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Print one JSON object per tick
        #[arg(long)]
        json: bool,
    },

    /// Show the settings panel
    Properties {
        /// Layer names to offer as targets
        #[arg(short, long = "layer")]
        layers: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check cursor sampling on this system
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    logging.json = cli.log_json;
    init_logging(&logging);

    match cli.command {
        Commands::Simulate {
            path,
            ticks,
            settings,
            layer,
            zoom,
            smoothing,
            width,
            height,
            fps,
            json,
        } => commands::simulate::run(commands::simulate::SimulateArgs {
            path,
            ticks,
            settings,
            layer,
            zoom,
            smoothing,
            width,
            height,
            fps,
            json,
        }),
        Commands::Properties { layers, json } => commands::properties::run(layers, json),
        Commands::Check => commands::check::run(),
    }
}
