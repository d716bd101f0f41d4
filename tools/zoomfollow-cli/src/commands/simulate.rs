//! Simulate a follow session against an in-memory scene.

use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Serialize;
use zoomfollow_common::config::FollowConfig;
use zoomfollow_follow_core::memory_host::MemoryHost;
use zoomfollow_follow_core::{CameraState, FollowController, TickOutcome, Transform};
use zoomfollow_platform_core::{ScreenPoint, ScriptedSampler};

const DEFAULT_LAYER: &str = "Display Capture";

pub struct SimulateArgs {
    pub path: String,
    pub ticks: Option<usize>,
    pub settings: Option<PathBuf>,
    pub layer: Option<String>,
    pub zoom: Option<f64>,
    pub smoothing: Option<f64>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub json: bool,
}

#[derive(Serialize)]
struct TickRecord {
    tick: usize,
    time_secs: f64,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    camera: CameraState,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform: Option<Transform>,
}

pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let samples = parse_path(&args.path)?;
    let ticks = args.ticks.unwrap_or(samples.len());
    let config = resolve_config(&args)?;
    let dt = 1.0 / f64::from(args.fps.max(1));

    tracing::info!(
        layer = %config.target_layer,
        zoom = config.zoom,
        smoothing = config.smoothing,
        ticks,
        "Starting simulation"
    );

    let mut host =
        MemoryHost::new().with_layer(config.target_layer.clone(), args.width, args.height);
    let mut controller = FollowController::with_config(ScriptedSampler::new(samples), config);

    for tick in 1..=ticks {
        let outcome = controller.advance(&mut host, dt);
        let record = TickRecord {
            tick,
            time_secs: tick as f64 * dt,
            status: status(&outcome),
            reason: match &outcome {
                TickOutcome::Skipped(reason) => Some(reason.to_string()),
                _ => None,
            },
            camera: controller.camera(),
            transform: outcome.transform(),
        };

        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_record(&record);
        }
    }

    if !args.json {
        println!();
        println!(
            "Applied {} of {} ticks; final camera ({:.2}, {:.2})",
            controller.ticks_applied(),
            ticks,
            controller.camera().x,
            controller.camera().y
        );
    }

    Ok(())
}

fn resolve_config(args: &SimulateArgs) -> anyhow::Result<FollowConfig> {
    let mut config = match &args.settings {
        Some(path) => FollowConfig::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => FollowConfig::new(DEFAULT_LAYER, 2.0, 0.1),
    };

    if let Some(layer) = &args.layer {
        config.target_layer = layer.clone();
    }
    if let Some(zoom) = args.zoom {
        config.zoom = zoom;
    }
    if let Some(smoothing) = args.smoothing {
        config.smoothing = smoothing;
    }
    if !config.has_target() {
        config.target_layer = DEFAULT_LAYER.to_string();
    }

    Ok(config.sanitized())
}

/// Parse `x,y;x,y;-;x,y` into scripted samples.
fn parse_path(path: &str) -> anyhow::Result<Vec<Option<ScreenPoint>>> {
    let mut samples = Vec::new();
    for (i, token) in path.split(';').map(str::trim).enumerate() {
        if token.is_empty() {
            continue;
        }
        if token == "-" {
            samples.push(None);
            continue;
        }
        let Some((x, y)) = token.split_once(',') else {
            bail!("sample {} ('{token}') is not in x,y form", i + 1);
        };
        let x: f64 = x
            .trim()
            .parse()
            .with_context(|| format!("sample {}: bad x '{x}'", i + 1))?;
        let y: f64 = y
            .trim()
            .parse()
            .with_context(|| format!("sample {}: bad y '{y}'", i + 1))?;
        samples.push(Some(ScreenPoint::new(x, y)));
    }

    if samples.is_empty() {
        bail!("cursor path is empty");
    }
    Ok(samples)
}

fn status(outcome: &TickOutcome) -> &'static str {
    match outcome {
        TickOutcome::Idle => "idle",
        TickOutcome::Skipped(_) => "skipped",
        TickOutcome::Applied(_) => "applied",
    }
}

fn print_record(record: &TickRecord) {
    match (&record.transform, &record.reason) {
        (Some(t), _) => println!(
            "tick {:>4}  camera ({:>8.2}, {:>8.2})  scale {:.2}  offset ({:>9.2}, {:>9.2})",
            record.tick, record.camera.x, record.camera.y, t.scale, t.offset_x, t.offset_y
        ),
        (None, Some(reason)) => println!("tick {:>4}  skipped: {reason}", record.tick),
        (None, None) => println!("tick {:>4}  {}", record.tick, record.status),
    }
}
