use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use canopy_core::{
    compute_placement, plan_update, Camera, CanopyType, Configuration, PlacementResult,
    SceneUpdate,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Preview canopy layouts without the browser", long_about = None)]
struct Args {
    /// JSON configuration file (camelCase fields, all optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canopy type; anything other than "free-standing" is wall-mounted
    #[arg(short = 't', long)]
    canopy_type: Option<String>,

    /// Size label, e.g. "Large" or "Extra Large"
    #[arg(short, long)]
    size: Option<String>,

    /// Length in meters
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<f32>,

    /// Width in meters
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<f32>,

    /// Viewport aspect ratio used for the printed camera
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    compact: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Preview<'a> {
    configuration: &'a Configuration,
    placement: &'a PlacementResult,
    camera: Camera,
    key_light: [f32; 3],
    update: SceneUpdate,
}

fn load_configuration(args: &Args) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading configuration {}", path.display()))?;
            serde_json::from_str::<Configuration>(&text)
                .with_context(|| format!("parsing configuration {}", path.display()))?
        }
        None => Configuration::default(),
    };
    if let Some(kind) = &args.canopy_type {
        config.canopy_type = CanopyType::from_label(kind);
    }
    if let Some(size) = &args.size {
        config.size = Some(size.clone());
    }
    if let Some(length) = args.length {
        config.length = Some(length);
    }
    if let Some(width) = args.width {
        config.width = Some(width);
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_configuration(&args)?;
    log::info!(
        "previewing {} length={} width={} size={:?}",
        config.canopy_type,
        config.effective_length(),
        config.effective_width(),
        config.size
    );

    let placement = compute_placement(&config);
    for (i, unit) in placement.unit_positions.iter().enumerate() {
        log::info!(
            "unit{} at ({:.2}, {:.2}, {:.2}) yaw={:.3}",
            i + 1,
            unit.position.x,
            unit.position.y,
            unit.position.z,
            unit.yaw
        );
    }

    let preview = Preview {
        configuration: &config,
        placement: &placement,
        camera: placement.camera_pose.to_camera(args.aspect),
        key_light: placement.environment_extents.key_light_position().to_array(),
        update: plan_update(None, &placement),
    };
    let json = if args.compact {
        serde_json::to_string(&preview)?
    } else {
        serde_json::to_string_pretty(&preview)?
    };
    println!("{json}");
    Ok(())
}
