// Still-image red tracker.
// What you SEE:
// • The annotated image is written next to the input (or to the given output path).
// • With --show, the configured windows open (by default "Frame" and "Mask").
// • ESC or closing a window quits.

use clap::Parser;
use log::{info, warn};
use red_tracker::{
    annotate, apply_morphology, build_red_mask, hsv_from_rgb_image, logging, setup_windows,
    BinaryMask, Error, FrameBuffer, TrackerConfig,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "red-tracker")]
#[command(about = "Find the red object in an image and annotate it")]
#[command(version)]
struct Args {
    /// Path to the input image.
    input: PathBuf,

    /// Where to write the annotated image (default: <input>_tracked.png).
    output: Option<PathBuf>,

    /// Tracker settings (JSON). Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the configured display windows after tracking.
    #[arg(long)]
    show: bool,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    input.with_file_name(format!("{stem}_tracked.png"))
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let _logger = logging::init("info")?;

    let cfg = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    let kernel = cfg.kernel()?;
    let output = args.output.clone().unwrap_or_else(|| default_output(&args.input));

    /* 1) Load the frame.
       Visual: nothing yet; this is the raw picture. */
    let rgb = image::open(&args.input)?.to_rgb8();
    let mut frame = FrameBuffer::from_rgb_image(&rgb);
    info!("loaded {} ({}x{})", args.input.display(), frame.width, frame.height);

    /* 2) HSV -> red mask -> cleanup.
       Visual: the mask window shows the red object as a clean white blob. */
    let hsv = hsv_from_rgb_image(&rgb);
    let raw_mask = build_red_mask(&hsv, &cfg.red)?;
    let mask = apply_morphology(&raw_mask, &kernel, cfg.iterations);
    info!("red pixels: {} raw, {} after cleanup", raw_mask.count(), mask.count());

    /* 3) Centroid + box, then overlay. A miss leaves the frame as loaded. */
    match annotate(&mut frame, &mask, cfg.min_area) {
        Some(d) => info!(
            "tracked: center ({}, {}), area {}, box {:?}",
            d.centroid.x, d.centroid.y, d.area, d.bbox
        ),
        None => warn!("nothing tracked; writing the frame unannotated"),
    }

    frame.to_rgb_image().save(&output)?;
    info!("wrote {}", output.display());

    /* 4) Optional windows. */
    if args.show {
        show(&cfg, &frame, &mask)?;
    }

    Ok(())
}

fn show(cfg: &TrackerConfig, frame: &FrameBuffer, mask: &BinaryMask) -> Result<(), Error> {
    let mut windows = setup_windows(&cfg.windows, cfg.window_width, cfg.window_height)?;
    if windows.is_empty() {
        warn!("--show given but no windows configured");
        return Ok(());
    }

    while windows.iter().all(|w| w.is_open() && !w.esc_pressed()) {
        for window in &mut windows {
            window.present_source(frame, mask)?;
        }
    }
    Ok(())
}
