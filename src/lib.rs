//! Helpers for tracking a red object in a frame.
//!
//! The pieces are independent and stateless: build an HSV red mask, clean it
//! with opening/closing, take its moments and centroid, draw the overlay,
//! and place the display windows.

pub mod config;
pub mod diag;
pub mod display;
pub mod draw;
pub mod error;
pub mod logging;
pub mod moments;
pub mod morphology;
pub mod tracker;
pub mod types;
pub mod vision;

pub use config::TrackerConfig;
pub use display::{setup_windows, Display, WindowPlacement, WindowSource};
pub use draw::draw_tracking_info;
pub use error::{Error, Result};
pub use moments::{bounding_box, calculate_centroid, Moments};
pub use morphology::{apply_morphology, Kernel, KernelShape, DEFAULT_ITERATIONS};
pub use tracker::{annotate, track, Detection};
pub use types::{BinaryMask, BoundingBox, FrameBuffer, HsvFrame, Point};
pub use vision::{build_red_mask, hsv_from_frame, hsv_from_rgb_image, red_mask, HsvRange, RedRanges};
