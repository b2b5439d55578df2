// Tracker settings, loadable from a JSON file. Every field has a default,
// so a partial file only overrides what it names.

use crate::display::{WindowPlacement, WindowSource};
use crate::error::Result;
use crate::morphology::{Kernel, KernelShape, DEFAULT_ITERATIONS};
use crate::vision::RedRanges;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub red: RedRanges,
    pub kernel_shape: KernelShape,
    pub kernel_size: usize,
    pub iterations: u32,
    /// Regions smaller than this (in pixels) are not annotated.
    pub min_area: f64,
    /// Windows opened by `--show`, in order. Each shows its `source` buffer.
    pub windows: Vec<WindowPlacement>,
    pub window_width: usize,
    pub window_height: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            red: RedRanges::default(),
            kernel_shape: KernelShape::Rect,
            kernel_size: 5,
            iterations: DEFAULT_ITERATIONS,
            min_area: 500.0,
            windows: vec![
                WindowPlacement::new("Frame", 0, 0),
                WindowPlacement::new("Mask", 660, 0).showing(WindowSource::Mask),
            ],
            window_width: 640,
            window_height: 480,
        }
    }
}

impl TrackerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn kernel(&self) -> Result<Kernel> {
        Kernel::new(self.kernel_shape, self.kernel_size, self.kernel_size)
    }
}
