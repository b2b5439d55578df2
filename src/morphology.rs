// Binary morphology on masks: erosion, dilation, opening, closing.
// Visual: opening wipes isolated specks, closing plugs pinholes in the blob.

use crate::error::{Error, Result};
use crate::types::{BinaryMask, MASK_OFF, MASK_ON};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITERATIONS: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelShape {
    #[default]
    Rect,
    Ellipse,
    Cross,
}

/// Structuring element. The anchor is the center cell `(width / 2, height / 2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    width: usize,
    height: usize,
    cells: Vec<bool>, // row-major, width * height
}

impl Kernel {
    pub fn new(shape: KernelShape, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidKernel(width, height));
        }
        let (ax, ay) = (width / 2, height / 2);

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            let half = match shape {
                KernelShape::Ellipse => Some(ellipse_half_width(ax, ay, y)),
                _ => None,
            };
            for x in 0..width {
                let on = match shape {
                    KernelShape::Rect => true,
                    KernelShape::Cross => x == ax || y == ay,
                    KernelShape::Ellipse => half.is_some_and(|h| x.abs_diff(ax) <= h),
                };
                cells.push(on);
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn rect(width: usize, height: usize) -> Result<Self> {
        Self::new(KernelShape::Rect, width, height)
    }

    pub fn ellipse(width: usize, height: usize) -> Result<Self> {
        Self::new(KernelShape::Ellipse, width, height)
    }

    pub fn cross(width: usize, height: usize) -> Result<Self> {
        Self::new(KernelShape::Cross, width, height)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// Offsets (dx, dy) of the active cells relative to the anchor.
    fn offsets(&self) -> Vec<(isize, isize)> {
        let (ax, ay) = ((self.width / 2) as isize, (self.height / 2) as isize);
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_set(x, y) {
                    out.push((x as isize - ax, y as isize - ay));
                }
            }
        }
        out
    }
}

/// Half-width of row `y` of an ellipse with integer radii `(rx, ry)` centered on
/// `(rx, ry)`: `round(rx * sqrt(1 - (dy / ry)^2))`. A 5x5 ellipse has rows
/// 00100 / 11111 / 11111 / 11111 / 00100.
fn ellipse_half_width(rx: usize, ry: usize, y: usize) -> usize {
    if ry == 0 {
        return rx;
    }
    let dy = y.abs_diff(ry) as f64 / ry as f64;
    (rx as f64 * (1.0 - dy * dy).max(0.0).sqrt()).round() as usize
}

#[derive(Clone, Copy)]
enum Op {
    Erode,
    Dilate,
}

/// One pass of erosion or dilation. Pixels outside the mask are skipped,
/// so the border never eats into (or grows) the foreground.
fn morph_once(src: &BinaryMask, offsets: &[(isize, isize)], op: Op) -> BinaryMask {
    let (w, h) = (src.width as isize, src.height as isize);
    let mut out = BinaryMask::new(src.width, src.height);

    for y in 0..h {
        for x in 0..w {
            let mut neighbours = offsets.iter().filter_map(|&(dx, dy)| {
                let (sx, sy) = (x + dx, y + dy);
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    None
                } else {
                    Some(src.data[sy as usize * src.width + sx as usize] != MASK_OFF)
                }
            });
            let on = match op {
                Op::Erode => neighbours.all(|v| v),
                Op::Dilate => neighbours.any(|v| v),
            };
            if on {
                out.data[y as usize * src.width + x as usize] = MASK_ON;
            }
        }
    }
    out
}

fn repeat(mask: &BinaryMask, kernel: &Kernel, op: Op, iterations: u32) -> BinaryMask {
    let offsets = kernel.offsets();
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = morph_once(&current, &offsets, op);
    }
    current
}

pub fn erode(mask: &BinaryMask, kernel: &Kernel, iterations: u32) -> BinaryMask {
    repeat(mask, kernel, Op::Erode, iterations)
}

pub fn dilate(mask: &BinaryMask, kernel: &Kernel, iterations: u32) -> BinaryMask {
    repeat(mask, kernel, Op::Dilate, iterations)
}

/// Erode `iterations` times, then dilate `iterations` times.
pub fn open(mask: &BinaryMask, kernel: &Kernel, iterations: u32) -> BinaryMask {
    dilate(&erode(mask, kernel, iterations), kernel, iterations)
}

/// Dilate `iterations` times, then erode `iterations` times.
pub fn close(mask: &BinaryMask, kernel: &Kernel, iterations: u32) -> BinaryMask {
    erode(&dilate(mask, kernel, iterations), kernel, iterations)
}

/// Opening to drop noise specks, then closing on the result to fill small holes.
pub fn apply_morphology(mask: &BinaryMask, kernel: &Kernel, iterations: u32) -> BinaryMask {
    let cleaned = close(&open(mask, kernel, iterations), kernel, iterations);
    debug!(
        "morphology {:?} x{}: {} -> {} pixels",
        kernel.dimensions(),
        iterations,
        mask.count(),
        cleaned.count()
    );
    cleaned
}
