// Image moments of a binary mask, plus the centroid and box derived from them.

use crate::types::{BinaryMask, BoundingBox, Point};

/// Zeroth and first-order spatial moments.
/// For a binary mask `m00` is the foreground area in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    pub fn new(m00: f64, m10: f64, m01: f64) -> Self {
        Self { m00, m10, m01 }
    }

    /// Every set pixel counts with weight 1.
    pub fn from_mask(mask: &BinaryMask) -> Self {
        let mut m = Moments::default();
        for y in 0..mask.height {
            for x in 0..mask.width {
                if mask.is_set(x, y) {
                    m.m00 += 1.0;
                    m.m10 += x as f64;
                    m.m01 += y as f64;
                }
            }
        }
        m
    }

    pub fn area(&self) -> f64 {
        self.m00
    }
}

/// Center of mass, truncated toward zero.
/// Returns `None` for an empty region (`m00 == 0`) instead of dividing by zero.
pub fn calculate_centroid(moments: &Moments) -> Option<Point> {
    if moments.m00 == 0.0 {
        return None;
    }
    let cx = (moments.m10 / moments.m00) as i32;
    let cy = (moments.m01 / moments.m00) as i32;
    Some(Point::new(cx, cy))
}

/// Tightest box around all set pixels, `None` if the mask is empty.
pub fn bounding_box(mask: &BinaryMask) -> Option<BoundingBox> {
    let mut min = (usize::MAX, usize::MAX);
    let mut max = (0usize, 0usize);
    let mut any = false;

    for y in 0..mask.height {
        for x in 0..mask.width {
            if mask.is_set(x, y) {
                any = true;
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x), max.1.max(y));
            }
        }
    }

    any.then(|| BoundingBox {
        x: min.0 as i32,
        y: min.1 as i32,
        width: (max.0 - min.0 + 1) as i32,
        height: (max.1 - min.1 + 1) as i32,
    })
}
