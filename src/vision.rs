// Color segmentation: RGB -> HSV conversion and red range masks.
// Visual expectation: the mask is white exactly where the frame looks red.

use crate::error::Result;
use crate::types::{unpack_rgb, BinaryMask, FrameBuffer, HsvFrame, MASK_OFF, MASK_ON};
use image::RgbImage;
use log::debug;
use serde::{Deserialize, Serialize};

/// Inclusive HSV interval, one bound per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, p: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= p[c] && p[c] <= self.upper[c])
    }
}

/// Red straddles hue 0, so it takes two sub-ranges: one near 0 and one near 180.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedRanges {
    pub low: HsvRange,
    pub high: HsvRange,
}

impl Default for RedRanges {
    fn default() -> Self {
        Self {
            low: HsvRange::new([0, 120, 70], [10, 255, 255]),
            high: HsvRange::new([170, 120, 70], [180, 255, 255]),
        }
    }
}

/// Convert one RGB pixel to 8-bit HSV (H halved into 0..=180).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };

    let mut h = if diff == 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / diff
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    [
        (h / 2.0).round().min(180.0) as u8,
        s.round().min(255.0) as u8,
        v as u8,
    ]
}

/// HSV copy of a 0x00RRGGBB frame.
pub fn hsv_from_frame(frame: &FrameBuffer) -> HsvFrame {
    let pixels = frame
        .pixels
        .iter()
        .map(|&px| {
            let (r, g, b) = unpack_rgb(px);
            rgb_to_hsv(r, g, b)
        })
        .collect();
    HsvFrame { width: frame.width, height: frame.height, pixels }
}

/// HSV copy of an `image` RGB buffer.
pub fn hsv_from_rgb_image(img: &RgbImage) -> HsvFrame {
    let (w, h) = img.dimensions();
    let pixels = img.pixels().map(|p| rgb_to_hsv(p[0], p[1], p[2])).collect();
    HsvFrame { width: w as usize, height: h as usize, pixels }
}

/// 255 where the pixel lies inside `range`, 0 elsewhere.
/// An inverted range (lower > upper on any channel) matches nothing.
pub fn in_range(hsv: &HsvFrame, range: &HsvRange) -> BinaryMask {
    let data = hsv
        .pixels
        .iter()
        .map(|&p| if range.contains(p) { MASK_ON } else { MASK_OFF })
        .collect();
    BinaryMask { width: hsv.width, height: hsv.height, data }
}

/// Union of two range tests, the usual way of catching red on both sides of hue 0.
pub fn red_mask(
    hsv: &HsvFrame,
    lower1: [u8; 3],
    upper1: [u8; 3],
    lower2: [u8; 3],
    upper2: [u8; 3],
) -> Result<BinaryMask> {
    let first = in_range(hsv, &HsvRange::new(lower1, upper1));
    let second = in_range(hsv, &HsvRange::new(lower2, upper2));
    let mask = first.union(&second)?;
    debug!(
        "red mask {}x{}: {} of {} pixels set",
        mask.width,
        mask.height,
        mask.count(),
        mask.data.len()
    );
    Ok(mask)
}

pub fn build_red_mask(hsv: &HsvFrame, ranges: &RedRanges) -> Result<BinaryMask> {
    red_mask(hsv, ranges.low.lower, ranges.low.upper, ranges.high.lower, ranges.high.upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pack_rgb;

    fn strip(colors: &[(u8, u8, u8)]) -> FrameBuffer {
        FrameBuffer {
            width: colors.len(),
            height: 1,
            pixels: colors.iter().map(|&(r, g, b)| pack_rgb(r, g, b)).collect(),
        }
    }

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
        assert_eq!(rgb_to_hsv(128, 128, 128), [0, 0, 128]);
    }

    #[test]
    fn magenta_leaning_red_wraps_near_180() {
        // hue = 360 - 60 * 40/255 ~= 350.6 deg -> 175
        let [h, _, _] = rgb_to_hsv(255, 0, 40);
        assert_eq!(h, 175);
    }

    #[test]
    fn in_range_is_inclusive() {
        let hsv = HsvFrame { width: 3, height: 1, pixels: vec![[10, 0, 0], [11, 0, 0], [0, 0, 0]] };
        let mask = in_range(&hsv, &HsvRange::new([0, 0, 0], [10, 0, 0]));
        assert_eq!(mask.data, vec![255, 0, 255]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let hsv = HsvFrame { width: 2, height: 1, pixels: vec![[5, 5, 5], [200, 200, 200]] };
        let mask = in_range(&hsv, &HsvRange::new([10, 0, 0], [0, 255, 255]));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn red_mask_is_union_of_both_ranges() {
        let frame = strip(&[(255, 0, 0), (255, 0, 40), (0, 255, 0), (30, 30, 30), (200, 20, 10)]);
        let hsv = hsv_from_frame(&frame);
        let ranges = RedRanges::default();

        let combined = build_red_mask(&hsv, &ranges).unwrap();
        let low = in_range(&hsv, &ranges.low);
        let high = in_range(&hsv, &ranges.high);
        let expected: Vec<u8> = low.data.iter().zip(&high.data).map(|(a, b)| a | b).collect();

        assert_eq!(combined.data, expected);
        assert_eq!(combined.data, vec![255, 255, 0, 0, 255]);
    }

    #[test]
    fn image_and_frame_conversions_agree() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([250, 10, 10]));
        img.put_pixel(1, 1, image::Rgb([10, 10, 250]));
        let from_img = hsv_from_rgb_image(&img);
        let from_fb = hsv_from_frame(&FrameBuffer::from_rgb_image(&img));
        assert_eq!(from_img, from_fb);
    }
}
