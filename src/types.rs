// Core buffer types shared by the tracking helpers.

use crate::error::{Error, Result};
use image::{Rgb, RgbImage};

pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height] }
    }

    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// Pack an `image` RGB buffer as 0x00RRGGBB pixels.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        for pixel in img.pixels() {
            pixels.push(pack_rgb(pixel[0], pixel[1], pixel[2]));
        }
        Self { width: w as usize, height: h as usize, pixels }
    }

    /// Unpack back into an `image` RGB buffer (for saving to disk).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let (r, g, b) = unpack_rgb(self.get(x as usize, y as usize));
            Rgb([r, g, b])
        })
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack_rgb(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// HSV frame in the 8-bit convention: H in 0..=180, S and V in 0..=255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HsvFrame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 3]>,
}

/// Single-channel binary mask, 255 = foreground, 0 = background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // length = width * height
}

impl BinaryMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![MASK_OFF; width * height] }
    }

    /// Build from a row-major slice of booleans (handy in tests and fixtures).
    /// The slice must hold exactly `width * height` entries.
    pub fn from_bools(width: usize, height: usize, bits: &[bool]) -> Result<Self> {
        if bits.len() != width * height {
            return Err(Error::DimensionMismatch {
                op: "mask from bools",
                expected: (width, height),
                found: (bits.len(), 1),
            });
        }
        let data = bits.iter().map(|&b| if b { MASK_ON } else { MASK_OFF }).collect();
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != MASK_OFF
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.width + x] = if on { MASK_ON } else { MASK_OFF };
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != MASK_OFF).count()
    }

    /// Pixel-wise OR of two masks of the same size.
    pub fn union(&self, other: &BinaryMask) -> Result<BinaryMask> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                op: "mask union",
                expected: (self.width, self.height),
                found: (other.width, other.height),
            });
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a | b).collect();
        Ok(BinaryMask { width: self.width, height: self.height, data })
    }

    /// Grayscale rendering for a display window.
    /// Visual: white where the tracked color is, black elsewhere.
    pub fn to_frame(&self) -> FrameBuffer {
        let pixels = self.data.iter().map(|&v| pack_rgb(v, v, v)).collect();
        FrameBuffer { width: self.width, height: self.height, pixels }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box: top-left corner plus size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_agree() {
        let px = pack_rgb(0x12, 0x34, 0x56);
        assert_eq!(px, 0x0012_3456);
        assert_eq!(unpack_rgb(px), (0x12, 0x34, 0x56));
    }

    #[test]
    fn frame_converts_from_image_buffer() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, Rgb([255, 0, 10]));
        let fb = FrameBuffer::from_rgb_image(&img);
        assert_eq!((fb.width, fb.height), (2, 1));
        assert_eq!(fb.pixels, vec![0, 0x00FF_000A]);
        assert_eq!(fb.to_rgb_image(), img);
    }

    #[test]
    fn union_rejects_mismatched_masks() {
        let a = BinaryMask::new(3, 3);
        let b = BinaryMask::new(3, 2);
        assert!(matches!(a.union(&b), Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn from_bools_rejects_wrong_length() {
        let short = BinaryMask::from_bools(3, 3, &[true; 4]);
        assert!(matches!(short, Err(Error::DimensionMismatch { expected: (3, 3), found: (4, 1), .. })));
        assert!(BinaryMask::from_bools(3, 3, &[false; 9]).is_ok());
    }

    #[test]
    fn union_is_pixelwise_or() {
        let a = BinaryMask::from_bools(2, 2, &[true, false, false, false]).unwrap();
        let b = BinaryMask::from_bools(2, 2, &[false, false, true, false]).unwrap();
        let u = a.union(&b).unwrap();
        assert_eq!(u.data, vec![255, 0, 255, 0]);
        assert_eq!(u.count(), 2);
    }
}
