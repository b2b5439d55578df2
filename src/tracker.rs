// Picks the tracked region out of a cleaned mask and draws it.

use crate::draw::draw_tracking_info;
use crate::moments::{bounding_box, calculate_centroid, Moments};
use crate::types::{BinaryMask, BoundingBox, FrameBuffer, Point};
use log::{debug, warn};

/// The red region found in one mask.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub centroid: Point,
    pub area: f64,
}

/// `None` when the mask is empty or its area is below `min_area`.
pub fn track(mask: &BinaryMask, min_area: f64) -> Option<Detection> {
    let moments = Moments::from_mask(mask);
    let area = moments.area();

    let (Some(centroid), Some(bbox)) = (calculate_centroid(&moments), bounding_box(mask)) else {
        debug!("no red region found");
        return None;
    };
    if area < min_area {
        warn!("red region too small: area {area} < {min_area}");
        return None;
    }
    Some(Detection { bbox, centroid, area })
}

/// Track and, on a hit, draw the overlay into `frame`.
/// Visual: a miss leaves the frame exactly as it was.
pub fn annotate(frame: &mut FrameBuffer, mask: &BinaryMask, min_area: f64) -> Option<Detection> {
    let detection = track(mask, min_area)?;
    draw_tracking_info(frame, detection.bbox, detection.centroid, detection.area);
    Some(detection)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0x00_FF_FF_FF;

    /// 40x40 mask with a filled square at (10..10+side, 12..12+side).
    fn blob(side: usize) -> BinaryMask {
        let mut m = BinaryMask::new(40, 40);
        for y in 12..12 + side {
            for x in 10..10 + side {
                m.set(x, y, true);
            }
        }
        m
    }

    #[test]
    fn empty_mask_tracks_nothing() {
        let mask = BinaryMask::new(40, 40);
        assert_eq!(track(&mask, 0.0), None);

        let mut frame = FrameBuffer::filled(40, 40, WHITE);
        assert_eq!(annotate(&mut frame, &mask, 0.0), None);
        assert!(frame.pixels.iter().all(|&p| p == WHITE));
    }

    #[test]
    fn small_region_is_ignored_and_frame_untouched() {
        let mask = blob(4); // area 16
        assert_eq!(track(&mask, 17.0), None);

        let mut frame = FrameBuffer::filled(40, 40, WHITE);
        let before = frame.clone();
        assert_eq!(annotate(&mut frame, &mask, 17.0), None);
        assert_eq!(frame, before);
    }

    #[test]
    fn region_at_min_area_is_annotated() {
        let mask = blob(4);
        let expected = Detection {
            bbox: BoundingBox { x: 10, y: 12, width: 4, height: 4 },
            centroid: Point::new(11, 13),
            area: 16.0,
        };
        assert_eq!(track(&mask, 16.0), Some(expected));

        let mut frame = FrameBuffer::filled(40, 40, WHITE);
        assert_eq!(annotate(&mut frame, &mask, 16.0), Some(expected));
        assert_eq!(frame.get(11, 13), crate::draw::GREEN);
        assert_eq!(frame.get(15, 17), crate::draw::BLACK); // outer box corner, clear of the dot
    }
}
