// tests/tracking_tests.rs
use image::{Rgb, RgbImage};
use red_tracker::{
    apply_morphology, bounding_box, build_red_mask, calculate_centroid, draw_tracking_info,
    hsv_from_rgb_image, BoundingBox, FrameBuffer, Kernel, Moments, Point, RedRanges,
    DEFAULT_ITERATIONS,
};

/// Gray scene with a red square at (40..60, 20..40) and a few red specks.
fn scene() -> RgbImage {
    let mut img = RgbImage::from_pixel(120, 80, Rgb([90, 90, 90]));
    for y in 20..40 {
        for x in 40..60 {
            img.put_pixel(x, y, Rgb([220, 15, 20]));
        }
    }
    for &(x, y) in &[(5, 5), (110, 70), (100, 10)] {
        img.put_pixel(x, y, Rgb([255, 0, 0]));
    }
    img
}

#[test]
fn red_square_is_found_and_annotated() {
    let img = scene();
    let hsv = hsv_from_rgb_image(&img);
    let raw = build_red_mask(&hsv, &RedRanges::default()).unwrap();
    assert_eq!(raw.count(), 20 * 20 + 3);

    let kernel = Kernel::rect(5, 5).unwrap();
    let mask = apply_morphology(&raw, &kernel, DEFAULT_ITERATIONS);
    assert_eq!(mask.count(), 20 * 20);

    let moments = Moments::from_mask(&mask);
    let centroid = calculate_centroid(&moments).unwrap();
    assert_eq!(centroid, Point::new(49, 29));

    let bbox = bounding_box(&mask).unwrap();
    assert_eq!(bbox, BoundingBox { x: 40, y: 20, width: 20, height: 20 });

    let mut frame = FrameBuffer::from_rgb_image(&img);
    let before = frame.clone();
    draw_tracking_info(&mut frame, bbox, centroid, moments.area());

    assert_eq!((frame.width, frame.height), (before.width, before.height));
    assert_eq!(frame.pixels.len(), before.pixels.len());
    assert_ne!(frame, before);
    assert_eq!(frame.get(49, 29), 0x00_00_FF_00);
    // far corner untouched
    assert_eq!(frame.get(0, 79), before.get(0, 79));
}

#[test]
fn scene_without_red_has_no_centroid() {
    let img = RgbImage::from_pixel(32, 32, Rgb([10, 200, 30]));
    let mask = build_red_mask(&hsv_from_rgb_image(&img), &RedRanges::default()).unwrap();
    let moments = Moments::from_mask(&mask);
    assert_eq!(calculate_centroid(&moments), None);
    assert_eq!(bounding_box(&mask), None);
}
