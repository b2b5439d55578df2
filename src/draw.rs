// Software drawing for tracking overlays.
// Visual effects provided here:
// 1) A box outline around the tracked object.
// 2) A filled dot on its centroid.
// 3) A tiny 5x7 bitmap font (scalable) for the area / center labels.

use crate::types::{BoundingBox, FrameBuffer, Point};

pub const BLACK: u32 = 0x00_00_00_00;
pub const GREEN: u32 = 0x00_00_FF_00;

pub const BOX_THICKNESS: i32 = 2;
pub const MARKER_RADIUS: i32 = 5;
pub const TEXT_SCALE: i32 = 2;

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Rectangle outline with corners (x0,y0) and (x1,y1), inclusive.
/// Thick outlines straddle the geometric edge, like a thick pen would.
/// Visual: a box frame; its inside is left untouched.
pub fn draw_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32, thickness: i32) {
    let thickness = thickness.max(1);
    let first = -(thickness / 2);
    for o in first..first + thickness {
        let (l, t, r, b) = (x0 + o, y0 + o, x1 - o, y1 - o);
        draw_line(fb, l, t, r, t, color);
        draw_line(fb, r, t, r, b, color);
        draw_line(fb, r, b, l, b, color);
        draw_line(fb, l, b, l, t, color);
    }
}

/// Solid disc centered at (cx,cy).
/// Visual: a round dot; parts outside the frame are clipped.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius < 0 { return; }
    let r2 = radius * radius;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/* ---------- 5x7 bitmap font (ASCII subset we need for "Area: 123" / "Center: (x, y)") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters of "Area" and "Center"
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'a' => g!(0b00000,0b00000,0b01110,0b00001,0b01111,0b10001,0b01111),
        'e' => g!(0b00000,0b00000,0b01110,0b10001,0b11111,0b10000,0b01110),
        'n' => g!(0b00000,0b00000,0b10110,0b11001,0b10001,0b10001,0b10001),
        'r' => g!(0b00000,0b00000,0b10110,0b11001,0b10000,0b10000,0b10000),
        't' => g!(0b01000,0b01000,0b11100,0b01000,0b01000,0b01001,0b00110),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Draw a single glyph with its top-left at (x,y), each font pixel a `scale`x`scale` block.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (4 - rx))) == 0 {
                    continue;
                }
                let px = x + rx * scale;
                let py = y + ry as i32 * scale;
                for sy in 0..scale {
                    for sx in 0..scale {
                        put_pixel(fb, px + sx, py + sy, color);
                    }
                }
            }
        }
    }
}

/// Draw a text string whose bottom-left corner (baseline) sits at (x,y).
/// Visual: a compact label; each glyph is 5x7 font pixels with 1 font pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, color: u32, scale: i32) {
    let scale = scale.max(1);
    let top = y - GLYPH_H * scale;
    let mut cursor = x;
    for ch in text.chars() {
        draw_char_5x7(fb, cursor, top, ch, color, scale);
        cursor += (GLYPH_W + 1) * scale;
    }
}

/// Annotate one tracked object in place.
/// Visual: black box around the object, green dot on its center,
/// "Area: N" above the box and "Center: (x, y)" below it.
pub fn draw_tracking_info(frame: &mut FrameBuffer, bbox: BoundingBox, centroid: Point, area: f64) {
    let BoundingBox { x, y, width: w, height: h } = bbox;

    draw_rect(frame, x, y, x + w, y + h, BLACK, BOX_THICKNESS);
    fill_circle(frame, centroid.x, centroid.y, MARKER_RADIUS, GREEN);

    let area_label = format!("Area: {}", area as i64);
    draw_text_5x7(frame, x, y - 10, &area_label, BLACK, TEXT_SCALE);

    let center_label = format!("Center: ({}, {})", centroid.x, centroid.y);
    draw_text_5x7(frame, x, y + h + 20, &center_label, BLACK, TEXT_SCALE);
}
