// Software drawing into the frame buffer.
// Visual effects provided here:
// 1) Thick strokes with round ends (freehand segments, triangle outlines).
// 2) Circle outlines of any stroke width.
// 3) Opacity: every stroke call mixes its color over what is already there,
//    once per pixel, so a half-transparent line darkens the page evenly.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::color::unpack_rgb;
use crate::types::{FrameBuffer, Point};

/// Resolved stroke style: the brush's color already parsed to a pixel value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: u32,   // 0x00RRGGBB
    pub width: f64,   // full line width in pixels
    pub opacity: f64, // 0..1, applied once per stroke call
}

/// Mix `color` over the pixel at (x,y) with weight `alpha` in [0,1].
/// Visual: alpha 1 paints over, alpha 0.5 lets half of the old pixel through.
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: usize, y: usize, color: u32, alpha: f64) {
    if !(alpha > 0.0) {
        return;
    }
    let a = alpha.min(1.0);
    let idx = y * fb.width + x;
    let (sr, sg, sb) = unpack_rgb(color);
    let (dr, dg, db) = unpack_rgb(fb.pixels[idx]);

    let mix = |s: u8, d: u8| -> u32 {
        (f64::from(s) * a + f64::from(d) * (1.0 - a)).round().clamp(0.0, 255.0) as u32
    };

    fb.pixels[idx] = (mix(sr, dr) << 16) | (mix(sg, dg) << 8) | mix(sb, db);
}

/// How much of a pixel is inside a stroke, given the distance `d` from the
/// pixel center to the stroke's centerline. One pixel of soft edge.
#[inline]
fn coverage(d: f64, half_width: f64) -> f64 {
    (half_width + 0.5 - d).clamp(0.0, 1.0)
}

/// Shortest distance from `p` to the segment a-b.
fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * abx, a.y + t * aby))
}

/// Pixel rectangle [x0, x1) x [y0, y1) covering the float box, clipped to the buffer.
fn clip_box(fb: &FrameBuffer, min: Point, max: Point) -> Option<(usize, usize, usize, usize)> {
    let x0 = min.x.floor().max(0.0) as usize;
    let y0 = min.y.floor().max(0.0) as usize;
    let x1 = (max.x.ceil().max(0.0) as usize).min(fb.width);
    let y1 = (max.y.ceil().max(0.0) as usize).min(fb.height);
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Visit every pixel in the box once, blending by the coverage `dist` reports.
fn fill_by_distance(
    fb: &mut FrameBuffer,
    min: Point,
    max: Point,
    stroke: Stroke,
    dist: impl Fn(Point) -> f64,
) {
    let Some((x0, y0, x1, y1)) = clip_box(fb, min, max) else {
        return;
    };
    let half = stroke.width / 2.0;
    for y in y0..y1 {
        for x in x0..x1 {
            // Sample at the pixel center.
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let cov = coverage(dist(center), half);
            if cov > 0.0 {
                blend_pixel(fb, x, y, stroke.color, cov * stroke.opacity);
            }
        }
    }
}

/// Stroke a connected run of segments with round ends and joins.
/// `closed` also connects the last point back to the first (triangle outline).
/// Visual: one continuous line; where segments overlap the color isn't doubled.
pub fn stroke_polyline(fb: &mut FrameBuffer, points: &[Point], closed: bool, stroke: Stroke) {
    let Some(first) = points.first().copied() else {
        return;
    };

    let mut segments: Vec<(Point, Point)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 2 {
        segments.push((points[points.len() - 1], first));
    }
    if segments.is_empty() {
        // A lone point has no length to stroke (a canvas draws nothing for a bare moveTo).
        return;
    }

    // Bounding box of all points, padded by the stroke half-width and the soft edge.
    let pad = stroke.width / 2.0 + 1.0;
    let (mut min, mut max) = (first, first);
    for p in points {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    let min = Point::new(min.x - pad, min.y - pad);
    let max = Point::new(max.x + pad, max.y + pad);

    fill_by_distance(fb, min, max, stroke, |p| {
        segments
            .iter()
            .map(|&(a, b)| distance_to_segment(p, a, b))
            .fold(f64::INFINITY, f64::min)
    });
}

/// Stroke a single straight segment (one freehand step).
pub fn stroke_segment(fb: &mut FrameBuffer, from: Point, to: Point, stroke: Stroke) {
    stroke_polyline(fb, &[from, to], false, stroke);
}

/// Stroke the outline of a circle centered at `center`.
/// Visual: a ring whose thickness is the brush width, centered on the radius.
pub fn stroke_circle(fb: &mut FrameBuffer, center: Point, radius: f64, stroke: Stroke) {
    let pad = radius + stroke.width / 2.0 + 1.0;
    let min = Point::new(center.x - pad, center.y - pad);
    let max = Point::new(center.x + pad, center.y + pad);
    fill_by_distance(fb, min, max, stroke, |p| (p.distance(center) - radius).abs());
}
