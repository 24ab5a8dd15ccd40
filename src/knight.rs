//! Chess knight silhouette, facing left, designed on a 0..100 grid
use crate::constants::bezier::{MANE_STEPS, STEPS_PER_SEGMENT};
use crate::geometry::{Path, Point, sample_cubic, to_canvas};
use crate::style::KnightShape;

/// Outline points of the straight-edged knight
const OUTLINE: [(f64, f64); 28] = [
    // Base
    (25.0, 90.0), (75.0, 90.0),
    // Right side going up
    (75.0, 82.0), (70.0, 75.0),
    // Back of neck
    (72.0, 65.0), (73.0, 55.0), (72.0, 45.0), (68.0, 35.0),
    // Ears
    (62.0, 25.0), (58.0, 15.0), (54.0, 18.0), (55.0, 25.0),
    (52.0, 22.0), (48.0, 12.0), (44.0, 16.0), (46.0, 25.0),
    // Forehead
    (42.0, 28.0), (35.0, 32.0),
    // Nose bridge
    (28.0, 38.0), (22.0, 45.0),
    // Muzzle
    (18.0, 50.0), (20.0, 55.0), (25.0, 56.0),
    // Jaw
    (28.0, 58.0), (30.0, 62.0),
    // Throat
    (28.0, 68.0), (25.0, 75.0), (25.0, 82.0),
];

/// Start anchor of the curved knight
const CURVE_START: (f64, f64) = (25.0, 90.0);

/// Cubic segments as (control 1, control 2, end anchor). Each segment starts
/// where the previous one ended; the last one closes on `CURVE_START`.
const CURVE_SEGMENTS: [[(f64, f64); 3]; 12] = [
    [(42.0, 90.0), (58.0, 90.0), (75.0, 90.0)],
    [(77.0, 84.0), (70.0, 78.0), (72.0, 65.0)],
    [(75.0, 52.0), (73.0, 42.0), (68.0, 35.0)],
    [(64.0, 28.0), (60.0, 20.0), (58.0, 15.0)],
    [(55.0, 17.0), (53.0, 20.0), (52.0, 22.0)],
    [(50.0, 17.0), (49.0, 14.0), (48.0, 12.0)],
    [(44.0, 16.0), (46.0, 24.0), (42.0, 28.0)],
    [(36.0, 31.0), (27.0, 38.0), (22.0, 45.0)],
    [(18.0, 49.0), (19.0, 55.0), (25.0, 56.0)],
    [(28.0, 57.0), (31.0, 60.0), (30.0, 62.0)],
    [(27.0, 67.0), (24.0, 72.0), (25.0, 75.0)],
    [(26.0, 80.0), (24.0, 86.0), (25.0, 90.0)],
];

/// Mane curve along the back of the neck
const MANE: [(f64, f64); 4] = [(62.0, 30.0), (68.0, 42.0), (66.0, 56.0), (66.0, 68.0)];

/// Builds the knight outline centered at `center`, `scale` pixels per 50
/// design units.
pub fn knight_path(shape: KnightShape, center: Point, scale: f64) -> Path {
    match shape {
        KnightShape::Literal => literal_path(center, scale),
        KnightShape::Curved => curved_path(center, scale, STEPS_PER_SEGMENT),
    }
}

fn literal_path(center: Point, scale: f64) -> Path {
    Path::new(OUTLINE.iter().map(|&raw| to_canvas(raw, center, scale)).collect())
}

/// Walks the anchors, emitting `steps` points per segment. Shared anchors
/// appear once and the closing anchor is left to the implicit closing edge.
pub fn curved_path(center: Point, scale: f64, steps: usize) -> Path {
    let map = |raw| to_canvas(raw, center, scale);
    let mut points = Vec::with_capacity(CURVE_SEGMENTS.len() * steps.max(1) + 1);
    let mut anchor = map(CURVE_START);
    points.push(anchor);
    for [c1, c2, end] in CURVE_SEGMENTS {
        let end = map(end);
        let arc = sample_cubic(anchor, map(c1), map(c2), end, steps);
        points.extend_from_slice(&arc[1..]);
        anchor = end;
    }
    // Last sample duplicates the start point
    points.pop();
    Path::new(points)
}

pub fn mane_curve(center: Point, scale: f64) -> Vec<Point> {
    let [p0, p1, p2, p3] = MANE.map(|raw| to_canvas(raw, center, scale));
    sample_cubic(p0, p1, p2, p3, MANE_STEPS)
}

/// First half of the outline points, traced by the highlight stroke
pub fn highlight_points(path: &Path) -> &[Point] {
    &path.points()[..path.len() / 2]
}
