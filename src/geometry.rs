//! Points, closed paths and the curve helpers used to build the knight

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Closed polygon outline; the last point connects back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Path { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        Path::new(self.points.iter().map(|p| p.translated(dx, dy)).collect())
    }

    /// Edges as (start, end) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Axis-aligned bounds as (min, max), or None for an empty path
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Maps a point from the 0..100 design space onto the canvas.
///
/// The design origin `(50, 52)` lands on `center`, and 50 design units span
/// `scale` pixels.
pub fn to_canvas(raw: (f64, f64), center: Point, scale: f64) -> Point {
    Point::new(
        center.x + (raw.0 - 50.0) * scale / 50.0,
        center.y + (raw.1 - 52.0) * scale / 50.0,
    )
}

/// Evaluates `B(t) = (1-t)³P0 + 3(1-t)²tP1 + 3(1-t)t²P2 + t³P3`
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Samples a cubic segment at `steps + 1` evenly spaced values of t,
/// endpoints included.
pub fn sample_cubic(p0: Point, p1: Point, p2: Point, p3: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| cubic_bezier(p0, p1, p2, p3, i as f64 / steps as f64))
        .collect()
}

/// Integer offsets inside a disk of radius `r`, used to stamp a path
/// repeatedly for a cheap outline.
pub fn dilation_offsets(r: i32) -> Vec<(i32, i32)> {
    let mut offsets = Vec::new();
    for dx in -r..=r {
        for dy in -r..=r {
            if dx * dx + dy * dy <= r * r {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// `max(minimum, floor(size * fraction))`
pub fn scaled_at_least(size: u32, fraction: f64, minimum: u32) -> u32 {
    ((size as f64 * fraction).floor() as u32).max(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_hits_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p3 = Point::new(10.0, 5.0);
        let pts = sample_cubic(p0, Point::new(3.0, 8.0), Point::new(7.0, -2.0), p3, 12);
        assert_eq!(pts.len(), 13);
        assert_eq!(pts[0], p0);
        assert_eq!(pts[12], p3);
    }

    #[test]
    fn test_bezier_straight_line_stays_on_line() {
        let p0 = Point::new(0.0, 0.0);
        let p3 = Point::new(9.0, 0.0);
        let pts = sample_cubic(p0, Point::new(3.0, 0.0), Point::new(6.0, 0.0), p3, 9);
        for (i, p) in pts.iter().enumerate() {
            assert!(p.y.abs() < 1e-12);
            assert!((p.x - i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(sample_cubic(p, p, p, p, 0).len(), 2);
    }

    #[test]
    fn test_dilation_radius_two() {
        let offsets = dilation_offsets(2);
        // 5x5 square minus the four corners
        assert_eq!(offsets.len(), 21);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(2, 0)));
        assert!(!offsets.contains(&(2, 2)));
    }

    #[test]
    fn test_to_canvas_maps_design_origin_to_center() {
        let c = Point::new(100.0, 110.0);
        assert_eq!(to_canvas((50.0, 52.0), c, 40.0), c);
        assert_eq!(to_canvas((100.0, 52.0), c, 40.0), Point::new(140.0, 110.0));
    }

    #[test]
    fn test_path_bounds_and_edges() {
        let path = Path::new(vec![
            Point::new(1.0, 2.0),
            Point::new(5.0, -1.0),
            Point::new(3.0, 7.0),
        ]);
        let (lo, hi) = path.bounds().unwrap();
        assert_eq!(lo, Point::new(1.0, -1.0));
        assert_eq!(hi, Point::new(5.0, 7.0));
        let edges: Vec<_> = path.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(3.0, 7.0), Point::new(1.0, 2.0)));
        assert!(Path::new(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_scaled_at_least() {
        assert_eq!(scaled_at_least(32, 0.015, 2), 2);
        assert_eq!(scaled_at_least(512, 0.015, 2), 7);
        assert_eq!(scaled_at_least(180, 0.006, 1), 1);
    }
}
