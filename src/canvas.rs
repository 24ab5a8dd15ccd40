use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::geometry::{Path, Point};

/// Rectangle with rounded corners, in pixel units.
///
/// Covers the pixels `left..right` x `top..bottom`; a pixel counts as inside
/// when its center lies inside the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub radius: f64,
}

impl RoundedRect {
    /// Square inset by `margin` on every side of a `size` canvas
    pub fn inset(size: u32, margin: f64, radius: f64) -> Self {
        RoundedRect {
            left: margin,
            top: margin,
            right: size as f64 - margin,
            bottom: size as f64 - margin,
            radius,
        }
    }

    /// The same rectangle shrunk by `amount` on every side
    pub fn shrink(&self, amount: f64) -> Self {
        RoundedRect {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
            radius: (self.radius - amount).max(0.0),
        }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        if px < self.left || px >= self.right || py < self.top || py >= self.bottom {
            return false;
        }
        let r = self
            .radius
            .min((self.right - self.left) / 2.0)
            .min((self.bottom - self.top) / 2.0);
        if r <= 0.0 {
            return true;
        }
        // Distance to the nearest corner circle center, only when in a corner box
        let cx = px.clamp(self.left + r, self.right - r);
        let cy = py.clamp(self.top + r, self.bottom - r);
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= r * r
    }
}

/// Square RGBA pixel buffer that the rasterizer paints into
#[derive(Debug, Clone)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32, color: Rgba<u8>) -> Self {
        Canvas {
            img: RgbaImage::from_pixel(size, size, color),
        }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    /// Paints every pixel whose center satisfies `inside`
    pub fn fill_where<F>(&mut self, color: Rgba<u8>, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            if inside(x as f64 + 0.5, y as f64 + 0.5) {
                *pixel = color;
            }
        }
    }

    /// Tiled two-color grid; cell `(r, c)` gets `a` when `r + c` is even
    pub fn fill_checker(&mut self, rows: u32, cols: u32, a: Rgba<u8>, b: Rgba<u8>) {
        let (w, h) = self.img.dimensions();
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            let c = x as u64 * cols as u64 / w as u64;
            let r = y as u64 * rows as u64 / h as u64;
            *pixel = if (r + c) % 2 == 0 { a } else { b };
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Rgba<u8>) {
        self.fill_where(color, |x, y| rect.contains(x, y));
    }

    /// Diagonal gradient from the top-left corner of `rect` to its bottom-right
    pub fn fill_rounded_rect_gradient(&mut self, rect: &RoundedRect, from: Rgba<u8>, to: Rgba<u8>) {
        let span = ((rect.right - rect.left) + (rect.bottom - rect.top)).max(1.0);
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            if rect.contains(px, py) {
                let t = ((px - rect.left) + (py - rect.top)) / span;
                *pixel = lerp(from, to, t);
            }
        }
    }

    /// Pixels inside `outer` but outside `inner`
    pub fn stroke_rounded_rect(&mut self, outer: &RoundedRect, width: f64, color: Rgba<u8>) {
        let inner = outer.shrink(width);
        self.fill_where(color, |x, y| outer.contains(x, y) && !inner.contains(x, y));
    }

    /// Composites `color` at constant `alpha` over a disk:
    /// `result = bg*(1-a) + color*a`, untouched outside the disk
    pub fn blend_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>, alpha: u8) {
        let a = alpha as f64 / 255.0;
        let r2 = radius * radius;
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            let dx = x as f64 + 0.5 - center.x;
            let dy = y as f64 + 0.5 - center.y;
            if dx * dx + dy * dy <= r2 {
                for i in 0..3 {
                    let mixed = pixel.0[i] as f64 * (1.0 - a) + color.0[i] as f64 * a;
                    pixel.0[i] = mixed.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        let r2 = radius * radius;
        self.fill_where(color, |x, y| {
            let (dx, dy) = (x - center.x, y - center.y);
            dx * dx + dy * dy <= r2
        });
    }

    /// `width` concentric one-pixel circles at `radius`, `radius + 1`, ...
    /// The outermost pixel centers sit within `radius + width - 0.5`.
    pub fn fill_ring(&mut self, center: Point, radius: f64, width: u32, color: Rgba<u8>) {
        if width == 0 {
            return;
        }
        let inner = (radius - 0.5).max(0.0);
        let outer = radius + width as f64 - 0.5;
        let (inner2, outer2) = (inner * inner, outer * outer);
        self.fill_where(color, |x, y| {
            let (dx, dy) = (x - center.x, y - center.y);
            let d2 = dx * dx + dy * dy;
            d2 >= inner2 && d2 <= outer2
        });
    }

    /// Even-odd scanline fill of a closed path, sampled at pixel centers
    pub fn fill_path(&mut self, path: &Path, color: Rgba<u8>) {
        if path.len() < 3 {
            return;
        }
        let size = self.size() as i64;
        let Some((lo, hi)) = path.bounds() else {
            return;
        };
        let y_start = (lo.y.floor() as i64).max(0);
        let y_end = (hi.y.ceil() as i64).min(size);

        let mut crossings: Vec<f64> = Vec::with_capacity(path.len());
        for y in y_start..y_end {
            let yc = y as f64 + 0.5;
            crossings.clear();
            for (a, b) in path.edges() {
                if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                    crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let x0 = ((span[0] - 0.5).ceil() as i64).max(0);
                let x1 = ((span[1] - 0.5).floor() as i64).min(size - 1);
                for x in x0..=x1 {
                    self.img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Thick line segment: pixels whose center is within `width / 2` of `a..b`
    pub fn stroke_segment(&mut self, a: Point, b: Point, width: f64, color: Rgba<u8>) {
        let half = (width / 2.0).max(0.5);
        let size = self.size() as i64;
        let x0 = ((a.x.min(b.x) - half).floor() as i64).max(0);
        let x1 = ((a.x.max(b.x) + half).ceil() as i64).min(size - 1);
        let y0 = ((a.y.min(b.y) - half).floor() as i64).max(0);
        let y1 = ((a.y.max(b.y) + half).ceil() as i64).min(size - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(p, a, b) <= half {
                    self.img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Open polyline through `points`
    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba<u8>) {
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], width, color);
        }
    }

    /// Flattens onto black and drops the alpha channel for PNG output
    pub fn to_rgb(&self) -> RgbImage {
        let (w, h) = self.img.dimensions();
        RgbImage::from_fn(w, h, |x, y| {
            let Rgba([r, g, b, a]) = *self.img.get_pixel(x, y);
            let scale = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
            Rgb([scale(r), scale(g), scale(b)])
        })
    }

    pub fn is_opaque(&self) -> bool {
        self.img.pixels().all(|p| p.0[3] == 255)
    }
}

fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (from.0[i] as f64 + (to.0[i] as f64 - from.0[i] as f64) * t).round() as u8;
    }
    Rgba(out)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (vx, vy) = (b.x - a.x, b.y - a.y);
    let len2 = vx * vx + vy * vy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * vx + (p.y - a.y) * vy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * vx, a.y + t * vy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
