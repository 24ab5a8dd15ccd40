use anyhow::{Result, bail};
use image::Rgba;

use crate::canvas::{Canvas, RoundedRect};
use crate::constants::colors::BLACK;
use crate::constants::layout::*;
use crate::geometry::{Path, Point, dilation_offsets, scaled_at_least};
use crate::knight::{highlight_points, knight_path, mane_curve};
use crate::style::{Background, Style, StyleVariant};

/// Size-derived lengths for one icon, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub maskable: bool,
    pub center: Point,
    pub knight_center: Point,
    pub knight_scale: f64,
    pub overlay_radius: f64,
    pub ring_width: u32,
    pub outline_radius: u32,
    pub highlight_width: u32,
    pub mane_width: u32,
    pub eye_radius: u32,
    /// Background tile
    pub frame: RoundedRect,
    /// Outer edge of the border stroke
    pub border: RoundedRect,
    pub border_width: u32,
}

impl IconLayout {
    pub fn new(size: u32, maskable: bool) -> Result<Self> {
        if size == 0 {
            bail!("icon size must be greater than 0");
        }
        if size > MAX_ICON_SIZE {
            bail!("icon size {} exceeds the {}px limit", size, MAX_ICON_SIZE);
        }
        let s = size as f64;
        let half = s / 2.0;
        let center = Point::new(half, half);
        let knight_scale = s * if maskable { KNIGHT_SCALE_MASKABLE } else { KNIGHT_SCALE };

        let (frame, border) = if maskable {
            // Full bleed; the host mask shapes the tile
            let inset = (s * BORDER_INSET_MASKABLE).ceil();
            let radius = scaled_at_least(size, BORDER_RADIUS_MASKABLE, 2) as f64;
            (RoundedRect::inset(size, 0.0, 0.0), RoundedRect::inset(size, inset, radius))
        } else {
            let margin = scaled_at_least(size, FRAME_MARGIN, 2) as f64;
            let radius = scaled_at_least(size, FRAME_RADIUS, 2) as f64;
            let frame = RoundedRect::inset(size, margin, radius);
            (frame, frame)
        };

        Ok(IconLayout {
            size,
            maskable,
            center,
            knight_center: Point::new(half, half + s * KNIGHT_DROP),
            knight_scale,
            overlay_radius: s * if maskable { OVERLAY_RADIUS_MASKABLE } else { OVERLAY_RADIUS },
            ring_width: scaled_at_least(size, RING_WIDTH, 2),
            outline_radius: scaled_at_least(size, OUTLINE_RADIUS, 2),
            highlight_width: scaled_at_least(size, HIGHLIGHT_WIDTH, 1),
            mane_width: scaled_at_least(size, MANE_WIDTH, 1),
            eye_radius: scaled_at_least(
                size,
                if maskable { EYE_RADIUS_MASKABLE } else { EYE_RADIUS },
                2,
            ),
            frame,
            border,
            border_width: scaled_at_least(size, BORDER_WIDTH, 2),
        })
    }

    pub fn eye_center(&self) -> Point {
        Point::new(
            self.knight_center.x + self.knight_scale * EYE_OFFSET_X,
            self.knight_center.y + self.knight_scale * EYE_OFFSET_Y,
        )
    }
}

/// Paints one icon. The returned canvas is `size` x `size` and fully opaque.
pub fn generate(size: u32, variant: StyleVariant, maskable: bool) -> Result<Canvas> {
    let layout = IconLayout::new(size, maskable)?;
    let style = variant.style();
    let mut canvas = background_canvas(&style, &layout);

    if let Some(overlay) = style.overlay {
        canvas.blend_circle(layout.center, layout.overlay_radius, overlay.color, overlay.alpha);
        if let Some(ring) = style.ring {
            canvas.fill_ring(layout.center, layout.overlay_radius, layout.ring_width, ring);
        }
    }

    if let Some(border) = style.border {
        canvas.stroke_rounded_rect(&layout.border, layout.border_width as f64, border);
    }

    let knight = knight_path(style.knight, layout.knight_center, layout.knight_scale);
    paint_outline(&mut canvas, &knight, layout.outline_radius, style.outline);
    canvas.fill_path(&knight, style.fill);

    if let Some(color) = style.highlight.filter(|_| !maskable) {
        canvas.stroke_polyline(highlight_points(&knight), layout.highlight_width as f64, color);
    }

    if let Some(color) = style.mane {
        let mane = mane_curve(layout.knight_center, layout.knight_scale);
        canvas.stroke_polyline(&mane, layout.mane_width as f64, color);
    }

    canvas.fill_circle(layout.eye_center(), layout.eye_radius as f64, style.eye);

    Ok(canvas)
}

/// The background alone, exactly as `generate` lays it down before any
/// overlay or knight.
pub fn background(size: u32, variant: StyleVariant, maskable: bool) -> Result<Canvas> {
    let layout = IconLayout::new(size, maskable)?;
    Ok(background_canvas(&variant.style(), &layout))
}

fn background_canvas(style: &Style, layout: &IconLayout) -> Canvas {
    let mut canvas = Canvas::new(layout.size, BLACK);
    match style.background {
        Background::Checker { a, b } => {
            canvas.fill_checker(CHECKER_CELLS, CHECKER_CELLS, a, b)
        }
        Background::Solid(color) => canvas.fill_rounded_rect(&layout.frame, color),
        Background::Gradient { from, to } => {
            canvas.fill_rounded_rect_gradient(&layout.frame, from, to)
        }
    }
    canvas
}

/// Stamps the path at every offset within `radius`, a cheap stand-in for a stroke
fn paint_outline(canvas: &mut Canvas, path: &Path, radius: u32, color: Rgba<u8>) {
    for (dx, dy) in dilation_offsets(radius as i32) {
        canvas.fill_path(&path.translated(dx as f64, dy as f64), color);
    }
}
