/// Drawing constants shared by every style variant

pub mod colors {
    use image::Rgba;

    pub const GOLD: Rgba<u8> = Rgba([212, 175, 55, 255]);
    pub const DARK_GOLD: Rgba<u8> = Rgba([154, 123, 44, 255]);
    pub const WHITE_GOLD: Rgba<u8> = Rgba([245, 208, 96, 255]);
    pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    pub const NEAR_BLACK: Rgba<u8> = Rgba([20, 20, 20, 255]);
    pub const CHARCOAL: Rgba<u8> = Rgba([64, 64, 64, 255]);
    pub const GRAPHITE: Rgba<u8> = Rgba([46, 46, 50, 255]);
    pub const CARBON: Rgba<u8> = Rgba([28, 28, 30, 255]);
}

/// Fractions of the canvas size. Every size-derived length goes through
/// `scaled_at_least` so the 32px favicon still shows each element.
pub mod layout {
    /// Largest accepted icon edge, in pixels
    pub const MAX_ICON_SIZE: u32 = 8192;

    /// Rows and columns of the checkered flag
    pub const CHECKER_CELLS: u32 = 8;

    pub const FRAME_MARGIN: f64 = 0.04;
    pub const FRAME_RADIUS: f64 = 0.18;

    pub const OVERLAY_RADIUS: f64 = 0.38;
    pub const OVERLAY_RADIUS_MASKABLE: f64 = 0.33;
    pub const RING_WIDTH: f64 = 0.012;

    pub const BORDER_WIDTH: f64 = 0.02;
    /// Maskable border inset, keeps the stroke inside the 80% safe zone
    pub const BORDER_INSET_MASKABLE: f64 = 0.12;
    pub const BORDER_RADIUS_MASKABLE: f64 = 0.12;

    pub const KNIGHT_SCALE: f64 = 0.32;
    pub const KNIGHT_SCALE_MASKABLE: f64 = 0.27;
    /// Knight sits slightly below the center
    pub const KNIGHT_DROP: f64 = 0.02;

    pub const OUTLINE_RADIUS: f64 = 0.015;
    pub const HIGHLIGHT_WIDTH: f64 = 0.006;
    pub const MANE_WIDTH: f64 = 0.008;
    pub const EYE_RADIUS: f64 = 0.018;
    pub const EYE_RADIUS_MASKABLE: f64 = 0.016;

    /// Eye position as fractions of the knight scale, relative to the knight center
    pub const EYE_OFFSET_X: f64 = -0.08;
    pub const EYE_OFFSET_Y: f64 = -0.38;

    /// Maskable content must stay inside the inner 80%
    pub const SAFE_ZONE_MARGIN: f64 = 0.1;
}

pub mod bezier {
    /// Samples per cubic segment of the premium knight outline
    pub const STEPS_PER_SEGMENT: usize = 12;
    pub const MANE_STEPS: usize = 16;
}
