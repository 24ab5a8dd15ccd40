use clap::ValueEnum;
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::constants::colors::*;

/// One of the five visual treatments of the Checkmate GP icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVariant {
    /// Gold and black checkered flag behind a dark disc
    #[default]
    Checkered,
    /// Near-black rounded tile with a gold border
    Border,
    /// Gold gradient tile with a dark knight
    GoldGradient,
    /// Graphite gradient with a smooth curved knight and mane
    Premium,
    /// Plain carbon tile
    Carbon,
}

impl StyleVariant {
    pub const ALL: [StyleVariant; 5] = [
        StyleVariant::Checkered,
        StyleVariant::Border,
        StyleVariant::GoldGradient,
        StyleVariant::Premium,
        StyleVariant::Carbon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleVariant::Checkered => "checkered",
            StyleVariant::Border => "border",
            StyleVariant::GoldGradient => "gold-gradient",
            StyleVariant::Premium => "premium",
            StyleVariant::Carbon => "carbon",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StyleVariant::Checkered => "checkered flag, dark disc and gold ring",
            StyleVariant::Border => "rounded near-black tile with a gold border",
            StyleVariant::GoldGradient => "diagonal gold gradient with a dark knight",
            StyleVariant::Premium => "graphite gradient, curved knight with mane",
            StyleVariant::Carbon => "plain carbon tile",
        }
    }

    pub fn style(self) -> Style {
        match self {
            StyleVariant::Checkered => Style {
                background: Background::Checker { a: GOLD, b: BLACK },
                overlay: Some(Overlay { color: BLACK, alpha: 210 }),
                ring: Some(GOLD),
                border: None,
                knight: KnightShape::Literal,
                fill: GOLD,
                outline: DARK_GOLD,
                highlight: Some(WHITE_GOLD),
                mane: None,
                eye: BLACK,
            },
            StyleVariant::Border => Style {
                background: Background::Solid(NEAR_BLACK),
                overlay: None,
                ring: None,
                border: Some(GOLD),
                knight: KnightShape::Literal,
                fill: GOLD,
                outline: DARK_GOLD,
                highlight: Some(WHITE_GOLD),
                mane: None,
                eye: BLACK,
            },
            StyleVariant::GoldGradient => Style {
                background: Background::Gradient { from: WHITE_GOLD, to: DARK_GOLD },
                overlay: None,
                ring: None,
                border: None,
                knight: KnightShape::Literal,
                fill: NEAR_BLACK,
                outline: BLACK,
                highlight: Some(CHARCOAL),
                mane: None,
                eye: GOLD,
            },
            StyleVariant::Premium => Style {
                background: Background::Gradient { from: GRAPHITE, to: BLACK },
                overlay: Some(Overlay { color: BLACK, alpha: 120 }),
                ring: Some(GOLD),
                border: None,
                knight: KnightShape::Curved,
                fill: GOLD,
                outline: DARK_GOLD,
                highlight: Some(WHITE_GOLD),
                mane: Some(DARK_GOLD),
                eye: BLACK,
            },
            StyleVariant::Carbon => Style {
                background: Background::Solid(CARBON),
                overlay: None,
                ring: None,
                border: None,
                knight: KnightShape::Literal,
                fill: GOLD,
                outline: DARK_GOLD,
                highlight: None,
                mane: None,
                eye: BLACK,
            },
        }
    }
}

impl std::fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Full-canvas 8x8 grid, `a` on even cells
    Checker { a: Rgba<u8>, b: Rgba<u8> },
    /// Solid color inside the rounded frame
    Solid(Rgba<u8>),
    /// Top-left to bottom-right gradient inside the rounded frame
    Gradient { from: Rgba<u8>, to: Rgba<u8> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub color: Rgba<u8>,
    pub alpha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnightShape {
    /// Straight edges between the literal outline points
    Literal,
    /// Cubic Bezier arcs between anchors
    Curved,
}

/// Immutable bundle of colors and features for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Background,
    pub overlay: Option<Overlay>,
    /// Ring color around the overlay disc
    pub ring: Option<Rgba<u8>>,
    /// Rounded-rect border stroke color
    pub border: Option<Rgba<u8>>,
    pub knight: KnightShape,
    /// Primary accent color
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub highlight: Option<Rgba<u8>>,
    pub mane: Option<Rgba<u8>>,
    pub eye: Rgba<u8>,
}
