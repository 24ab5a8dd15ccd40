use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rasterizer::generate;
use crate::style::StyleVariant;

/// One PNG of the icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: &'static str,
    pub size: u32,
    pub maskable: bool,
}

/// Web app and favicon sizes, in the order they are written
pub const ICON_TARGETS: [IconTarget; 5] = [
    IconTarget {
        file_name: "icon-512.png",
        size: 512,
        maskable: false,
    },
    IconTarget {
        file_name: "icon-192.png",
        size: 192,
        maskable: false,
    },
    IconTarget {
        file_name: "apple-touch-icon.png",
        size: 180,
        maskable: false,
    },
    IconTarget {
        file_name: "favicon-32.png",
        size: 32,
        maskable: false,
    },
    IconTarget {
        file_name: "icon-maskable-512.png",
        size: 512,
        maskable: true,
    },
];

/// Renders `target` and saves it as an RGB PNG at `path`
pub fn write_icon(target: &IconTarget, variant: StyleVariant, path: &Path) -> Result<()> {
    let canvas = generate(target.size, variant, target.maskable)
        .with_context(|| format!("Failed to draw {}", target.file_name))?;

    canvas
        .to_rgb()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Writes every entry of `ICON_TARGETS` into `dir`, creating it first.
/// Stops at the first failure.
pub fn write_icon_set(dir: &Path, variant: StyleVariant) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(ICON_TARGETS.len());
    for target in &ICON_TARGETS {
        let path = dir.join(target.file_name);
        write_icon(target, variant, &path)?;

        let suffix = if target.maskable { " [maskable]" } else { "" };
        println!("  Created {} ({}x{}){}", path.display(), target.size, target.size, suffix);

        written.push(path);
    }

    Ok(written)
}
