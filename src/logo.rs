//! Brand logo assets: decode, inversion filter, and fit scaling.

use resvg::usvg;
use std::path::Path;
use thiserror::Error;
use tiny_skia::{ColorU8, Pixmap, Transform};

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse SVG logo: {0}")]
    Svg(#[from] usvg::Error),
    #[error("failed to decode logo image: {0}")]
    Decode(String),
    #[error("logo surface allocation failed")]
    Allocation,
}

/// A decoded logo at its natural pixel size.
pub struct LogoAsset {
    pixmap: Pixmap,
}

impl LogoAsset {
    /// Load an SVG or PNG logo. SVGs are rasterized at their natural size;
    /// anything that is not an SVG document is decoded as PNG.
    pub fn load(path: &Path) -> Result<LogoAsset, LogoError> {
        let data = std::fs::read(path)?;
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
            || data.starts_with(b"<?xml")
            || data.starts_with(b"<svg");

        let pixmap = if is_svg {
            let options = usvg::Options::default();
            let tree = usvg::Tree::from_data(&data, &options, &fontdb::Database::new())?;
            let size = tree.size();
            let width = size.width().ceil() as u32;
            let height = size.height().ceil() as u32;
            let mut pixmap = Pixmap::new(width, height).ok_or(LogoError::Allocation)?;
            resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
            pixmap
        } else {
            Pixmap::decode_png(&data).map_err(|e| LogoError::Decode(e.to_string()))?
        };

        Ok(LogoAsset { pixmap })
    }

    /// Wrap an already-decoded pixmap as a logo asset.
    pub fn from_pixmap(pixmap: Pixmap) -> LogoAsset {
        LogoAsset { pixmap }
    }

    pub fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.pixmap.height() as f32
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// A copy with every RGB channel inverted; alpha is preserved. Works on
    /// demultiplied channels so translucent edges invert correctly.
    pub fn inverted(&self) -> LogoAsset {
        let mut pixmap = self.pixmap.clone();
        for pixel in pixmap.pixels_mut() {
            let c = pixel.demultiply();
            let inverted = ColorU8::from_rgba(
                255 - c.red(),
                255 - c.green(),
                255 - c.blue(),
                c.alpha(),
            );
            *pixel = inverted.premultiply();
        }
        LogoAsset { pixmap }
    }
}

/// Uniform scale that fits a `width` x `height` image inside the given
/// bounding box, preserving aspect ratio and never upscaling past 1:1.
pub fn fit_scale(width: f32, height: f32, max_width: f32, max_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    (max_width / width).min(max_height / height).min(1.0)
}
