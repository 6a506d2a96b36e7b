use anyhow::Result;
use std::path::Path;
use tiny_skia::Pixmap;

use crate::models::{BrandKey, Theme};

/// Lowercase, collapse runs of non-alphanumeric characters to a single
/// hyphen, trim edge hyphens, and truncate to 60 characters.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    let mut gap = false;
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }
    slug.truncate(60);
    slug
}

/// Export filename derived from the title slug plus brand and theme ids.
pub fn export_filename(title: &str, brand: BrandKey, theme: Theme) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() { "hero-image" } else { &slug };
    format!("{slug}-{}-{}.png", brand.id(), theme.id())
}

/// Save a pixmap to PNG with compression quality control (0-100).
/// Maps 0-100 to PNG compression types:
/// - 0-25: Fast (fastest encoding, larger files)
/// - 26-75: Default (balanced)
/// - 76-100: Best (slowest encoding, smallest files)
pub fn save_png_with_quality(pixmap: &Pixmap, output_path: &Path, quality: u8) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to create PNG file: {e}"))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);

    // Map quality 0-100 to compression type
    let compression_type = if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    };
    encoder.set_compression(compression_type);

    let mut writer = encoder
        .write_header()
        .map_err(|e| anyhow::anyhow!("Failed to write PNG header: {e}"))?;

    writer
        .write_image_data(pixmap.data())
        .map_err(|e| anyhow::anyhow!("Failed to write PNG data: {e}"))?;

    Ok(())
}
