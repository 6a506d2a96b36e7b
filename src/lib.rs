pub mod color_utils;
pub mod fonts;
pub mod logo;
pub mod models;
pub mod patterns;
pub mod renderer;
pub mod rng;
pub mod text_utils;
pub mod utils;

pub use fonts::FontStore;
pub use logo::{fit_scale, LogoAsset, LogoError};
pub use models::{Brand, BrandKey, ColorScheme, RenderConfig, TextColorMode, Theme};
pub use renderer::{render_hero, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use rng::Mulberry32;
pub use utils::{export_filename, save_png_with_quality, slugify};

#[cfg(test)]
mod tests;
