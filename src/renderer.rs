//! Composition pipeline: pattern background, kicker, wrapped title, logo.

use anyhow::Result;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::color_utils::{is_dark, with_alpha};
use crate::fonts::FontStore;
use crate::logo::{fit_scale, LogoAsset};
use crate::models::{RenderConfig, TextColorMode};
use crate::patterns::draw_pattern;
use crate::rng::Mulberry32;
use crate::text_utils::wrap_text;

/// Fixed logical surface size; physical size is this times the output scale.
pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 630;

const CONTENT_X: f32 = 72.0;
const KICKER_BASELINE_Y: f32 = 88.0;
const KICKER_FONT_SIZE: f32 = 20.0;
const TITLE_TOP_Y: f32 = 140.0;
const TITLE_MAX_WIDTH: f32 = 760.0;
const LOGO_PADDING: f32 = 56.0;

const LIGHT_TEXT: &str = "#ffffff";
const DARK_TEXT: &str = "#0b1d1f";

/// Render one banner. Pure in (config, logo): the same inputs always yield
/// the same surface. A missing logo or font degrades to a banner without
/// that element.
pub fn render_hero(
    config: &RenderConfig,
    logo: Option<&LogoAsset>,
    fonts: &FontStore,
) -> Result<Pixmap> {
    let scale = config.clamped_scale();
    let mut pixmap = Pixmap::new(CANVAS_WIDTH * scale, CANVAS_HEIGHT * scale)
        .ok_or_else(|| anyhow::anyhow!("Failed to create pixmap"))?;
    let ctm = Transform::from_scale(scale as f32, scale as f32);

    let width = CANVAS_WIDTH as f32;
    let height = CANVAS_HEIGHT as f32;
    let scheme = config.scheme();

    let mut rng = Mulberry32::new(config.seed);
    draw_pattern(config.theme, &mut pixmap, width, height, scheme, &mut rng, ctm);

    let text_color = resolve_text_color(config.text_color, scheme.background);

    let kicker = config.kicker.trim();
    if !kicker.is_empty() {
        fonts.draw_text(
            &mut pixmap,
            &kicker.to_uppercase(),
            CONTENT_X,
            KICKER_BASELINE_Y,
            KICKER_FONT_SIZE,
            with_alpha(text_color, 0.85),
            ctm,
        );
    }

    let title_font_size = if config.title.chars().count() > 120 {
        44.0
    } else {
        56.0
    };
    let line_height = title_font_size * 1.25;
    let ascent = fonts.ascent(title_font_size);
    let lines = wrap_text(
        |candidate| fonts.measure(candidate, title_font_size),
        &config.title,
        CONTENT_X,
        TITLE_TOP_Y,
        TITLE_MAX_WIDTH,
        line_height,
    );
    for line in &lines {
        // line positions are top-aligned; the pen wants a baseline
        fonts.draw_text(
            &mut pixmap,
            &line.text,
            line.x,
            line.y + ascent,
            title_font_size,
            with_alpha(text_color, 1.0),
            ctm,
        );
    }

    if config.show_logo {
        if let Some(logo) = logo {
            draw_logo(&mut pixmap, config, logo, ctm);
        }
    }

    Ok(pixmap)
}

/// Explicit light/dark modes win; auto picks by background luminance.
pub fn resolve_text_color(mode: TextColorMode, background: &str) -> &'static str {
    match mode {
        TextColorMode::Light => LIGHT_TEXT,
        TextColorMode::Dark => DARK_TEXT,
        TextColorMode::Auto => {
            if is_dark(background) {
                LIGHT_TEXT
            } else {
                DARK_TEXT
            }
        }
    }
}

fn draw_logo(pixmap: &mut Pixmap, config: &RenderConfig, logo: &LogoAsset, ctm: Transform) {
    let brand = config.brand.brand();
    let (max_width, max_height) = brand.logo_box;
    let scale = fit_scale(logo.width(), logo.height(), max_width, max_height);
    if scale <= 0.0 {
        return;
    }

    let logo_width = logo.width() * scale;
    let logo_height = logo.height() * scale;
    let x = CANVAS_WIDTH as f32 - logo_width - LOGO_PADDING;
    let y = CANVAS_HEIGHT as f32 - logo_height - LOGO_PADDING;

    let inverted;
    let source = if brand.supports_invert && config.invert_logo {
        inverted = logo.inverted();
        &inverted
    } else {
        logo
    };

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    let transform = Transform::from_scale(scale, scale)
        .post_translate(x, y)
        .post_concat(ctm);
    pixmap
        .as_mut()
        .draw_pixmap(0, 0, source.pixmap().as_ref(), &paint, transform, None);
}
