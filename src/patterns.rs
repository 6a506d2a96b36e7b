//! The seven abstract background renderers.
//!
//! Every renderer paints a fully opaque background before any decoration and
//! draws all randomized elements from the supplied PRNG stream in a fixed
//! call order, so a given (seed, theme, scheme) always reproduces the same
//! surface. All coordinates are logical; `ctm` carries the output scale.

use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Point,
    RadialGradient, Rect, SpreadMode, Stroke, Transform,
};

use crate::color_utils::{solid, with_alpha};
use crate::models::{ColorScheme, Theme};
use crate::rng::Mulberry32;

pub fn draw_pattern(
    theme: Theme,
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    match theme {
        Theme::Strata => strata(pixmap, width, height, scheme, rng, ctm),
        Theme::Weave => weave(pixmap, width, height, scheme, rng, ctm),
        Theme::Circuit => uniform_grid(pixmap, width, height, scheme, ctm, 42.0, 0.2, 1.5),
        Theme::MinimalGrid => uniform_grid(pixmap, width, height, scheme, ctm, 64.0, 0.12, 1.0),
        Theme::SoftDiagonal => soft_diagonal(pixmap, width, height, scheme, rng, ctm),
        Theme::PaperWaves => paper_waves(pixmap, width, height, scheme, rng, ctm),
        Theme::HighContrastStripes => {
            high_contrast_stripes(pixmap, width, height, scheme, rng, ctm);
        }
    }
}

/// Diagonal gradient base, translucent vertical stripes, radial accent glows.
fn strata(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    fill_linear_gradient(
        pixmap,
        width,
        height,
        solid(scheme.background),
        solid(scheme.accent),
        ctm,
    );

    for _ in 0..80 {
        let x = (rng.next() * f64::from(width)).floor() as f32;
        let stripe_width = 6.0 + (rng.next() * 28.0).floor() as f32;
        let alpha = 0.08 + rng.next_f32() * 0.25;
        fill_rect(
            pixmap,
            x,
            0.0,
            stripe_width,
            height,
            with_alpha(scheme.accent, alpha),
            ctm,
        );
    }

    for _ in 0..18 {
        let radius = 120.0 + rng.next_f32() * 240.0;
        let x = rng.next_f32() * width;
        let y = rng.next_f32() * height;
        let stops = vec![
            GradientStop::new(0.0, with_alpha(scheme.accent, 0.35)),
            GradientStop::new(1.0, with_alpha(scheme.background, 0.0)),
        ];
        let center = Point::from_xy(x, y);
        let Some(shader) =
            RadialGradient::new(center, center, radius, stops, SpreadMode::Pad, Transform::identity())
        else {
            continue;
        };

        let mut pb = PathBuilder::new();
        pb.push_circle(x, y, radius);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.shader = shader;
            paint.anti_alias = true;
            pixmap
                .as_mut()
                .fill_path(&path, &paint, FillRule::Winding, ctm, None);
        }
    }
}

/// Jittered stroked grid cells with thick sine ribbons over a solid base.
fn weave(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    fill_rect(pixmap, 0.0, 0.0, width, height, solid(scheme.background), ctm);

    let step = 36.0_f32;
    let cell_color = with_alpha(scheme.accent, 0.22);
    let mut y = -step;
    while y < height + step {
        let mut x = -step;
        while x < width + step {
            let offset = (rng.next_f32() - 0.5) * step * 0.6;
            let size = step * 0.9;
            stroke_rect(pixmap, x + offset, y - offset, size, size, cell_color, 2.0, ctm);
            x += step;
        }
        y += step;
    }

    for _ in 0..6 {
        let start_y = rng.next_f32() * height;
        let line_width = 8.0 + rng.next_f32() * 10.0;

        let mut pb = PathBuilder::new();
        let mut x = -40.0_f32;
        let mut first = true;
        while x <= width + 40.0 {
            let wave =
                ((x / width) * std::f32::consts::TAU + rng.next_f32() * 4.0).sin() * 40.0;
            if first {
                pb.move_to(x, start_y + wave);
                first = false;
            } else {
                pb.line_to(x, start_y + wave);
            }
            x += 60.0;
        }
        stroke_poly(pixmap, pb, with_alpha(scheme.accent, 0.5), line_width, ctm);
    }
}

/// Uniform orthogonal grid; consumes no randomness, so renders are
/// seed-invariant. Circuit and Minimal Grid differ only in constants.
fn uniform_grid(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    ctm: Transform,
    spacing: f32,
    alpha: f32,
    line_width: f32,
) {
    fill_rect(pixmap, 0.0, 0.0, width, height, solid(scheme.background), ctm);

    let color = with_alpha(scheme.accent, alpha);
    let mut x = 0.0_f32;
    while x <= width {
        stroke_line(pixmap, x, 0.0, x, height, color, line_width, ctm);
        x += spacing;
    }
    let mut y = 0.0_f32;
    while y <= height {
        stroke_line(pixmap, 0.0, y, width, y, color, line_width, ctm);
        y += spacing;
    }
}

/// Gradient base with rotated translucent bands tiled left to right.
fn soft_diagonal(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    fill_linear_gradient(
        pixmap,
        width,
        height,
        solid(scheme.background),
        with_alpha(scheme.accent, 0.35),
        ctm,
    );

    // translate then rotate, matching the band placement of the original
    let band_transform = Transform::from_rotate(-18.0)
        .post_translate(width * 0.1, -height * 0.2)
        .post_concat(ctm);
    for i in 0..8 {
        let alpha = 0.06 + rng.next_f32() * 0.08;
        fill_rect(
            pixmap,
            i as f32 * 180.0,
            0.0,
            120.0,
            height * 2.0,
            with_alpha(scheme.accent, alpha),
            band_transform,
        );
    }
}

/// Evenly spaced horizontal sine strokes with randomized amplitude.
fn paper_waves(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    fill_rect(pixmap, 0.0, 0.0, width, height, solid(scheme.background), ctm);

    for i in 0..7 {
        let base_y = height * 0.2 + i as f32 * 70.0;
        let amplitude = 16.0 + rng.next_f32() * 10.0;

        let mut pb = PathBuilder::new();
        let mut x = 0.0_f32;
        let mut first = true;
        while x <= width {
            let wave = ((x / width) * std::f32::consts::TAU + i as f32).sin() * amplitude;
            if first {
                pb.move_to(x, base_y + wave);
                first = false;
            } else {
                pb.line_to(x, base_y + wave);
            }
            x += 24.0;
        }
        stroke_poly(pixmap, pb, with_alpha(scheme.accent, 0.22), 2.0, ctm);
    }
}

/// Greedy vertical stripe fill across the top 60% of the surface, mixing
/// bright and dim stripes with occasional dark hairlines.
fn high_contrast_stripes(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    scheme: &ColorScheme,
    rng: &mut Mulberry32,
    ctm: Transform,
) {
    fill_rect(pixmap, 0.0, 0.0, width, height, solid(scheme.background), ctm);
    fill_linear_gradient(
        pixmap,
        width,
        height,
        solid(scheme.background),
        with_alpha(scheme.background, 0.9),
        ctm,
    );

    let hairline = with_alpha("#000000", 0.25);
    let band_height = (height * 0.6).floor();
    let mut x = 0.0_f32;
    while x < width {
        let stripe_width = 3.0 + (rng.next() * 8.0).floor() as f32;
        let gap = 2.0 + (rng.next() * 6.0).floor() as f32;
        let bright = rng.next() > 0.7;
        let alpha = if bright { 0.65 } else { 0.18 };
        fill_rect(
            pixmap,
            x,
            0.0,
            stripe_width,
            band_height,
            with_alpha(scheme.accent, alpha),
            ctm,
        );
        // the hairline draw consumes randomness only for bright stripes
        if bright && rng.next() > 0.6 {
            fill_rect(
                pixmap,
                x + (stripe_width * 0.6).floor(),
                0.0,
                1.0,
                band_height,
                hairline,
                ctm,
            );
        }
        x += stripe_width + gap;
    }

    fill_rect(pixmap, 0.0, band_height - 2.0, width, 2.0, hairline, ctm);
}

// ── drawing helpers ──

fn fill_rect(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
    transform: Transform,
) {
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        pixmap.as_mut().fill_rect(rect, &paint, transform, None);
    }
}

fn fill_linear_gradient(
    pixmap: &mut Pixmap,
    width: f32,
    height: f32,
    start: Color,
    end: Color,
    ctm: Transform,
) {
    let stops = vec![GradientStop::new(0.0, start), GradientStop::new(1.0, end)];
    let shader = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(width, height),
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    );
    match shader {
        Some(shader) => {
            if let Some(rect) = Rect::from_xywh(0.0, 0.0, width, height) {
                let mut paint = Paint::default();
                paint.shader = shader;
                paint.anti_alias = true;
                pixmap.as_mut().fill_rect(rect, &paint, ctm, None);
            }
        }
        // degenerate gradient geometry falls back to the start color
        None => fill_rect(pixmap, 0.0, 0.0, width, height, start, ctm),
    }
}

fn stroke_rect(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
    line_width: f32,
    transform: Transform,
) {
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        pixmap
            .as_mut()
            .stroke_path(&path, &paint, &stroke, transform, None);
    }
}

fn stroke_line(
    pixmap: &mut Pixmap,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Color,
    line_width: f32,
    transform: Transform,
) {
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        pixmap
            .as_mut()
            .stroke_path(&path, &paint, &stroke, transform, None);
    }
}

fn stroke_poly(
    pixmap: &mut Pixmap,
    pb: PathBuilder,
    color: Color,
    line_width: f32,
    transform: Transform,
) {
    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        pixmap
            .as_mut()
            .stroke_path(&path, &paint, &stroke, transform, None);
    }
}
