//! System font discovery, text measurement, and glyph rasterization.
//!
//! Faces come from the platform font database; glyph outlines are filled
//! straight into the pixmap through a tiny-skia pen. When no usable face
//! exists every operation is a no-op, so rendering degrades to a text-free
//! banner instead of failing.

use skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
    raw::FontRef,
    MetadataProvider,
};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

struct LoadedFace {
    data: Vec<u8>,
    index: u32,
}

pub struct FontStore {
    face: Option<LoadedFace>,
}

impl FontStore {
    /// Query the system font database, preferring a bold sans-serif face.
    pub fn load_system() -> FontStore {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let queries = [
            fontdb::Query {
                families: &[fontdb::Family::SansSerif],
                weight: fontdb::Weight::BOLD,
                ..fontdb::Query::default()
            },
            fontdb::Query {
                families: &[fontdb::Family::SansSerif],
                ..fontdb::Query::default()
            },
        ];

        let id = queries
            .iter()
            .find_map(|query| db.query(query))
            .or_else(|| db.faces().next().map(|info| info.id));

        let face = id.and_then(|id| {
            db.with_face_data(id, |data, index| LoadedFace {
                data: data.to_vec(),
                index,
            })
        });

        FontStore { face }
    }

    /// A store with no face; all text operations become no-ops.
    pub fn empty() -> FontStore {
        FontStore { face: None }
    }

    pub fn has_face(&self) -> bool {
        self.face.is_some()
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        let face = self.face.as_ref()?;
        FontRef::from_index(&face.data, face.index).ok()
    }

    /// Pixel width of `text` at `font_size`: the sum of glyph advances.
    /// Returns 0 without a face, which collapses word-wrap to one line.
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        let Some(font_ref) = self.font_ref() else {
            return 0.0;
        };
        let charmap = font_ref.charmap();
        let glyph_metrics = font_ref.glyph_metrics(Size::new(font_size), LocationRef::default());

        let mut width = 0.0_f32;
        for ch in text.chars() {
            if let Some(glyph_id) = charmap.map(ch) {
                if let Some(advance) = glyph_metrics.advance_width(glyph_id) {
                    width += advance;
                }
            }
        }
        width
    }

    /// Distance from the baseline up to the top of the face at `font_size`.
    pub fn ascent(&self, font_size: f32) -> f32 {
        let Some(font_ref) = self.font_ref() else {
            return 0.0;
        };
        font_ref
            .metrics(Size::new(font_size), LocationRef::default())
            .ascent
    }

    /// Fill `text` at a baseline position. Coordinates are logical; `ctm`
    /// carries the output scale.
    pub fn draw_text(
        &self,
        pixmap: &mut Pixmap,
        text: &str,
        x: f32,
        baseline_y: f32,
        font_size: f32,
        color: Color,
        ctm: Transform,
    ) {
        if text.is_empty() {
            return;
        }
        let Some(font_ref) = self.font_ref() else {
            return;
        };

        let charmap = font_ref.charmap();
        let outlines = font_ref.outline_glyphs();
        let glyph_metrics = font_ref.glyph_metrics(Size::new(font_size), LocationRef::default());

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;

        let mut cursor_x = x;
        for ch in text.chars() {
            let Some(glyph_id) = charmap.map(ch) else {
                continue;
            };
            if let Some(glyph_outline) = outlines.get(glyph_id) {
                let mut pen = GlyphPen::new(cursor_x, baseline_y);
                let settings = DrawSettings::unhinted(Size::new(font_size), LocationRef::default());
                if glyph_outline.draw(settings, &mut pen).is_ok() {
                    if let Some(path) = pen.path.finish() {
                        pixmap
                            .as_mut()
                            .fill_path(&path, &paint, FillRule::Winding, ctm, None);
                    }
                }
            }
            if let Some(advance) = glyph_metrics.advance_width(glyph_id) {
                cursor_x += advance;
            }
        }
    }
}

/// Collects a glyph outline into a tiny-skia path, flipping the y axis from
/// font space (y up) to surface space (y down) around the baseline origin.
struct GlyphPen {
    x: f32,
    y: f32,
    path: PathBuilder,
}

impl GlyphPen {
    fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            path: PathBuilder::new(),
        }
    }
}

impl OutlinePen for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.path.close();
    }
}
