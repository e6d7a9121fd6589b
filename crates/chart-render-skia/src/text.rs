// File: crates/chart-render-skia/src/text.rs
// Summary: Anchored, optionally rotated text drawing on top of Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use dashboard_chart_core::scene::{Anchor, Baseline, Text};

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(text: &Text) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((text.size as f32).max(1.0));
        ts.set_color(to_skia_color(text.fill));
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if text.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &Text) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(text));
        builder.add_text(&text.content);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its anchor/baseline at `text.at`, rotated around that point.
    pub fn draw(&self, canvas: &skia::Canvas, text: &Text) {
        if text.content.is_empty() {
            return;
        }
        let p = self.layout(text);
        let width = p.longest_line();
        let dx = match text.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -width * 0.5,
            Anchor::End => -width,
        };
        // Paragraph paints from its top-left corner
        let dy = match text.baseline {
            Baseline::Alphabetic => -p.alphabetic_baseline(),
            Baseline::Middle => -p.height() * 0.5,
        };

        canvas.save();
        canvas.translate((text.at.x as f32, text.at.y as f32));
        if text.rotate != 0.0 {
            canvas.rotate(text.rotate as f32, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
