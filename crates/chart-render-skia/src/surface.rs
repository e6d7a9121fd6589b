// File: crates/chart-render-skia/src/surface.rs
// Summary: `RenderSurface` implementation over a Skia CPU raster surface.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use dashboard_chart_core::scene::{Node, Primitive, RenderSurface};
use dashboard_chart_core::{Color, Point};

use crate::text::TextShaper;
use crate::to_skia_color;

/// Raster target created on `begin`; every primitive is drawn translated by the scene origin.
pub struct SkiaSurface {
    surface: Option<skia::Surface>,
    shaper: TextShaper,
    draw_labels: bool,
}

impl SkiaSurface {
    pub fn new() -> Self {
        Self { surface: None, shaper: TextShaper::new(), draw_labels: true }
    }

    /// Skip text nodes; font availability varies across machines.
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    fn canvas(surface: &mut Option<skia::Surface>) -> Result<&skia::Canvas> {
        surface
            .as_mut()
            .map(|s| s.canvas())
            .ok_or_else(|| anyhow!("surface used before begin()"))
    }

    /// Snapshot the current raster and encode it as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let surface = self.surface.as_mut().ok_or_else(|| anyhow!("nothing rendered"))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Default for SkiaSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn stroke_paint(color: Color, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(to_skia_color(color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

impl RenderSurface for SkiaSurface {
    type Error = anyhow::Error;

    fn begin(&mut self, width: f64, height: f64, origin: Point, background: Color) -> Result<()> {
        let w = (width.ceil() as i32).max(1);
        let h = (height.ceil() as i32).max(1);
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        self.surface = Some(surface);

        let canvas = Self::canvas(&mut self.surface)?;
        canvas.clear(to_skia_color(background));
        canvas.save();
        canvas.translate((origin.x as f32, origin.y as f32));
        Ok(())
    }

    fn primitive(&mut self, node: &Node) -> Result<()> {
        let Self { surface, shaper, draw_labels } = self;
        let canvas = Self::canvas(surface)?;
        match &node.primitive {
            Primitive::Path { points, stroke, width } => {
                let Some((first, rest)) = points.split_first() else { return Ok(()) };
                let mut path = skia::Path::new();
                path.move_to((first.x as f32, first.y as f32));
                for p in rest {
                    path.line_to((p.x as f32, p.y as f32));
                }
                canvas.draw_path(&path, &stroke_paint(*stroke, *width));
            }
            Primitive::Rect { x, y, width, height, fill } => {
                let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                canvas.draw_rect(rect, &fill_paint(*fill));
            }
            Primitive::Line { from, to, stroke, width } => {
                canvas.draw_line(
                    (from.x as f32, from.y as f32),
                    (to.x as f32, to.y as f32),
                    &stroke_paint(*stroke, *width),
                );
            }
            Primitive::Circle { center, radius, fill, .. } => {
                canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &fill_paint(*fill));
            }
            Primitive::Text(text) => {
                if *draw_labels {
                    shaper.draw(canvas, text);
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Self::canvas(&mut self.surface)?.restore();
        Ok(())
    }
}
