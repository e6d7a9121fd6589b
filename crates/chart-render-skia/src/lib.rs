// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for dashboard scenes; PNG bytes or file output.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use dashboard_chart_core::{Color, Scene};

mod surface;
mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Rasterize `scene` and encode it as PNG.
pub fn render_png_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let mut surface = SkiaSurface::new();
    scene.draw_to(&mut surface)?;
    surface.encode_png()
}

/// Rasterize `scene` to a PNG file, creating parent directories as needed.
pub fn render_png(scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_png_bytes(scene)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
