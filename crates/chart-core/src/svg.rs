// File: crates/chart-core/src/svg.rs
// Summary: Standalone SVG document surface for scenes.

use std::fmt::{self, Write as _};

use crate::geometry::Point;
use crate::scene::{fmt_num as n, Anchor, Baseline, Node, Primitive, RenderSurface, Scene};
use crate::theme::Color;

/// Accumulates an SVG document. Marker circles carry `data-marker="<id>"`
/// so a host page can bind pointer callbacks to them.
#[derive(Debug, Default)]
pub struct SvgSurface {
    buf: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl RenderSurface for SvgSurface {
    type Error = fmt::Error;

    fn begin(&mut self, width: f64, height: f64, origin: Point, background: Color) -> fmt::Result {
        self.buf.clear();
        writeln!(
            self.buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = n(width),
            h = n(height)
        )?;
        writeln!(self.buf, r#"<rect width="100%" height="100%" fill="{}"/>"#, background.to_css())?;
        writeln!(self.buf, r#"<g transform="translate({}, {})">"#, n(origin.x), n(origin.y))
    }

    fn primitive(&mut self, node: &Node) -> fmt::Result {
        match &node.primitive {
            Primitive::Path { points, stroke, width } => writeln!(
                self.buf,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                Primitive::path_data(points),
                stroke.to_css(),
                n(*width)
            ),
            Primitive::Rect { x, y, width, height, fill } => writeln!(
                self.buf,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                n(*x),
                n(*y),
                n(*width),
                n(*height),
                fill.to_css()
            ),
            Primitive::Line { from, to, stroke, width } => writeln!(
                self.buf,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                n(from.x),
                n(from.y),
                n(to.x),
                n(to.y),
                stroke.to_css(),
                n(*width)
            ),
            Primitive::Circle { center, radius, fill, marker } => {
                write!(self.buf, r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#, n(center.x), n(center.y), n(*radius), fill.to_css())?;
                if let Some(id) = marker {
                    write!(self.buf, r#" data-marker="{}""#, id.0)?;
                }
                writeln!(self.buf, "/>")
            }
            Primitive::Text(t) => {
                let anchor = match t.anchor {
                    Anchor::Start => "start",
                    Anchor::Middle => "middle",
                    Anchor::End => "end",
                };
                write!(
                    self.buf,
                    r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{}px" fill="{}""#,
                    n(t.at.x),
                    n(t.at.y),
                    n(t.size),
                    t.fill.to_css()
                )?;
                if t.baseline == Baseline::Middle {
                    write!(self.buf, r#" dominant-baseline="middle""#)?;
                }
                if t.bold {
                    write!(self.buf, r#" font-weight="bold""#)?;
                }
                if t.rotate != 0.0 {
                    write!(self.buf, r#" transform="rotate({} {} {})""#, n(t.rotate), n(t.at.x), n(t.at.y))?;
                }
                writeln!(self.buf, ">{}</text>", escape(&t.content))
            }
        }
    }

    fn finish(&mut self) -> fmt::Result {
        writeln!(self.buf, "</g>")?;
        writeln!(self.buf, "</svg>")
    }
}

/// Render `scene` to an SVG document string.
pub fn to_svg(scene: &Scene) -> Result<String, fmt::Error> {
    let mut surface = SvgSurface::new();
    scene.draw_to(&mut surface)?;
    Ok(surface.into_string())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
