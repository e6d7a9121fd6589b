// File: crates/chart-core/src/scene.rs
// Summary: Declarative scene produced by the composer, and the surface trait backends implement.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::series::DataPoint;
use crate::theme::Color;
use crate::types::ChartLayout;

/// Paint group a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Grid,
    Axis,
    /// Data-bearing geometry (paths, bars, markers).
    Series,
    Label,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub at: Point,
    pub content: String,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub size: f64,
    pub bold: bool,
    /// Degrees, clockwise, around `at`.
    pub rotate: f64,
    pub fill: Color,
}

impl Text {
    pub fn new(at: Point, content: impl Into<String>, fill: Color) -> Self {
        Self {
            at,
            content: content.into(),
            anchor: Anchor::Middle,
            baseline: Baseline::Alphabetic,
            size: 10.0,
            bold: false,
            rotate: 0.0,
            fill,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self { self.anchor = anchor; self }
    pub fn baseline(mut self, baseline: Baseline) -> Self { self.baseline = baseline; self }
    pub fn size(mut self, size: f64) -> Self { self.size = size; self }
    pub fn bold(mut self) -> Self { self.bold = true; self }
    pub fn rotated(mut self, degrees: f64) -> Self { self.rotate = degrees; self }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Open polyline through `points`.
    Path { points: Vec<Point>, stroke: Color, width: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, fill: Color },
    Line { from: Point, to: Point, stroke: Color, width: f64 },
    Circle { center: Point, radius: f64, fill: Color, marker: Option<MarkerId> },
    Text(Text),
}

impl Primitive {
    /// SVG path syntax for a polyline: `M x,y L x,y ...`.
    pub fn path_data(points: &[Point]) -> String {
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{cmd}{},{}", fmt_num(p.x), fmt_num(p.y));
        }
        d
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub layer: Layer,
    pub primitive: Primitive,
}

impl Node {
    pub fn new(layer: Layer, primitive: Primitive) -> Self {
        Self { layer, primitive }
    }
}

/// Interactive hit region over a rendered point, in plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub center: Point,
    pub radius: f64,
    pub point: DataPoint,
}

impl Marker {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}

/// Output of one render pass: nodes in paint order, all translated by `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub origin: Point,
    pub background: Color,
    pub nodes: Vec<Node>,
    pub markers: Vec<Marker>,
}

impl Scene {
    pub fn new(layout: &ChartLayout, background: Color) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            origin: layout.origin(),
            background,
            nodes: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.nodes.iter().filter(move |n| n.layer == layer).map(|n| &n.primitive)
    }

    /// Number of data-bearing primitives (paths, bars, point markers).
    pub fn data_primitive_count(&self) -> usize {
        self.layer(Layer::Series).count()
    }

    /// Every text string in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &Text> + '_ {
        self.nodes.iter().filter_map(|n| match &n.primitive {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Topmost marker under `at`, given in canvas coordinates.
    pub fn marker_at(&self, at: Point) -> Option<&Marker> {
        let local = at.relative_to(self.origin);
        self.markers.iter().rev().find(|m| m.contains(local))
    }

    /// Replay the scene onto `surface`.
    pub fn draw_to<S: RenderSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.begin(self.width, self.height, self.origin, self.background)?;
        for node in &self.nodes {
            surface.primitive(node)?;
        }
        for marker in &self.markers {
            surface.bind_marker(marker)?;
        }
        surface.finish()
    }
}

/// A drawing backend. Coordinates handed to `primitive` are in plot space;
/// the surface applies the `origin` translation given to `begin`.
pub trait RenderSurface {
    type Error;

    fn begin(&mut self, width: f64, height: f64, origin: Point, background: Color) -> Result<(), Self::Error>;
    fn primitive(&mut self, node: &Node) -> Result<(), Self::Error>;
    /// Hook for hosts that wire pointer callbacks to marker regions.
    fn bind_marker(&mut self, _marker: &Marker) -> Result<(), Self::Error> {
        Ok(())
    }
    fn finish(&mut self) -> Result<(), Self::Error>;
}

/// Shortest fixed-point rendering with at most two decimals.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
