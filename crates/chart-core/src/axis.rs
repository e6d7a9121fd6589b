// File: crates/chart-core/src/axis.rs
// Summary: Tick generation, label formatting and axis/gridline geometry.

use chrono::{DateTime, Utc};

use crate::geometry::Point;
use crate::grid::linspace;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Baseline, Layer, Node, Primitive, Text};
use crate::theme::Color;

/// A labelled reference mark. `position` is in plot pixels along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub value: f64,
    pub label: String,
}

/// Largest tick count the composers accept.
pub const MAX_TICKS: usize = 1000;

/// `tick_count + 1` ticks evenly spaced over the scale's domain, both ends included.
///
/// A zero-width domain yields ticks that all sit at the same position.
/// Counts above [`MAX_TICKS`] are clamped.
pub fn generate_ticks<F>(scale: &LinearScale, tick_count: usize, formatter: F) -> Vec<Tick>
where
    F: Fn(f64) -> String,
{
    let (lo, hi) = scale.domain();
    linspace(lo, hi, tick_count.min(MAX_TICKS) + 1)
        .into_iter()
        .map(|v| Tick { position: scale.map(v), value: v, label: formatter(v) })
        .collect()
}

/// One tick per category, centred on its band.
pub fn band_ticks(scale: &BandScale) -> Vec<Tick> {
    scale
        .bands()
        .into_iter()
        .enumerate()
        .map(|(i, (category, band))| Tick { position: band.center(), value: i as f64, label: category.to_string() })
        .collect()
}

/// Round half up to an integer label.
pub fn format_rounded(v: f64) -> String {
    let r = (v + 0.5).floor();
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

/// Epoch milliseconds as a locale-independent `YYYY-MM-DD` date.
pub fn format_date(ms: f64) -> String {
    if !ms.is_finite() {
        return format_rounded(ms);
    }
    match DateTime::<Utc>::from_timestamp_millis(ms.round() as i64) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => format_rounded(ms),
    }
}

/// Which side of the plot an axis runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    pub line: Color,
    pub tick: Color,
    pub label: Color,
    /// Draw full-plot gridlines through each tick when set.
    pub grid: Option<Color>,
    pub tick_size: f64,
    pub label_size: f64,
    /// Distance from the axis line to the tick label.
    pub label_gap: f64,
    /// Label rotation in degrees; rotated labels hang from their end.
    pub label_rotate: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line: Color::rgb(180, 180, 190),
            tick: Color::rgb(255, 255, 255),
            label: Color::rgb(255, 255, 255),
            grid: None,
            tick_size: 6.0,
            label_size: 10.0,
            label_gap: 0.0,
            label_rotate: 0.0,
        }
    }
}

/// Axis line, tick marks, tick labels and optional gridlines for a plot of `width` × `height`.
pub fn axis_nodes(orientation: Orientation, ticks: &[Tick], width: f64, height: f64, style: &AxisStyle) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(ticks.len() * 3 + 1);
    let (from, to) = match orientation {
        Orientation::Bottom => (Point::new(0.0, height), Point::new(width, height)),
        Orientation::Left => (Point::new(0.0, 0.0), Point::new(0.0, height)),
    };
    nodes.push(Node::new(Layer::Axis, Primitive::Line { from, to, stroke: style.line, width: 1.0 }));

    for tick in ticks {
        let p = tick.position;
        if let Some(grid) = style.grid {
            let (from, to) = match orientation {
                Orientation::Bottom => (Point::new(p, 0.0), Point::new(p, height)),
                Orientation::Left => (Point::new(0.0, p), Point::new(width, p)),
            };
            nodes.push(Node::new(Layer::Grid, Primitive::Line { from, to, stroke: grid, width: 1.0 }));
        }

        let (from, to, label) = match orientation {
            Orientation::Bottom => {
                let gap = if style.label_gap > 0.0 { style.label_gap } else { 20.0 };
                let mut text = Text::new(Point::new(p, height + gap), tick.label.clone(), style.label).size(style.label_size);
                if style.label_rotate != 0.0 {
                    text = text.anchor(Anchor::End).rotated(style.label_rotate);
                }
                (Point::new(p, height), Point::new(p, height + style.tick_size), text)
            }
            Orientation::Left => {
                let gap = if style.label_gap > 0.0 { style.label_gap } else { 10.0 };
                let text = Text::new(Point::new(-gap, p), tick.label.clone(), style.label)
                    .size(style.label_size)
                    .anchor(Anchor::End)
                    .baseline(Baseline::Middle);
                (Point::new(-style.tick_size, p), Point::new(0.0, p), text)
            }
        };
        nodes.push(Node::new(Layer::Axis, Primitive::Line { from, to, stroke: style.tick, width: 1.0 }));
        nodes.push(Node::new(Layer::Label, Primitive::Text(label)));
    }
    nodes
}

/// Axis title centred along the axis; the left title reads bottom-to-top.
pub fn axis_title(orientation: Orientation, title: &str, width: f64, height: f64, color: Color) -> Node {
    let text = match orientation {
        Orientation::Bottom => Text::new(Point::new(width / 2.0, height + 40.0), title, color).size(12.0),
        Orientation::Left => Text::new(Point::new(-40.0, height / 2.0), title, color).size(12.0).rotated(-90.0),
    };
    Node::new(Layer::Label, Primitive::Text(text))
}
