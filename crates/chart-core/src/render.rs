// File: crates/chart-core/src/render.rs
// Summary: Series renderer; turns scaled data into paths, bars, markers and their labels.

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Layer, Marker, MarkerId, Node, Primitive, Text};
use crate::series::{CategoryValue, Series};
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub marker_fill: Color,
    pub marker_radius: f64,
}

/// A connecting path (two or more points) plus one marker per point.
pub fn line_series(series: &Series, x: &LinearScale, y: &LinearScale, style: &LineStyle) -> (Vec<Node>, Vec<Marker>) {
    let points: Vec<Point> = series.points().iter().map(|p| Point::new(x.map(p.x), y.map(p.y))).collect();

    let mut nodes = Vec::with_capacity(points.len() + 1);
    if points.len() >= 2 {
        nodes.push(Node::new(
            Layer::Series,
            Primitive::Path { points: points.clone(), stroke: style.stroke, width: style.stroke_width },
        ));
    }

    let mut markers = Vec::with_capacity(points.len());
    for (i, (center, dp)) in points.into_iter().zip(series.points()).enumerate() {
        let id = MarkerId(i);
        nodes.push(Node::new(
            Layer::Series,
            Primitive::Circle { center, radius: style.marker_radius, fill: style.marker_fill, marker: Some(id) },
        ));
        markers.push(Marker { id, center, radius: style.marker_radius, point: dp.clone() });
    }
    (nodes, markers)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatioStyle {
    pub colors: [Color; 2],
    pub labels: [String; 2],
    pub unit: String,
    pub text: Color,
    pub font_size: f64,
    pub bar_height: f64,
    /// Combined width of both sections.
    pub total_width: f64,
    pub start_x: f64,
}

/// Two adjacent sections whose widths split `total_width` in proportion to the magnitudes,
/// vertically centred in `height`. Each section carries a category and a magnitude label.
pub fn ratio_bars(magnitudes: [f64; 2], height: f64, style: &RatioStyle) -> Result<Vec<Node>> {
    for (i, m) in magnitudes.iter().enumerate() {
        if !m.is_finite() || *m < 0.0 {
            return Err(ChartError::malformed(i, format!("magnitude must be finite and non-negative, got {m}")));
        }
    }
    let total = magnitudes[0] + magnitudes[1];
    if total <= 0.0 {
        return Err(ChartError::invalid_domain("both ratio magnitudes are zero"));
    }
    if !total.is_finite() {
        return Err(ChartError::invalid_domain("sum of ratio magnitudes overflows"));
    }

    let bar_y = height / 2.0 - style.bar_height / 2.0;
    let mid_y = bar_y + style.bar_height / 2.0;
    let mut x = style.start_x;
    let mut nodes = Vec::with_capacity(6);
    for i in 0..2 {
        let value = magnitudes[i];
        let width = value / total * style.total_width;
        nodes.push(Node::new(
            Layer::Series,
            Primitive::Rect { x, y: bar_y, width, height: style.bar_height, fill: style.colors[i] },
        ));
        let cx = x + width / 2.0;
        let value_label = Text::new(Point::new(cx, mid_y + 12.0), format!("{value} {}", style.unit), style.text)
            .size(style.font_size)
            .bold();
        let category_label = Text::new(Point::new(cx, mid_y - 8.0), style.labels[i].clone(), style.text)
            .size(style.font_size)
            .bold();
        nodes.push(Node::new(Layer::Label, Primitive::Text(value_label)));
        nodes.push(Node::new(Layer::Label, Primitive::Text(category_label)));
        x += width;
    }
    Ok(nodes)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle {
    pub fill: Color,
    /// Value label colour; `None` draws no value labels.
    pub value_label: Option<Color>,
    pub label_size: f64,
}

/// One rectangle per category, rising from the zero line of `y`.
/// `values` must already be aggregated (one entry per category).
pub fn category_bars(values: &[CategoryValue], x: &BandScale, y: &LinearScale, style: &BarStyle) -> Result<Vec<Node>> {
    let zero = y.map(0.0);
    let mut nodes = Vec::with_capacity(values.len() * 2);
    for v in values {
        let band = x.band(&v.category)?;
        let top = y.map(v.value);
        let (rect_y, rect_h) = if top <= zero { (top, zero - top) } else { (zero, top - zero) };
        nodes.push(Node::new(
            Layer::Series,
            Primitive::Rect { x: band.start, y: rect_y, width: band.width, height: rect_h, fill: style.fill },
        ));
        if let Some(color) = style.value_label {
            let label = Text::new(Point::new(band.center(), rect_y - 4.0), format_value(v.value), color).size(style.label_size);
            nodes.push(Node::new(Layer::Label, Primitive::Text(label)));
        }
    }
    Ok(nodes)
}

/// Integers print bare, everything else with one decimal.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v}") } else { format!("{v:.1}") }
}
