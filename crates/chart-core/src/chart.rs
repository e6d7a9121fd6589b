// File: crates/chart-core/src/chart.rs
// Summary: Chart composers; layout → scales → axes → series → scene for the three dashboard charts.

use crate::axis::{self, AxisStyle, Orientation};
use crate::error::{ChartError, Result};
use crate::render::{self, BarStyle, LineStyle, RatioStyle};
use crate::scale::{BandScale, LinearScale};
use crate::scene::Scene;
use crate::series::{self, CategoryValue, DomainKind, Series};
use crate::theme::Theme;
use crate::types::ChartLayout;

/// Cumulative progression over time with hoverable point markers.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub layout: ChartLayout,
    pub theme: Theme,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Divisor applied to the running total (1000 turns raw XP into kB).
    pub normalization: f64,
    pub x_title: String,
    pub y_title: String,
    pub marker_radius: f64,
    pub stroke_width: f64,
    pub gridlines: bool,
}

impl LineChart {
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            theme: Theme::default(),
            x_ticks: 5,
            y_ticks: 5,
            normalization: 1000.0,
            x_title: "Date".to_string(),
            y_title: "XP (kB)".to_string(),
            marker_radius: 5.0,
            stroke_width: 2.0,
            gridlines: false,
        }
    }

    pub fn render(&self, series: &Series) -> Result<Scene> {
        series.validate()?;
        check_normalization(self.normalization)?;
        check_ticks(self.x_ticks)?;
        check_ticks(self.y_ticks)?;

        let data = series.cumulative(self.normalization);
        if data.points().iter().any(|p| !p.y.is_finite()) {
            return Err(ChartError::invalid_domain("cumulative total overflows"));
        }
        let (w, h) = (self.layout.inner_width(), self.layout.inner_height());
        let (x_lo, x_hi) = data.x_extent().unwrap_or((0.0, 0.0));
        let (y_lo, y_hi) = data.y_extent().map(|(lo, hi)| (lo.min(0.0), hi.max(0.0))).unwrap_or((0.0, 0.0));
        log::debug!("line chart: {} points, x [{x_lo}, {x_hi}], y [{y_lo}, {y_hi}]", data.len());
        if !(x_hi - x_lo).is_finite() || !(y_hi - y_lo).is_finite() {
            return Err(ChartError::invalid_domain("domain span is not finite"));
        }

        let x = LinearScale::new(x_lo, x_hi, 0.0, w);
        let y = LinearScale::new(y_lo, y_hi, h, 0.0);

        let x_ticks = match data.kind() {
            DomainKind::Time => axis::generate_ticks(&x, self.x_ticks, axis::format_date),
            DomainKind::Numeric => axis::generate_ticks(&x, self.x_ticks, axis::format_rounded),
        };
        let y_ticks = axis::generate_ticks(&y, self.y_ticks, axis::format_rounded);

        let mut scene = Scene::new(&self.layout, self.theme.background);
        let style = axis_style(&self.theme, self.gridlines);
        scene.extend(axis::axis_nodes(Orientation::Bottom, &x_ticks, w, h, &style));
        scene.extend(axis::axis_nodes(Orientation::Left, &y_ticks, w, h, &style));
        push_title(&mut scene, Orientation::Bottom, &self.x_title, w, h, &self.theme);
        push_title(&mut scene, Orientation::Left, &self.y_title, w, h, &self.theme);

        let line_style = LineStyle {
            stroke: self.theme.line_stroke,
            stroke_width: self.stroke_width,
            marker_fill: self.theme.marker_fill,
            marker_radius: self.marker_radius,
        };
        let (nodes, markers) = render::line_series(&data, &x, &y, &line_style);
        scene.extend(nodes);
        scene.markers = markers;

        log::debug!("line chart: {} data primitives", scene.data_primitive_count());
        Ok(scene)
    }
}

/// Horizontal two-section bar comparing two magnitudes (audits given vs received).
#[derive(Clone, Debug, PartialEq)]
pub struct RatioChart {
    pub layout: ChartLayout,
    pub theme: Theme,
    pub labels: [String; 2],
    pub unit: String,
    pub bar_height: f64,
    /// Pixel budget shared by both sections.
    pub bar_width: f64,
    pub start_x: f64,
    pub font_size: f64,
}

impl RatioChart {
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            theme: Theme::default(),
            labels: ["Given".to_string(), "Received".to_string()],
            unit: "MB".to_string(),
            bar_height: 60.0,
            bar_width: 300.0,
            start_x: 20.0,
            font_size: 14.0,
        }
    }

    pub fn render(&self, a: f64, b: f64) -> Result<Scene> {
        log::debug!("ratio chart: {a} vs {b}");
        let style = RatioStyle {
            colors: [self.theme.ratio_given, self.theme.ratio_received],
            labels: self.labels.clone(),
            unit: self.unit.clone(),
            text: self.theme.ratio_label,
            font_size: self.font_size,
            bar_height: self.bar_height,
            total_width: self.bar_width,
            start_x: self.start_x,
        };
        // validate before touching the scene so nothing partial is returned
        let nodes = render::ratio_bars([a, b], self.layout.inner_height(), &style)?;
        let mut scene = Scene::new(&self.layout, self.theme.background);
        scene.extend(nodes);
        Ok(scene)
    }
}

/// One vertical bar per category, values summed per category first.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBarChart {
    pub layout: ChartLayout,
    pub theme: Theme,
    pub padding: f64,
    pub y_ticks: usize,
    /// Divisor applied to each category total.
    pub normalization: f64,
    /// Category labels rotate once there are more than this many bars.
    pub rotate_labels_after: usize,
    pub label_angle: f64,
    pub x_title: String,
    pub y_title: String,
    pub value_labels: bool,
    pub gridlines: bool,
}

impl CategoryBarChart {
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            theme: Theme::default(),
            padding: 0.2,
            y_ticks: 5,
            normalization: 1000.0,
            rotate_labels_after: 8,
            label_angle: -45.0,
            x_title: "Project".to_string(),
            y_title: "XP (kB)".to_string(),
            value_labels: true,
            gridlines: true,
        }
    }

    pub fn render(&self, values: &[CategoryValue]) -> Result<Scene> {
        for (i, v) in values.iter().enumerate() {
            if !v.value.is_finite() {
                return Err(ChartError::malformed(i, format!("value for '{}' is not finite", v.category)));
            }
        }
        check_normalization(self.normalization)?;
        check_ticks(self.y_ticks)?;

        let totals: Vec<CategoryValue> = series::aggregate(values)
            .into_iter()
            .map(|c| CategoryValue::new(c.category, c.value / self.normalization))
            .collect();
        if let Some(c) = totals.iter().find(|c| !c.value.is_finite()) {
            return Err(ChartError::invalid_domain(format!("total for '{}' overflows", c.category)));
        }
        let (w, h) = (self.layout.inner_width(), self.layout.inner_height());
        let (lo, hi) = totals
            .iter()
            .fold((0.0f64, 0.0f64), |(lo, hi), c| (lo.min(c.value), hi.max(c.value)));
        log::debug!("category chart: {} records → {} categories, y [{lo}, {hi}]", values.len(), totals.len());

        let x = BandScale::new(totals.iter().map(|c| c.category.clone()), 0.0, w, self.padding)?;
        let y = LinearScale::new(lo, hi, h, 0.0);

        let mut scene = Scene::new(&self.layout, self.theme.background);
        let mut x_style = axis_style(&self.theme, false);
        if totals.len() > self.rotate_labels_after {
            x_style.label_gap = 12.0;
            x_style.label_rotate = self.label_angle;
        }
        let y_style = axis_style(&self.theme, self.gridlines);
        let y_ticks = axis::generate_ticks(&y, self.y_ticks, axis::format_rounded);
        scene.extend(axis::axis_nodes(Orientation::Left, &y_ticks, w, h, &y_style));
        scene.extend(axis::axis_nodes(Orientation::Bottom, &axis::band_ticks(&x), w, h, &x_style));
        if x_style.label_rotate == 0.0 {
            push_title(&mut scene, Orientation::Bottom, &self.x_title, w, h, &self.theme);
        }
        push_title(&mut scene, Orientation::Left, &self.y_title, w, h, &self.theme);

        let bar_style = BarStyle {
            fill: self.theme.bar_fill,
            value_label: self.value_labels.then_some(self.theme.axis_label),
            label_size: 10.0,
        };
        scene.extend(render::category_bars(&totals, &x, &y, &bar_style)?);
        Ok(scene)
    }
}

/// Line chart of the cumulative series with default options.
pub fn render_line_chart(series: &Series, layout: &ChartLayout) -> Result<Scene> {
    LineChart::new(*layout).render(series)
}

/// Two-section ratio bar with default options.
pub fn render_ratio_chart(a: f64, b: f64, layout: &ChartLayout) -> Result<Scene> {
    RatioChart::new(*layout).render(a, b)
}

/// Aggregated category bars with default options.
pub fn render_category_bar_chart(values: &[CategoryValue], layout: &ChartLayout) -> Result<Scene> {
    CategoryBarChart::new(*layout).render(values)
}

// ---- helpers ----------------------------------------------------------------

fn check_normalization(n: f64) -> Result<()> {
    if n.is_finite() && n > 0.0 {
        Ok(())
    } else {
        Err(ChartError::invalid_domain(format!("normalization factor must be positive, got {n}")))
    }
}

fn check_ticks(n: usize) -> Result<()> {
    if n <= axis::MAX_TICKS {
        Ok(())
    } else {
        Err(ChartError::invalid_domain(format!("tick count {n} exceeds {}", axis::MAX_TICKS)))
    }
}

fn axis_style(theme: &Theme, gridlines: bool) -> AxisStyle {
    AxisStyle {
        line: theme.axis_line,
        tick: theme.tick,
        label: theme.axis_label,
        grid: gridlines.then_some(theme.grid),
        ..AxisStyle::default()
    }
}

fn push_title(scene: &mut Scene, orientation: Orientation, title: &str, w: f64, h: f64, theme: &Theme) {
    if !title.is_empty() {
        scene.nodes.push(axis::axis_title(orientation, title, w, h, theme.axis_label));
    }
}
