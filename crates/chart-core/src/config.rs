// File: crates/chart-core/src/config.rs
// Summary: Dashboard configuration loaded from JSON; every field optional.

use serde::{Deserialize, Deserializer};

use crate::chart::{CategoryBarChart, LineChart, RatioChart};
use crate::error::Result;
use crate::theme::{self, Color, Theme};
use crate::types::ChartLayout;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Theme preset name; unknown names fall back to dark.
    pub theme: String,
    /// `#rrggbb` overrides applied on top of the theme preset.
    pub colors: ColorOverrides,
    /// Fields missing from a layout object keep the chart's own preset.
    #[serde(deserialize_with = "xp_layout")]
    pub xp_layout: ChartLayout,
    #[serde(deserialize_with = "ratio_layout")]
    pub ratio_layout: ChartLayout,
    #[serde(deserialize_with = "projects_layout")]
    pub projects_layout: ChartLayout,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub normalization: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            colors: ColorOverrides::default(),
            xp_layout: ChartLayout::xp_progress(),
            ratio_layout: ChartLayout::audit_ratio(),
            projects_layout: ChartLayout::project_bars(),
            x_ticks: 5,
            y_ticks: 5,
            normalization: 1000.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(deserialize_with = "hex_color")]
    pub line: Option<Color>,
    #[serde(deserialize_with = "hex_color")]
    pub marker: Option<Color>,
    #[serde(deserialize_with = "hex_color")]
    pub bar: Option<Color>,
    #[serde(deserialize_with = "hex_color")]
    pub given: Option<Color>,
    #[serde(deserialize_with = "hex_color")]
    pub received: Option<Color>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LayoutPatch {
    width: Option<f64>,
    height: Option<f64>,
    margin_top: Option<f64>,
    margin_right: Option<f64>,
    margin_bottom: Option<f64>,
    margin_left: Option<f64>,
}

impl LayoutPatch {
    fn over(self, base: ChartLayout) -> ChartLayout {
        ChartLayout {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            margin_top: self.margin_top.unwrap_or(base.margin_top),
            margin_right: self.margin_right.unwrap_or(base.margin_right),
            margin_bottom: self.margin_bottom.unwrap_or(base.margin_bottom),
            margin_left: self.margin_left.unwrap_or(base.margin_left),
        }
    }
}

fn xp_layout<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ChartLayout, D::Error> {
    Ok(LayoutPatch::deserialize(d)?.over(ChartLayout::xp_progress()))
}

fn ratio_layout<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ChartLayout, D::Error> {
    Ok(LayoutPatch::deserialize(d)?.over(ChartLayout::audit_ratio()))
}

fn projects_layout<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ChartLayout, D::Error> {
    Ok(LayoutPatch::deserialize(d)?.over(ChartLayout::project_bars()))
}

fn hex_color<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<Color>, D::Error> {
    let Some(hex) = Option::<String>::deserialize(d)? else { return Ok(None) };
    Color::from_hex(&hex)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid colour '{hex}', expected #rrggbb or #rrggbbaa")))
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The named preset with any colour overrides applied.
    pub fn theme(&self) -> Theme {
        let mut t = theme::find(&self.theme);
        let c = &self.colors;
        t.line_stroke = c.line.unwrap_or(t.line_stroke);
        t.marker_fill = c.marker.unwrap_or(t.marker_fill);
        t.bar_fill = c.bar.unwrap_or(t.bar_fill);
        t.ratio_given = c.given.unwrap_or(t.ratio_given);
        t.ratio_received = c.received.unwrap_or(t.ratio_received);
        t
    }

    pub fn line_chart(&self) -> LineChart {
        let mut chart = LineChart::new(self.xp_layout);
        chart.theme = self.theme();
        chart.x_ticks = self.x_ticks;
        chart.y_ticks = self.y_ticks;
        chart.normalization = self.normalization;
        chart
    }

    pub fn ratio_chart(&self) -> RatioChart {
        let mut chart = RatioChart::new(self.ratio_layout);
        chart.theme = self.theme();
        chart
    }

    pub fn category_chart(&self) -> CategoryBarChart {
        let mut chart = CategoryBarChart::new(self.projects_layout);
        chart.theme = self.theme();
        chart.y_ticks = self.y_ticks;
        chart.normalization = self.normalization;
        chart
    }
}
