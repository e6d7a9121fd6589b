// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the scene-producing chart API for the profile dashboard.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod profile;
pub mod records;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{generate_ticks, Tick};
pub use chart::{render_category_bar_chart, render_line_chart, render_ratio_chart, CategoryBarChart, LineChart, RatioChart};
pub use config::DashboardConfig;
pub use error::{ChartError, Result};
pub use geometry::Point;
pub use scale::{Band, BandScale, LinearScale};
pub use scene::{Layer, Marker, MarkerId, Node, Primitive, RenderSurface, Scene};
pub use series::{CategoryValue, DataPoint, DomainKind, Series};
pub use theme::{Color, Theme};
pub use tooltip::{PointerEvent, TooltipController, TooltipState};
pub use types::ChartLayout;
