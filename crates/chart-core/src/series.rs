// File: crates/chart-core/src/series.rs
// Summary: Data points, x-sorted series, the cumulative transform and category aggregation.

use std::collections::BTreeMap;

use crate::error::{ChartError, Result};

/// How the x values of a series are interpreted when labelling axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainKind {
    #[default]
    Numeric,
    /// x is a UTC timestamp in epoch milliseconds.
    Time,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Free-form identifier; for XP transactions this is the object path.
    pub label: String,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: label.into() }
    }
}

/// Points ordered by `x` ascending. Input order is not trusted; constructors sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    kind: DomainKind,
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(kind: DomainKind, mut points: Vec<DataPoint>) -> Self {
        // stable, so equal timestamps keep their record order
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { kind, points }
    }

    pub fn numeric(points: Vec<DataPoint>) -> Self {
        Self::new(DomainKind::Numeric, points)
    }

    pub fn time(points: Vec<DataPoint>) -> Self {
        Self::new(DomainKind::Time, points)
    }

    pub fn kind(&self) -> DomainKind { self.kind }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Reject the whole series if any coordinate is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(ChartError::malformed(i, format!("x is not finite ({})", p.x)));
            }
            if !p.y.is_finite() {
                return Err(ChartError::malformed(i, format!("y is not finite ({})", p.y)));
            }
        }
        Ok(())
    }

    /// `(min x, max x)`, or `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.x, last.x))
    }

    /// `(min y, max y)`, or `None` when empty.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((f64::min(lo, p.y), f64::max(hi, p.y))),
        })
    }

    /// Running total of `y` (inclusive of the current point) divided by `normalization`.
    ///
    /// Always derived from `self`; nothing is carried between calls.
    pub fn cumulative(&self, normalization: f64) -> Series {
        let mut sum = 0.0f64;
        let points = self
            .points
            .iter()
            .map(|p| {
                sum += p.y;
                DataPoint { x: p.x, y: sum / normalization, label: p.label.clone() }
            })
            .collect();
        Series { kind: self.kind, points }
    }
}

/// One raw value keyed by category, e.g. a single XP transaction for a project.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

impl CategoryValue {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}

/// Sum values sharing a category. Output is sorted by category name.
///
/// Addends are sorted before summing so the total is bit-identical for any
/// permutation of `values`.
pub fn aggregate(values: &[CategoryValue]) -> Vec<CategoryValue> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for v in values {
        groups.entry(v.category.as_str()).or_default().push(v.value);
    }
    groups
        .into_iter()
        .map(|(category, mut addends)| {
            addends.sort_by(f64::total_cmp);
            CategoryValue::new(category, addends.iter().sum())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_extent_spans_all_points() {
        let s = Series::numeric(vec![
            DataPoint::new(2.0, -1.0, ""),
            DataPoint::new(1.0, 4.0, ""),
            DataPoint::new(3.0, 0.5, ""),
        ]);
        assert_eq!(s.y_extent(), Some((-1.0, 4.0)));
        assert_eq!(s.x_extent(), Some((1.0, 3.0)));
    }

    #[test]
    fn empty_series_has_no_extent() {
        let s = Series::time(Vec::new());
        assert_eq!(s.x_extent(), None);
        assert_eq!(s.y_extent(), None);
        assert!(s.cumulative(1000.0).is_empty());
    }
}
