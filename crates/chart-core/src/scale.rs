// File: crates/chart-core/src/scale.rs
// Summary: Linear (numeric/time) and band (categorical) domain-to-pixel mappers.

use crate::error::{ChartError, Result};

/// Maps `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// Ranges may be inverted (e.g. a y axis running from the plot bottom up to 0).
/// A zero-width domain maps every input to `range_min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self { domain_min, domain_max, range_min, range_max }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.domain_max == self.domain_min
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_min;
        }
        let t = (v - self.domain_min) / (self.domain_max - self.domain_min);
        // lerp form keeps both endpoints exact
        self.range_min * (1.0 - t) + self.range_max * t
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Pixel sub-range assigned to one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub start: f64,
    pub width: f64,
}

impl Band {
    pub fn center(&self) -> f64 {
        self.start + self.width * 0.5
    }

    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}

/// Splits `[range_min, range_max]` into equal slots, one per category, and
/// shrinks each slot by `padding` (a fraction of the slot) split evenly on both sides.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range_min: f64,
    range_max: f64,
    padding: f64,
}

impl BandScale {
    /// Duplicate categories collapse onto their first occurrence.
    pub fn new<I, S>(categories: I, range_min: f64, range_max: f64, padding: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::invalid_domain(format!("band padding {padding} outside [0, 1)")));
        }
        let mut ordered: Vec<String> = Vec::new();
        for c in categories {
            let c = c.into();
            if !ordered.contains(&c) {
                ordered.push(c);
            }
        }
        Ok(Self { categories: ordered, range_min, range_max, padding })
    }

    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn padding(&self) -> f64 { self.padding }
    pub fn len(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// Width of one slot, padding included. Zero when there are no categories.
    pub fn step(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        (self.range_max - self.range_min) / self.categories.len() as f64
    }

    /// Width of one band, padding excluded.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn band(&self, category: &str) -> Result<Band> {
        let index = self
            .categories
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| ChartError::Lookup { category: category.to_string() })?;
        let step = self.step();
        Ok(Band {
            start: self.range_min + step * index as f64 + step * self.padding * 0.5,
            width: self.bandwidth(),
        })
    }

    /// Bands for every category, in category order.
    pub fn bands(&self) -> Vec<(&str, Band)> {
        let step = self.step();
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let start = self.range_min + step * i as f64 + step * self.padding * 0.5;
                (c.as_str(), Band { start, width: self.bandwidth() })
            })
            .collect()
    }
}
