// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced value layout used for tick placement.

/// `steps` values from `start` to `end`, both ends included.
/// The last value is `end` exactly, so rounding never drops the upper bound.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps)
                .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
