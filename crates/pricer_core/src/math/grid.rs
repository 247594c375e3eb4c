//! Evenly spaced sample grids.

/// Returns `steps` evenly spaced values from `min` to `max` inclusive.
///
/// The spacing is `(max - min) / (steps - 1)` and every node is computed as
/// `min + step * i`, so the last node may differ from `max` by rounding.
/// A single step yields `[min]`; zero steps yield an empty grid.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let xs = linspace(0.0, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
/// ```
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (steps - 1) as f64;
            (0..steps).map(|i| min + step * i as f64).collect()
        }
    }
}
