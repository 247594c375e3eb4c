//! Linear interpolation implementation.

use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator with boundary clamping.
///
/// Stores sorted (x, y) data points and performs linear interpolation
/// between adjacent points. Queries below the first knot return the first
/// y-value and queries above the last knot return the last y-value.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during construction.
/// At least 2 data points are required.
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::interpolators::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]);
    /// assert!(interp.is_ok());
    ///
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
        })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns `(x_min, x_max)`, the range covered by the knots.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Index `i` such that `xs[i] <= x < xs[i+1]`, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Interpolate at `x`, clamping to the boundary samples outside the domain.
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    ///
    /// A zero-width segment (duplicate knots) returns its left value.
    pub fn interpolate(&self, x: T) -> T {
        let (x_min, x_max) = self.domain();
        if x <= x_min {
            return self.ys[0];
        }
        if x >= x_max {
            return self.ys[self.ys.len() - 1];
        }

        let i = self.find_segment(x);
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        if x1 == x0 {
            return y0;
        }

        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

/// Interpolates `ys` at `target_x` over ascending sample positions `xs`.
///
/// Never fails: mismatched lengths or an empty input yield NaN, a single
/// sample yields that sample, and targets outside `[xs[0], xs[n-1]]` are
/// clamped to the boundary values.
///
/// # Examples
/// ```
/// use pricer_core::math::interpolators::interpolate_clamped;
///
/// let xs: [f64; 3] = [80.0, 90.0, 100.0];
/// let ys = [0.2, 0.4, 0.6];
///
/// assert!((interpolate_clamped(95.0, &xs, &ys) - 0.5).abs() < 1e-12);
/// assert_eq!(interpolate_clamped(10.0, &xs, &ys), 0.2);
/// assert!(interpolate_clamped(95.0, &xs, &ys[..2]).is_nan());
/// ```
pub fn interpolate_clamped<T: Float>(target_x: T, xs: &[T], ys: &[T]) -> T {
    match LinearInterpolator::new(xs, ys) {
        Ok(interp) => interp.interpolate(target_x),
        Err(InterpolationError::InsufficientData { got: 1, .. }) => ys[0],
        Err(_) => T::nan(),
    }
}
