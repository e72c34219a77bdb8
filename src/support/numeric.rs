//! Numerical helpers for one-dimensional tabulated data.
//!
//! Spanwise distributions are sampled on ordered grids. This module provides
//! the three operations the wing solver needs on such data:
//!
//! - [`linspace`] builds a uniform grid including both endpoints.
//! - [`Bracket`] locates a point within ordered abscissae for piecewise-linear
//!   interpolation, clamping to the end values outside the data range.
//! - [`trapezoid`] integrates samples with the composite trapezoidal rule.

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
///
/// The first value is exactly `start` and the last is exactly `end`.
/// Returns an empty vector for `n == 0` and `[start]` for `n == 1`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + (end - start) * (i as f64) / intervals
                    }
                })
                .collect()
        }
    }
}

/// Position of a point within ordered abscissae.
///
/// A bracket identifies the two neighbouring samples around a point and the
/// linear weight of the upper one. Points outside the data range collapse
/// onto the nearest end sample, which gives flat extrapolation.
///
/// # Example
///
/// ```
/// use wing_polar::support::numeric::Bracket;
///
/// let xs = [0.0, 2.0, 4.0];
/// let b = Bracket::locate(&xs, 3.0);
/// assert_eq!(b.lerp(&[10.0, 20.0, 40.0]), 30.0);
///
/// // Clamped beyond the last sample.
/// assert_eq!(Bracket::locate(&xs, 9.0).lerp(&[10.0, 20.0, 40.0]), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the lower sample.
    pub lower: usize,

    /// Index of the upper sample.
    pub upper: usize,

    /// Weight of the upper sample, in `[0, 1]`.
    pub weight: f64,
}

impl Bracket {
    /// Locates `x` within the strictly increasing abscissae `xs`.
    ///
    /// At an abscissa the weight is exactly zero, so interpolated values
    /// reproduce the samples without rounding. A `NaN` point collapses onto
    /// the first sample.
    ///
    /// # Panics
    ///
    /// Panics if `xs` is empty.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn locate(xs: &[f64], x: f64) -> Self {
        let last = xs.len() - 1;

        if !(x > xs[0]) {
            return Self::at(0);
        }
        if x >= xs[last] {
            return Self::at(last);
        }

        let upper = xs.partition_point(|&xi| xi <= x);
        let lower = upper - 1;
        let weight = (x - xs[lower]) / (xs[upper] - xs[lower]);

        Self {
            lower,
            upper,
            weight,
        }
    }

    fn at(index: usize) -> Self {
        Self {
            lower: index,
            upper: index,
            weight: 0.0,
        }
    }

    /// Interpolates between two values using this bracket's weight.
    #[must_use]
    pub fn blend(&self, lower: f64, upper: f64) -> f64 {
        lower * (1.0 - self.weight) + upper * self.weight
    }

    /// Interpolates the samples `ys`, aligned with the abscissae used to locate this bracket.
    #[must_use]
    pub fn lerp(&self, ys: &[f64]) -> f64 {
        self.blend(ys[self.lower], ys[self.upper])
    }
}

/// Integrates samples `ys` over abscissae `xs` with the trapezoidal rule.
///
/// Both slices must have the same length; extra samples in the longer slice
/// are ignored. Fewer than two samples integrate to zero.
#[must_use]
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "abscissae and samples must align");

    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum()
}
