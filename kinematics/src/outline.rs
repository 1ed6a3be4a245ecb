//! Closed body outline fitted through lateral points.
//!
//! The control polygon walks down the right side of the chain, back up the
//! left side, and around the head. One padding point is added at each end so
//! the curve closes smoothly; samples inside the padding intervals are
//! dropped. `x(t)` and `y(t)` are fitted independently with natural cubic
//! splines on a uniform parameterization of `[0, 1]`.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use crate::node::LateralPoints;
use crate::point::Point;

/// Build the outline for `sets` (anchor first), sampled at `samples` uniform
/// parameter values. Needs at least two sets.
#[must_use]
pub fn outline(sets: &[LateralPoints], samples: usize) -> Vec<Point> {
    let control = control_points(sets);
    if control.len() < 4 || samples < 2 {
        return Vec::new();
    }

    let last = control.len() - 1;
    let ts: Vec<f64> = (0..control.len()).map(|i| i as f64 / last as f64).collect();
    let xs: Vec<f64> = control.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = control.iter().map(|p| p.y).collect();
    let (Some(x_spline), Some(y_spline)) = (CubicSpline::natural(&ts, &xs), CubicSpline::natural(&ts, &ys)) else {
        return Vec::new();
    };

    let start = ts[1];
    let end = ts[last - 1];
    (0..samples)
        .map(|i| i as f64 / (samples - 1) as f64)
        .filter(|&t| t > start && t < end)
        .map(|t| Point::new(x_spline.eval(t), y_spline.eval(t)))
        .collect()
}

/// Control polygon for [`outline`]; empty when there are fewer than two sets.
#[must_use]
pub fn control_points(sets: &[LateralPoints]) -> Vec<Point> {
    let (Some(head), Some(neck)) = (sets.first(), sets.get(1)) else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(sets.len() * 2 + 6);
    points.push(head.lean_right);
    points.extend(sets.iter().map(|s| s.right));
    points.extend(sets.iter().rev().map(|s| s.left));
    points.push(head.lean_left);
    points.push(head.front);
    points.push(head.lean_right);
    points.push(head.right);
    points.push(neck.right);
    points
}

/// A natural cubic spline through `(ts[i], values[i])`.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    ts: Vec<f64>,
    values: Vec<f64>,
    /// Second derivatives at each knot.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline with zero second derivative at both ends.
    ///
    /// Returns `None` unless there are at least two knots, `ts` and `values`
    /// have the same length, and `ts` is strictly increasing.
    #[must_use]
    pub fn natural(ts: &[f64], values: &[f64]) -> Option<Self> {
        let n = ts.len();
        if n < 2 || values.len() != n || ts.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }

        let h: Vec<f64> = ts.windows(2).map(|w| w[1] - w[0]).collect();
        let mut m = vec![0.0; n];
        if n > 2 {
            // Tridiagonal system for interior second derivatives (Thomas algorithm).
            let size = n - 2;
            let mut diag = vec![0.0; size];
            let mut upper = vec![0.0; size];
            let mut rhs = vec![0.0; size];
            for k in 0..size {
                let i = k + 1;
                diag[k] = 2.0 * (h[i - 1] + h[i]);
                upper[k] = h[i];
                rhs[k] = 6.0 * ((values[i + 1] - values[i]) / h[i] - (values[i] - values[i - 1]) / h[i - 1]);
            }
            for k in 1..size {
                let lower = h[k];
                let w = lower / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }
            m[size] = rhs[size - 1] / diag[size - 1];
            for k in (0..size - 1).rev() {
                m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
            }
        }

        Some(Self { ts: ts.to_vec(), values: values.to_vec(), m })
    }

    /// Evaluate at `t`; outside the knot range the end segments are extrapolated.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        let last = self.ts.len() - 1;
        let seg = match self.ts.partition_point(|&knot| knot <= t) {
            0 => 0,
            i => (i - 1).min(last - 1),
        };

        let (t0, t1) = (self.ts[seg], self.ts[seg + 1]);
        let (y0, y1) = (self.values[seg], self.values[seg + 1]);
        let (m0, m1) = (self.m[seg], self.m[seg + 1]);
        let h = t1 - t0;
        let a = (t1 - t) / h;
        let b = (t - t0) / h;

        a * y0 + b * y1 + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * h * h / 6.0
    }
}
