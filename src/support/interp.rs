//! Piecewise-linear interpolation over tabulated data.

/// Linearly interpolates `ys` at `x` over the ascending breakpoints `xs`.
///
/// Values outside the table are clamped to the first or last entry, so the
/// result is always within the range of `ys`.
/// An empty table yields `NaN`; a single-entry table yields that entry.
///
/// Callers own the table and are responsible for `xs` being strictly
/// ascending and the same length as `ys`.
///
/// ```
/// use coil_hx::support::interp::interp_clamped;
///
/// let xs = [1.0, 2.0, 4.0];
/// let ys = [10.0, 20.0, 30.0];
/// assert_eq!(interp_clamped(3.0, &xs, &ys), 25.0);
/// assert_eq!(interp_clamped(0.0, &xs, &ys), 10.0);
/// assert_eq!(interp_clamped(9.0, &xs, &ys), 30.0);
/// ```
#[must_use]
pub fn interp_clamped(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let (Some(&x_first), Some(&x_last)) = (xs.first(), xs.last()) else {
        return f64::NAN;
    };
    if x <= x_first {
        return ys[0];
    }
    if x >= x_last {
        return ys[ys.len() - 1];
    }

    // First breakpoint strictly greater than `x`; guaranteed in 1..len here.
    let hi = xs.partition_point(|&xi| xi <= x);
    let lo = hi - 1;
    let frac = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + frac * (ys[hi] - ys[lo])
}
