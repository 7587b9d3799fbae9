use serde::{Serialize, Deserialize};
use std::f64::consts::LN_2;

/// Logistic sigmoid `σ(x) = 1 / (1 + e^-x)`, used at hidden and output units.
///
/// `Exact` goes through `f64::exp`. `Series` evaluates the exponential with a
/// range-reduced truncated Taylor expansion, for targets whose libm lacks an
/// adequate `exp`. Both variants are monotonic, saturate toward 0 and 1 and
/// return exactly 0.5 at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sigmoid {
    #[default]
    Exact,
    Series,
}

/// Taylor terms evaluated after range reduction; |r| <= ln2/2 so the
/// truncation error is below f64 epsilon.
const SERIES_TERMS: u32 = 14;

impl Sigmoid {
    pub fn function(&self, x: f64) -> f64 {
        let e = match self {
            Sigmoid::Exact => (-x).exp(),
            Sigmoid::Series => series_exp(-x),
        };
        1.0 / (1.0 + e)
    }

    /// Derivative expressed through the unit's output `y = σ(x)`.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}

/// `e^x` as `2^k · e^r` with `x = k·ln2 + r`, `e^r` from its Taylor series.
pub fn series_exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    // Outside the representable range of e^x.
    if x > 709.8 {
        return f64::INFINITY;
    }
    if x < -745.2 {
        return 0.0;
    }
    let k = (x / LN_2).round();
    let r = x - k * LN_2;

    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 1..=SERIES_TERMS {
        term *= r / n as f64;
        sum += term;
    }

    // Scale in two steps so 2^k never overflows or flushes to zero early.
    let k = k as i32;
    let half = k / 2;
    sum * 2f64.powi(half) * 2f64.powi(k - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Sigmoid; 2] = [Sigmoid::Exact, Sigmoid::Series];

    #[test]
    fn midpoint_is_one_half() {
        for s in BOTH {
            assert_eq!(s.function(0.0), 0.5);
        }
    }

    #[test]
    fn saturates_at_the_extremes() {
        for s in BOTH {
            assert!(s.function(40.0) > 1.0 - 1e-12);
            assert!(s.function(-40.0) < 1e-12);
            assert!(s.function(-40.0) >= 0.0);
            assert_eq!(s.function(1e6), 1.0);
            assert_eq!(s.function(-1e6), 0.0);
        }
    }

    #[test]
    fn is_monotonic_and_bounded() {
        for s in BOTH {
            let mut prev = s.function(-20.0);
            let mut x = -20.0;
            while x < 20.0 {
                x += 0.05;
                let y = s.function(x);
                assert!(y >= prev, "{s:?} decreased at x = {x}");
                assert!((0.0..=1.0).contains(&y));
                prev = y;
            }
        }
    }

    #[test]
    fn series_exp_tracks_std_exp() {
        for &x in &[-30.0, -5.5, -1.0, -0.1, 0.0, 0.3, 1.0, 2.5, 10.0, 50.0] {
            let expected = f64::exp(x);
            let got = series_exp(x);
            assert!(((got - expected) / expected).abs() < 1e-12, "x = {x}: {got} vs {expected}");
        }
    }

    #[test]
    fn derivative_peaks_at_midpoint() {
        assert_eq!(Sigmoid::derivative_from_output(0.5), 0.25);
        assert_eq!(Sigmoid::derivative_from_output(1.0), 0.0);
        assert!(Sigmoid::derivative_from_output(0.9) < 0.25);
    }
}
