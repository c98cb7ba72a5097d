/*!
Sine/cosine evaluation used by the Euler transform builders.

Two flavours:
- `sin_cos_precise`: the platform `sin_cos`, full precision.
- `sin_cos_fast`: a branch-free parabolic approximation with one refinement
  step. Absolute error is about 1e-3 over the whole circle, which is plenty
  for per-frame orientation of editor gizmos but not for anything that is
  converted back and forth repeatedly.
*/

use crate::angle::wrap_angle;
use num_traits::{Float, FloatConst};

/// Full precision `(sin, cos)`.
#[inline]
pub fn sin_cos_precise<T: Float>(radians: T) -> (T, T) {
    radians.sin_cos()
}

/// Approximate `(sin, cos)`; see the module docs for accuracy.
#[inline]
pub fn sin_cos_fast<T: Float + FloatConst + From<f32>>(radians: T) -> (T, T) {
    (fast_sin(radians), fast_sin(radians + T::FRAC_PI_2()))
}

fn fast_sin<T: Float + FloatConst + From<f32>>(radians: T) -> T {
    let x = wrap_angle(radians);

    // Parabola through (-π, 0), (0, 0), (π, 0) with slope 4/π at the origin.
    let b = T::FRAC_2_PI() + T::FRAC_2_PI();
    let c = -(b * b) / <T as From<f32>>::from(4.0);
    let y = b * x + c * x * x.abs();

    // Weighted blend with y² pulls the parabola onto the sine curve.
    let p = <T as From<f32>>::from(0.225);
    p * (y * y.abs() - y) + y
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn precise_matches_std() {
        let (s, c) = sin_cos_precise(0.75_f32);
        assert_eq!(s, 0.75_f32.sin());
        assert_eq!(c, 0.75_f32.cos());
    }

    #[test]
    fn fast_hits_exact_values_at_quadrants() {
        let cases = [(0.0, 0.0, 1.0), (FRAC_PI_2, 1.0, 0.0), (-FRAC_PI_2, -1.0, 0.0)];
        for (a, s_expected, c_expected) in cases {
            let (s, c) = sin_cos_fast(a);
            assert!((s - s_expected).abs() < 1.0e-5, "sin({a}) = {s}");
            assert!((c - c_expected).abs() < 1.0e-5, "cos({a}) = {c}");
        }

        let (s, _) = sin_cos_fast(PI);
        assert!(s.abs() < 1.0e-5);
    }

    #[test]
    fn fast_error_is_bounded() {
        let mut worst = 0.0_f32;
        let mut a = -4.0 * PI;
        while a <= 4.0 * PI {
            let (s, c) = sin_cos_fast(a);
            worst = worst.max((s - a.sin()).abs()).max((c - a.cos()).abs());
            a += 0.01;
        }
        assert!(worst < 2.0e-3, "worst error {worst}");
        // The approximation is not exact, which is what the precise path exists for.
        assert!(worst > 1.0e-5);
    }

    #[test]
    fn fast_handles_f64() {
        let (s, c) = sin_cos_fast(1.0_f64);
        assert!((s - 1.0_f64.sin()).abs() < 2.0e-3);
        assert!((c - 1.0_f64.cos()).abs() < 2.0e-3);
    }
}
