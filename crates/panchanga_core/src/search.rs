//! Zero-crossing search on angular difference functions.
//!
//! Coarse scan in fixed steps followed by bisection. Every boundary the
//! engine finds (tithi ends, new moons, sankrantis) is a zero of some
//! `normalize(angle(t) - target)` function, so one utility serves them
//! all. Wrap-around jumps of the normalized angle look like sign changes
//! and must be filtered out.

use crate::error::CoreError;

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Check whether a sign change is a genuine zero crossing rather than a
/// wrap-around discontinuity. A wrap jumps from near +180 to near -180,
/// so the two values differ by almost 360; a genuine crossing stays
/// well under that.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first zero of `f` scanning from `jd_start` in `step`-day
/// increments (negative step searches backward), then bisect the
/// bracketing interval down to `tol_days`.
///
/// Returns `Ok(None)` when no genuine crossing appears within
/// `max_steps` increments. Errors from `f` propagate immediately.
pub fn find_zero_crossing<F>(
    f: &F,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    max_iterations: usize,
    tol_days: f64,
) -> Result<Option<f64>, CoreError>
where
    F: Fn(f64) -> Result<f64, CoreError>,
{
    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr)?;

        if is_genuine_crossing(f_prev, f_curr) {
            // Order the bracket so bisection always shrinks [t_a, t_b].
            let (mut t_a, mut f_a, mut t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };

            for _ in 0..max_iterations {
                let t_mid = 0.5 * (t_a + t_b);
                let f_mid = f(t_mid)?;
                if f_a * f_mid <= 0.0 {
                    t_b = t_mid;
                } else {
                    t_a = t_mid;
                    f_a = f_mid;
                }
                if (t_b - t_a).abs() < tol_days {
                    break;
                }
            }
            return Ok(Some(0.5 * (t_a + t_b)));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_values() {
        assert!((normalize_to_pm180(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(270.0) - (-90.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-270.0) - 90.0).abs() < 1e-12);
        assert!((normalize_to_pm180(450.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn genuine_vs_wrap() {
        assert!(is_genuine_crossing(5.0, -3.0));
        assert!(is_genuine_crossing(-10.0, 10.0));
        assert!(!is_genuine_crossing(170.0, -170.0));
        assert!(!is_genuine_crossing(3.0, 4.0));
        assert!(!is_genuine_crossing(0.0, -5.0));
    }

    #[test]
    fn finds_linear_zero() {
        let f = |t: f64| -> Result<f64, CoreError> { Ok(t - 5.0) };
        let root = find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root - 5.0).abs() < 1e-8, "root = {root}");
    }

    #[test]
    fn finds_zero_backward() {
        let f = |t: f64| -> Result<f64, CoreError> { Ok(t - 5.0) };
        let root = find_zero_crossing(&f, 9.0, -1.0, 10, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root - 5.0).abs() < 1e-8, "root = {root}");
    }

    #[test]
    fn skips_wrap_finds_real_crossing() {
        // normalize(100 t) wraps near t=1.8 and truly crosses zero at t=3.6.
        let f = |t: f64| -> Result<f64, CoreError> { Ok(normalize_to_pm180(100.0 * t)) };
        let root = find_zero_crossing(&f, 0.15, 0.5, 20, 60, 1e-9)
            .unwrap()
            .unwrap();
        assert!((root - 3.6).abs() < 1e-7, "root = {root}");
    }

    #[test]
    fn none_when_no_crossing() {
        let f = |_t: f64| -> Result<f64, CoreError> { Ok(50.0) };
        assert!(
            find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-9)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn error_propagates() {
        let f = |_t: f64| -> Result<f64, CoreError> {
            Err(CoreError::NoConvergence("synthetic"))
        };
        assert!(find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-9).is_err());
    }
}
