//! Unit-circle lookup and fast complex exponential.
//!
//! [`cis_fast`] replaces a `sin`/`cos` pair with a single table read. The
//! table holds 64 points evenly spaced around the unit circle and the input
//! angle is rounded to the nearest one, so the returned point is never more
//! than π/64 radians away from `exp(i·x)`.

use core::f64::consts::TAU;

use crate::config::UNIT_CIRCLE_SIZE;
use crate::types::{Complex64, IqSample};

const INDEX_MASK: i64 = UNIT_CIRCLE_SIZE as i64 - 1;

/// `exp(i·2π·k/64)` for `k = 0..64`.
///
/// Quadrant points are exact; the rest are the correctly rounded `f64`
/// values of `cos` and `sin`.
pub static UNIT_CIRCLE: [IqSample; UNIT_CIRCLE_SIZE] = [
    Complex64::new(1.0, 0.0),
    Complex64::new(0.9951847266721969, 0.0980171403295606),
    Complex64::new(0.9807852804032304, 0.19509032201612825),
    Complex64::new(0.9569403357322088, 0.29028467725446233),
    Complex64::new(0.9238795325112867, 0.3826834323650898),
    Complex64::new(0.881921264348355, 0.47139673682599764),
    Complex64::new(0.8314696123025452, 0.5555702330196022),
    Complex64::new(0.773010453362737, 0.6343932841636455),
    Complex64::new(0.7071067811865476, 0.7071067811865475),
    Complex64::new(0.6343932841636455, 0.773010453362737),
    Complex64::new(0.5555702330196023, 0.8314696123025452),
    Complex64::new(0.4713967368259978, 0.8819212643483549),
    Complex64::new(0.38268343236508984, 0.9238795325112867),
    Complex64::new(0.29028467725446233, 0.9569403357322089),
    Complex64::new(0.19509032201612833, 0.9807852804032304),
    Complex64::new(0.09801714032956077, 0.9951847266721968),
    Complex64::new(0.0, 1.0),
    Complex64::new(-0.0980171403295606, 0.9951847266721969),
    Complex64::new(-0.19509032201612825, 0.9807852804032304),
    Complex64::new(-0.29028467725446233, 0.9569403357322088),
    Complex64::new(-0.3826834323650898, 0.9238795325112867),
    Complex64::new(-0.47139673682599764, 0.881921264348355),
    Complex64::new(-0.5555702330196022, 0.8314696123025452),
    Complex64::new(-0.6343932841636455, 0.773010453362737),
    Complex64::new(-0.7071067811865475, 0.7071067811865476),
    Complex64::new(-0.773010453362737, 0.6343932841636455),
    Complex64::new(-0.8314696123025452, 0.5555702330196023),
    Complex64::new(-0.8819212643483549, 0.4713967368259978),
    Complex64::new(-0.9238795325112867, 0.38268343236508984),
    Complex64::new(-0.9569403357322089, 0.29028467725446233),
    Complex64::new(-0.9807852804032304, 0.19509032201612833),
    Complex64::new(-0.9951847266721968, 0.09801714032956077),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-0.9951847266721969, -0.0980171403295606),
    Complex64::new(-0.9807852804032304, -0.19509032201612825),
    Complex64::new(-0.9569403357322088, -0.29028467725446233),
    Complex64::new(-0.9238795325112867, -0.3826834323650898),
    Complex64::new(-0.881921264348355, -0.47139673682599764),
    Complex64::new(-0.8314696123025452, -0.5555702330196022),
    Complex64::new(-0.773010453362737, -0.6343932841636455),
    Complex64::new(-0.7071067811865476, -0.7071067811865475),
    Complex64::new(-0.6343932841636455, -0.773010453362737),
    Complex64::new(-0.5555702330196023, -0.8314696123025452),
    Complex64::new(-0.4713967368259978, -0.8819212643483549),
    Complex64::new(-0.38268343236508984, -0.9238795325112867),
    Complex64::new(-0.29028467725446233, -0.9569403357322089),
    Complex64::new(-0.19509032201612833, -0.9807852804032304),
    Complex64::new(-0.09801714032956077, -0.9951847266721968),
    Complex64::new(0.0, -1.0),
    Complex64::new(0.0980171403295606, -0.9951847266721969),
    Complex64::new(0.19509032201612825, -0.9807852804032304),
    Complex64::new(0.29028467725446233, -0.9569403357322088),
    Complex64::new(0.3826834323650898, -0.9238795325112867),
    Complex64::new(0.47139673682599764, -0.881921264348355),
    Complex64::new(0.5555702330196022, -0.8314696123025452),
    Complex64::new(0.6343932841636455, -0.773010453362737),
    Complex64::new(0.7071067811865475, -0.7071067811865476),
    Complex64::new(0.773010453362737, -0.6343932841636455),
    Complex64::new(0.8314696123025452, -0.5555702330196023),
    Complex64::new(0.8819212643483549, -0.4713967368259978),
    Complex64::new(0.9238795325112867, -0.38268343236508984),
    Complex64::new(0.9569403357322089, -0.29028467725446233),
    Complex64::new(0.9807852804032304, -0.19509032201612833),
    Complex64::new(0.9951847266721968, -0.09801714032956077),
];

/// Table index of the entry nearest to angle `x`.
///
/// Always in `0..64`. Negative angles wrap through the two's-complement
/// mask; angles too large for `i64` saturate and NaN maps to 0.
#[must_use]
#[inline]
pub fn cis_index(x: f64) -> usize {
    let slot = libm::floor(x / TAU * UNIT_CIRCLE_SIZE as f64 + 0.5) as i64;
    (slot & INDEX_MASK) as usize
}

/// Approximate `exp(i·x)` by table lookup.
///
/// Maximum angular error is π/64 radians
/// ([`CIS_FAST_MAX_ERROR_RAD`](crate::config::CIS_FAST_MAX_ERROR_RAD)).
#[must_use]
#[inline]
pub fn cis_fast(x: f64) -> IqSample {
    UNIT_CIRCLE[cis_index(x)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CIS_FAST_MAX_ERROR_RAD;

    #[test]
    fn test_table_entries_on_unit_circle() {
        for (k, entry) in UNIT_CIRCLE.iter().enumerate() {
            let angle = TAU * k as f64 / UNIT_CIRCLE_SIZE as f64;
            assert!((entry.re - libm::cos(angle)).abs() < 1e-15, "cos mismatch at {}", k);
            assert!((entry.im - libm::sin(angle)).abs() < 1e-15, "sin mismatch at {}", k);
        }
    }

    #[test]
    fn test_table_angles_map_to_own_entry() {
        for k in 0..UNIT_CIRCLE_SIZE {
            let angle = k as f64 * TAU / UNIT_CIRCLE_SIZE as f64;
            assert_eq!(cis_index(angle), k);
            assert_eq!(cis_fast(angle), UNIT_CIRCLE[k]);
        }
    }

    #[test]
    fn test_rounds_to_nearest_entry() {
        let step = TAU / UNIT_CIRCLE_SIZE as f64;
        // Just below the midpoint stays, just above moves on
        assert_eq!(cis_index(0.49 * step), 0);
        assert_eq!(cis_index(0.51 * step), 1);
        assert_eq!(cis_index(-0.49 * step), 0);
        assert_eq!(cis_index(-0.51 * step), 63);
    }

    #[test]
    fn test_negative_and_multi_turn_angles() {
        assert_eq!(cis_index(-TAU / 4.0), 48);
        assert_eq!(cis_index(3.0 * TAU + TAU / 4.0), 16);
        assert_eq!(cis_index(-5.0 * TAU), 0);
    }

    #[test]
    fn test_error_bound_sweep() {
        let mut x = -20.0;
        while x < 20.0 {
            let exact = Complex64::cis(x);
            let approx = cis_fast(x);
            let err = (approx * exact.conj()).arg().abs();
            assert!(err <= CIS_FAST_MAX_ERROR_RAD + 1e-12, "error {} at x = {}", err, x);
            x += 0.001;
        }
    }

    #[test]
    fn test_nan_maps_to_first_entry() {
        assert_eq!(cis_index(f64::NAN), 0);
    }
}
