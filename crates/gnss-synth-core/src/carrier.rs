//! Carrier sample generation.
//!
//! Closed-form carrier replicas: the sample at index `n` is
//! `exp(i·(2π·f/f_s·n + φ₀))`. Unlike a phase-accumulating NCO there is no
//! running state, so any sample can be produced independently and rounding
//! error does not build up over long integrations.

use core::f64::consts::{PI, TAU};

use crate::cis::cis_fast;
use crate::types::{Complex64, IqSample, SampleIndex};

/// Reduce `value` to `[0, period)`.
///
/// NaN and infinities propagate as NaN.
#[inline]
pub(crate) fn wrap(value: f64, period: f64) -> f64 {
    let r = libm::fmod(value, period);
    if r < 0.0 {
        // A tiny negative remainder can round up to `period` itself
        let shifted = r + period;
        if shifted < period {
            shifted
        } else {
            0.0
        }
    } else {
        r
    }
}

/// Which carrier generator to use for block generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarrierPath {
    /// `exp(i·x)` through `sin`/`cos`
    #[default]
    Exact,
    /// Unit-circle table lookup, at most π/64 off
    Fast,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CarrierPath {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Exact => defmt::write!(f, "Exact"),
            Self::Fast => defmt::write!(f, "Fast"),
        }
    }
}

/// Unreduced carrier phase `2π·f/f_s·sample + φ₀` in radians.
#[inline]
fn carrier_argument(sample: f64, frequency: f64, phase: f64, sampling_frequency: f64) -> f64 {
    TAU * frequency / sampling_frequency * sample + phase
}

/// Generate one carrier sample `exp(i·(2π·f/f_s·sample + φ₀))`.
///
/// # Arguments
/// * `sample` - Sample index since the reference epoch
/// * `frequency` - Carrier frequency (same unit as `sampling_frequency`)
/// * `phase` - Initial phase in radians, need not be normalized
/// * `sampling_frequency` - Sampling frequency
#[must_use]
#[inline]
pub fn gen_carrier<S: SampleIndex>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> IqSample {
    Complex64::cis(carrier_argument(sample.to_f64(), frequency, phase, sampling_frequency))
}

/// Same as [`gen_carrier`] but through [`cis_fast`].
#[must_use]
#[inline]
pub fn gen_carrier_fast<S: SampleIndex>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> IqSample {
    cis_fast(carrier_argument(sample.to_f64(), frequency, phase, sampling_frequency))
}

/// Carrier phase at `sample`, reduced to `[0, 2π)`.
#[must_use]
#[inline]
pub fn calc_carrier_phase<S: SampleIndex>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> f64 {
    wrap(carrier_argument(sample.to_f64(), frequency, phase, sampling_frequency), TAU)
}

/// Shortest angular distance between two phases, in `[0, π]`.
#[must_use]
pub fn phase_distance(a: f64, b: f64) -> f64 {
    let d = wrap(a - b, TAU);
    if d > PI {
        TAU - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CIS_FAST_MAX_ERROR_RAD;

    #[test]
    fn test_wrap_range() {
        assert_eq!(wrap(0.0, TAU), 0.0);
        assert_eq!(wrap(TAU, TAU), 0.0);
        assert!((wrap(-PI, TAU) - PI).abs() < 1e-15);
        assert!((wrap(7.5, 2.0) - 1.5).abs() < 1e-15);
        assert!((wrap(-0.5, 1023.0) - 1022.5).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_period() {
        let w = wrap(-1e-20, TAU);
        assert!((0.0..TAU).contains(&w));
    }

    #[test]
    fn test_wrap_propagates_nan() {
        assert!(wrap(f64::NAN, TAU).is_nan());
        assert!(wrap(f64::INFINITY, TAU).is_nan());
    }

    #[test]
    fn test_gen_carrier_sample_zero_is_initial_phase() {
        let s = gen_carrier(0u32, 1000.0, PI / 3.0, 4e6);
        assert!((s.re - libm::cos(PI / 3.0)).abs() < 1e-15);
        assert!((s.im - libm::sin(PI / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_gen_carrier_unit_magnitude() {
        for n in 0..1000u32 {
            let s = gen_carrier(n, 12_345.6, 0.7, 4e6);
            assert!((s.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gen_carrier_quarter_period() {
        // 1 kHz at 4 kHz sampling advances π/2 per sample
        let s = gen_carrier(1u32, 1000.0, 0.0, 4000.0);
        assert!(s.re.abs() < 1e-12);
        assert!((s.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fast_carrier_close_to_exact() {
        for n in 0..4000u32 {
            let exact = gen_carrier(n, 1_250.0, 0.3, 4e6);
            let fast = gen_carrier_fast(n, 1_250.0, 0.3, 4e6);
            assert!(phase_distance(fast.arg(), exact.arg()) <= CIS_FAST_MAX_ERROR_RAD + 1e-12);
        }
    }

    #[test]
    fn test_calc_carrier_phase_wraps() {
        let p = calc_carrier_phase(5u32, 1000.0, 0.0, 4000.0);
        // 5 quarter turns
        assert!((p - PI / 2.0).abs() < 1e-12);
        let p = calc_carrier_phase(0u32, 0.0, -PI / 2.0, 4000.0);
        assert!((p - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_phase_distance() {
        assert!((phase_distance(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
        assert!((phase_distance(0.0, PI) - PI).abs() < 1e-12);
        assert_eq!(phase_distance(1.0, 1.0), 0.0);
    }
}
