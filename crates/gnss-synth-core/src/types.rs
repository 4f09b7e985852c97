//! Core types for GNSS signal synthesis.

use core::fmt;

pub use num_complex::Complex64;

/// Complex baseband sample.
///
/// In-phase (I) and quadrature (Q) components are the real and imaginary
/// parts. Carrier generators return one of these per sample.
pub type IqSample = Complex64;

/// Sample index since a reference epoch.
///
/// Implemented for the integer and float types a receiver front end hands
/// out. Conversion goes through `f64`, so integer indices above 2^53 lose
/// their lowest bits.
pub trait SampleIndex: Copy {
    /// Convert the index to `f64` for phase arithmetic.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample_index_lossless {
    ($($ty:ty),*) => {
        $(
            impl SampleIndex for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_sample_index_lossless!(u8, u16, u32, i8, i16, i32, f32, f64);

macro_rules! impl_sample_index_wide {
    ($($ty:ty),*) => {
        $(
            impl SampleIndex for $ty {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample_index_wide!(u64, i64, usize, isize);

/// Satellite signal identity.
///
/// Tag carried by every [`GnssSystem`](crate::system::GnssSystem)
/// descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// GPS L1 C/A (1575.42 MHz, 1023-chip Gold codes)
    GpsL1Ca,
    /// Galileo E1-B (1575.42 MHz, 4092-chip memory codes)
    GalileoE1B,
}

impl Signal {
    /// Whether the signal qualifies for the integer fast code path.
    #[must_use]
    pub const fn has_fast_code_path(self) -> bool {
        matches!(self, Self::GpsL1Ca)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpsL1Ca => write!(f, "GPS-L1CA"),
            Self::GalileoE1B => write!(f, "Galileo-E1B"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Signal {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::GpsL1Ca => defmt::write!(f, "GPS-L1CA"),
            Self::GalileoE1B => defmt::write!(f, "Galileo-E1B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_index_integers() {
        assert_eq!(7u16.to_f64(), 7.0);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
        assert_eq!((-3i64).to_f64(), -3.0);
        assert_eq!(1_000_000usize.to_f64(), 1.0e6);
    }

    #[test]
    fn test_sample_index_floats() {
        assert_eq!(2.5f32.to_f64(), 2.5);
        assert_eq!(0.25f64.to_f64(), 0.25);
    }

    #[test]
    fn test_fast_path_only_for_gps_l1() {
        assert!(Signal::GpsL1Ca.has_fast_code_path());
        assert!(!Signal::GalileoE1B.has_fast_code_path());
    }
}
