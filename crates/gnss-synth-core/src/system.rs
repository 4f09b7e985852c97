//! GNSS signal descriptors and the GPS L1 C/A fast code path.
//!
//! A descriptor bundles a code table with the metadata of its signal. Every
//! descriptor supports the generic code generator through [`GnssSystem`];
//! only [`GpsL1`] is accepted by [`gen_code_fast`], which replaces the
//! floating-point modulo with [`mod_1023_u16`]/[`mod_1023_u32`].

use crate::code::{chip_position, gen_code, CodeTable};
use crate::config::{
    GALILEO_E1B_CODE_FREQUENCY_HZ, GALILEO_E1B_CODE_LENGTH, GALILEO_E1B_DATA_FREQUENCY_HZ,
    GALILEO_E1_CENTER_FREQUENCY_HZ, GPS_L1_CA_CODE_FREQUENCY_HZ, GPS_L1_CA_CODE_LENGTH,
    GPS_L1_CA_DATA_FREQUENCY_HZ, GPS_L1_CENTER_FREQUENCY_HZ,
};
use crate::error::CodeTableError;
use crate::modulus::{mod_1023_u16, mod_1023_u32};
use crate::types::{SampleIndex, Signal};

/// A satellite signal with a spreading-code table.
pub trait GnssSystem {
    /// Code table type
    type Codes: CodeTable;

    /// Signal identity.
    fn signal(&self) -> Signal;

    /// Code table for all PRNs.
    fn codes(&self) -> &Self::Codes;

    /// Chips per code period.
    fn code_length(&self) -> usize {
        self.codes().code_length()
    }

    /// Nominal chipping rate in chips/s.
    fn code_frequency(&self) -> f64;

    /// Carrier center frequency in Hz.
    fn center_frequency(&self) -> f64;

    /// Navigation data rate in symbols/s.
    fn data_frequency(&self) -> f64;

    /// Code sample at `sample` for `prn`, via [`gen_code`].
    #[inline]
    fn gen_code<S: SampleIndex>(
        &self,
        sample: S,
        frequency: f64,
        phase: f64,
        sampling_frequency: f64,
        prn: usize,
    ) -> <Self::Codes as CodeTable>::Chip {
        gen_code(sample, frequency, phase, sampling_frequency, self.codes(), prn)
    }
}

/// Code sample using a descriptor's table.
///
/// Equivalent to [`gen_code`] with `system.codes()`.
#[must_use]
#[inline]
pub fn gen_system_code<S: SampleIndex, G: GnssSystem + ?Sized>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    system: &G,
    prn: usize,
) -> <G::Codes as CodeTable>::Chip {
    gen_code(sample, frequency, phase, sampling_frequency, system.codes(), prn)
}

fn check_code_length<C: CodeTable>(codes: &C, expected: usize) -> Result<(), CodeTableError> {
    let actual = codes.code_length();
    if actual == expected {
        Ok(())
    } else {
        #[cfg(feature = "defmt")]
        defmt::debug!("code table rejected: length {}, signal needs {}", actual, expected);
        Err(CodeTableError::CodeLengthMismatch { expected, actual })
    }
}

/// GPS L1 C/A descriptor.
#[derive(Clone, Debug)]
pub struct GpsL1<C> {
    codes: C,
}

impl<C: CodeTable> GpsL1<C> {
    /// Wrap a 1023-chip code table.
    ///
    /// # Errors
    /// [`CodeTableError::CodeLengthMismatch`] if the table is not 1023 chips.
    pub fn new(codes: C) -> Result<Self, CodeTableError> {
        check_code_length(&codes, GPS_L1_CA_CODE_LENGTH)?;
        Ok(Self { codes })
    }

    /// Release the code table.
    pub fn into_codes(self) -> C {
        self.codes
    }
}

impl<C: CodeTable> GnssSystem for GpsL1<C> {
    type Codes = C;

    fn signal(&self) -> Signal {
        Signal::GpsL1Ca
    }

    #[inline]
    fn codes(&self) -> &C {
        &self.codes
    }

    #[inline]
    fn code_length(&self) -> usize {
        GPS_L1_CA_CODE_LENGTH
    }

    fn code_frequency(&self) -> f64 {
        GPS_L1_CA_CODE_FREQUENCY_HZ
    }

    fn center_frequency(&self) -> f64 {
        GPS_L1_CENTER_FREQUENCY_HZ
    }

    fn data_frequency(&self) -> f64 {
        GPS_L1_CA_DATA_FREQUENCY_HZ
    }
}

#[cfg(feature = "defmt")]
impl<C: CodeTable> defmt::Format for GpsL1<C> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GpsL1({} PRNs)", self.codes.num_prns());
    }
}

/// Galileo E1-B descriptor.
#[derive(Clone, Debug)]
pub struct GalileoE1B<C> {
    codes: C,
}

impl<C: CodeTable> GalileoE1B<C> {
    /// Wrap a 4092-chip code table.
    ///
    /// # Errors
    /// [`CodeTableError::CodeLengthMismatch`] if the table is not 4092 chips.
    pub fn new(codes: C) -> Result<Self, CodeTableError> {
        check_code_length(&codes, GALILEO_E1B_CODE_LENGTH)?;
        Ok(Self { codes })
    }

    /// Release the code table.
    pub fn into_codes(self) -> C {
        self.codes
    }
}

impl<C: CodeTable> GnssSystem for GalileoE1B<C> {
    type Codes = C;

    fn signal(&self) -> Signal {
        Signal::GalileoE1B
    }

    #[inline]
    fn codes(&self) -> &C {
        &self.codes
    }

    #[inline]
    fn code_length(&self) -> usize {
        GALILEO_E1B_CODE_LENGTH
    }

    fn code_frequency(&self) -> f64 {
        GALILEO_E1B_CODE_FREQUENCY_HZ
    }

    fn center_frequency(&self) -> f64 {
        GALILEO_E1_CENTER_FREQUENCY_HZ
    }

    fn data_frequency(&self) -> f64 {
        GALILEO_E1B_DATA_FREQUENCY_HZ
    }
}

#[cfg(feature = "defmt")]
impl<C: CodeTable> defmt::Format for GalileoE1B<C> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GalileoE1B({} PRNs)", self.codes.num_prns());
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Unsigned sample index widths served by [`gen_code_fast`].
///
/// The whole chip position is converted to this width before reduction, so
/// it must stay below `MAX_CHIP + 1`. See [`fast_sample_limit`].
pub trait FastSampleIndex: SampleIndex + sealed::Sealed {
    /// Largest chip position the width can hold
    const MAX_CHIP: f64;

    /// Offset in `0..1023` of whole chip position `chip`.
    ///
    /// Positions outside `0..=MAX_CHIP` saturate (NaN reads as 0).
    fn chip_offset(chip: f64) -> usize;
}

impl FastSampleIndex for u16 {
    const MAX_CHIP: f64 = u16::MAX as f64;

    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn chip_offset(chip: f64) -> usize {
        usize::from(mod_1023_u16(chip as u16))
    }
}

impl FastSampleIndex for u32 {
    const MAX_CHIP: f64 = u32::MAX as f64;

    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn chip_offset(chip: f64) -> usize {
        mod_1023_u32(chip as u32) as usize
    }
}

/// GPS L1 C/A code sample with integer reduction.
///
/// Same result as [`gen_code`] as long as `floor(f/f_s·sample + φ₀)` lies in
/// `0..=S::MAX_CHIP`. Outside that range the position saturates to the
/// nearest end of the width and the chip is no longer the generic one; no
/// panic, no wraparound. Keep `sample` below [`fast_sample_limit`].
#[must_use]
#[inline]
pub fn gen_code_fast<S: FastSampleIndex, C: CodeTable>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    system: &GpsL1<C>,
    prn: usize,
) -> C::Chip {
    let position = chip_position(sample.to_f64(), frequency, phase, sampling_frequency);
    system
        .codes
        .chip(S::chip_offset(libm::floor(position)), prn)
}

/// Exclusive upper bound on sample indices valid for [`gen_code_fast`].
///
/// The smallest sample at which the whole chip position would leave the
/// `S` width, given `frequency > 0`. May exceed `S::MAX`, in which case
/// every sample of that width is valid.
#[must_use]
pub fn fast_sample_limit<S: FastSampleIndex>(
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> f64 {
    (S::MAX_CHIP + 1.0 - phase) * sampling_frequency / frequency
}
