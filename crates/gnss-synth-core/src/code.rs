//! Spreading-code tables and code sample generation.
//!
//! A code table maps a chip offset and a satellite PRN to a chip value. The
//! generators turn a sample index into a chip position
//! `f/f_s·sample + φ₀`, take the whole chip, wrap it over the code length and
//! read the table. Tables are produced elsewhere and only borrowed here.

use crate::carrier::wrap;
use crate::error::CodeTableError;
use crate::types::SampleIndex;

/// Read access to a set of spreading codes, one per PRN.
///
/// Chip offsets are 0-based and must be below [`code_length`]. PRNs are
/// 1-based and must be in `1..=num_prns`.
///
/// [`code_length`]: CodeTable::code_length
pub trait CodeTable {
    /// Chip alphabet (typically `i8` holding ±1)
    type Chip: Copy;

    /// Chips per code period.
    fn code_length(&self) -> usize;

    /// Number of PRNs in the table.
    fn num_prns(&self) -> usize;

    /// Chip at `offset` of the code for `prn`.
    ///
    /// # Panics
    /// If `offset` or `prn` is out of range.
    fn chip(&self, offset: usize, prn: usize) -> Self::Chip;
}

impl<C: CodeTable + ?Sized> CodeTable for &C {
    type Chip = C::Chip;

    #[inline]
    fn code_length(&self) -> usize {
        (**self).code_length()
    }

    #[inline]
    fn num_prns(&self) -> usize {
        (**self).num_prns()
    }

    #[inline]
    fn chip(&self, offset: usize, prn: usize) -> Self::Chip {
        (**self).chip(offset, prn)
    }
}

/// One code per PRN, PRN 1 first.
impl<T: Copy, const L: usize, const N: usize> CodeTable for [[T; L]; N] {
    type Chip = T;

    #[inline]
    fn code_length(&self) -> usize {
        L
    }

    #[inline]
    fn num_prns(&self) -> usize {
        N
    }

    #[inline]
    fn chip(&self, offset: usize, prn: usize) -> T {
        self[prn - 1][offset]
    }
}

/// Code table over borrowed column-major chip storage.
///
/// Column `prn - 1` holds the `code_length` chips of that PRN back to back.
#[derive(Clone, Copy, Debug)]
pub struct CodeMatrix<'a, T> {
    chips: &'a [T],
    code_length: usize,
    num_prns: usize,
}

impl<'a, T: Copy> CodeMatrix<'a, T> {
    /// Wrap `chips` as consecutive codes of `code_length` chips each.
    ///
    /// # Errors
    /// [`CodeTableError::EmptyCode`] for a zero code length,
    /// [`CodeTableError::RaggedTable`] if `chips` is empty or not a whole
    /// number of codes.
    pub fn new(chips: &'a [T], code_length: usize) -> Result<Self, CodeTableError> {
        if code_length == 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("code table rejected: zero code length");
            return Err(CodeTableError::EmptyCode);
        }
        if chips.is_empty() || chips.len() % code_length != 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "code table rejected: {} chips, code length {}",
                chips.len(),
                code_length
            );
            return Err(CodeTableError::RaggedTable {
                len: chips.len(),
                code_length,
            });
        }
        Ok(Self {
            chips,
            code_length,
            num_prns: chips.len() / code_length,
        })
    }

    /// Full code for `prn`, or `None` outside `1..=num_prns`.
    #[must_use]
    pub fn column(&self, prn: usize) -> Option<&'a [T]> {
        if prn == 0 || prn > self.num_prns {
            return None;
        }
        let start = (prn - 1) * self.code_length;
        self.chips.get(start..start + self.code_length)
    }

    /// Underlying chip storage.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.chips
    }
}

impl<T: Copy> CodeTable for CodeMatrix<'_, T> {
    type Chip = T;

    #[inline]
    fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    fn num_prns(&self) -> usize {
        self.num_prns
    }

    #[inline]
    fn chip(&self, offset: usize, prn: usize) -> T {
        debug_assert!(offset < self.code_length, "chip offset {} out of range", offset);
        self.chips[(prn - 1) * self.code_length + offset]
    }
}

/// Unreduced chip position `f/f_s·sample + φ₀`.
#[inline]
pub(crate) fn chip_position(
    sample: f64,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> f64 {
    frequency / sampling_frequency * sample + phase
}

/// Offset in `0..code_length` of the chip containing `position`.
///
/// A NaN position reads offset 0.
#[inline]
fn chip_offset(position: f64, code_length: usize) -> usize {
    wrap(libm::floor(position), code_length as f64) as usize
}

/// Generate one code sample for any code length.
///
/// # Arguments
/// * `sample` - Sample index since the reference epoch
/// * `frequency` - Code (chipping) frequency
/// * `phase` - Initial code phase in chips
/// * `sampling_frequency` - Sampling frequency
/// * `codes` - Code table
/// * `prn` - Satellite PRN (1-based column)
#[must_use]
#[inline]
pub fn gen_code<S: SampleIndex, C: CodeTable + ?Sized>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    codes: &C,
    prn: usize,
) -> C::Chip {
    let position = chip_position(sample.to_f64(), frequency, phase, sampling_frequency);
    codes.chip(chip_offset(position, codes.code_length()), prn)
}

/// Chip at an already computed code phase.
///
/// `code_phase` may lie outside one code period; it is wrapped first.
#[must_use]
#[inline]
pub fn code_at_phase<C: CodeTable + ?Sized>(codes: &C, code_phase: f64, prn: usize) -> C::Chip {
    codes.chip(chip_offset(code_phase, codes.code_length()), prn)
}

/// Code phase in chips at `sample`, reduced to `[0, code_length)`.
#[must_use]
#[inline]
pub fn calc_code_phase<S: SampleIndex>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    code_length: usize,
) -> f64 {
    wrap(
        chip_position(sample.to_f64(), frequency, phase, sampling_frequency),
        code_length as f64,
    )
}

/// Code phase in chips at `sample` without wraparound.
///
/// For callers that already keep the phase bounded, or reduce it
/// themselves later. Not `unsafe` in the Rust sense.
#[must_use]
#[inline]
pub fn calc_code_phase_unsafe<S: SampleIndex>(
    sample: S,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
) -> f64 {
    chip_position(sample.to_f64(), frequency, phase, sampling_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [[i8; 5]; 2] = [[1, -1, -1, 1, 1], [-1, -1, 1, 1, -1]];

    #[test]
    fn test_matrix_shape() {
        let chips = [1i8, 2, 3, 4, 5, 6];
        let m = CodeMatrix::new(&chips, 3).unwrap();
        assert_eq!(m.code_length(), 3);
        assert_eq!(m.num_prns(), 2);
        assert_eq!(m.chip(0, 2), 4);
        assert_eq!(m.column(1), Some(&chips[..3]));
        assert_eq!(m.column(0), None);
        assert_eq!(m.column(3), None);
    }

    #[test]
    fn test_matrix_rejects_bad_shapes() {
        let chips = [1i8; 7];
        assert_eq!(CodeMatrix::new(&chips, 0).unwrap_err(), CodeTableError::EmptyCode);
        assert_eq!(
            CodeMatrix::new(&chips, 3).unwrap_err(),
            CodeTableError::RaggedTable { len: 7, code_length: 3 }
        );
        let empty: [i8; 0] = [];
        assert!(CodeMatrix::new(&empty, 3).is_err());
    }

    #[test]
    fn test_array_table() {
        assert_eq!(TABLE.code_length(), 5);
        assert_eq!(TABLE.num_prns(), 2);
        assert_eq!(TABLE.chip(2, 2), 1);
    }

    #[test]
    fn test_gen_code_one_chip_per_sample() {
        for n in 0..20u32 {
            let expected = TABLE[0][n as usize % 5];
            assert_eq!(gen_code(n, 1.0, 0.0, 1.0, &TABLE, 1), expected);
        }
    }

    #[test]
    fn test_gen_code_phase_offset() {
        // Phase 2.5 chips, 4 samples per chip
        assert_eq!(gen_code(0u32, 1.0, 2.5, 4.0, &TABLE, 2), TABLE[1][2]);
        assert_eq!(gen_code(2u32, 1.0, 2.5, 4.0, &TABLE, 2), TABLE[1][3]);
    }

    #[test]
    fn test_gen_code_negative_position_wraps_to_end() {
        assert_eq!(gen_code(0u32, 1.0, -0.5, 1.0, &TABLE, 1), TABLE[0][4]);
    }

    #[test]
    fn test_code_at_phase() {
        assert_eq!(code_at_phase(&TABLE, 3.7, 1), TABLE[0][3]);
        assert_eq!(code_at_phase(&TABLE, 13.2, 1), TABLE[0][3]);
        assert_eq!(code_at_phase(&TABLE, f64::NAN, 2), TABLE[1][0]);
    }

    #[test]
    fn test_calc_code_phase_fixture() {
        let p = calc_code_phase(4000u32, 1023e3, 2.0, 4e6, 1023);
        assert_eq!(p, 2.0);
        assert_eq!(calc_code_phase_unsafe(4000u32, 1023e3, 2.0, 4e6), 1025.0);
    }
}
