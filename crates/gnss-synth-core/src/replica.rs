//! Block generation of carrier and code replicas.
//!
//! Correlators consume replicas a block at a time. The fill functions write
//! consecutive samples into caller storage; [`CarrierReplica`] and
//! [`CodeReplica`] own a fixed-capacity buffer so no allocation is needed.

use heapless::Vec;

use crate::carrier::{gen_carrier, gen_carrier_fast, CarrierPath};
use crate::code::{gen_code, CodeTable};
use crate::types::IqSample;

/// Fill `out` with carrier samples for indices `start..start + out.len()`.
pub fn fill_carrier(
    out: &mut [IqSample],
    start: u64,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    path: CarrierPath,
) {
    match path {
        CarrierPath::Exact => {
            for (n, slot) in (start..).zip(out.iter_mut()) {
                *slot = gen_carrier(n, frequency, phase, sampling_frequency);
            }
        }
        CarrierPath::Fast => {
            for (n, slot) in (start..).zip(out.iter_mut()) {
                *slot = gen_carrier_fast(n, frequency, phase, sampling_frequency);
            }
        }
    }
}

/// Fill `out` with code samples for indices `start..start + out.len()`.
pub fn fill_code<C: CodeTable + ?Sized>(
    out: &mut [C::Chip],
    start: u64,
    frequency: f64,
    phase: f64,
    sampling_frequency: f64,
    codes: &C,
    prn: usize,
) {
    for (n, slot) in (start..).zip(out.iter_mut()) {
        *slot = gen_code(n, frequency, phase, sampling_frequency, codes, prn);
    }
}

/// Carrier replica with room for `N` samples.
#[derive(Clone, Debug, Default)]
pub struct CarrierReplica<const N: usize> {
    samples: Vec<IqSample, N>,
}

impl<const N: usize> CarrierReplica<N> {
    /// Create an empty replica.
    #[must_use]
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Replace the contents with `count` samples starting at `start`.
    ///
    /// Generates at most `N` samples and returns how many were written.
    pub fn generate(
        &mut self,
        start: u64,
        count: usize,
        frequency: f64,
        phase: f64,
        sampling_frequency: f64,
        path: CarrierPath,
    ) -> usize {
        let len = clamp_to_capacity::<N>(count);
        self.samples.clear();
        // Capacity is N, so the resize cannot fail
        let _ = self.samples.resize(len, IqSample::new(0.0, 0.0));
        fill_carrier(&mut self.samples, start, frequency, phase, sampling_frequency, path);
        len
    }

    /// Generated samples.
    #[must_use]
    pub fn as_slice(&self) -> &[IqSample] {
        &self.samples
    }

    /// Number of generated samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the replica holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Code replica with room for `N` chips.
#[derive(Clone, Debug, Default)]
pub struct CodeReplica<T, const N: usize> {
    chips: Vec<T, N>,
}

impl<T: Copy, const N: usize> CodeReplica<T, N> {
    /// Create an empty replica.
    #[must_use]
    pub const fn new() -> Self {
        Self { chips: Vec::new() }
    }

    /// Replace the contents with `count` code samples starting at `start`.
    ///
    /// Generates at most `N` samples and returns how many were written.
    #[allow(clippy::too_many_arguments)]
    pub fn generate<C: CodeTable<Chip = T> + ?Sized>(
        &mut self,
        start: u64,
        count: usize,
        frequency: f64,
        phase: f64,
        sampling_frequency: f64,
        codes: &C,
        prn: usize,
    ) -> usize {
        let len = clamp_to_capacity::<N>(count);
        self.chips.clear();
        for n in (start..).take(len) {
            // Capacity is N and len <= N
            let _ = self
                .chips
                .push(gen_code(n, frequency, phase, sampling_frequency, codes, prn));
        }
        len
    }

    /// Generated chips.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.chips
    }

    /// Number of generated chips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Whether the replica holds no chips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Maximum number of chips.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all chips.
    pub fn clear(&mut self) {
        self.chips.clear();
    }
}

fn clamp_to_capacity<const N: usize>(count: usize) -> usize {
    if count > N {
        #[cfg(feature = "defmt")]
        defmt::debug!("replica truncated: requested {}, capacity {}", count, N);
        N
    } else {
        count
    }
}
