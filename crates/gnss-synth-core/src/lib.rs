//! GNSS Signal Synthesis Core
//!
//! Per-sample carrier and spreading-code generation for software-defined
//! GNSS receivers and simulators. Every generator is a pure function of the
//! sample index and signal parameters, so samples can be produced out of
//! order, in parallel, or one block at a time.
//! This crate is `no_std` unless the `std` feature is enabled.
//!
//! # Modules
//!
//! - [`types`] - Core types: IqSample, SampleIndex, Signal
//! - [`config`] - Signal constants and fast-path parameters
//! - [`cis`] - Unit-circle table and fast complex exponential
//! - [`carrier`] - Exact and fast carrier samples, carrier phase
//! - [`modulus`] - Division-free reduction modulo 1023
//! - [`code`] - Code tables, code samples, code phase
//! - [`system`] - GNSS signal descriptors and the GPS L1 C/A fast path
//! - [`replica`] - Block generation into fixed-capacity buffers
//! - [`error`] - Code table validation errors

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod carrier;
pub mod cis;
pub mod code;
pub mod config;
pub mod error;
pub mod modulus;
pub mod replica;
pub mod system;
pub mod types;

// Re-export commonly used items
pub use carrier::{calc_carrier_phase, gen_carrier, gen_carrier_fast, phase_distance, CarrierPath};
pub use cis::{cis_fast, UNIT_CIRCLE};
pub use code::{
    calc_code_phase, calc_code_phase_unsafe, code_at_phase, gen_code, CodeMatrix, CodeTable,
};
pub use error::CodeTableError;
pub use modulus::{mod_1023_u16, mod_1023_u32};
pub use replica::{fill_carrier, fill_code, CarrierReplica, CodeReplica};
pub use system::{
    fast_sample_limit, gen_code_fast, gen_system_code, FastSampleIndex, GalileoE1B, GnssSystem,
    GpsL1,
};
pub use types::{Complex64, IqSample, SampleIndex, Signal};
