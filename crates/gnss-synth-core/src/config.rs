//! Signal constants and fixed synthesis parameters
//!
//! Code lengths, chipping rates and carrier frequencies for the supported
//! signals, plus the sizes the fast paths are built around. Everything the
//! generators treat as a compile-time constant lives here.

use core::f64::consts::PI;

/// Number of entries in the unit-circle lookup table
pub const UNIT_CIRCLE_SIZE: usize = 64;

/// Worst-case angular error of the unit-circle lookup in radians
pub const CIS_FAST_MAX_ERROR_RAD: f64 = PI / UNIT_CIRCLE_SIZE as f64;

/// Modulus reduced by the integer fast path (2^10 - 1)
pub const FAST_CODE_MODULUS: u32 = 1023;

/// GPS L1 C/A code length in chips
pub const GPS_L1_CA_CODE_LENGTH: usize = 1023;

/// GPS L1 C/A chipping rate in chips/s
pub const GPS_L1_CA_CODE_FREQUENCY_HZ: f64 = 1.023e6;

/// GPS L1 carrier frequency in Hz
pub const GPS_L1_CENTER_FREQUENCY_HZ: f64 = 1.57542e9;

/// GPS L1 C/A navigation data rate in bits/s
pub const GPS_L1_CA_DATA_FREQUENCY_HZ: f64 = 50.0;

/// Galileo E1-B code length in chips
pub const GALILEO_E1B_CODE_LENGTH: usize = 4092;

/// Galileo E1-B chipping rate in chips/s
pub const GALILEO_E1B_CODE_FREQUENCY_HZ: f64 = 1.023e6;

/// Galileo E1 carrier frequency in Hz
pub const GALILEO_E1_CENTER_FREQUENCY_HZ: f64 = 1.57542e9;

/// Galileo E1-B I/NAV symbol rate in symbols/s
pub const GALILEO_E1B_DATA_FREQUENCY_HZ: f64 = 250.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_is_power_of_two() {
        assert!(UNIT_CIRCLE_SIZE.is_power_of_two());
    }

    #[test]
    fn test_fast_modulus_matches_gps_code_length() {
        assert_eq!(FAST_CODE_MODULUS as usize, GPS_L1_CA_CODE_LENGTH);
        assert_eq!(FAST_CODE_MODULUS, (1 << 10) - 1);
    }

    #[test]
    fn test_code_periods() {
        // Both primary codes repeat on whole milliseconds
        let gps_ms = GPS_L1_CA_CODE_LENGTH as f64 / GPS_L1_CA_CODE_FREQUENCY_HZ * 1e3;
        let gal_ms = GALILEO_E1B_CODE_LENGTH as f64 / GALILEO_E1B_CODE_FREQUENCY_HZ * 1e3;
        assert!((gps_ms - 1.0).abs() < 1e-12);
        assert!((gal_ms - 4.0).abs() < 1e-12);
    }
}
