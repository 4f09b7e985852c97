//! Division-free reduction modulo 1023.
//!
//! 1023 = 2^10 - 1, so `2^10 ≡ 1 (mod 1023)` and every 10-bit group of the
//! input contributes its plain value to the residue. Summing the groups and
//! folding the final carry gives `x % 1023` with shifts, masks and adds only.
//! The 16-bit and 32-bit versions differ in how many groups they fold.

const LOW_BITS: u32 = 10;
const MASK_16: u16 = (1 << LOW_BITS) - 1;
const MASK_32: u32 = (1 << LOW_BITS) - 1;

/// `x % 1023` for 16-bit input.
#[must_use]
#[inline]
pub const fn mod_1023_u16(x: u16) -> u16 {
    // At most 1023 + 63, no overflow
    let y = (x & MASK_16) + (x >> LOW_BITS);
    (y + ((y + 1) >> LOW_BITS)) & MASK_16
}

/// `x % 1023` for 32-bit input.
#[must_use]
#[inline]
pub const fn mod_1023_u32(x: u32) -> u32 {
    // Three full groups plus the top two bits: at most 3 * 1023 + 3
    let y = (x & MASK_32)
        + ((x >> LOW_BITS) & MASK_32)
        + ((x >> (2 * LOW_BITS)) & MASK_32)
        + (x >> (3 * LOW_BITS));
    let y = (y & MASK_32) + (y >> LOW_BITS);
    (y + ((y + 1) >> LOW_BITS)) & MASK_32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_1023_u16_exhaustive() {
        for x in 0..=u16::MAX {
            assert_eq!(mod_1023_u16(x), x % 1023, "x = {}", x);
        }
    }

    #[test]
    fn test_mod_1023_u32_boundaries() {
        let cases = [
            0u32,
            1,
            1022,
            1023,
            1024,
            2045,
            2046,
            2047,
            1023 * 1023,
            (1 << 20) - 1,
            1 << 20,
            (1 << 30) - 1,
            1 << 30,
            u32::MAX - 1,
            u32::MAX,
        ];
        for &x in &cases {
            assert_eq!(mod_1023_u32(x), x % 1023, "x = {}", x);
        }
    }

    #[test]
    fn test_mod_1023_u32_multiples() {
        let mut k = 0u32;
        while let Some(x) = k.checked_mul(1023) {
            assert_eq!(mod_1023_u32(x), 0, "x = {}", x);
            if let Some(next) = x.checked_add(1022) {
                assert_eq!(mod_1023_u32(next), 1022, "x = {}", next);
            }
            k += 4099;
        }
    }

    #[test]
    fn test_mod_1023_widths_agree() {
        for x in 0..=u16::MAX {
            assert_eq!(u32::from(mod_1023_u16(x)), mod_1023_u32(u32::from(x)));
        }
    }

    #[test]
    fn test_usable_in_const_context() {
        const R: u32 = mod_1023_u32(2046);
        assert_eq!(R, 0);
    }
}
