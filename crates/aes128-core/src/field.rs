//! Arithmetic over GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial (0x11B with the x^8 term dropped).
pub const REDUCER: u8 = 0x1b;

/// Bit shifted out of a byte by multiplying with x.
pub const HIGH_BIT: u8 = 0x80;

/// Adds two field elements.
#[inline]
pub fn field_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtracts two field elements. Same as [`field_add`] in characteristic 2.
#[inline]
pub fn field_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies a field element by x (0x02).
#[inline]
pub fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & HIGH_BIT != 0 {
        shifted ^ REDUCER
    } else {
        shifted
    }
}

/// Multiplies two field elements (shift-and-add with reduction).
pub fn field_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & HIGH_BIT;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= REDUCER;
        }
        b >>= 1;
    }
    product
}
