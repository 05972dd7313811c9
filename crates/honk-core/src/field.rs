//! Scalar field arithmetic for BN254
//!
//! Implements Fr (scalar field) operations using 4 x 64-bit limbs.
//! All operations are performed modulo the scalar field order r.
//! Arithmetic functions expect canonical inputs; use [`fr_from_bytes`] to
//! bring arbitrary 32-byte values into range first.

use crate::errors::FieldError;
use crate::types::{Fr, SCALAR_ZERO};

/// BN254 scalar field modulus r
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const R: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// r - 2 (for computing inverse via Fermat's little theorem)
const R_MINUS_2: [u64; 4] = [
    0x43e1f593efffffff, // limb 0 (least significant)
    0x2833e84879b97091, // limb 1
    0xb85045b68181585d, // limb 2
    0x30644e72e131a029, // limb 3 (most significant)
];

/// 2^256 mod r
const TWO_256_MOD_R: [u64; 4] = [
    0xac96341c4ffffffb, // limb 0 (least significant)
    0x36fc76959f60cd29, // limb 1
    0x666ea36f7879462e, // limb 2
    0x0e0a77c19a07df2f, // limb 3 (most significant)
];

/// Convert 32-byte big-endian Fr to 4 x u64 limbs (little-endian limbs)
#[inline]
pub fn fr_to_limbs(fr: &Fr) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 32 - (i + 1) * 8;
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&fr[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    limbs
}

/// Convert 4 x u64 limbs (little-endian) to 32-byte big-endian Fr
#[inline]
pub fn limbs_to_fr(limbs: &[u64; 4]) -> Fr {
    let mut fr = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 32 - (i + 1) * 8;
        fr[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    fr
}

/// Reduce any 256-bit big-endian value mod r.
///
/// A 256-bit input is at most ~5.8 * r, so this takes at most 6 subtractions.
#[inline]
pub fn fr_reduce(a: &[u8; 32]) -> Fr {
    let mut limbs = fr_to_limbs(a);
    while gte(&limbs, &R) {
        limbs = sub_no_borrow(&limbs, &R);
    }
    limbs_to_fr(&limbs)
}

/// Decode 32 big-endian bytes into a canonical field element.
/// Values >= r are reduced, never rejected.
pub fn fr_from_bytes(bytes: &[u8; 32]) -> Fr {
    fr_reduce(bytes)
}

/// Encode a field element as 32 big-endian bytes, re-reducing first.
pub fn fr_to_bytes(fr: &Fr) -> [u8; 32] {
    fr_reduce(fr)
}

/// Check whether a 32-byte value is already in canonical form (< r)
pub fn fr_is_canonical(a: &[u8; 32]) -> bool {
    !gte(&fr_to_limbs(a), &R)
}

/// Add two field elements: a + b mod r
pub fn fr_add(a: &Fr, b: &Fr) -> Fr {
    let result = add_mod(&fr_to_limbs(a), &fr_to_limbs(b));
    limbs_to_fr(&result)
}

/// Subtract two field elements: a - b mod r
pub fn fr_sub(a: &Fr, b: &Fr) -> Fr {
    let result = sub_mod(&fr_to_limbs(a), &fr_to_limbs(b));
    limbs_to_fr(&result)
}

/// Negate a field element: -a mod r
pub fn fr_neg(a: &Fr) -> Fr {
    if fr_is_zero(a) {
        return SCALAR_ZERO;
    }
    let result = sub_mod(&R, &fr_to_limbs(a));
    limbs_to_fr(&result)
}

/// Multiply two field elements: a * b mod r
pub fn fr_mul(a: &Fr, b: &Fr) -> Fr {
    let result = mul_mod_wide(&fr_to_limbs(a), &fr_to_limbs(b));
    limbs_to_fr(&result)
}

/// Square a field element: a^2 mod r
pub fn fr_square(a: &Fr) -> Fr {
    fr_mul(a, a)
}

/// Compute multiplicative inverse: a^{-1} mod r
///
/// Fermat's little theorem maps zero to zero, so zero is rejected up front.
pub fn fr_inv(a: &Fr) -> Result<Fr, FieldError> {
    if fr_is_zero(a) {
        return Err(FieldError::DivisionByZero);
    }
    let result = pow_mod(&fr_to_limbs(a), &R_MINUS_2);
    Ok(limbs_to_fr(&result))
}

/// Divide two field elements: a / b mod r
pub fn fr_div(a: &Fr, b: &Fr) -> Result<Fr, FieldError> {
    let b_inv = fr_inv(b)?;
    Ok(fr_mul(a, &b_inv))
}

/// Check if a field element is zero
pub fn fr_is_zero(a: &Fr) -> bool {
    *a == SCALAR_ZERO
}

/// Convert u64 to Fr
pub fn fr_from_u64(val: u64) -> Fr {
    let mut fr = SCALAR_ZERO;
    fr[24..32].copy_from_slice(&val.to_be_bytes());
    fr
}

// --- Internal functions for limb arithmetic ---

/// Add two 256-bit numbers, returning a + b mod r
fn add_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (sum, overflow) = add_with_carry(a, b);
    if overflow || gte(&sum, &R) {
        sub_no_borrow(&sum, &R)
    } else {
        sum
    }
}

/// Subtract two 256-bit numbers, returning a - b mod r
fn sub_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    if gte(a, b) {
        sub_no_borrow(a, b)
    } else {
        // a < b, so compute r - (b - a)
        let diff = sub_no_borrow(b, a);
        sub_no_borrow(&R, &diff)
    }
}

/// Multiply two 256-bit numbers mod r using widening multiplication
fn mul_mod_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    reduce_512(&mul_wide_4x4(a, b))
}

/// Reduce a 512-bit number mod r
fn reduce_512(wide: &[u64; 8]) -> [u64; 4] {
    let mut low = [wide[0], wide[1], wide[2], wide[3]];
    let mut high = [wide[4], wide[5], wide[6], wide[7]];

    // low + high * 2^256 == low + high * (2^256 mod r); repeat until high is gone
    while !is_zero_4(&high) {
        let product = mul_wide_4x4(&high, &TWO_256_MOD_R);

        let (sum, overflow) =
            add_with_carry(&low, &[product[0], product[1], product[2], product[3]]);
        low = sum;

        high = [product[4], product[5], product[6], product[7]];
        if overflow {
            let (new_high, _) = add_with_carry(&high, &[1, 0, 0, 0]);
            high = new_high;
        }
    }

    while gte(&low, &R) {
        low = sub_no_borrow(&low, &R);
    }

    low
}

fn is_zero_4(a: &[u64; 4]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// Multiply two 256-bit numbers to get 512-bit result (no reduction)
fn mul_wide_4x4(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut result = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mul_with_carry(a[j], b[i], result[i + j], carry);
            result[i + j] = lo;
            carry = hi;
        }
        result[i + 4] = carry;
    }

    result
}

/// Compute a^exp mod r using square-and-multiply
fn pow_mod(base: &[u64; 4], exp: &[u64; 4]) -> [u64; 4] {
    let mut result = [1u64, 0, 0, 0];
    let mut base_pow = *base;

    for &limb in exp {
        let mut e = limb;
        for _ in 0..64 {
            if e & 1 == 1 {
                result = mul_mod_wide(&result, &base_pow);
            }
            base_pow = mul_mod_wide(&base_pow, &base_pow);
            e >>= 1;
        }
    }

    result
}

/// Add two 256-bit numbers with carry
fn add_with_carry(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], bool) {
    let mut result = [0u64; 4];
    let mut carry = 0u64;

    for i in 0..4 {
        let (sum1, c1) = a[i].overflowing_add(b[i]);
        let (sum2, c2) = sum1.overflowing_add(carry);
        result[i] = sum2;
        carry = (c1 as u64) + (c2 as u64);
    }

    (result, carry > 0)
}

/// Subtract b from a (assumes a >= b)
fn sub_no_borrow(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut result = [0u64; 4];
    let mut borrow = 0u64;

    for i in 0..4 {
        let (diff1, b1) = a[i].overflowing_sub(b[i]);
        let (diff2, b2) = diff1.overflowing_sub(borrow);
        result[i] = diff2;
        borrow = (b1 as u64) + (b2 as u64);
    }

    result
}

/// Check if a >= b
fn gte(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    true // equal
}

/// Multiply two u64 with carry: a * b + c + carry = (lo, hi)
fn mul_with_carry(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128) + (c as u128) + (carry as u128);
    (product as u64, (product >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FR_MODULUS, SCALAR_ONE};
    use ark_ff::{BigInteger, PrimeField};
    use proptest::prelude::*;

    fn ark_from(bytes: &[u8; 32]) -> ark_bn254::Fr {
        ark_bn254::Fr::from_be_bytes_mod_order(bytes)
    }

    fn ark_to(fr: ark_bn254::Fr) -> Fr {
        let mut out = [0u8; 32];
        out.copy_from_slice(&fr.into_bigint().to_bytes_be());
        out
    }

    #[test]
    fn test_modulus_limbs_match_bytes() {
        assert_eq!(limbs_to_fr(&R), FR_MODULUS);
    }

    #[test]
    fn test_fr_add_simple() {
        let c = fr_add(&fr_from_u64(10), &fr_from_u64(20));
        assert_eq!(c, fr_from_u64(30));
    }

    #[test]
    fn test_fr_sub_underflow() {
        let a = fr_from_u64(5);
        let b = fr_from_u64(10);
        let c = fr_sub(&a, &b); // r - 5
        assert_eq!(fr_add(&c, &b), a);
    }

    #[test]
    fn test_fr_mul_simple() {
        let c = fr_mul(&fr_from_u64(6), &fr_from_u64(7));
        assert_eq!(c, fr_from_u64(42));
    }

    #[test]
    fn test_fr_neg() {
        let a = fr_from_u64(1);
        assert_eq!(fr_add(&a, &fr_neg(&a)), SCALAR_ZERO);
        assert_eq!(fr_neg(&SCALAR_ZERO), SCALAR_ZERO);
    }

    #[test]
    fn test_fr_inv() {
        let a = fr_from_u64(7);
        let a_inv = fr_inv(&a).unwrap();
        assert_eq!(fr_mul(&a, &a_inv), SCALAR_ONE);
    }

    #[test]
    fn test_fr_div() {
        let c = fr_div(&fr_from_u64(42), &fr_from_u64(7)).unwrap();
        assert_eq!(c, fr_from_u64(6));
    }

    #[test]
    fn test_fr_zero_inv_is_an_error() {
        assert_eq!(fr_inv(&SCALAR_ZERO), Err(FieldError::DivisionByZero));
        assert_eq!(
            fr_div(&SCALAR_ONE, &SCALAR_ZERO),
            Err(FieldError::DivisionByZero)
        );
    }

    #[test]
    fn test_decode_reduces_out_of_range_values() {
        // r itself decodes to zero, r + 1 to one
        assert_eq!(fr_from_bytes(&FR_MODULUS), SCALAR_ZERO);
        let mut r_plus_one = FR_MODULUS;
        r_plus_one[31] += 1;
        assert_eq!(fr_from_bytes(&r_plus_one), SCALAR_ONE);

        let all_ones = [0xffu8; 32];
        let reduced = fr_from_bytes(&all_ones);
        assert!(fr_is_canonical(&reduced));
        assert_eq!(reduced, ark_to(ark_from(&all_ones)));
    }

    #[test]
    fn test_encode_re_reduces() {
        assert_eq!(fr_to_bytes(&FR_MODULUS), SCALAR_ZERO);
        assert_eq!(fr_to_bytes(&fr_from_u64(9)), fr_from_u64(9));
    }

    #[test]
    fn test_limb_conversion_roundtrip() {
        let original = [
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x01, 0x02, 0x03, 0x04,
            0x05, 0x06, 0x07, 0x08,
        ];
        assert_eq!(limbs_to_fr(&fr_to_limbs(&original)), original);
        assert_eq!(fr_to_limbs(&original)[0], 0x0102030405060708);
    }

    proptest! {
        #[test]
        fn prop_decode_encode_roundtrip(bytes in any::<[u8; 32]>()) {
            let a = fr_from_bytes(&bytes);
            prop_assert!(fr_is_canonical(&a));
            prop_assert_eq!(fr_from_bytes(&fr_to_bytes(&a)), a);
        }

        #[test]
        fn prop_matches_arkworks(x in any::<[u8; 32]>(), y in any::<[u8; 32]>()) {
            let a = fr_from_bytes(&x);
            let b = fr_from_bytes(&y);
            let (ark_a, ark_b) = (ark_from(&x), ark_from(&y));
            prop_assert_eq!(a, ark_to(ark_a));
            prop_assert_eq!(fr_add(&a, &b), ark_to(ark_a + ark_b));
            prop_assert_eq!(fr_sub(&a, &b), ark_to(ark_a - ark_b));
            prop_assert_eq!(fr_mul(&a, &b), ark_to(ark_a * ark_b));
        }

        #[test]
        fn prop_div_then_mul_recovers(x in any::<[u8; 32]>(), y in any::<[u8; 32]>()) {
            let a = fr_from_bytes(&x);
            let b = fr_from_bytes(&y);
            prop_assume!(!fr_is_zero(&b));
            let q = fr_div(&a, &b).unwrap();
            prop_assert_eq!(fr_mul(&q, &b), a);
        }
    }
}
