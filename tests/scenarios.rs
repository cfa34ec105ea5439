//! Literal end-to-end scenarios from spec §8: one `#[test]` per named
//! case, each asserting a concrete numeric result rather than a general
//! property (those live in `tests/properties.rs`).

use zpoly::poly::mul_kernel::{self, KernelConfig};
use zpoly::{DensePoly, Modulus};

fn force_karatsuba() -> KernelConfig {
    KernelConfig {
        unsafe_threshold: 1,
        safe_threshold: 1,
    }
}

fn naive_convolution(a: &[i64], b: &[i64], p: i64) -> Vec<u64> {
    let mut acc = vec![0i64; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            acc[i + j] += ai * bj;
        }
    }
    acc.into_iter().map(|c| (((c % p) + p) % p) as u64).collect()
}

/// Scenario 1: `p = 17`, `a = 1 + 2x^2 - x^3 + x^5 - x^17`,
/// `b = 3x^2 + x`. Classical and Karatsuba must both agree with a plain
/// convolution reference mod 17.
#[test]
fn scenario_1_classical_and_karatsuba_agree_with_naive_reference() {
    let p = 17i64;
    let modulus = Modulus::new(p as u64);

    let mut a_signed = vec![0i64; 18];
    a_signed[0] = 1;
    a_signed[2] = 2;
    a_signed[3] = -1;
    a_signed[5] = 1;
    a_signed[17] = -1;
    let b_signed = vec![0i64, 1, 3];

    let a = DensePoly::from_signed_coeffs(&a_signed, modulus);
    let b = DensePoly::from_signed_coeffs(&b_signed, modulus);

    let reference = naive_convolution(&a_signed, &b_signed, p);

    let via_classical = mul_kernel::classical_multiply(a.coeffs(), b.coeffs(), &modulus);
    assert_eq!(via_classical, reference);

    let via_karatsuba = mul_kernel::multiply_with_config(a.coeffs(), b.coeffs(), &modulus, &force_karatsuba());
    assert_eq!(via_karatsuba, reference);

    let mut product = a.clone();
    product.multiply(&b);
    assert_eq!(product.coeffs(), reference.as_slice());
}

/// Scenario 2: `p = 17`, `a = x^5 + 16x^4 + x^3` already has leading
/// coefficient `1`, so `monic(a) == a`.
#[test]
fn scenario_2_monic_is_identity_when_already_monic() {
    let modulus = Modulus::new(17);
    let mut a = DensePoly::from_coeffs(&[0, 0, 0, 1, 16, 1], modulus);
    let before = a.clone();
    a.monic().unwrap();
    assert_eq!(a, before);
    assert_eq!(a.lc(), 1);
}

/// Scenario 3: the zero polynomial over `p = 17` satisfies every
/// zero-specific identity: `degree == 0`, `c[0] == 0`, `is_zero()`,
/// `pow(5) == 0`, `monic() == 0`.
#[test]
fn scenario_3_zero_polynomial_identities() {
    let modulus = Modulus::new(17);
    let mut a = DensePoly::zero(modulus);
    assert_eq!(a.degree(), 0);
    assert_eq!(a.cc(), 0);
    assert!(a.is_zero());

    let mut powered = a.clone();
    powered.pow(5).unwrap();
    assert!(powered.is_zero());

    a.monic().unwrap();
    assert!(a.is_zero());
}

/// Scenario 4: `p = 59`, classical and Karatsuba multiplication must
/// byte-exactly agree on two pseudo-random degree-500 polynomials
/// generated from a fixed seed (a small xorshift generator stands in
/// for an external RNG dependency, matching the reproducibility
/// requirement of spec §8 without adding a `rand` dependency the
/// teacher's own stack doesn't carry).
#[test]
fn scenario_4_classical_and_karatsuba_agree_on_seeded_degree_500_polynomials() {
    let modulus = Modulus::new(59);

    let mut state = 0x243F6A8885A308D3u64; // seed
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let a: Vec<u64> = (0..=500).map(|_| next() % 59).collect();
    let b: Vec<u64> = (0..=500).map(|_| next() % 59).collect();

    let via_classical = mul_kernel::classical_multiply(&a, &b, &modulus);
    let via_karatsuba = mul_kernel::multiply_with_config(&a, &b, &modulus, &force_karatsuba());
    assert_eq!(via_classical, via_karatsuba);
}

/// Scenario 5: `p = 17`, `a = x + 1`, `square(a) == 1 + 2x + x^2`.
#[test]
fn scenario_5_square_of_x_plus_one() {
    let modulus = Modulus::new(17);
    let mut a = DensePoly::from_coeffs(&[1, 1], modulus);
    a.square();
    assert_eq!(a.coeffs(), &[1, 2, 1]);
}

/// Scenario 6: `shiftRight(3, x^2 + 2x + 5) = 5x^3 + 2x^4 + x^5`, and
/// `shiftLeft(2, that) = 5x + 2x^2 + x^3`.
#[test]
fn scenario_6_shift_right_then_shift_left() {
    let modulus = Modulus::new(17);
    let mut a = DensePoly::from_coeffs(&[5, 2, 1], modulus);
    a.shift_right(3);
    assert_eq!(a.coeffs(), &[0, 0, 0, 5, 2, 1]);

    a.shift_left(2);
    assert_eq!(a.coeffs(), &[0, 5, 2, 1]);
}
