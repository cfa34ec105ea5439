//! The Z/pZ ring view (`Coeff`): free functions operating on raw `u64`
//! residues against a [`Modulus`], rather than a wrapper type.
//!
//! `DensePoly` stores coefficients as bare `u64`s and calls through to
//! these functions at every arithmetic step; there is no `Zp`-style
//! newtype here (the teacher's `Zp` element wraps `{ value, modulus }`
//! per scalar, which is the right shape for a single loose field element
//! but wasteful once coefficients live packed in a `Vec<u64>` alongside
//! one shared `Modulus` — keeping the ring operations as free functions
//! over `(u64, &Modulus)` avoids carrying a redundant modulus per slot).

use crate::error::{PolyError, PolyResult};
use crate::modular::word_arith;
use crate::modular::Modulus;

/// Reduces an arbitrary signed integer into the canonical residue
/// `[0, p)`.
///
/// # Examples
///
/// ```rust
/// use zpoly::Modulus;
/// use zpoly::coeff::normalize;
///
/// let m = Modulus::new(7);
/// assert_eq!(normalize(-1, &m), 6);
/// assert_eq!(normalize(9, &m), 2);
/// ```
#[inline]
pub fn normalize(x: i64, m: &Modulus) -> u64 {
    m.reduce_i64(x)
}

/// Additive inverse: `0` maps to `0`, any other residue `a` to `p - a`.
#[inline]
pub fn neg(a: u64, m: &Modulus) -> u64 {
    if a == 0 {
        0
    } else {
        m.p() - a
    }
}

/// `(a + b) mod p`, assuming `a, b` already canonical (`< p`).
///
/// # Examples
///
/// ```rust
/// use zpoly::Modulus;
/// use zpoly::coeff::add;
///
/// let m = Modulus::new(7);
/// assert_eq!(add(5, 4, &m), 2);
/// ```
#[inline]
pub fn add(a: u64, b: u64, m: &Modulus) -> u64 {
    let s = a + b; // a, b < p < 2^63, so a + b < 2^64: no overflow.
    if s >= m.p() {
        s - m.p()
    } else {
        s
    }
}

/// `(a - b) mod p`, assuming `a, b` already canonical (`< p`).
#[inline]
pub fn sub(a: u64, b: u64, m: &Modulus) -> u64 {
    if a >= b {
        a - b
    } else {
        m.p() - (b - a)
    }
}

/// `(a * b) mod p`.
///
/// # Examples
///
/// ```rust
/// use zpoly::Modulus;
/// use zpoly::coeff::mul;
///
/// let m = Modulus::new(7);
/// assert_eq!(mul(3, 5, &m), 1); // 15 mod 7 == 1
/// ```
#[inline]
pub fn mul(a: u64, b: u64, m: &Modulus) -> u64 {
    m.mul_mod(a, b)
}

/// Multiplicative inverse via the extended Euclidean algorithm.
///
/// # Errors
/// Returns [`PolyError::DivisionByZero`] if `a` is zero (the zero
/// element has no inverse in any ring).
///
/// # Examples
///
/// ```rust
/// use zpoly::Modulus;
/// use zpoly::coeff::{inverse, mul};
///
/// let m = Modulus::new(7);
/// let inv = inverse(3, &m).unwrap();
/// assert_eq!(mul(3, inv, &m), 1);
/// ```
pub fn inverse(a: u64, m: &Modulus) -> PolyResult<u64> {
    if a == 0 {
        return Err(PolyError::DivisionByZero {
            operation: "coeff::inverse",
        });
    }
    let (g, x, _) = extended_gcd(a as i64, m.p() as i64);
    if g != 1 {
        // Not invertible: a and p share a nontrivial factor. Only
        // possible when p is not actually prime, which this crate does
        // not verify at `Modulus` construction time.
        return Err(PolyError::DivisionByZero {
            operation: "coeff::inverse",
        });
    }
    Ok(normalize(x, m))
}

/// `a^exp mod p`.
///
/// `exp` may be negative: `pow(a, -1) == inverse(a)`, and more generally
/// `pow(a, -k) == inverse(pow(a, k))`. `pow(0, 0) == 1` by convention.
///
/// # Errors
/// Returns [`PolyError::DivisionByZero`] if `exp < 0` and `a == 0`.
///
/// # Examples
///
/// ```rust
/// use zpoly::Modulus;
/// use zpoly::coeff::pow;
///
/// let m = Modulus::new(7);
/// assert_eq!(pow(3, 4, &m).unwrap(), 4); // 3^4 = 81 = 4 mod 7
/// ```
pub fn pow(a: u64, exp: i64, m: &Modulus) -> PolyResult<u64> {
    if exp >= 0 {
        Ok(word_arith::pow_mod(m, a, exp as u64))
    } else {
        let inv = inverse(a, m)?;
        Ok(word_arith::pow_mod(m, inv, exp.unsigned_abs()))
    }
}

/// Extended Euclidean algorithm: returns `(g, x, y)` with
/// `a*x + b*y == g == gcd(a, b)`. Rust's `/` and `%` both truncate
/// toward zero, so the textbook recursion carries over unchanged even
/// when `a` is negative (as it is whenever `inverse` is called on a
/// value greater than `p/2` reinterpreted as signed).
fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x1, y1) = extended_gcd(b, a % b);
        (g, y1, x1 - (a / b) * y1)
    }
}
