//! Dense univariate polynomials over Z/pZ (`DensePoly`).
//!
//! Storage is a `Vec<u64>` of canonical residues plus an explicit
//! `degree`, mirroring the teacher's `PolyZp { coeffs: Vec<u64>, modulus:
//! u64 }` shape with one deliberate divergence: the teacher represents
//! the zero polynomial as an *empty* `Vec`, while this crate's invariant
//! I1 requires the buffer to always hold at least one entry (`c[0]`),
//! even for zero, so `lc()`/`coeffs()[degree]` are always valid reads
//! that never need an `is_zero()` guard first. See `DESIGN.md` for the
//! full rationale.

pub mod display;
pub mod mul_kernel;
pub mod ops;


use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::coeff;
use crate::error::{PolyError, PolyResult};
use crate::modular::word_arith;
use crate::modular::Modulus;

/// A dense polynomial over Z/pZ.
///
/// Invariants (see spec §3):
/// - **I1 (degree invariant):** `coeffs.len() > degree` always, and
///   `coeffs[degree] != 0` unless `degree == 0` (the zero and nonzero
///   constant polynomials both have `degree == 0`).
/// - **I2 (residue invariant):** every `coeffs[i]` for `i <= degree`
///   lies in `[0, p)`. This can be violated transiently inside a
///   trusted fast path (see `ops` and `mul_kernel`); every such path
///   restores I2 before returning control to the caller.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensePoly {
    coeffs: Vec<u64>,
    degree: usize,
    modulus: Modulus,
}

impl DensePoly {
    /// The zero polynomial: `degree == 0`, `c[0] == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// let z = DensePoly::zero(Modulus::new(7));
    /// assert!(z.is_zero());
    /// assert_eq!(z.degree(), 0);
    /// ```
    pub fn zero(modulus: Modulus) -> Self {
        Self {
            coeffs: vec![0],
            degree: 0,
            modulus,
        }
    }

    /// The constant polynomial `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// let one = DensePoly::one(Modulus::new(7));
    /// assert_eq!(one.lc(), 1);
    /// assert_eq!(one.degree(), 0);
    /// ```
    pub fn one(modulus: Modulus) -> Self {
        Self {
            coeffs: vec![1 % modulus.p()],
            degree: 0,
            modulus,
        }
    }

    /// The constant polynomial `c` (reduced mod `p`).
    pub fn constant(c: u64, modulus: Modulus) -> Self {
        Self {
            coeffs: vec![modulus.reduce_u64(c)],
            degree: 0,
            modulus,
        }
    }

    /// `coef * x^deg`, with `coef` reduced mod `p`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// // 5x^3 mod 7
    /// let p = DensePoly::monomial(5, 3, Modulus::new(7));
    /// assert_eq!(p.coeffs(), &[0, 0, 0, 5]);
    /// ```
    pub fn monomial(coef: u64, deg: usize, modulus: Modulus) -> Self {
        let mut coeffs = vec![0u64; deg + 1];
        coeffs[deg] = modulus.reduce_u64(coef);
        let mut poly = Self {
            coeffs,
            degree: deg,
            modulus,
        };
        poly.fix_degree();
        poly
    }

    /// Builds a polynomial from already-canonical residues, lowest
    /// degree first. An empty slice yields the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// // x^2 + 2x + 3 mod 7
    /// let p = DensePoly::from_coeffs(&[3, 2, 1], Modulus::new(7));
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.evaluate(2), 4); // 3 + 4 + 4 = 11 = 4 mod 7
    /// ```
    pub fn from_coeffs(coeffs: &[u64], modulus: Modulus) -> Self {
        let buf: Vec<u64> = if coeffs.is_empty() {
            vec![0]
        } else {
            coeffs.iter().map(|&c| modulus.reduce_u64(c)).collect()
        };
        let degree = buf.len() - 1;
        let mut poly = Self {
            coeffs: buf,
            degree,
            modulus,
        };
        poly.fix_degree();
        poly
    }

    /// Builds a polynomial from signed coefficients, each reduced mod
    /// `p` via [`coeff::normalize`].
    pub fn from_signed_coeffs(coeffs: &[i64], modulus: Modulus) -> Self {
        if coeffs.is_empty() {
            return Self::zero(modulus);
        }
        let buf: Vec<u64> = coeffs.iter().map(|&c| coeff::normalize(c, &modulus)).collect();
        let degree = buf.len() - 1;
        let mut poly = Self {
            coeffs: buf,
            degree,
            modulus,
        };
        poly.fix_degree();
        poly
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// `true` for the zero polynomial (`degree == 0 && c[0] == 0`).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.coeffs[0] == 0
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.degree == 0
    }

    /// Leading coefficient, `c[degree]`. Always a valid read: for the
    /// zero polynomial this is `c[0] == 0`, never a missing slot.
    #[inline]
    pub fn lc(&self) -> u64 {
        self.coeffs[self.degree]
    }

    /// Constant term, `c[0]`.
    #[inline]
    pub fn cc(&self) -> u64 {
        self.coeffs[0]
    }

    /// `c[i]`, or `0` for any `i` beyond the stored degree.
    #[inline]
    pub fn get(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// All coefficients from `c[0]` through `c[degree]`, inclusive.
    #[inline]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs[..=self.degree]
    }

    /// Grows the backing buffer so index `d` is addressable, and raises
    /// `degree` to `d` if it was lower. Never shrinks the buffer.
    pub(crate) fn ensure_capacity(&mut self, d: usize) -> &mut Self {
        if self.coeffs.len() <= d {
            self.coeffs.resize(d + 1, 0);
        }
        if d > self.degree {
            self.degree = d;
        }
        self
    }

    /// Resets to the zero polynomial, keeping the buffer's capacity.
    pub(crate) fn set_zero(&mut self) {
        self.coeffs.iter_mut().for_each(|c| *c = 0);
        self.degree = 0;
    }

    /// Restores invariant I1: scans downward from `degree` past
    /// trailing zero coefficients, lowers `degree` accordingly, and
    /// zeroes every position vacated by the scan. Idempotent. This is
    /// the single sanctioned normalizer — every mutator that can leave
    /// `degree` stale calls it explicitly before returning, rather than
    /// relying on an implicit invariant-restoring pass elsewhere.
    pub fn fix_degree(&mut self) -> &mut Self {
        let old_degree = self.degree;
        let mut d = old_degree;
        while d > 0 && self.coeffs[d] == 0 {
            d -= 1;
        }
        for c in &mut self.coeffs[(d + 1)..=old_degree] {
            *c = 0;
        }
        self.degree = d;
        self
    }

    /// Divides by `x^k`, discarding the low `k` coefficients.
    /// `shiftLeft` at `k > degree` (including the boundary
    /// `k == degree + 1`) produces the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// // x^2 + 2x + 5, shift_left(1) -> x + 2
    /// let mut p = DensePoly::from_coeffs(&[5, 2, 1], Modulus::new(7));
    /// p.shift_left(1);
    /// assert_eq!(p.coeffs(), &[2, 1]);
    /// ```
    pub fn shift_left(&mut self, k: usize) -> &mut Self {
        if k == 0 {
            return self;
        }
        if k > self.degree {
            self.set_zero();
            return self;
        }
        self.coeffs.copy_within(k.., 0);
        for c in &mut self.coeffs[(self.degree - k + 1)..] {
            *c = 0;
        }
        self.degree -= k;
        self.fix_degree()
    }

    /// Multiplies by `x^k`, growing the buffer and shifting every
    /// coefficient up by `k` positions.
    pub fn shift_right(&mut self, k: usize) -> &mut Self {
        if k == 0 || self.is_zero() {
            return self;
        }
        let new_degree = self.degree + k;
        self.coeffs.resize(new_degree + 1, 0);
        self.coeffs.copy_within(0..=self.degree, k);
        for c in &mut self.coeffs[0..k] {
            *c = 0;
        }
        self.degree = new_degree;
        self
    }

    /// Caps the degree at `new_deg`, zeroing every coefficient above it.
    ///
    /// # Errors
    /// [`PolyError::PreconditionViolation`] if `new_deg < 0`.
    pub fn truncate(&mut self, new_deg: i64) -> PolyResult<&mut Self> {
        if new_deg < 0 {
            return Err(PolyError::PreconditionViolation {
                operation: "DensePoly::truncate",
                reason: "new_deg must be non-negative".into(),
            });
        }
        let new_deg = new_deg as usize;
        if new_deg < self.degree {
            for c in &mut self.coeffs[(new_deg + 1)..=self.degree] {
                *c = 0;
            }
            self.degree = new_deg;
        }
        Ok(self.fix_degree())
    }

    /// Reverses the coefficient order in place: `c[i] <-> c[degree - i]`.
    pub fn reverse(&mut self) -> &mut Self {
        self.coeffs[0..=self.degree].reverse();
        self.fix_degree()
    }

    /// gcd of the coefficient values `c[0..=degree]`, treated as plain
    /// non-negative integers (not reduced further by `p`). `0` for the
    /// zero polynomial; `c[0]` itself for a nonzero constant.
    pub fn content(&self) -> u64 {
        let signed: Vec<i64> = self.coeffs().iter().map(|&c| c as i64).collect();
        word_arith::long_gcd(&signed)
    }

    /// Divides every coefficient by `content()`.
    ///
    /// In this field-coefficient variant, a nonzero content is always a
    /// unit of Z/pZ (every nonzero residue mod a prime is invertible),
    /// so this division is always exact: there is no non-unit-content
    /// case to special-case the way an integer-coefficient variant would
    /// need to. The zero polynomial (content `0`) is left unchanged.
    pub fn primitive_part(&mut self) -> PolyResult<&mut Self> {
        let c = self.content();
        if c == 0 {
            return Ok(self);
        }
        let inv = coeff::inverse(c, &self.modulus)?;
        for i in 0..=self.degree {
            self.coeffs[i] = coeff::mul(self.coeffs[i], inv, &self.modulus);
        }
        Ok(self)
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// // 3 + 2x + x^2 at x = 2: 3 + 4 + 4 = 11 = 4 mod 7
    /// let p = DensePoly::from_coeffs(&[3, 2, 1], Modulus::new(7));
    /// assert_eq!(p.evaluate(2), 4);
    /// ```
    pub fn evaluate(&self, x: u64) -> u64 {
        let x = self.modulus.reduce_u64(x);
        let mut result = 0u64;
        for i in (0..=self.degree).rev() {
            result = coeff::add(coeff::mul(result, x, &self.modulus), self.coeffs[i], &self.modulus);
        }
        result
    }

    /// Formal derivative: `c'[i] = (i+1) * c[i+1] mod p`.
    pub fn derivative(&mut self) -> &mut Self {
        if self.degree == 0 {
            self.coeffs[0] = 0;
            return self;
        }
        for i in 0..self.degree {
            let factor = self.modulus.reduce_u64((i + 1) as u64);
            self.coeffs[i] = coeff::mul(self.coeffs[i + 1], factor, &self.modulus);
        }
        self.coeffs[self.degree] = 0;
        self.degree -= 1;
        self.fix_degree()
    }

    /// Scales so the leading coefficient becomes `1`. A no-op on the
    /// zero polynomial.
    ///
    /// # Errors
    /// Propagates [`PolyError::DivisionByZero`] from `lc()`'s inverse,
    /// which cannot actually occur since `lc() != 0` for any nonzero
    /// polynomial; kept fallible for symmetry with `primitive_part`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// // 2x + 4 mod 7, leading coefficient 2 -> scale by inverse of 2
    /// let mut p = DensePoly::from_coeffs(&[4, 2], Modulus::new(7));
    /// p.monic().unwrap();
    /// assert_eq!(p.lc(), 1);
    /// ```
    pub fn monic(&mut self) -> PolyResult<&mut Self> {
        if self.is_zero() {
            return Ok(self);
        }
        let inv_lc = coeff::inverse(self.lc(), &self.modulus)?;
        for i in 0..=self.degree {
            self.coeffs[i] = coeff::mul(self.coeffs[i], inv_lc, &self.modulus);
        }
        Ok(self)
    }
}

impl PartialEq for DensePoly {
    fn eq(&self, other: &Self) -> bool {
        self.modulus.p() == other.modulus.p()
            && self.degree == other.degree
            && self.coeffs() == other.coeffs()
    }
}

impl Eq for DensePoly {}

impl Hash for DensePoly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modulus.p().hash(state);
        self.degree.hash(state);
        self.coeffs().hash(state);
    }
}

impl PartialOrd for DensePoly {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic on `(degree, coefficients high-to-low)`. Assumes both
/// operands share a modulus, as with every other binary op here.
impl Ord for DensePoly {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.degree.cmp(&other.degree) {
            Ordering::Equal => {
                for i in (0..=self.degree).rev() {
                    match self.coeffs[i].cmp(&other.coeffs[i]) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}
