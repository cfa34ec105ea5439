//! Mutating arithmetic over `DensePoly` (`PolyOps`).
//!
//! Every operation here follows the crate's mutation-in-place discipline
//! (§3 of the spec): it consumes `&mut self`, updates the coefficient
//! buffer and degree of `self`, and returns `&mut Self` so calls chain.
//! The actual multiply/square inner loops live in [`super::mul_kernel`];
//! this module is the glue that feeds `mul_kernel` the raw coefficient
//! slices and folds the result back into a `DensePoly`, the way the
//! teacher's `poly/arithmetic.rs` sits directly on top of its own
//! convolution loop.

use crate::coeff;
use crate::error::{PolyError, PolyResult};
use crate::poly::mul_kernel;
use crate::poly::DensePoly;

impl DensePoly {
    /// `self += other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// let m = Modulus::new(7);
    /// let mut a = DensePoly::from_coeffs(&[1, 2], m);
    /// let b = DensePoly::from_coeffs(&[3, 4], m);
    /// a.add(&b);
    /// assert_eq!(a.coeffs(), &[4, 6]);
    /// ```
    pub fn add(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.modulus.p(), other.modulus.p(), "modulus mismatch");
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.coeffs[i] = coeff::add(self.coeffs[i], other.coeffs[i], &self.modulus);
        }
        self.fix_degree()
    }

    /// `self -= other`.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.modulus.p(), other.modulus.p(), "modulus mismatch");
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.coeffs[i] = coeff::sub(self.coeffs[i], other.coeffs[i], &self.modulus);
        }
        self.fix_degree()
    }

    /// `self -= factor * x^exponent * other`, the pseudo-division
    /// reduction step: subtract a scaled, shifted copy of `other` without
    /// materializing it.
    pub fn subtract_scaled(&mut self, other: &Self, factor: u64, exponent: usize) -> &mut Self {
        debug_assert_eq!(self.modulus.p(), other.modulus.p(), "modulus mismatch");
        if factor == 0 || other.is_zero() {
            return self;
        }
        let top = other.degree + exponent;
        self.ensure_capacity(top);
        for i in 0..=other.degree {
            let term = coeff::mul(other.coeffs[i], factor, &self.modulus);
            let idx = i + exponent;
            self.coeffs[idx] = coeff::sub(self.coeffs[idx], term, &self.modulus);
        }
        self.fix_degree()
    }

    /// `self += factor * other`.
    pub fn add_mul(&mut self, other: &Self, factor: u64) -> &mut Self {
        debug_assert_eq!(self.modulus.p(), other.modulus.p(), "modulus mismatch");
        if factor == 0 || other.is_zero() {
            return self;
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            let term = coeff::mul(other.coeffs[i], factor, &self.modulus);
            self.coeffs[i] = coeff::add(self.coeffs[i], term, &self.modulus);
        }
        self.fix_degree()
    }

    /// `self *= other`, dispatched through [`mul_kernel`] (classical or
    /// Karatsuba, chosen by degree).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// let m = Modulus::new(7);
    /// let mut a = DensePoly::from_coeffs(&[1, 1], m); // x + 1
    /// let b = DensePoly::from_coeffs(&[1, 1], m);     // x + 1
    /// a.multiply(&b);                                 // x^2 + 2x + 1
    /// assert_eq!(a.coeffs(), &[1, 2, 1]);
    /// ```
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.modulus.p(), other.modulus.p(), "modulus mismatch");
        if self.is_zero() || other.is_zero() {
            self.set_zero();
            return self;
        }
        let product = mul_kernel::multiply(self.coeffs(), other.coeffs(), &self.modulus);
        self.install(product)
    }

    /// `self *= scalar`.
    pub fn multiply_scalar(&mut self, scalar: u64) -> &mut Self {
        let scalar = self.modulus.reduce_u64(scalar);
        if scalar == 0 {
            self.set_zero();
            return self;
        }
        for i in 0..=self.degree {
            self.coeffs[i] = coeff::mul(self.coeffs[i], scalar, &self.modulus);
        }
        self.fix_degree()
    }

    /// `self *= self`, dispatched through [`mul_kernel::square`].
    pub fn square(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        let squared = mul_kernel::square(self.coeffs(), &self.modulus);
        self.install(squared)
    }

    /// `self = self^k` by square-and-multiply.
    ///
    /// # Errors
    /// [`PolyError::PreconditionViolation`] if `k < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zpoly::{DensePoly, Modulus};
    ///
    /// let m = Modulus::new(7);
    /// let mut a = DensePoly::from_coeffs(&[1, 1], m); // x + 1
    /// a.pow(2).unwrap();                              // x^2 + 2x + 1
    /// assert_eq!(a.coeffs(), &[1, 2, 1]);
    /// ```
    pub fn pow(&mut self, k: i64) -> PolyResult<&mut Self> {
        if k < 0 {
            return Err(PolyError::PreconditionViolation {
                operation: "DensePoly::pow",
                reason: "exponent must be non-negative".into(),
            });
        }
        if k == 0 {
            let one = DensePoly::one(self.modulus);
            self.coeffs = one.coeffs;
            self.degree = one.degree;
            return Ok(self);
        }
        if k == 1 {
            return Ok(self);
        }
        let mut exp = k as u64;
        let mut base = self.clone();
        let mut acc = DensePoly::one(self.modulus);
        while exp > 0 {
            if exp & 1 == 1 {
                acc.multiply(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base.square();
            }
        }
        self.coeffs = acc.coeffs;
        self.degree = acc.degree;
        Ok(self)
    }

    /// `self = -self`: `p - c` for every nonzero coefficient, `0` stays `0`.
    pub fn negate(&mut self) -> &mut Self {
        for i in 0..=self.degree {
            self.coeffs[i] = coeff::neg(self.coeffs[i], &self.modulus);
        }
        self
    }

    /// Replaces the coefficient buffer with a freshly computed
    /// (already-normalized) result from `mul_kernel`, re-deriving `degree`
    /// from its length and restoring I1 via `fix_degree`.
    fn install(&mut self, coeffs: Vec<u64>) -> &mut Self {
        self.degree = coeffs.len() - 1;
        self.coeffs = coeffs;
        self.fix_degree()
    }
}
