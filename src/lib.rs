//! Word-sized univariate polynomial arithmetic over `Z/pZ`
//!
//! This crate is the arithmetic substrate on which higher-level
//! polynomial algebra (GCD, factorization, Groebner bases, multivariate
//! rings, algebraic extensions) is built: a dense coefficient
//! representation for univariate polynomials over a finite prime field
//! whose modulus fits a single machine word, an in-place mutation
//! discipline, a fast modular-reduction layer, and the classical and
//! Karatsuba multiplication kernels every downstream algorithm amortizes
//! onto.
//!
//! High-level factorization drivers, Groebner bases, multivariate
//! polynomials, algebraic extensions, and arbitrary-precision coefficient
//! variants are out of scope here; this crate specializes a single
//! coefficient kind (`u64` residues mod a runtime prime `p < 2^63`).

pub mod coeff;
pub mod error;
pub mod modular;
pub mod poly;

pub use error::{PolyError, PolyResult};
pub use modular::{Magic, Modulus};
pub use poly::mul_kernel::{KernelConfig, Scratch};
pub use poly::DensePoly;
