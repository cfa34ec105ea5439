//! Error types for the Z/pZ polynomial engine
//!
//! Mirrors the shape of `FiniteFieldError`/`FiniteFieldResult` from the
//! finite-field module this crate is derived from: a single C-like enum
//! with struct-style payload variants, a hand-rolled `Display` impl (no
//! `thiserror`), and a crate-wide result alias.

use std::fmt;

/// Errors surfaced by the Z/pZ polynomial engine.
///
/// Every public operation either succeeds and returns a value satisfying
/// the degree invariant (I1) and, for modular values, the residue
/// invariant (I2), or fails fast with one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolyError {
    /// A caller-supplied argument violates a documented precondition:
    /// a negative exponent to a polynomial `pow`, a negative degree to
    /// `truncate` or `monomial`, or a zero modulus.
    PreconditionViolation {
        operation: &'static str,
        reason: String,
    },

    /// Division by zero: inverting the zero element, or dividing a
    /// polynomial by the zero polynomial.
    DivisionByZero { operation: &'static str },

    /// The unsafe (reduce-at-end) multiplication accumulator overflowed.
    ///
    /// `MulKernel` picks the safe-reduction path whenever the modulus is
    /// too large for the unsafe path to apply (see
    /// [`crate::modular::Modulus::unsafe_accumulation_limit`]), so this
    /// variant should never be observed in practice; its presence here
    /// documents that invariant rather than a reachable user error.
    Overflow { operation: &'static str },

    /// The textual grammar of §6 rejected the input.
    ParseError { reason: String },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::PreconditionViolation { operation, reason } => {
                write!(f, "{operation}: precondition violated: {reason}")
            }
            PolyError::DivisionByZero { operation } => {
                write!(f, "{operation}: division by zero")
            }
            PolyError::Overflow { operation } => {
                write!(f, "{operation}: accumulator overflow")
            }
            PolyError::ParseError { reason } => {
                write!(f, "parse error: {reason}")
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Result type for fallible polynomial-engine operations.
pub type PolyResult<T> = Result<T, PolyError>;
