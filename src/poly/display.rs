//! Textual form for `DensePoly` (spec §6).
//!
//! The printer emits the canonical `"c0+c1x^1+c2x^2+…"` form, skipping
//! zero terms (and collapsing to `"0"` for the zero polynomial); the
//! parser is a small hand-rolled recursive-descent reader for the
//! grammar `term (('+'|'-') term)*` where
//! `term = coef | coef '*' var ('^' exp)? | var ('^' exp)?`, whitespace
//! ignored. This is a debugging/test-fixture aid, not a general
//! math-expression front end (that belongs to an out-of-scope DSL
//! layer — see spec §1's non-goals).
//!
//! `DensePoly::parse` takes the modulus as an explicit argument rather
//! than going through `std::str::FromStr`: the textual grammar never
//! encodes `p`, so there is no way to recover a `Modulus` from the
//! string alone, and `FromStr::from_str` has no slot for out-of-band
//! context. See `DESIGN.md` for the full rationale.

use std::fmt;

use crate::coeff;
use crate::error::{PolyError, PolyResult};
use crate::modular::Modulus;
use crate::poly::DensePoly;

impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for i in 0..=self.degree {
            let c = self.coeffs[i];
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;
            if i == 0 {
                write!(f, "{c}")?;
            } else {
                write!(f, "{c}x^{i}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DensePoly({:?}, mod {})", self.coeffs(), self.modulus.p())
    }
}

impl DensePoly {
    /// Parses the canonical textual grammar of spec §6 against a known
    /// modulus.
    ///
    /// # Errors
    /// [`PolyError::ParseError`] on any input that doesn't match
    /// `term (('+'|'-') term)*`.
    pub fn parse(s: &str, modulus: Modulus) -> PolyResult<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            return Err(PolyError::ParseError {
                reason: "empty input".into(),
            });
        }

        let mut poly = DensePoly::zero(modulus);
        let mut i = 0;
        let mut first_term = true;

        while i < chars.len() {
            let mut sign = 1i64;
            match chars[i] {
                '+' => i += 1,
                '-' => {
                    sign = -1;
                    i += 1;
                }
                _ if first_term => {}
                _ => {
                    return Err(PolyError::ParseError {
                        reason: format!("expected '+' or '-' at position {i}"),
                    })
                }
            }
            first_term = false;

            let coef_start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let has_coef_digits = i > coef_start;
            let mut coef: i64 = if has_coef_digits {
                let digits: String = chars[coef_start..i].iter().collect();
                digits.parse().map_err(|_| PolyError::ParseError {
                    reason: format!("invalid coefficient digits at position {coef_start}"),
                })?
            } else {
                1
            };

            if i < chars.len() && chars[i] == '*' {
                i += 1;
            }

            let mut exponent: usize = 0;
            if i < chars.len() && chars[i] == 'x' {
                i += 1;
                exponent = 1;
                if i < chars.len() && chars[i] == '^' {
                    i += 1;
                    let exp_start = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    if i == exp_start {
                        return Err(PolyError::ParseError {
                            reason: format!("expected exponent digits at position {exp_start}"),
                        });
                    }
                    let digits: String = chars[exp_start..i].iter().collect();
                    exponent = digits.parse().map_err(|_| PolyError::ParseError {
                        reason: format!("invalid exponent digits at position {exp_start}"),
                    })?;
                }
            } else if !has_coef_digits {
                return Err(PolyError::ParseError {
                    reason: format!("term at position {coef_start} has neither coefficient nor variable"),
                });
            }

            coef *= sign;
            let residue = coeff::normalize(coef, &modulus);
            let term = DensePoly::monomial(residue, exponent, modulus);
            poly.add(&term);
        }

        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modular::Modulus;

    fn m17() -> Modulus {
        Modulus::new(17)
    }

    #[test]
    fn display_zero_is_literal_zero() {
        let p = DensePoly::zero(m17());
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn display_skips_zero_terms() {
        let p = DensePoly::from_coeffs(&[3, 0, 5], m17());
        assert_eq!(p.to_string(), "3+5x^2");
    }

    #[test]
    fn display_emits_explicit_caret_one() {
        let p = DensePoly::from_coeffs(&[0, 1], m17());
        assert_eq!(p.to_string(), "1x^1");
    }

    #[test]
    fn parse_round_trips_through_display() {
        let m = m17();
        let p = DensePoly::from_coeffs(&[3, 2, 1], m);
        let text = p.to_string();
        let parsed = DensePoly::parse(&text, m).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn parse_handles_leading_minus_and_whitespace() {
        let m = m17();
        let parsed = DensePoly::parse(" -1 + 2*x^1 - x^3 ", m).unwrap();
        let expected = DensePoly::from_signed_coeffs(&[-1, 2, 0, -1], m);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_accepts_bare_variable_without_coefficient() {
        let m = m17();
        let parsed = DensePoly::parse("x^2", m).unwrap();
        assert_eq!(parsed, DensePoly::monomial(1, 2, m));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let m = m17();
        assert!(matches!(
            DensePoly::parse("", m),
            Err(PolyError::ParseError { .. })
        ));
        assert!(matches!(
            DensePoly::parse("x^", m),
            Err(PolyError::ParseError { .. })
        ));
        assert!(matches!(
            DensePoly::parse("x^abc", m),
            Err(PolyError::ParseError { .. })
        ));
    }

    #[test]
    fn parse_empty_term_between_operators_is_an_error() {
        let m = m17();
        assert!(matches!(
            DensePoly::parse("1++2", m),
            Err(PolyError::ParseError { .. })
        ));
    }
}
