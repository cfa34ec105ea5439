//! Classical and Karatsuba multiplication (`MulKernel`).
//!
//! Operates on raw coefficient slices (`&[u64]`, low-degree first, no
//! trailing-zero assumptions beyond what the caller passed in) rather
//! than on `DensePoly` directly, so it can be unit-tested and
//! benchmarked independent of the degree-invariant bookkeeping that
//! lives on `DensePoly`/`ops` — mirroring the teacher's split between
//! `poly.rs` (shape) and `poly/arithmetic.rs` (the actual number
//! crunching).
//!
//! Every public entry point here returns coefficients already reduced
//! mod `p`; the caller (`ops`) is responsible for wrapping the result
//! back into a `DensePoly` and calling `fix_degree()`.

use crate::coeff;
use crate::modular::Modulus;

/// Threshold policy for classical-vs-Karatsuba dispatch.
///
/// The crossover point depends on whether the unsafe (reduce-at-end)
/// accumulation path applies: when it does, the per-multiplication cost
/// is lower, so the classical algorithm remains competitive to a larger
/// `n*m`; when it doesn't (large modulus, `u128` accumulator required),
/// Karatsuba's reduced multiply count wins earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelConfig {
    /// `n*m` threshold below which classical multiply is used when the
    /// unsafe accumulation path is available.
    pub unsafe_threshold: usize,
    /// `n*m` threshold below which classical multiply is used when the
    /// safe (`u128`-accumulator) path must be used instead.
    pub safe_threshold: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            unsafe_threshold: 256 * 256,
            safe_threshold: 128 * 128,
        }
    }
}

/// A pool of recyclable coefficient buffers, so repeated multiplications
/// in a hot loop (e.g. a GCD driver built atop this crate) don't
/// re-allocate every Karatsuba recursion's temporaries from scratch.
#[derive(Debug, Default)]
pub struct Scratch {
    pool: Vec<Vec<u64>>,
}

impl Scratch {
    pub fn new() -> Self {
        Self { pool: Vec::new() }
    }

    fn take(&mut self, len: usize) -> Vec<u64> {
        match self.pool.pop() {
            Some(mut buf) => {
                buf.clear();
                buf.resize(len, 0);
                buf
            }
            None => vec![0u64; len],
        }
    }

    fn recycle(&mut self, buf: Vec<u64>) {
        self.pool.push(buf);
    }
}

/// `a * b`, dispatching between classical and Karatsuba multiplication
/// via the default [`KernelConfig`].
pub fn multiply(a: &[u64], b: &[u64], modulus: &Modulus) -> Vec<u64> {
    multiply_with_config(a, b, modulus, &KernelConfig::default())
}

pub fn multiply_with_config(a: &[u64], b: &[u64], modulus: &Modulus, config: &KernelConfig) -> Vec<u64> {
    let mut scratch = Scratch::new();
    multiply_scratch(a, b, modulus, config, &mut scratch)
}

/// As [`multiply_with_config`], reusing `scratch`'s buffer pool across
/// the recursion (and across repeated top-level calls, if the caller
/// keeps the same `Scratch` alive).
pub fn multiply_scratch(
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &KernelConfig,
    scratch: &mut Scratch,
) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }
    karatsuba_multiply(a, b, modulus, config, scratch)
}

/// `a * a`, dispatching between classical and Karatsuba squaring.
pub fn square(a: &[u64], modulus: &Modulus) -> Vec<u64> {
    square_with_config(a, modulus, &KernelConfig::default())
}

pub fn square_with_config(a: &[u64], modulus: &Modulus, config: &KernelConfig) -> Vec<u64> {
    let mut scratch = Scratch::new();
    square_scratch(a, modulus, config, &mut scratch)
}

pub fn square_scratch(a: &[u64], modulus: &Modulus, config: &KernelConfig, scratch: &mut Scratch) -> Vec<u64> {
    if a.is_empty() {
        return vec![0];
    }
    karatsuba_square(a, modulus, config, scratch)
}

fn should_use_classical(n: usize, m: usize, modulus: &Modulus, config: &KernelConfig) -> bool {
    let product = n as u128 * m as u128;
    let threshold = if (n.min(m) as u64) <= modulus.unsafe_accumulation_limit() {
        config.unsafe_threshold
    } else {
        config.safe_threshold
    } as u128;
    product < threshold
}

/// Classical O(n*m) multiplication. Picks the reduce-at-end `u64`
/// accumulator when `min(n, m) <= modulus.unsafe_accumulation_limit()`
/// (every position sums at most that many raw, unreduced products
/// without overflowing a 64-bit accumulator); otherwise accumulates in
/// `u128`, which cannot overflow for any operand length this crate's
/// scope covers (see `DESIGN.md`).
pub fn classical_multiply(a: &[u64], b: &[u64], modulus: &Modulus) -> Vec<u64> {
    let (n, m) = (a.len(), b.len());
    let result_len = n + m - 1;
    if (n.min(m) as u64) <= modulus.unsafe_accumulation_limit() {
        let mut acc = vec![0u64; result_len];
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                acc[i + j] += ai * bj;
            }
        }
        acc.iter_mut().for_each(|c| *c = modulus.reduce_u64(*c));
        acc
    } else {
        let mut acc = vec![0u128; result_len];
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                acc[i + j] += ai as u128 * bj as u128;
            }
        }
        acc.into_iter().map(|x| modulus.reduce_u128(x)).collect()
    }
}

/// Classical O(n^2) squaring: diagonal terms `a[i]^2`, off-diagonal
/// terms doubled (`2 * a[i] * a[j]`). Uses the same `n <=
/// unsafe_accumulation_limit()` test as [`classical_multiply`]; this is
/// slightly conservative (doubled off-diagonal terms can't actually
/// reach the same worst case as `n` independent classical terms) but
/// never unsound, and keeps the safety check uniform across both
/// kernels.
pub fn classical_square(a: &[u64], modulus: &Modulus) -> Vec<u64> {
    let n = a.len();
    let result_len = 2 * n - 1;
    if (n as u64) <= modulus.unsafe_accumulation_limit() {
        let mut acc = vec![0u64; result_len];
        for i in 0..n {
            if a[i] == 0 {
                continue;
            }
            acc[2 * i] += a[i] * a[i];
            for j in (i + 1)..n {
                if a[j] == 0 {
                    continue;
                }
                acc[i + j] += 2 * (a[i] * a[j]);
            }
        }
        acc.iter_mut().for_each(|c| *c = modulus.reduce_u64(*c));
        acc
    } else {
        let mut acc = vec![0u128; result_len];
        for i in 0..n {
            if a[i] == 0 {
                continue;
            }
            acc[2 * i] += a[i] as u128 * a[i] as u128;
            for j in (i + 1)..n {
                if a[j] == 0 {
                    continue;
                }
                acc[i + j] += 2 * (a[i] as u128 * a[j] as u128);
            }
        }
        acc.into_iter().map(|x| modulus.reduce_u128(x)).collect()
    }
}

/// Recursive Karatsuba multiplication, falling back to
/// [`classical_multiply`] below threshold.
fn karatsuba_multiply(
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &KernelConfig,
    scratch: &mut Scratch,
) -> Vec<u64> {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let (n, m) = (a.len(), b.len());
    if should_use_classical(n, m, modulus, config) {
        return classical_multiply(a, b, modulus);
    }
    let split = n.div_ceil(2);

    if m <= split {
        // b is entirely within the low half's degree range: degenerate
        // into two recursive multiplies instead of three.
        let a0 = &a[..split];
        let a1 = &a[split..];
        let p0 = karatsuba_multiply(a0, b, modulus, config, scratch);
        let p1 = karatsuba_multiply(a1, b, modulus, config, scratch);
        let mut result = scratch.take(n + m - 1);
        accumulate_shifted(&mut result, &p0, 0, modulus);
        accumulate_shifted(&mut result, &p1, split, modulus);
        scratch.recycle(p0);
        scratch.recycle(p1);
        return result;
    }

    let a0 = &a[..split];
    let a1 = &a[split..];
    let b0 = &b[..split];
    let b1 = &b[split..];

    let f0g0 = karatsuba_multiply(a0, b0, modulus, config, scratch);
    let f1g1 = karatsuba_multiply(a1, b1, modulus, config, scratch);
    let a_sum = poly_add_raw(a0, a1, modulus);
    let b_sum = poly_add_raw(b0, b1, modulus);
    let mut mid = karatsuba_multiply(&a_sum, &b_sum, modulus, config, scratch);
    subtract_raw_into(&mut mid, &f0g0, modulus);
    subtract_raw_into(&mut mid, &f1g1, modulus);

    let mut result = scratch.take(n + m - 1);
    accumulate_shifted(&mut result, &f0g0, 0, modulus);
    accumulate_shifted(&mut result, &mid, split, modulus);
    accumulate_shifted(&mut result, &f1g1, 2 * split, modulus);
    scratch.recycle(f0g0);
    scratch.recycle(f1g1);
    scratch.recycle(mid);
    take_owned(result)
}

/// Recursive Karatsuba squaring: `f = f0 + f1*x^split`, so
/// `f^2 = f0^2 + 2*f0*f1*x^split + f1^2*x^(2*split)`. The middle term
/// is recovered from `(f0+f1)^2 - f0^2 - f1^2` (one extra recursive
/// *square* instead of a cross multiply), per spec.
fn karatsuba_square(a: &[u64], modulus: &Modulus, config: &KernelConfig, scratch: &mut Scratch) -> Vec<u64> {
    let n = a.len();
    let threshold_hit = {
        let product = n as u128 * n as u128;
        let threshold = if (n as u64) <= modulus.unsafe_accumulation_limit() {
            config.unsafe_threshold
        } else {
            config.safe_threshold
        } as u128;
        product < threshold
    };
    if threshold_hit {
        return classical_square(a, modulus);
    }
    let split = n.div_ceil(2);
    let a0 = &a[..split];
    let a1 = &a[split..];

    let f0_sq = karatsuba_square(a0, modulus, config, scratch);
    let f1_sq = karatsuba_square(a1, modulus, config, scratch);
    let a_sum = poly_add_raw(a0, a1, modulus);
    let mut mid = karatsuba_square(&a_sum, modulus, config, scratch);
    subtract_raw_into(&mut mid, &f0_sq, modulus);
    subtract_raw_into(&mut mid, &f1_sq, modulus);

    let mut result = scratch.take(2 * n - 1);
    accumulate_shifted(&mut result, &f0_sq, 0, modulus);
    accumulate_shifted(&mut result, &mid, split, modulus);
    accumulate_shifted(&mut result, &f1_sq, 2 * split, modulus);
    scratch.recycle(f0_sq);
    scratch.recycle(f1_sq);
    scratch.recycle(mid);
    take_owned(result)
}

/// `target[shift + i] += piece[i]` for each `i`, mod `p`.
fn accumulate_shifted(target: &mut [u64], piece: &[u64], shift: usize, modulus: &Modulus) {
    for (i, &c) in piece.iter().enumerate() {
        target[shift + i] = coeff::add(target[shift + i], c, modulus);
    }
}

/// `a[0..] - b[0..]`, elementwise mod `p`, with missing slots in either
/// slice treated as zero. Grows `a` in place if `b` is longer.
fn subtract_raw_into(a: &mut Vec<u64>, b: &[u64], modulus: &Modulus) {
    if b.len() > a.len() {
        a.resize(b.len(), 0);
    }
    for (i, &c) in b.iter().enumerate() {
        a[i] = coeff::sub(a[i], c, modulus);
    }
}

/// `a + b`, padding the shorter slice with zeros, mod `p`.
fn poly_add_raw(a: &[u64], b: &[u64], modulus: &Modulus) -> Vec<u64> {
    let len = a.len().max(b.len());
    let mut result = vec![0u64; len];
    for (i, r) in result.iter_mut().enumerate() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        *r = coeff::add(x, y, modulus);
    }
    result
}

/// Takes ownership of a scratch-pooled buffer as the function's return
/// value (it is not recycled: callers further up the recursion own it
/// from here, typically recycling it themselves after consuming it).
fn take_owned(buf: Vec<u64>) -> Vec<u64> {
    buf
}
