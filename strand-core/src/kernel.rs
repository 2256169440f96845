//! Contiguous inner-loop primitives shared by all three BLAS levels.
//!
//! The level 1/2/3 routines reduce their hot loops to these slice kernels
//! whenever the operands are unit-stride, and gather strided data into
//! contiguous scratch buffers otherwise. Reductions run four independent
//! accumulators so the compiler can keep several FMA chains in flight.

use crate::layout::Strided;
use crate::scalar::Scalar;
use std::borrow::Cow;

// ============================================================================
// Strided gather/scatter
// ============================================================================

/// Copy the `n` logical elements of a strided view into a contiguous buffer.
#[inline]
pub fn gather<T: Scalar>(x: &[T], n: usize, inc: isize) -> Vec<T> {
    let sx = Strided::new(n, inc);
    let mut buf = Vec::with_capacity(n);
    for i in 0..n {
        buf.push(x[sx.at(i)]);
    }
    buf
}

/// Write a contiguous buffer back into a strided view.
#[inline]
pub fn scatter<T: Scalar>(buf: &[T], dst: &mut [T], n: usize, inc: isize) {
    let sd = Strided::new(n, inc);
    for i in 0..n {
        dst[sd.at(i)] = buf[i];
    }
}

/// Borrow a unit-stride view as-is, or gather a strided one.
#[inline]
pub fn contiguous<T: Scalar>(x: &[T], n: usize, inc: isize) -> Cow<'_, [T]> {
    if inc == 1 {
        Cow::Borrowed(&x[..n])
    } else {
        Cow::Owned(gather(x, n, inc))
    }
}

/// Run `f` on a contiguous image of a mutable strided view, writing the
/// result back afterwards when a gather was needed.
#[inline]
pub fn with_contiguous<T: Scalar, R>(
    x: &mut [T],
    n: usize,
    inc: isize,
    f: impl FnOnce(&mut [T]) -> R,
) -> R {
    if inc == 1 {
        return f(&mut x[..n]);
    }
    let mut buf = gather(x, n, inc);
    let out = f(&mut buf);
    scatter(&buf, x, n, inc);
    out
}

/// Gather `len` elements starting at `start` with a non-negative element stride.
#[inline]
pub fn gather_run<T: Scalar>(a: &[T], start: usize, len: usize, stride: usize) -> Vec<T> {
    if stride == 1 {
        return a[start..start + len].to_vec();
    }
    let mut buf = Vec::with_capacity(len);
    for p in 0..len {
        buf.push(a[start + p * stride]);
    }
    buf
}

// ============================================================================
// Reductions
// ============================================================================

/// `sum(a[i] * b[i])` over two equal-length slices.
#[inline]
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let len = a.len().min(b.len());
    let chunks = len / 4;
    let (mut s0, mut s1, mut s2, mut s3) = (T::zero(), T::zero(), T::zero(), T::zero());
    for c in 0..chunks {
        let base = c * 4;
        s0 += a[base] * b[base];
        s1 += a[base + 1] * b[base + 1];
        s2 += a[base + 2] * b[base + 2];
        s3 += a[base + 3] * b[base + 3];
    }
    let mut sum = (s0 + s1) + (s2 + s3);
    for i in chunks * 4..len {
        sum += a[i] * b[i];
    }
    sum
}

/// `sum(conj(a[i]) * b[i])`.
#[inline]
pub fn dotc<T: Scalar>(a: &[T], b: &[T]) -> T {
    if !T::IS_COMPLEX {
        return dot(a, b);
    }
    debug_assert_eq!(a.len(), b.len());
    let mut sum = T::zero();
    for (&ai, &bi) in a.iter().zip(b) {
        sum += ai.conj() * bi;
    }
    sum
}

/// `sum(|re(x[i])| + |im(x[i])|)`.
#[inline]
pub fn asum<T: Scalar>(x: &[T]) -> T::Real {
    let mut sum = <T::Real as num_traits::Zero>::zero();
    for &xi in x {
        sum += xi.abs1();
    }
    sum
}

// ============================================================================
// Updates
// ============================================================================

/// `y += alpha * x`.
#[inline]
pub fn axpy<T: Scalar>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// `y += alpha * conj(x)`.
#[inline]
pub fn axpy_conj<T: Scalar>(alpha: T, x: &[T], y: &mut [T]) {
    if !T::IS_COMPLEX {
        return axpy(alpha, x, y);
    }
    debug_assert_eq!(x.len(), y.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi.conj();
    }
}

/// `x *= alpha`. `alpha == 0` stores zeros without reading `x`.
#[inline]
pub fn scal<T: Scalar>(alpha: T, x: &mut [T]) {
    if alpha == T::zero() {
        x.fill(T::zero());
        return;
    }
    for xi in x.iter_mut() {
        *xi *= alpha;
    }
}
