//! BLAS Level 1: Vector-vector operations.
//!
//! Every routine is generic over [`Scalar`] and covers the `s`/`d`/`c`/`z`
//! variants at once. Vectors are passed as `(n, x, incx)`; a negative
//! increment walks the buffer from its end, so `x[0]` always holds the
//! last logical element in that case.
//!
//! Unit-stride calls go straight to the contiguous `strand_core::kernel`
//! primitives; strided calls either gather into a scratch buffer (for
//! reductions that benefit from the contiguous kernel) or index through
//! [`Strided`] directly.

use num_traits::{Float, One, Zero};
use strand_core::kernel;
use strand_core::layout::Strided;
use strand_core::{RealScalar, Scalar};

// ============================================================================
// DOT: inner products
// ============================================================================

/// Unconjugated dot product: `sum(x[i] * y[i])`.
///
/// `sdot`/`ddot` for real types, `cdotu`/`zdotu` for complex.
#[inline]
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    if n == 0 {
        return T::zero();
    }
    if incx == 1 && incy == 1 {
        kernel::dot(&x[..n], &y[..n])
    } else {
        let x_buf = kernel::gather(x, n, incx);
        let y_buf = kernel::gather(y, n, incy);
        kernel::dot(&x_buf, &y_buf)
    }
}

/// Conjugated dot product: `sum(conj(x[i]) * y[i])` (`cdotc`/`zdotc`).
#[inline]
pub fn dotc<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    if n == 0 {
        return T::zero();
    }
    if incx == 1 && incy == 1 {
        kernel::dotc(&x[..n], &y[..n])
    } else {
        let x_buf = kernel::gather(x, n, incx);
        let y_buf = kernel::gather(y, n, incy);
        kernel::dotc(&x_buf, &y_buf)
    }
}

/// `alpha + sum(x[i] * y[i])`, accumulated in double precision and
/// rounded to single precision once at the end.
pub fn sdsdot(n: usize, alpha: f32, x: &[f32], incx: isize, y: &[f32], incy: isize) -> f32 {
    (alpha as f64 + dsdot(n, x, incx, y, incy)) as f32
}

/// Single-precision inputs, double-precision accumulation and result.
pub fn dsdot(n: usize, x: &[f32], incx: isize, y: &[f32], incy: isize) -> f64 {
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    let mut sum = 0.0f64;
    for i in 0..n {
        sum += x[sx.at(i)].widen() * y[sy.at(i)].widen();
    }
    sum
}

// ============================================================================
// NRM2: Euclidean norm
// ============================================================================

/// Euclidean norm `sqrt(sum |x[i]|^2)`.
///
/// Keeps a running scale (the largest magnitude seen so far) and a sum of
/// squares relative to it, so neither overflow nor underflow occurs for
/// elements near the ends of the floating-point range. Complex elements
/// contribute their real and imaginary parts as two independent terms.
///
/// Any infinite component makes the norm `+inf`; a NaN component makes it NaN.
pub fn nrm2<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    let zero = T::Real::zero();
    let one = T::Real::one();
    if n == 0 {
        return zero;
    }
    let sx = Strided::new(n, incx);
    let mut scale = zero;
    let mut ssq = one;
    let mut saw_inf = false;
    let mut accumulate = |v: T::Real| {
        if v.is_infinite() {
            saw_inf = true;
        } else if v != zero {
            let a = v.abs();
            if scale < a {
                let r = scale / a;
                ssq = one + ssq * r * r;
                scale = a;
            } else {
                let r = a / scale;
                ssq += r * r;
            }
        }
    };
    for i in 0..n {
        let xi = x[sx.at(i)];
        accumulate(xi.re());
        if T::IS_COMPLEX {
            accumulate(xi.im());
        }
    }
    let norm = scale * ssq.sqrt();
    if saw_inf && !norm.is_nan() {
        T::Real::infinity()
    } else {
        norm
    }
}

// ============================================================================
// ASUM: sum of magnitudes
// ============================================================================

/// `sum(|re(x[i])| + |im(x[i])|)`.
///
/// For complex vectors this is deliberately not the sum of moduli; it is
/// the `scasum`/`dzasum` definition and callers rely on it.
#[inline]
pub fn asum<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    if n == 0 {
        return T::Real::zero();
    }
    if incx == 1 {
        kernel::asum(&x[..n])
    } else {
        let sx = Strided::new(n, incx);
        let mut sum = T::Real::zero();
        for i in 0..n {
            sum += x[sx.at(i)].abs1();
        }
        sum
    }
}

// ============================================================================
// IAMAX: index of max magnitude
// ============================================================================

/// Logical index of the first element with the largest `|re| + |im|`.
///
/// Returns `None` for an empty vector. Ties resolve to the earliest index.
pub fn iamax<T: Scalar>(n: usize, x: &[T], incx: isize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let sx = Strided::new(n, incx);
    let mut max_idx = 0;
    let mut max_val = x[sx.at(0)].abs1();
    for i in 1..n {
        let v = x[sx.at(i)].abs1();
        if v > max_val {
            max_val = v;
            max_idx = i;
        }
    }
    Some(max_idx)
}

// ============================================================================
// COPY / SWAP
// ============================================================================

/// `y := x`.
#[inline]
pub fn copy<T: Scalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    if n == 0 {
        return;
    }
    if incx == 1 && incy == 1 {
        y[..n].copy_from_slice(&x[..n]);
    } else {
        let sx = Strided::new(n, incx);
        let sy = Strided::new(n, incy);
        for i in 0..n {
            y[sy.at(i)] = x[sx.at(i)];
        }
    }
}

/// `x <-> y`.
#[inline]
pub fn swap<T: Scalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) {
    if n == 0 {
        return;
    }
    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
    } else {
        let sx = Strided::new(n, incx);
        let sy = Strided::new(n, incy);
        for i in 0..n {
            std::mem::swap(&mut x[sx.at(i)], &mut y[sy.at(i)]);
        }
    }
}

// ============================================================================
// AXPY / SCAL
// ============================================================================

/// `y := alpha * x + y`. Does not read `x` when `alpha == 0`.
#[inline]
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    if n == 0 || alpha == T::zero() {
        return;
    }
    if incx == 1 && incy == 1 {
        kernel::axpy(alpha, &x[..n], &mut y[..n]);
    } else {
        let sx = Strided::new(n, incx);
        let sy = Strided::new(n, incy);
        for i in 0..n {
            y[sy.at(i)] += alpha * x[sx.at(i)];
        }
    }
}

/// `x := alpha * x`.
#[inline]
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) {
    if n == 0 {
        return;
    }
    if incx == 1 {
        kernel::scal(alpha, &mut x[..n]);
    } else {
        let sx = Strided::new(n, incx);
        if alpha == T::zero() {
            for i in 0..n {
                x[sx.at(i)] = T::zero();
            }
        } else {
            for i in 0..n {
                x[sx.at(i)] *= alpha;
            }
        }
    }
}

/// `x := alpha * x` with a real factor (`csscal`/`zdscal`).
///
/// Real and imaginary parts are scaled independently; the element type is
/// unchanged.
#[inline]
pub fn rscal<T: Scalar>(n: usize, alpha: T::Real, x: &mut [T], incx: isize) {
    let sx = Strided::new(n, incx);
    for i in 0..n {
        let idx = sx.at(i);
        x[idx] = x[idx].scale_real(alpha);
    }
}

// ============================================================================
// ROT / ROTG: Givens plane rotations
// ============================================================================

/// Apply a plane rotation: `(x, y) := (c*x + s*y, c*y - s*x)`.
pub fn rot<T: RealScalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize, c: T, s: T) {
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for i in 0..n {
        let (ix, iy) = (sx.at(i), sy.at(i));
        let (xi, yi) = (x[ix], y[iy]);
        x[ix] = c * xi + s * yi;
        y[iy] = c * yi - s * xi;
    }
}

/// Output of [`rotg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens<T> {
    /// Cosine of the rotation.
    pub c: T,
    /// Sine of the rotation.
    pub s: T,
    /// The rotated first component; the second becomes zero.
    pub r: T,
    /// Reconstruction value: `s` if `|a| > |b|`, `1/c` if `c != 0`, else `1`.
    pub z: T,
}

/// Construct the rotation that maps `(a, b)` to `(r, 0)`.
///
/// `r` carries the sign of whichever input has the larger magnitude. Both
/// inputs zero give the identity rotation `c = 1, s = 0` with `r = z = 0`.
pub fn rotg<T: RealScalar>(a: T, b: T) -> Givens<T> {
    let zero = T::zero();
    let one = T::one();
    let roe = if a.abs() > b.abs() { a } else { b };
    let scale = a.abs() + b.abs();
    if scale == zero {
        return Givens {
            c: one,
            s: zero,
            r: zero,
            z: zero,
        };
    }
    let (sa, sb) = (a / scale, b / scale);
    let mut r = scale * (sa * sa + sb * sb).sqrt();
    if roe < zero {
        r = -r;
    }
    let c = a / r;
    let s = b / r;
    let z = if a.abs() > b.abs() {
        s
    } else if c != zero {
        one / c
    } else {
        one
    };
    Givens { c, s, r, z }
}

// ============================================================================
// ROTM / ROTMG: modified (square-root free) Givens rotations
// ============================================================================

/// Which form the modified rotation matrix `H` takes.
///
/// Each variant corresponds to one `flag` value of the classic 5-element
/// parameter block (`-2`, `-1`, `0`, `1` in declaration order); the
/// conversion is [`RotmFlag::value`] / [`RotmFlag::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotmFlag {
    /// `H = I`; applying the rotation is a no-op.
    Identity,
    /// Full matrix `[[h11, h12], [h21, h22]]`.
    Rescaling,
    /// `[[1, h12], [h21, 1]]`.
    OffDiagonal,
    /// `[[h11, 1], [-1, h22]]`.
    Diagonal,
}

impl RotmFlag {
    /// The flag as stored in element 0 of the parameter block.
    pub fn value<T: RealScalar>(self) -> T {
        let v = match self {
            RotmFlag::Identity => -2.0,
            RotmFlag::Rescaling => -1.0,
            RotmFlag::OffDiagonal => 0.0,
            RotmFlag::Diagonal => 1.0,
        };
        T::narrow(v)
    }

    /// Decode a stored flag; anything other than the four defined values is `None`.
    pub fn from_value<T: RealScalar>(v: T) -> Option<Self> {
        match v.widen() {
            f if f == -2.0 => Some(RotmFlag::Identity),
            f if f == -1.0 => Some(RotmFlag::Rescaling),
            f if f == 0.0 => Some(RotmFlag::OffDiagonal),
            f if f == 1.0 => Some(RotmFlag::Diagonal),
            _ => None,
        }
    }
}

/// Parameters of a modified Givens rotation.
///
/// `h` holds `[h11, h21, h12, h22]` (column-major). Entries implied by the
/// flag are not meaningful and not read by [`rotm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotmParams<T> {
    pub flag: RotmFlag,
    pub h: [T; 4],
}

impl<T: RealScalar> RotmParams<T> {
    pub fn identity() -> Self {
        Self {
            flag: RotmFlag::Identity,
            h: [T::zero(); 4],
        }
    }

    /// Encode as `[flag, h11, h21, h12, h22]`.
    pub fn to_array(&self) -> [T; 5] {
        [self.flag.value(), self.h[0], self.h[1], self.h[2], self.h[3]]
    }

    /// Decode `[flag, h11, h21, h12, h22]`.
    pub fn from_array(p: [T; 5]) -> Option<Self> {
        RotmFlag::from_value(p[0]).map(|flag| Self {
            flag,
            h: [p[1], p[2], p[3], p[4]],
        })
    }
}

/// Output of [`rotmg`]: the rotation plus the updated scaling factors and
/// rotated first component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotmg<T> {
    pub params: RotmParams<T>,
    pub d1: T,
    pub d2: T,
    pub x1: T,
}

/// Construct the modified rotation that zeroes the second component of
/// `(sqrt(d1)*x1, sqrt(d2)*y1)`.
pub fn rotmg<T: RealScalar>(d1: T, d2: T, x1: T, y1: T) -> Rotmg<T> {
    let zero = T::zero();
    let one = T::one();
    let gam = T::narrow(4096.0);
    let gamsq = T::narrow(16_777_216.0);
    let rgamsq = T::narrow(5.960_464_477_539_063e-8);

    let (mut d1, mut d2, mut x1) = (d1, d2, x1);
    let (mut h11, mut h21, mut h12, mut h22) = (zero, zero, zero, zero);
    let mut flag;

    let zeroed = Rotmg {
        params: RotmParams {
            flag: RotmFlag::Rescaling,
            h: [zero; 4],
        },
        d1: zero,
        d2: zero,
        x1: zero,
    };

    if d1 < zero {
        return zeroed;
    }

    let p2 = d2 * y1;
    if p2 == zero {
        return Rotmg {
            params: RotmParams::identity(),
            d1,
            d2,
            x1,
        };
    }

    let p1 = d1 * x1;
    let q2 = p2 * y1;
    let q1 = p1 * x1;

    if q1.abs() > q2.abs() {
        h21 = -y1 / x1;
        h12 = p2 / p1;
        let u = one - h12 * h21;
        if u <= zero {
            return zeroed;
        }
        flag = RotmFlag::OffDiagonal;
        d1 /= u;
        d2 /= u;
        x1 *= u;
    } else {
        if q2 < zero {
            return zeroed;
        }
        flag = RotmFlag::Diagonal;
        h11 = p1 / p2;
        h22 = x1 / y1;
        let u = one + h11 * h22;
        let temp = d2 / u;
        d2 = d1 / u;
        d1 = temp;
        x1 = y1 * u;
    }

    // Materialize the implicit entries before switching to the full form.
    let to_rescaling = |flag: &mut RotmFlag, h11: &mut T, h21: &mut T, h12: &mut T, h22: &mut T| {
        match *flag {
            RotmFlag::OffDiagonal => {
                *h11 = one;
                *h22 = one;
            }
            RotmFlag::Diagonal => {
                *h21 = -one;
                *h12 = one;
            }
            _ => {}
        }
        *flag = RotmFlag::Rescaling;
    };

    if d1 != zero {
        while d1 <= rgamsq || d1 >= gamsq {
            to_rescaling(&mut flag, &mut h11, &mut h21, &mut h12, &mut h22);
            if d1 <= rgamsq {
                d1 *= gam * gam;
                x1 /= gam;
                h11 /= gam;
                h12 /= gam;
            } else {
                d1 /= gam * gam;
                x1 *= gam;
                h11 *= gam;
                h12 *= gam;
            }
        }
    }

    if d2 != zero {
        while d2.abs() <= rgamsq || d2.abs() >= gamsq {
            to_rescaling(&mut flag, &mut h11, &mut h21, &mut h12, &mut h22);
            if d2.abs() <= rgamsq {
                d2 *= gam * gam;
                h21 /= gam;
                h22 /= gam;
            } else {
                d2 /= gam * gam;
                h21 *= gam;
                h22 *= gam;
            }
        }
    }

    let h = match flag {
        RotmFlag::Rescaling => [h11, h21, h12, h22],
        RotmFlag::OffDiagonal => [zero, h21, h12, zero],
        RotmFlag::Diagonal => [h11, zero, zero, h22],
        RotmFlag::Identity => [zero; 4],
    };

    Rotmg {
        params: RotmParams { flag, h },
        d1,
        d2,
        x1,
    }
}

/// Apply a modified rotation: `[x_i, y_i]^T := H * [x_i, y_i]^T`.
pub fn rotm<T: RealScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    p: &RotmParams<T>,
) {
    let [h11, h21, h12, h22] = p.h;
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    let mut apply = |f: &dyn Fn(T, T) -> (T, T)| {
        for i in 0..n {
            let (ix, iy) = (sx.at(i), sy.at(i));
            let (w, z) = f(x[ix], y[iy]);
            x[ix] = w;
            y[iy] = z;
        }
    };
    match p.flag {
        RotmFlag::Identity => {}
        RotmFlag::Rescaling => apply(&|w, z| (w * h11 + z * h12, w * h21 + z * h22)),
        RotmFlag::OffDiagonal => apply(&|w, z| (w + z * h12, w * h21 + z)),
        RotmFlag::Diagonal => apply(&|w, z| (w * h11 + z, -w + z * h22)),
    }
}
