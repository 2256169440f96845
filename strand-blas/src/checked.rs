//! Validating front end for the kernels.
//!
//! Every wrapper takes the same arguments as its kernel, verifies the
//! calling contract (non-zero strides, buffer extents, leading dimensions,
//! band widths, selector legality) and only then forwards the call. A
//! violation comes back as a [`BlasError`] naming the routine and the
//! argument at fault, and is logged at `debug` level.
//!
//! ```
//! use strand_blas::checked;
//! use strand_blas::{BlasError, Layout, Transpose};
//!
//! let a = [1.0f64, 2.0, 3.0, 4.0];
//! let x = [1.0f64, 1.0];
//! let mut y = [0.0f64; 2];
//! checked::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1)?;
//! assert_eq!(y, [3.0, 7.0]);
//!
//! let err = checked::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 1, &x, 1, 0.0, &mut y, 1)
//!     .unwrap_err();
//! assert_eq!(err.arg(), "lda");
//! # Ok::<(), BlasError>(())
//! ```

use crate::level1::{self, RotmParams};
use crate::{level2, level3};
use strand_core::layout::{matrix_extent, packed_len, tri_band, vector_extent};
use strand_core::{BlasError, Diag, Layout, RealScalar, Result, Scalar, Side, Transpose, Uplo};
use tracing::{debug, trace};

// ============================================================================
// Contract checks
// ============================================================================

fn reject(err: BlasError) -> BlasError {
    debug!(routine = err.routine(), arg = err.arg(), "rejected call: {err}");
    err
}

fn ensure_len(routine: &'static str, arg: &'static str, len: usize, needed: usize) -> Result<()> {
    if len < needed {
        return Err(reject(BlasError::BufferTooShort {
            routine,
            arg,
            len,
            needed,
        }));
    }
    Ok(())
}

fn ensure_ld(routine: &'static str, arg: &'static str, ld: usize, min: usize) -> Result<()> {
    if ld < min {
        return Err(reject(BlasError::LeadingDimension {
            routine,
            arg,
            ld,
            min,
        }));
    }
    Ok(())
}

/// Strided vector of `n` elements.
fn vector<T>(routine: &'static str, arg: &'static str, x: &[T], n: usize, inc: isize) -> Result<()> {
    if inc == 0 {
        return Err(reject(BlasError::ZeroStride { routine, arg }));
    }
    ensure_len(routine, arg, x.len(), vector_extent(n, inc))
}

/// Full `rows x cols` matrix; `ld_arg` names the leading-dimension argument.
fn matrix<T>(
    routine: &'static str,
    arg: &'static str,
    ld_arg: &'static str,
    layout: Layout,
    rows: usize,
    cols: usize,
    a: &[T],
    ld: usize,
) -> Result<()> {
    ensure_ld(routine, ld_arg, ld, layout.leading_dim(rows, cols).max(1))?;
    ensure_len(routine, arg, a.len(), matrix_extent(layout, rows, cols, ld))
}

/// Band storage of an `m x n` matrix with `kl` / `ku` off-diagonals.
fn band<T>(
    routine: &'static str,
    layout: Layout,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    a: &[T],
    lda: usize,
) -> Result<()> {
    let width = kl + ku + 1;
    ensure_ld(routine, "lda", lda, width)?;
    let needed = match layout {
        Layout::RowMajor => matrix_extent(layout, m, width, lda),
        Layout::ColMajor => matrix_extent(layout, width, n, lda),
    };
    ensure_len(routine, "a", a.len(), needed)
}

/// Packed triangle of order `n`.
fn packed<T>(routine: &'static str, ap: &[T], n: usize) -> Result<()> {
    ensure_len(routine, "ap", ap.len(), packed_len(n))
}

/// Complex symmetric updates have no conjugated form.
fn symmetric_trans<T: Scalar>(routine: &'static str, trans: Transpose) -> Result<()> {
    if T::IS_COMPLEX && trans == Transpose::ConjTrans {
        return Err(reject(BlasError::InvalidSelector {
            routine,
            arg: "trans",
            value: "ConjTrans",
            reason: "complex symmetric updates take NoTrans or Trans",
        }));
    }
    Ok(())
}

/// Complex Hermitian updates have no plain-transposed form.
fn hermitian_trans<T: Scalar>(routine: &'static str, trans: Transpose) -> Result<()> {
    if T::IS_COMPLEX && trans == Transpose::Trans {
        return Err(reject(BlasError::InvalidSelector {
            routine,
            arg: "trans",
            value: "Trans",
            reason: "complex Hermitian updates take NoTrans or ConjTrans",
        }));
    }
    Ok(())
}

/// Shape of the stored matrix whose `op` is `rows x cols`.
#[inline]
fn stored_dims(trans: Transpose, rows: usize, cols: usize) -> (usize, usize) {
    trans.apply_dims(rows, cols)
}

/// Order of the triangular / symmetric operand for `side`.
#[inline]
fn side_order(side: Side, m: usize, n: usize) -> usize {
    match side {
        Side::Left => m,
        Side::Right => n,
    }
}

// ============================================================================
// Level 1
// ============================================================================

/// Checked [`level1::dot`]; rejects zero strides and short buffers.
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T> {
    vector("dot", "x", x, n, incx)?;
    vector("dot", "y", y, n, incy)?;
    Ok(level1::dot(n, x, incx, y, incy))
}

/// Checked [`level1::dotc`].
pub fn dotc<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T> {
    vector("dotc", "x", x, n, incx)?;
    vector("dotc", "y", y, n, incy)?;
    Ok(level1::dotc(n, x, incx, y, incy))
}

/// Checked [`level1::sdsdot`].
pub fn sdsdot(n: usize, alpha: f32, x: &[f32], incx: isize, y: &[f32], incy: isize) -> Result<f32> {
    vector("sdsdot", "x", x, n, incx)?;
    vector("sdsdot", "y", y, n, incy)?;
    Ok(level1::sdsdot(n, alpha, x, incx, y, incy))
}

/// Checked [`level1::dsdot`].
pub fn dsdot(n: usize, x: &[f32], incx: isize, y: &[f32], incy: isize) -> Result<f64> {
    vector("dsdot", "x", x, n, incx)?;
    vector("dsdot", "y", y, n, incy)?;
    Ok(level1::dsdot(n, x, incx, y, incy))
}

/// Checked [`level1::nrm2`].
pub fn nrm2<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<T::Real> {
    vector("nrm2", "x", x, n, incx)?;
    Ok(level1::nrm2(n, x, incx))
}

/// Checked [`level1::asum`].
pub fn asum<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<T::Real> {
    vector("asum", "x", x, n, incx)?;
    Ok(level1::asum(n, x, incx))
}

/// Checked [`level1::iamax`].
pub fn iamax<T: Scalar>(n: usize, x: &[T], incx: isize) -> Result<Option<usize>> {
    vector("iamax", "x", x, n, incx)?;
    Ok(level1::iamax(n, x, incx))
}

/// Checked [`level1::copy`].
pub fn copy<T: Scalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    vector("copy", "x", x, n, incx)?;
    vector("copy", "y", y, n, incy)?;
    level1::copy(n, x, incx, y, incy);
    Ok(())
}

/// Checked [`level1::swap`].
pub fn swap<T: Scalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    vector("swap", "x", x, n, incx)?;
    vector("swap", "y", y, n, incy)?;
    level1::swap(n, x, incx, y, incy);
    Ok(())
}

/// Checked [`level1::axpy`].
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    vector("axpy", "x", x, n, incx)?;
    vector("axpy", "y", y, n, incy)?;
    level1::axpy(n, alpha, x, incx, y, incy);
    Ok(())
}

/// Checked [`level1::scal`].
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) -> Result<()> {
    vector("scal", "x", x, n, incx)?;
    level1::scal(n, alpha, x, incx);
    Ok(())
}

/// Checked [`level1::rscal`].
pub fn rscal<T: Scalar>(n: usize, alpha: T::Real, x: &mut [T], incx: isize) -> Result<()> {
    vector("rscal", "x", x, n, incx)?;
    level1::rscal(n, alpha, x, incx);
    Ok(())
}

/// Checked [`level1::rot`].
pub fn rot<T: RealScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    c: T,
    s: T,
) -> Result<()> {
    vector("rot", "x", x, n, incx)?;
    vector("rot", "y", y, n, incy)?;
    level1::rot(n, x, incx, y, incy, c, s);
    Ok(())
}

/// Checked [`level1::rotm`]. The parameter block itself is not validated.
pub fn rotm<T: RealScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    p: &RotmParams<T>,
) -> Result<()> {
    vector("rotm", "x", x, n, incx)?;
    vector("rotm", "y", y, n, incy)?;
    level1::rotm(n, x, incx, y, incy, p);
    Ok(())
}

// ============================================================================
// Level 2
// ============================================================================

/// Checked [`level2::gemv`]; `lda` must cover the stored row or column length.
pub fn gemv<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let (rows, cols) = trans.apply_dims(m, n);
    matrix("gemv", "a", "lda", layout, m, n, a, lda)?;
    vector("gemv", "x", x, cols, incx)?;
    vector("gemv", "y", y, rows, incy)?;
    level2::gemv(layout, trans, m, n, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::gbmv`]; `lda` must be at least `kl + ku + 1`.
pub fn gbmv<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let (rows, cols) = trans.apply_dims(m, n);
    band("gbmv", layout, m, n, kl, ku, a, lda)?;
    vector("gbmv", "x", x, cols, incx)?;
    vector("gbmv", "y", y, rows, incy)?;
    level2::gbmv(layout, trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::trmv`].
pub fn trmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    matrix("trmv", "a", "lda", layout, n, n, a, lda)?;
    vector("trmv", "x", x, n, incx)?;
    level2::trmv(layout, uplo, trans, diag, n, a, lda, x, incx);
    Ok(())
}

/// Checked [`level2::tbmv`].
pub fn tbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    let (kl, ku) = tri_band(uplo, k);
    band("tbmv", layout, n, n, kl, ku, a, lda)?;
    vector("tbmv", "x", x, n, incx)?;
    level2::tbmv(layout, uplo, trans, diag, n, k, a, lda, x, incx);
    Ok(())
}

/// Checked [`level2::tpmv`]; `ap` must hold `n * (n + 1) / 2` elements.
pub fn tpmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    packed("tpmv", ap, n)?;
    vector("tpmv", "x", x, n, incx)?;
    level2::tpmv(layout, uplo, trans, diag, n, ap, x, incx);
    Ok(())
}

/// Checked [`level2::trsv`].
pub fn trsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    matrix("trsv", "a", "lda", layout, n, n, a, lda)?;
    vector("trsv", "x", x, n, incx)?;
    level2::trsv(layout, uplo, trans, diag, n, a, lda, x, incx);
    Ok(())
}

/// Checked [`level2::tbsv`].
pub fn tbsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    let (kl, ku) = tri_band(uplo, k);
    band("tbsv", layout, n, n, kl, ku, a, lda)?;
    vector("tbsv", "x", x, n, incx)?;
    level2::tbsv(layout, uplo, trans, diag, n, k, a, lda, x, incx);
    Ok(())
}

/// Checked [`level2::tpsv`].
pub fn tpsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) -> Result<()> {
    packed("tpsv", ap, n)?;
    vector("tpsv", "x", x, n, incx)?;
    level2::tpsv(layout, uplo, trans, diag, n, ap, x, incx);
    Ok(())
}

/// Checked [`level2::symv`].
pub fn symv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    matrix("symv", "a", "lda", layout, n, n, a, lda)?;
    vector("symv", "x", x, n, incx)?;
    vector("symv", "y", y, n, incy)?;
    level2::symv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::sbmv`].
pub fn sbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let (kl, ku) = tri_band(uplo, k);
    band("sbmv", layout, n, n, kl, ku, a, lda)?;
    vector("sbmv", "x", x, n, incx)?;
    vector("sbmv", "y", y, n, incy)?;
    level2::sbmv(layout, uplo, n, k, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::spmv`].
pub fn spmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    packed("spmv", ap, n)?;
    vector("spmv", "x", x, n, incx)?;
    vector("spmv", "y", y, n, incy)?;
    level2::spmv(layout, uplo, n, alpha, ap, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::hemv`].
pub fn hemv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    matrix("hemv", "a", "lda", layout, n, n, a, lda)?;
    vector("hemv", "x", x, n, incx)?;
    vector("hemv", "y", y, n, incy)?;
    level2::hemv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::hbmv`].
pub fn hbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let (kl, ku) = tri_band(uplo, k);
    band("hbmv", layout, n, n, kl, ku, a, lda)?;
    vector("hbmv", "x", x, n, incx)?;
    vector("hbmv", "y", y, n, incy)?;
    level2::hbmv(layout, uplo, n, k, alpha, a, lda, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::hpmv`].
pub fn hpmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    packed("hpmv", ap, n)?;
    vector("hpmv", "x", x, n, incx)?;
    vector("hpmv", "y", y, n, incy)?;
    level2::hpmv(layout, uplo, n, alpha, ap, x, incx, beta, y, incy);
    Ok(())
}

/// Checked [`level2::ger`].
pub fn ger<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("ger", "x", x, m, incx)?;
    vector("ger", "y", y, n, incy)?;
    matrix("ger", "a", "lda", layout, m, n, a, lda)?;
    level2::ger(layout, m, n, alpha, x, incx, y, incy, a, lda);
    Ok(())
}

/// Checked [`level2::geru`].
pub fn geru<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("geru", "x", x, m, incx)?;
    vector("geru", "y", y, n, incy)?;
    matrix("geru", "a", "lda", layout, m, n, a, lda)?;
    level2::geru(layout, m, n, alpha, x, incx, y, incy, a, lda);
    Ok(())
}

/// Checked [`level2::gerc`].
pub fn gerc<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("gerc", "x", x, m, incx)?;
    vector("gerc", "y", y, n, incy)?;
    matrix("gerc", "a", "lda", layout, m, n, a, lda)?;
    level2::gerc(layout, m, n, alpha, x, incx, y, incy, a, lda);
    Ok(())
}

/// Checked [`level2::syr`].
pub fn syr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("syr", "x", x, n, incx)?;
    matrix("syr", "a", "lda", layout, n, n, a, lda)?;
    level2::syr(layout, uplo, n, alpha, x, incx, a, lda);
    Ok(())
}

/// Checked [`level2::spr`].
pub fn spr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) -> Result<()> {
    vector("spr", "x", x, n, incx)?;
    packed("spr", ap, n)?;
    level2::spr(layout, uplo, n, alpha, x, incx, ap);
    Ok(())
}

/// Checked [`level2::her`].
pub fn her<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("her", "x", x, n, incx)?;
    matrix("her", "a", "lda", layout, n, n, a, lda)?;
    level2::her(layout, uplo, n, alpha, x, incx, a, lda);
    Ok(())
}

/// Checked [`level2::hpr`].
pub fn hpr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) -> Result<()> {
    vector("hpr", "x", x, n, incx)?;
    packed("hpr", ap, n)?;
    level2::hpr(layout, uplo, n, alpha, x, incx, ap);
    Ok(())
}

/// Checked [`level2::syr2`].
pub fn syr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("syr2", "x", x, n, incx)?;
    vector("syr2", "y", y, n, incy)?;
    matrix("syr2", "a", "lda", layout, n, n, a, lda)?;
    level2::syr2(layout, uplo, n, alpha, x, incx, y, incy, a, lda);
    Ok(())
}

/// Checked [`level2::spr2`].
pub fn spr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
) -> Result<()> {
    vector("spr2", "x", x, n, incx)?;
    vector("spr2", "y", y, n, incy)?;
    packed("spr2", ap, n)?;
    level2::spr2(layout, uplo, n, alpha, x, incx, y, incy, ap);
    Ok(())
}

/// Checked [`level2::her2`].
pub fn her2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    vector("her2", "x", x, n, incx)?;
    vector("her2", "y", y, n, incy)?;
    matrix("her2", "a", "lda", layout, n, n, a, lda)?;
    level2::her2(layout, uplo, n, alpha, x, incx, y, incy, a, lda);
    Ok(())
}

/// Checked [`level2::hpr2`].
pub fn hpr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
) -> Result<()> {
    vector("hpr2", "x", x, n, incx)?;
    vector("hpr2", "y", y, n, incy)?;
    packed("hpr2", ap, n)?;
    level2::hpr2(layout, uplo, n, alpha, x, incx, y, incy, ap);
    Ok(())
}

// ============================================================================
// Level 3
// ============================================================================

/// Checked [`level3::gemm`].
pub fn gemm<T: Scalar>(
    layout: Layout,
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let (ar, ac) = stored_dims(trans_a, m, k);
    let (br, bc) = stored_dims(trans_b, k, n);
    matrix("gemm", "a", "lda", layout, ar, ac, a, lda)?;
    matrix("gemm", "b", "ldb", layout, br, bc, b, ldb)?;
    matrix("gemm", "c", "ldc", layout, m, n, c, ldc)?;
    trace!(routine = "gemm", m, n, k, "forwarding");
    level3::gemm(layout, trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::symm`].
pub fn symm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let ka = side_order(side, m, n);
    matrix("symm", "a", "lda", layout, ka, ka, a, lda)?;
    matrix("symm", "b", "ldb", layout, m, n, b, ldb)?;
    matrix("symm", "c", "ldc", layout, m, n, c, ldc)?;
    trace!(routine = "symm", m, n, "forwarding");
    level3::symm(layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::hemm`].
pub fn hemm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let ka = side_order(side, m, n);
    matrix("hemm", "a", "lda", layout, ka, ka, a, lda)?;
    matrix("hemm", "b", "ldb", layout, m, n, b, ldb)?;
    matrix("hemm", "c", "ldc", layout, m, n, c, ldc)?;
    trace!(routine = "hemm", m, n, "forwarding");
    level3::hemm(layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::syrk`]. Complex element types reject `ConjTrans`.
///
/// ```
/// use strand_blas::{checked, Complex64, Layout, Transpose, Uplo};
///
/// let a = [Complex64::new(1.0, 1.0); 4];
/// let mut c = [Complex64::new(0.0, 0.0); 4];
/// let one = Complex64::new(1.0, 0.0);
/// let err = checked::syrk(Layout::RowMajor, Uplo::Upper, Transpose::ConjTrans, 2, 2, one, &a, 2, one, &mut c, 2)
///     .unwrap_err();
/// assert_eq!(err.arg(), "trans");
/// ```
pub fn syrk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    symmetric_trans::<T>("syrk", trans)?;
    let (ar, ac) = stored_dims(trans, n, k);
    matrix("syrk", "a", "lda", layout, ar, ac, a, lda)?;
    matrix("syrk", "c", "ldc", layout, n, n, c, ldc)?;
    trace!(routine = "syrk", n, k, "forwarding");
    level3::syrk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::herk`]. Complex element types reject `Trans`.
pub fn herk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    hermitian_trans::<T>("herk", trans)?;
    let (ar, ac) = stored_dims(trans, n, k);
    matrix("herk", "a", "lda", layout, ar, ac, a, lda)?;
    matrix("herk", "c", "ldc", layout, n, n, c, ldc)?;
    trace!(routine = "herk", n, k, "forwarding");
    level3::herk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::syr2k`]. Complex element types reject `ConjTrans`.
pub fn syr2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    symmetric_trans::<T>("syr2k", trans)?;
    let (ar, ac) = stored_dims(trans, n, k);
    matrix("syr2k", "a", "lda", layout, ar, ac, a, lda)?;
    matrix("syr2k", "b", "ldb", layout, ar, ac, b, ldb)?;
    matrix("syr2k", "c", "ldc", layout, n, n, c, ldc)?;
    trace!(routine = "syr2k", n, k, "forwarding");
    level3::syr2k(layout, uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::her2k`]. Complex element types reject `Trans`.
pub fn her2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    hermitian_trans::<T>("her2k", trans)?;
    let (ar, ac) = stored_dims(trans, n, k);
    matrix("her2k", "a", "lda", layout, ar, ac, a, lda)?;
    matrix("her2k", "b", "ldb", layout, ar, ac, b, ldb)?;
    matrix("her2k", "c", "ldc", layout, n, n, c, ldc)?;
    trace!(routine = "her2k", n, k, "forwarding");
    level3::her2k(layout, uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc);
    Ok(())
}

/// Checked [`level3::trmm`].
pub fn trmm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<()> {
    let ka = side_order(side, m, n);
    matrix("trmm", "a", "lda", layout, ka, ka, a, lda)?;
    matrix("trmm", "b", "ldb", layout, m, n, b, ldb)?;
    trace!(routine = "trmm", m, n, "forwarding");
    level3::trmm(layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb);
    Ok(())
}

/// Checked [`level3::trsm`]. A zero on the diagonal is not detected.
pub fn trsm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<()> {
    let ka = side_order(side, m, n);
    matrix("trsm", "a", "lda", layout, ka, ka, a, lda)?;
    matrix("trsm", "b", "ldb", layout, m, n, b, ldb)?;
    trace!(routine = "trsm", m, n, "forwarding");
    level3::trsm(layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb);
    Ok(())
}
