//! BLAS Level 2: Matrix-vector operations.
//!
//! All operations support both row-major and column-major layouts
//! via the CBLAS-style `Layout` parameter, and every vector argument takes a
//! signed increment.
//!
//! Inner-loop strategy: whenever a row or column of `op(A)` is contiguous in
//! memory the loop reduces to `kernel::dot` / `kernel::axpy`; strided vectors
//! are gathered into contiguous buffers first. Banded, packed and triangular
//! variants share one kernel per operation family, parameterized by an
//! element accessor for the storage scheme.

use crate::level1;
use strand_core::kernel;
use strand_core::layout::{band_index, packed_index, tri_band, Strided};
use strand_core::{Diag, Layout, Scalar, Transpose, Uplo};

// ============================================================================
// Shared helpers
// ============================================================================

/// `y := beta * y`; `beta == 0` overwrites without reading.
#[inline]
fn scale_by_beta<T: Scalar>(n: usize, beta: T, y: &mut [T], incy: isize) {
    if beta != T::one() {
        level1::scal(n, beta, y, incy);
    }
}

/// Whether `op(A)` for a stored triangle is upper triangular.
#[inline(always)]
fn effective_upper(uplo: Uplo, trans: bool) -> bool {
    matches!(uplo, Uplo::Upper) != trans
}

// ============================================================================
// GEMV / GBMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// General matrix-vector multiply: `y := alpha * op(A) * x + beta * y`.
///
/// `A` is `m x n`; `x` has `cols(op(A))` elements and `y` has `rows(op(A))`.
/// Rows of `op(A)` that are contiguous are reduced with `dot`, otherwise the
/// product accumulates column by column with `axpy`.
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
) {
    if m == 0 || n == 0 {
        return;
    }
    let (rows, cols) = trans.apply_dims(m, n);
    scale_by_beta(rows, beta, y, incy);
    if alpha == T::zero() {
        return;
    }
    let conj = trans.is_conj();

    match (layout, trans.is_trans()) {
        (Layout::RowMajor, false) | (Layout::ColMajor, true) => {
            // Row i of op(A) is the contiguous run a[i*lda .. i*lda + cols].
            let xv = kernel::contiguous(x, cols, incx);
            let sy = Strided::new(rows, incy);
            for i in 0..rows {
                let row = &a[i * lda..i * lda + cols];
                let dot = if conj {
                    kernel::dotc(row, &xv)
                } else {
                    kernel::dot(row, &xv)
                };
                y[sy.at(i)] += alpha * dot;
            }
        }
        (Layout::RowMajor, true) | (Layout::ColMajor, false) => {
            // Column j of op(A) is the contiguous run a[j*lda .. j*lda + rows].
            let sx = Strided::new(cols, incx);
            kernel::with_contiguous(y, rows, incy, |yv| {
                for j in 0..cols {
                    let xj = alpha * x[sx.at(j)];
                    let col = &a[j * lda..j * lda + rows];
                    if conj {
                        kernel::axpy_conj(xj, col, yv);
                    } else {
                        kernel::axpy(xj, col, yv);
                    }
                }
            });
        }
    }
}

/// Band matrix-vector multiply: `y := alpha * op(A) * x + beta * y`.
///
/// `A` is `m x n` with `kl` sub-diagonals and `ku` super-diagonals in band
/// storage (see [`band_index`]). Only the band is read.
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
) {
    if m == 0 || n == 0 {
        return;
    }
    let (rows, cols) = trans.apply_dims(m, n);
    scale_by_beta(rows, beta, y, incy);
    if alpha == T::zero() {
        return;
    }
    let conj = trans.is_conj();
    let xv = kernel::contiguous(x, cols, incx);

    kernel::with_contiguous(y, rows, incy, |yv| match (layout, trans.is_trans()) {
        (Layout::RowMajor, trans) => {
            // Stored row i holds A(i, lo..hi) contiguously.
            for i in 0..m {
                let lo = i.saturating_sub(kl);
                let hi = (i + ku + 1).min(n);
                if lo >= hi {
                    continue;
                }
                let start = i * lda + kl + lo - i;
                let run = &a[start..start + (hi - lo)];
                if !trans {
                    yv[i] += alpha * kernel::dot(run, &xv[lo..hi]);
                } else if conj {
                    kernel::axpy_conj(alpha * xv[i], run, &mut yv[lo..hi]);
                } else {
                    kernel::axpy(alpha * xv[i], run, &mut yv[lo..hi]);
                }
            }
        }
        (Layout::ColMajor, trans) => {
            // Stored column j holds A(lo..hi, j) contiguously.
            for j in 0..n {
                let lo = j.saturating_sub(ku);
                let hi = (j + kl + 1).min(m);
                if lo >= hi {
                    continue;
                }
                let start = j * lda + ku + lo - j;
                let run = &a[start..start + (hi - lo)];
                if !trans {
                    kernel::axpy(alpha * xv[j], run, &mut yv[lo..hi]);
                } else if conj {
                    yv[j] += alpha * kernel::dotc(run, &xv[lo..hi]);
                } else {
                    yv[j] += alpha * kernel::dot(run, &xv[lo..hi]);
                }
            }
        }
    });
}

// ============================================================================
// Triangular multiply / solve
// x := op(A) * x,  x := inv(op(A)) * x
// ============================================================================

/// In-place triangular multiply over any storage scheme.
///
/// `stored(i, j)` returns element `(i, j)` of the stored `uplo` triangle and
/// is only called inside that triangle, within `k` diagonals of the main
/// one. `op(A)` is `A`, `A^T` (`trans`) or `A^H` (`trans && conj`); with
/// `conj` alone it is `conj(A)`.
pub(crate) fn tri_mv<T: Scalar>(
    uplo: Uplo,
    trans: bool,
    conj: bool,
    diag: Diag,
    n: usize,
    k: usize,
    stored: impl Fn(usize, usize) -> T,
    x: &mut [T],
    sx: Strided,
) {
    let elem = |i: usize, j: usize| {
        if trans {
            stored(j, i).conj_if(conj)
        } else {
            stored(i, j).conj_if(conj)
        }
    };
    let unit = diag.is_unit();

    if effective_upper(uplo, trans) {
        // Row i only reads x[i..], which has not been overwritten yet.
        for i in 0..n {
            let mut sum = if unit {
                x[sx.at(i)]
            } else {
                elem(i, i) * x[sx.at(i)]
            };
            for j in i + 1..(i + k + 1).min(n) {
                sum += elem(i, j) * x[sx.at(j)];
            }
            x[sx.at(i)] = sum;
        }
    } else {
        for i in (0..n).rev() {
            let mut sum = if unit {
                x[sx.at(i)]
            } else {
                elem(i, i) * x[sx.at(i)]
            };
            for j in i.saturating_sub(k)..i {
                sum += elem(i, j) * x[sx.at(j)];
            }
            x[sx.at(i)] = sum;
        }
    }
}

/// In-place triangular solve over any storage scheme; see [`tri_mv`].
pub(crate) fn tri_sv<T: Scalar>(
    uplo: Uplo,
    trans: bool,
    conj: bool,
    diag: Diag,
    n: usize,
    k: usize,
    stored: impl Fn(usize, usize) -> T,
    x: &mut [T],
    sx: Strided,
) {
    let elem = |i: usize, j: usize| {
        if trans {
            stored(j, i).conj_if(conj)
        } else {
            stored(i, j).conj_if(conj)
        }
    };
    let unit = diag.is_unit();

    if effective_upper(uplo, trans) {
        // Back substitution
        for i in (0..n).rev() {
            let mut sum = x[sx.at(i)];
            for j in i + 1..(i + k + 1).min(n) {
                sum -= elem(i, j) * x[sx.at(j)];
            }
            x[sx.at(i)] = if unit { sum } else { sum / elem(i, i) };
        }
    } else {
        // Forward substitution
        for i in 0..n {
            let mut sum = x[sx.at(i)];
            for j in i.saturating_sub(k)..i {
                sum -= elem(i, j) * x[sx.at(j)];
            }
            x[sx.at(i)] = if unit { sum } else { sum / elem(i, i) };
        }
    }
}

/// Whether the rows of `op(A)` are contiguous runs of a full matrix.
#[inline(always)]
fn rows_contiguous(layout: Layout, trans: Transpose) -> bool {
    matches!(layout, Layout::RowMajor) != trans.is_trans()
}

/// Triangular multiply with contiguous rows of `op(A)` and unit-stride `x`.
fn trmv_rows<T: Scalar>(
    upper: bool,
    conj: bool,
    unit: bool,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
) {
    let dot = |row: &[T], v: &[T]| {
        if conj {
            kernel::dotc(row, v)
        } else {
            kernel::dot(row, v)
        }
    };
    if upper {
        for i in 0..n {
            let row = &a[i * lda..i * lda + n];
            let diag = if unit { x[i] } else { row[i].conj_if(conj) * x[i] };
            x[i] = diag + dot(&row[i + 1..n], &x[i + 1..n]);
        }
    } else {
        for i in (0..n).rev() {
            let row = &a[i * lda..i * lda + n];
            let diag = if unit { x[i] } else { row[i].conj_if(conj) * x[i] };
            x[i] = diag + dot(&row[..i], &x[..i]);
        }
    }
}

/// Triangular solve with contiguous rows of `op(A)` and unit-stride `x`.
fn trsv_rows<T: Scalar>(
    upper: bool,
    conj: bool,
    unit: bool,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
) {
    let dot = |row: &[T], v: &[T]| {
        if conj {
            kernel::dotc(row, v)
        } else {
            kernel::dot(row, v)
        }
    };
    if upper {
        for i in (0..n).rev() {
            let row = &a[i * lda..i * lda + n];
            let sum = x[i] - dot(&row[i + 1..n], &x[i + 1..n]);
            x[i] = if unit { sum } else { sum / row[i].conj_if(conj) };
        }
    } else {
        for i in 0..n {
            let row = &a[i * lda..i * lda + n];
            let sum = x[i] - dot(&row[..i], &x[..i]);
            x[i] = if unit { sum } else { sum / row[i].conj_if(conj) };
        }
    }
}

/// Triangular matrix-vector multiply: `x := op(A) * x`.
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
) {
    if n == 0 {
        return;
    }
    if rows_contiguous(layout, trans) && incx == 1 {
        let upper = effective_upper(uplo, trans.is_trans());
        trmv_rows(upper, trans.is_conj(), diag.is_unit(), n, a, lda, x);
        return;
    }
    tri_mv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        n - 1,
        |i, j| a[layout.index(i, j, lda)],
        x,
        Strided::new(n, incx),
    );
}

/// Triangular band multiply: `x := op(A) * x` with `k` off-diagonals.
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
) {
    if n == 0 {
        return;
    }
    let (kl, ku) = tri_band(uplo, k);
    tri_mv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        k.min(n - 1),
        |i, j| a[band_index(layout, kl, ku, i, j, lda)],
        x,
        Strided::new(n, incx),
    );
}

/// Packed triangular multiply: `x := op(A) * x`.
pub fn tpmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    tri_mv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        n - 1,
        |i, j| ap[packed_index(layout, uplo, n, i, j)],
        x,
        Strided::new(n, incx),
    );
}

/// Triangular solve: `x := inv(op(A)) * x`.
///
/// No singularity test is performed; a zero diagonal propagates IEEE
/// infinities and NaNs.
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
) {
    if n == 0 {
        return;
    }
    if rows_contiguous(layout, trans) && incx == 1 {
        let upper = effective_upper(uplo, trans.is_trans());
        trsv_rows(upper, trans.is_conj(), diag.is_unit(), n, a, lda, x);
        return;
    }
    tri_sv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        n - 1,
        |i, j| a[layout.index(i, j, lda)],
        x,
        Strided::new(n, incx),
    );
}

/// Triangular band solve: `x := inv(op(A)) * x` with `k` off-diagonals.
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
) {
    if n == 0 {
        return;
    }
    let (kl, ku) = tri_band(uplo, k);
    tri_sv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        k.min(n - 1),
        |i, j| a[band_index(layout, kl, ku, i, j, lda)],
        x,
        Strided::new(n, incx),
    );
}

/// Packed triangular solve: `x := inv(op(A)) * x`.
pub fn tpsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    tri_sv(
        uplo,
        trans.is_trans(),
        trans.is_conj(),
        diag,
        n,
        n - 1,
        |i, j| ap[packed_index(layout, uplo, n, i, j)],
        x,
        Strided::new(n, incx),
    );
}

// ============================================================================
// Symmetric / Hermitian matrix-vector multiply
// y := alpha * A * x + beta * y
// ============================================================================

/// Shared symmetric/Hermitian multiply over any storage scheme.
///
/// Walks the stored `uplo` triangle once, column by column: each stored
/// `a(i, j)` contributes to `y[i]` directly and to `y[j]` through its
/// mirror, which is conjugated when `herm` is set. The Hermitian diagonal
/// contributes its real part only.
fn sym_mv<T: Scalar>(
    uplo: Uplo,
    herm: bool,
    n: usize,
    k: usize,
    alpha: T,
    stored: impl Fn(usize, usize) -> T,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    if n == 0 {
        return;
    }
    scale_by_beta(n, beta, y, incy);
    if alpha == T::zero() {
        return;
    }
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);

    for j in 0..n {
        let temp1 = alpha * x[sx.at(j)];
        let mut temp2 = T::zero();
        let (lo, hi) = match uplo {
            Uplo::Upper => (j.saturating_sub(k), j),
            Uplo::Lower => (j + 1, (j + k + 1).min(n)),
        };
        for i in lo..hi {
            let aij = stored(i, j);
            y[sy.at(i)] += temp1 * aij;
            temp2 += aij.conj_if(herm) * x[sx.at(i)];
        }
        let ajj = stored(j, j);
        let ajj = if herm { T::from_real(ajj.re()) } else { ajj };
        y[sy.at(j)] += temp1 * ajj + alpha * temp2;
    }
}

/// Symmetric matrix-vector multiply: `y := alpha * A * x + beta * y`.
///
/// Only the `uplo` triangle of `A` is read.
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
) {
    sym_mv(
        uplo,
        false,
        n,
        n.saturating_sub(1),
        alpha,
        |i, j| a[layout.index(i, j, lda)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

/// Symmetric band multiply with `k` off-diagonals.
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
) {
    let (kl, ku) = tri_band(uplo, k);
    sym_mv(
        uplo,
        false,
        n,
        k,
        alpha,
        |i, j| a[band_index(layout, kl, ku, i, j, lda)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

/// Packed symmetric multiply.
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
) {
    sym_mv(
        uplo,
        false,
        n,
        n.saturating_sub(1),
        alpha,
        |i, j| ap[packed_index(layout, uplo, n, i, j)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

/// Hermitian matrix-vector multiply: `y := alpha * A * x + beta * y`.
///
/// The mirrored triangle is the conjugate of the stored one and the
/// imaginary part of the diagonal is never read.
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
) {
    sym_mv(
        uplo,
        true,
        n,
        n.saturating_sub(1),
        alpha,
        |i, j| a[layout.index(i, j, lda)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

/// Hermitian band multiply with `k` off-diagonals.
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
) {
    let (kl, ku) = tri_band(uplo, k);
    sym_mv(
        uplo,
        true,
        n,
        k,
        alpha,
        |i, j| a[band_index(layout, kl, ku, i, j, lda)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

/// Packed Hermitian multiply.
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
) {
    sym_mv(
        uplo,
        true,
        n,
        n.saturating_sub(1),
        alpha,
        |i, j| ap[packed_index(layout, uplo, n, i, j)],
        x,
        incx,
        beta,
        y,
        incy,
    );
}

// ============================================================================
// GER: General rank-1 update
// A := alpha * x * y^T + A   (gerc: y^H)
// ============================================================================

fn ger_impl<T: Scalar>(
    layout: Layout,
    conj: bool,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    if m == 0 || n == 0 || alpha == T::zero() {
        return;
    }
    match layout {
        Layout::RowMajor => {
            // Row i of A += (alpha * x[i]) * y
            let yv = kernel::contiguous(y, n, incy);
            let sx = Strided::new(m, incx);
            for i in 0..m {
                let scale = alpha * x[sx.at(i)];
                let row = &mut a[i * lda..i * lda + n];
                if conj {
                    kernel::axpy_conj(scale, &yv, row);
                } else {
                    kernel::axpy(scale, &yv, row);
                }
            }
        }
        Layout::ColMajor => {
            // Column j of A += (alpha * y[j]) * x
            let xv = kernel::contiguous(x, m, incx);
            let sy = Strided::new(n, incy);
            for j in 0..n {
                let scale = alpha * y[sy.at(j)].conj_if(conj);
                kernel::axpy(scale, &xv, &mut a[j * lda..j * lda + m]);
            }
        }
    }
}

/// General rank-1 update: `A := alpha * x * y^T + A`.
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
) {
    ger_impl(layout, false, m, n, alpha, x, incx, y, incy, a, lda);
}

/// Unconjugated rank-1 update; the complex name for [`ger`].
#[inline]
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
) {
    ger_impl(layout, false, m, n, alpha, x, incx, y, incy, a, lda);
}

/// Conjugated rank-1 update: `A := alpha * x * y^H + A`.
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
) {
    ger_impl(layout, true, m, n, alpha, x, incx, y, incy, a, lda);
}

// ============================================================================
// Symmetric / Hermitian rank-1 and rank-2 updates
// ============================================================================

/// Shared rank-1 update of the `uplo` triangle:
/// `A := alpha * x * x^T + A`, or `alpha * x * x^H + A` when `herm` is set.
///
/// `offset(i, j)` maps a stored element to its buffer position. The
/// Hermitian diagonal is written back with a zero imaginary part.
fn sym_r1<T: Scalar>(
    uplo: Uplo,
    herm: bool,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    offset: impl Fn(usize, usize) -> usize,
) {
    if n == 0 || alpha == T::zero() {
        return;
    }
    let sx = Strided::new(n, incx);
    for j in 0..n {
        let xj = x[sx.at(j)];
        if xj == T::zero() {
            if herm {
                let d = offset(j, j);
                a[d] = T::from_real(a[d].re());
            }
            continue;
        }
        let temp = alpha * xj.conj_if(herm);
        let (lo, hi) = match uplo {
            Uplo::Upper => (0, j + 1),
            Uplo::Lower => (j, n),
        };
        for i in lo..hi {
            let p = offset(i, j);
            if herm && i == j {
                a[p] = T::from_real(a[p].re() + (x[sx.at(i)] * temp).re());
            } else {
                a[p] += x[sx.at(i)] * temp;
            }
        }
    }
}

/// Shared rank-2 update of the `uplo` triangle:
/// `A := alpha * x * y^T + alpha * y * x^T + A`, or
/// `alpha * x * y^H + conj(alpha) * y * x^H + A` when `herm` is set.
fn sym_r2<T: Scalar>(
    uplo: Uplo,
    herm: bool,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    offset: impl Fn(usize, usize) -> usize,
) {
    if n == 0 || alpha == T::zero() {
        return;
    }
    let sx = Strided::new(n, incx);
    let sy = Strided::new(n, incy);
    for j in 0..n {
        let (xj, yj) = (x[sx.at(j)], y[sy.at(j)]);
        if xj == T::zero() && yj == T::zero() {
            if herm {
                let d = offset(j, j);
                a[d] = T::from_real(a[d].re());
            }
            continue;
        }
        let temp1 = alpha * yj.conj_if(herm);
        let temp2 = (alpha * xj).conj_if(herm);
        let (lo, hi) = match uplo {
            Uplo::Upper => (0, j + 1),
            Uplo::Lower => (j, n),
        };
        for i in lo..hi {
            let p = offset(i, j);
            let update = x[sx.at(i)] * temp1 + y[sy.at(i)] * temp2;
            if herm && i == j {
                a[p] = T::from_real(a[p].re() + update.re());
            } else {
                a[p] += update;
            }
        }
    }
}

/// Symmetric rank-1 update: `A := alpha * x * x^T + A`.
pub fn syr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) {
    sym_r1(uplo, false, n, alpha, x, incx, a, |i, j| layout.index(i, j, lda));
}

/// Packed symmetric rank-1 update.
pub fn spr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) {
    sym_r1(uplo, false, n, alpha, x, incx, ap, |i, j| {
        packed_index(layout, uplo, n, i, j)
    });
}

/// Hermitian rank-1 update: `A := alpha * x * x^H + A` with real `alpha`.
pub fn her<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) {
    sym_r1(uplo, true, n, T::from_real(alpha), x, incx, a, |i, j| {
        layout.index(i, j, lda)
    });
}

/// Packed Hermitian rank-1 update with real `alpha`.
pub fn hpr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) {
    sym_r1(uplo, true, n, T::from_real(alpha), x, incx, ap, |i, j| {
        packed_index(layout, uplo, n, i, j)
    });
}

/// Symmetric rank-2 update: `A := alpha * x * y^T + alpha * y * x^T + A`.
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
) {
    sym_r2(uplo, false, n, alpha, x, incx, y, incy, a, |i, j| {
        layout.index(i, j, lda)
    });
}

/// Packed symmetric rank-2 update.
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
) {
    sym_r2(uplo, false, n, alpha, x, incx, y, incy, ap, |i, j| {
        packed_index(layout, uplo, n, i, j)
    });
}

/// Hermitian rank-2 update:
/// `A := alpha * x * y^H + conj(alpha) * y * x^H + A`.
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
) {
    sym_r2(uplo, true, n, alpha, x, incx, y, incy, a, |i, j| {
        layout.index(i, j, lda)
    });
}

/// Packed Hermitian rank-2 update.
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
) {
    sym_r2(uplo, true, n, alpha, x, incx, y, incy, ap, |i, j| {
        packed_index(layout, uplo, n, i, j)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use strand_core::layout::packed_len;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Pack the `uplo` triangle of a row-major n x n matrix.
    fn pack(layout: Layout, uplo: Uplo, n: usize, full: &[f64]) -> Vec<f64> {
        let mut ap = vec![0.0; packed_len(n)];
        for i in 0..n {
            for j in 0..n {
                if uplo.contains(i, j) {
                    ap[packed_index(layout, uplo, n, i, j)] = full[i * n + j];
                }
            }
        }
        ap
    }

    #[test]
    fn test_gemv_rowmajor_notrans() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let x = vec![1.0f32, 1.0];
        let mut y = vec![0.0f32; 2];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_gemv_rowmajor_trans() {
        // A = [[1,2],[3,4]], A^T x with x = [1,1] -> [4, 6]
        let a = vec![1.0f64, 2.0, 3.0, 4.0];
        let x = vec![1.0f64, 1.0];
        let mut y = vec![0.0f64; 2];
        gemv(Layout::RowMajor, Transpose::Trans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![4.0, 6.0]);
    }

    #[test]
    fn test_gemv_colmajor_rectangular() {
        // A = [[1,2,3],[4,5,6]] stored column-major, lda = 2
        let a = vec![1.0f64, 4.0, 2.0, 5.0, 3.0, 6.0];
        let x = vec![1.0f64, 0.0, -1.0];
        let mut y = vec![1.0f64, 1.0];
        gemv(Layout::ColMajor, Transpose::NoTrans, 2, 3, 2.0, &a, 2, &x, 1, 1.0, &mut y, 1);
        // A x = [-2, -2]; 2 * [-2, -2] + [1, 1]
        assert_eq!(y, vec![-3.0, -3.0]);

        let x = vec![1.0f64, 1.0];
        let mut y = vec![0.0f64; 3];
        gemv(Layout::ColMajor, Transpose::Trans, 2, 3, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_gemv_strided_negative() {
        let a = vec![1.0f64, 2.0, 3.0, 4.0];
        // logical x = [1, 2] stored reversed with stride -2
        let x = vec![2.0f64, 99.0, 1.0];
        let mut y = vec![0.0f64, -1.0, 0.0];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, -2, 0.0, &mut y, 2);
        assert_eq!(y, vec![5.0, -1.0, 11.0]);
    }

    #[test]
    fn test_gemv_beta_zero_ignores_nan() {
        let a = vec![1.0f64, 0.0, 0.0, 1.0];
        let x = vec![2.0f64, 3.0];
        let mut y = vec![f64::NAN, f64::NAN];
        gemv(Layout::ColMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![2.0, 3.0]);
    }

    #[test]
    fn test_gemv_conj_trans() {
        // A = [[i, 1]] (1x2), A^H x with x = [1] -> [-i, 1]
        let a = vec![c(0.0, 1.0), c(1.0, 0.0)];
        let x = vec![c(1.0, 0.0)];
        let mut y = vec![c(0.0, 0.0); 2];
        gemv(Layout::RowMajor, Transpose::ConjTrans, 1, 2, c(1.0, 0.0), &a, 2, &x, 1, c(0.0, 0.0), &mut y, 1);
        assert_eq!(y, vec![c(0.0, -1.0), c(1.0, 0.0)]);

        // Same 1x2 matrix column-major, lda = 1
        let mut y = vec![c(0.0, 0.0); 2];
        gemv(Layout::ColMajor, Transpose::ConjTrans, 1, 2, c(1.0, 0.0), &a, 1, &x, 1, c(0.0, 0.0), &mut y, 1);
        assert_eq!(y, vec![c(0.0, -1.0), c(1.0, 0.0)]);
    }

    #[test]
    fn test_gbmv_tridiagonal_matches_gemv() {
        // 4x4 tridiagonal: diag 2, sub -1, super 3
        let n = 4;
        let mut full = vec![0.0f64; n * n];
        for i in 0..n {
            full[i * n + i] = 2.0;
            if i > 0 {
                full[i * n + i - 1] = -1.0;
            }
            if i + 1 < n {
                full[i * n + i + 1] = 3.0;
            }
        }
        let (kl, ku) = (1, 1);
        let ld = kl + ku + 1;
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            let mut band = vec![0.0f64; n * ld];
            for i in 0..n {
                for j in i.saturating_sub(kl)..(i + ku + 1).min(n) {
                    band[band_index(layout, kl, ku, i, j, ld)] = full[i * n + j];
                }
            }
            let x = vec![1.0f64, 2.0, 3.0, 4.0];
            for trans in [Transpose::NoTrans, Transpose::Trans] {
                let mut expect = vec![0.0f64; n];
                gemv(Layout::RowMajor, trans, n, n, 1.0, &full, n, &x, 1, 0.0, &mut expect, 1);
                let mut y = vec![0.0f64; n];
                gbmv(layout, trans, n, n, kl, ku, 1.0, &band, ld, &x, 1, 0.0, &mut y, 1);
                assert_eq!(y, expect, "{layout:?} {trans:?}");
            }
        }
    }

    #[test]
    fn test_gbmv_rectangular_band() {
        // 3x2 matrix [[1,2],[3,4],[0,5]] with kl = 1, ku = 1, row-major band
        let (kl, ku, ld) = (1, 1, 3);
        let band = vec![
            0.0, 1.0, 2.0, // row 0: -, a00, a01
            3.0, 4.0, 0.0, // row 1: a10, a11, -
            5.0, 0.0, 0.0, // row 2: a21, -, -
        ];
        let x = vec![1.0f64, 1.0];
        let mut y = vec![0.0f64; 3];
        gbmv(Layout::RowMajor, Transpose::NoTrans, 3, 2, kl, ku, 1.0, &band, ld, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![3.0, 7.0, 5.0]);
    }

    #[test]
    fn test_ger_rowmajor() {
        let x = vec![1.0f32, 2.0];
        let y = vec![3.0f32, 4.0];
        let mut a = vec![0.0f32; 4];
        ger(Layout::RowMajor, 2, 2, 1.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_ger_colmajor_matches_rowmajor() {
        let x = vec![1.0f64, 2.0, 3.0];
        let y = vec![-1.0f64, 5.0];
        let mut row = vec![0.0f64; 6];
        let mut col = vec![0.0f64; 6];
        ger(Layout::RowMajor, 3, 2, 2.0, &x, 1, &y, 1, &mut row, 2);
        ger(Layout::ColMajor, 3, 2, 2.0, &x, 1, &y, 1, &mut col, 3);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(row[i * 2 + j], col[j * 3 + i]);
            }
        }
    }

    #[test]
    fn test_gerc_conjugates_y() {
        let x = vec![c(1.0, 0.0)];
        let y = vec![c(0.0, 1.0)];
        let mut a = vec![c(0.0, 0.0)];
        gerc(Layout::ColMajor, 1, 1, c(1.0, 0.0), &x, 1, &y, 1, &mut a, 1);
        assert_eq!(a[0], c(0.0, -1.0));
        let mut a = vec![c(0.0, 0.0)];
        geru(Layout::RowMajor, 1, 1, c(1.0, 0.0), &x, 1, &y, 1, &mut a, 1);
        assert_eq!(a[0], c(0.0, 1.0));
    }

    #[test]
    fn test_symv_upper_ignores_lower() {
        // Symmetric [[1,2],[2,3]]; lower triangle holds garbage
        let a = vec![1.0f64, 2.0, f64::NAN, 3.0];
        let x = vec![1.0f64, 1.0];
        let mut y = vec![0.0f64; 2];
        symv(Layout::RowMajor, Uplo::Upper, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![3.0, 5.0]);
    }

    #[test]
    fn test_symv_lower_colmajor() {
        // [[4,1,2],[1,5,3],[2,3,6]]; column-major lower triangle only
        let nan = f64::NAN;
        let a = vec![4.0, 1.0, 2.0, nan, 5.0, 3.0, nan, nan, 6.0];
        let x = vec![1.0f64, 2.0, 3.0];
        let mut y = vec![1.0f64; 3];
        symv(Layout::ColMajor, Uplo::Lower, 3, 1.0, &a, 3, &x, 1, 2.0, &mut y, 1);
        assert_eq!(y, vec![14.0, 22.0, 28.0]);
    }

    #[test]
    fn test_sbmv_spmv_match_symv() {
        let n = 4;
        let full = vec![
            4.0, 1.0, 0.0, 0.0, //
            1.0, 5.0, 2.0, 0.0, //
            0.0, 2.0, 6.0, 3.0, //
            0.0, 0.0, 3.0, 7.0,
        ];
        let x = vec![1.0f64, -1.0, 2.0, 0.5];
        let mut expect = vec![0.0f64; n];
        symv(Layout::RowMajor, Uplo::Upper, n, 1.5, &full, n, &x, 1, 0.0, &mut expect, 1);

        for layout in [Layout::RowMajor, Layout::ColMajor] {
            for uplo in [Uplo::Upper, Uplo::Lower] {
                let k = 1;
                let (kl, ku) = tri_band(uplo, k);
                let mut band = vec![0.0f64; n * (k + 1)];
                for i in 0..n {
                    for j in 0..n {
                        if uplo.contains(i, j) && i.abs_diff(j) <= k {
                            band[band_index(layout, kl, ku, i, j, k + 1)] = full[i * n + j];
                        }
                    }
                }
                let mut y = vec![0.0f64; n];
                sbmv(layout, uplo, n, k, 1.5, &band, k + 1, &x, 1, 0.0, &mut y, 1);
                assert_eq!(y, expect, "sbmv {layout:?} {uplo:?}");

                let ap = pack(layout, uplo, n, &full);
                let mut y = vec![0.0f64; n];
                spmv(layout, uplo, n, 1.5, &ap, &x, 1, 0.0, &mut y, 1);
                assert_eq!(y, expect, "spmv {layout:?} {uplo:?}");
            }
        }
    }

    #[test]
    fn test_hemv_ignores_diagonal_imaginary() {
        // Hermitian [[2, 1+i],[1-i, 3]]; diagonal imaginary parts are junk
        let a = vec![c(2.0, 7.0), c(1.0, 1.0), c(0.0, 0.0), c(3.0, -9.0)];
        let x = vec![c(1.0, 0.0), c(0.0, 1.0)];
        let mut y = vec![c(0.0, 0.0); 2];
        hemv(Layout::RowMajor, Uplo::Upper, 2, c(1.0, 0.0), &a, 2, &x, 1, c(0.0, 0.0), &mut y, 1);
        // row 0: 2*1 + (1+i)*i = 1 + i; row 1: (1-i)*1 + 3i = 1 + 2i
        assert_eq!(y, vec![c(1.0, 1.0), c(1.0, 2.0)]);

        let ap = vec![c(2.0, 7.0), c(1.0, 1.0), c(3.0, -9.0)];
        let mut yp = vec![c(0.0, 0.0); 2];
        hpmv(Layout::RowMajor, Uplo::Upper, 2, c(1.0, 0.0), &ap, &x, 1, c(0.0, 0.0), &mut yp, 1);
        assert_eq!(yp, y);

        // Column-major band with k = 1, upper: band row 0 = super, row 1 = diag
        let band = vec![c(0.0, 0.0), c(2.0, 7.0), c(1.0, 1.0), c(3.0, -9.0)];
        let mut yb = vec![c(0.0, 0.0); 2];
        hbmv(Layout::ColMajor, Uplo::Upper, 2, 1, c(1.0, 0.0), &band, 2, &x, 1, c(0.0, 0.0), &mut yb, 1);
        assert_eq!(yb, y);
    }

    #[test]
    fn test_trmv_upper() {
        // A = [[1,2],[0,3]], x = [1,1] -> [3, 3]
        let a = vec![1.0f32, 2.0, 0.0, 3.0];
        let mut x = vec![1.0f32, 1.0];
        trmv(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![3.0, 3.0]);
    }

    #[test]
    fn test_trmv_unit_diag_not_read() {
        let a = vec![f64::NAN, 2.0, 0.0, f64::NAN];
        let mut x = vec![1.0f64, 1.0];
        trmv(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, Diag::Unit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![3.0, 1.0]);
        let mut x = vec![1.0f64, 1.0];
        trmv(Layout::RowMajor, Uplo::Upper, Transpose::Trans, Diag::Unit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 3.0]);
    }

    #[test]
    fn test_trmv_fast_and_strided_paths_agree() {
        let n = 3;
        let a = vec![2.0f64, -1.0, 4.0, 0.0, 3.0, 5.0, 0.0, 0.0, 1.5];
        for trans in [Transpose::NoTrans, Transpose::Trans] {
            let mut fast = vec![1.0f64, 2.0, 3.0];
            trmv(Layout::RowMajor, Uplo::Upper, trans, Diag::NonUnit, n, &a, n, &mut fast, 1);
            // Same logical vector with stride 2
            let mut slow = vec![1.0f64, 0.0, 2.0, 0.0, 3.0];
            trmv(Layout::RowMajor, Uplo::Upper, trans, Diag::NonUnit, n, &a, n, &mut slow, 2);
            assert_eq!(fast, vec![slow[0], slow[2], slow[4]], "{trans:?}");
        }
    }

    #[test]
    fn test_trsv_lower() {
        // L = [[2,0],[1,3]], solve L x = [4, 7] -> [2, 5/3]
        let a = vec![2.0f64, 0.0, 1.0, 3.0];
        let mut x = vec![4.0f64, 7.0];
        trsv(Layout::RowMajor, Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_trsv_colmajor_trans() {
        // Column-major upper U = [[2,1],[0,4]]; solve U^T x = [2, 9] -> [1, 2]
        let a = vec![2.0f64, 0.0, 1.0, 4.0];
        let mut x = vec![2.0f64, 9.0];
        trsv(Layout::ColMajor, Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 2.0]);
    }

    #[test]
    fn test_trsv_conj_trans_complex() {
        // U = [[i, 1],[0, 2]]; U^H = [[-i, 0],[1, 2]]
        let a = vec![c(0.0, 1.0), c(1.0, 0.0), c(0.0, 0.0), c(2.0, 0.0)];
        let expect = vec![c(1.0, 1.0), c(-2.0, 0.5)];
        let mut x = expect.clone();
        trmv(Layout::RowMajor, Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x[0], c(1.0, -1.0));
        trsv(Layout::RowMajor, Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        for (got, want) in x.iter().zip(&expect) {
            assert!((got - want).norm() < 1e-12);
        }
    }

    #[test]
    fn test_trsv_zero_diagonal_propagates_inf() {
        let a = vec![0.0f64, 0.0, 0.0, 1.0];
        let mut x = vec![1.0f64, 1.0];
        trsv(Layout::RowMajor, Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert!(x[0].is_infinite());
    }

    #[test]
    fn test_band_and_packed_triangular_match_full() {
        let n = 4;
        let k = 2;
        // Upper triangular with bandwidth 2
        let mut full = vec![0.0f64; n * n];
        for i in 0..n {
            for j in i..(i + k + 1).min(n) {
                full[i * n + j] = 1.0 + (i * n + j) as f64 * 0.5;
            }
        }
        let rhs = vec![1.0f64, -2.0, 0.5, 3.0];
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            // Re-express the row-major full matrix in `layout`
            let mut a = vec![0.0f64; n * n];
            for i in 0..n {
                for j in 0..n {
                    a[layout.index(i, j, n)] = full[i * n + j];
                }
            }
            let (kl, ku) = tri_band(Uplo::Upper, k);
            let mut band = vec![0.0f64; n * (k + 1)];
            for i in 0..n {
                for j in i..(i + k + 1).min(n) {
                    band[band_index(layout, kl, ku, i, j, k + 1)] = full[i * n + j];
                }
            }
            let ap = pack(layout, Uplo::Upper, n, &full);
            for trans in [Transpose::NoTrans, Transpose::Trans] {
                let mut expect = rhs.clone();
                trmv(layout, Uplo::Upper, trans, Diag::NonUnit, n, &a, n, &mut expect, 1);
                let mut xb = rhs.clone();
                tbmv(layout, Uplo::Upper, trans, Diag::NonUnit, n, k, &band, k + 1, &mut xb, 1);
                let mut xp = rhs.clone();
                tpmv(layout, Uplo::Upper, trans, Diag::NonUnit, n, &ap, &mut xp, 1);
                assert_eq!(xb, expect, "tbmv {layout:?} {trans:?}");
                assert_eq!(xp, expect, "tpmv {layout:?} {trans:?}");

                tbsv(layout, Uplo::Upper, trans, Diag::NonUnit, n, k, &band, k + 1, &mut xb, 1);
                tpsv(layout, Uplo::Upper, trans, Diag::NonUnit, n, &ap, &mut xp, 1);
                for i in 0..n {
                    assert!((xb[i] - rhs[i]).abs() < 1e-12);
                    assert!((xp[i] - rhs[i]).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_syr_touches_declared_half_only() {
        let x = vec![1.0f64, 2.0];
        let mut a = vec![0.0f64, 0.0, -7.0, 0.0];
        syr(Layout::RowMajor, Uplo::Upper, 2, 1.0, &x, 1, &mut a, 2);
        assert_eq!(a, vec![1.0, 2.0, -7.0, 4.0]);

        let mut ap = vec![0.0f64; 3];
        spr(Layout::RowMajor, Uplo::Upper, 2, 1.0, &x, 1, &mut ap);
        assert_eq!(ap, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_syr2_lower_colmajor() {
        let x = vec![1.0f64, 0.0];
        let y = vec![0.0f64, 1.0];
        let mut a = vec![0.0f64, 0.0, 9.0, 0.0];
        syr2(Layout::ColMajor, Uplo::Lower, 2, 1.0, &x, 1, &y, 1, &mut a, 2);
        // x y^T + y x^T = [[0,1],[1,0]]; only (1,0) is stored
        assert_eq!(a, vec![0.0, 1.0, 9.0, 0.0]);

        let mut ap = vec![0.0f64; 3];
        spr2(Layout::ColMajor, Uplo::Lower, 2, 1.0, &x, 1, &y, 1, &mut ap);
        assert_eq!(ap, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_her_keeps_diagonal_real() {
        let x = vec![c(1.0, 1.0), c(0.0, 2.0)];
        let mut a = vec![c(1.0, 5.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, -3.0)];
        her(Layout::RowMajor, Uplo::Upper, 2, 1.0, &x, 1, &mut a, 2);
        // x x^H = [[2, (1+i)(-2i)], ..] = [[2, 2-2i], [.., 4]]
        assert_eq!(a[0], c(3.0, 0.0));
        assert_eq!(a[1], c(2.0, -2.0));
        assert_eq!(a[2], c(0.0, 0.0));
        assert_eq!(a[3], c(5.0, 0.0));

        let mut ap = vec![c(1.0, 5.0), c(0.0, 0.0), c(1.0, -3.0)];
        hpr(Layout::RowMajor, Uplo::Upper, 2, 1.0, &x, 1, &mut ap);
        assert_eq!(ap, vec![c(3.0, 0.0), c(2.0, -2.0), c(5.0, 0.0)]);
    }

    #[test]
    fn test_her_zero_x_still_clears_diagonal_imaginary() {
        let x = vec![c(0.0, 0.0)];
        let mut a = vec![c(2.0, 1.0)];
        her(Layout::ColMajor, Uplo::Lower, 1, 1.0, &x, 1, &mut a, 1);
        assert_eq!(a[0], c(2.0, 0.0));
    }

    #[test]
    fn test_her2_matches_definition() {
        let alpha = c(0.5, 1.0);
        let x = vec![c(1.0, -1.0), c(2.0, 0.5)];
        let y = vec![c(0.0, 1.0), c(-1.0, 1.0)];
        let mut a = vec![c(0.0, 0.0); 4];
        her2(Layout::ColMajor, Uplo::Lower, 2, alpha, &x, 1, &y, 1, &mut a, 2);
        for i in 0..2 {
            for j in 0..=i {
                let want = alpha * x[i] * y[j].conj() + alpha.conj() * y[i] * x[j].conj();
                let got = a[j * 2 + i];
                assert!((got - want).norm() < 1e-12, "({i},{j})");
            }
        }
        assert_eq!(a[2], c(0.0, 0.0));
        assert_eq!(a[0].im, 0.0);

        let mut ap = vec![c(0.0, 0.0); 3];
        hpr2(Layout::ColMajor, Uplo::Lower, 2, alpha, &x, 1, &y, 1, &mut ap);
        assert_eq!(ap, vec![a[0], a[1], a[3]]);
    }
}
