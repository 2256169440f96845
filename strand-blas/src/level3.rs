//! BLAS Level 3: Matrix-matrix operations.
//!
//! Every product is reduced to contiguous inner products: rows of `op(A)`
//! and columns of `op(B)` are gathered (and conjugated where the operation
//! asks for it) into contiguous buffers once, then each output element is a
//! single `kernel::dot`. Rows that are already contiguous and unconjugated
//! are borrowed in place.
//!
//! Triangular multiply and solve (`trmm`, `trsm`) treat the columns (left
//! side) or rows (right side) of `B` as independent triangular systems and
//! hand each to the level 2 triangular kernels.

use crate::level2::{tri_mv, tri_sv};
use std::borrow::Cow;
use strand_core::kernel;
use strand_core::layout::Strided;
use strand_core::{Diag, Layout, Scalar, Side, Transpose, Uplo};

// ============================================================================
// Gather helpers
// ============================================================================

/// Contiguous image of row `idx` (or column `idx` when `col` is set) of a
/// stored matrix, `len` elements long, conjugated when `conj` is set.
/// Borrowed when the run is already unit-stride and needs no conjugation.
fn line<T: Scalar>(
    layout: Layout,
    col: bool,
    conj: bool,
    a: &[T],
    ld: usize,
    idx: usize,
    len: usize,
) -> Cow<'_, [T]> {
    let (start, stride) = if col {
        layout.col(idx, ld)
    } else {
        layout.row(idx, ld)
    };
    if stride == 1 && !(conj && T::IS_COMPLEX) {
        return Cow::Borrowed(&a[start..start + len]);
    }
    let mut buf = kernel::gather_run(a, start, len, stride);
    if conj {
        buf.iter_mut().for_each(|v| *v = v.conj());
    }
    Cow::Owned(buf)
}

/// Row `i` of `op(A)` with `k` elements.
#[inline]
fn op_row<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    a: &[T],
    lda: usize,
    i: usize,
    k: usize,
) -> Cow<'_, [T]> {
    line(layout, trans.is_trans(), trans.is_conj(), a, lda, i, k)
}

/// Column `j` of `op(B)` with `k` elements.
#[inline]
fn op_col<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    b: &[T],
    ldb: usize,
    j: usize,
    k: usize,
) -> Cow<'_, [T]> {
    line(layout, !trans.is_trans(), trans.is_conj(), b, ldb, j, k)
}

/// Element `(i, j)` of a symmetric (or Hermitian) matrix whose `uplo`
/// triangle is stored. The other triangle is never read; the Hermitian
/// diagonal is taken as real.
#[inline(always)]
fn sym_elem<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    a: &[T],
    lda: usize,
    i: usize,
    j: usize,
) -> T {
    if herm && i == j {
        T::from_real(a[layout.index(i, i, lda)].re())
    } else if uplo.contains(i, j) {
        a[layout.index(i, j, lda)]
    } else {
        a[layout.index(j, i, lda)].conj_if(herm)
    }
}

/// `C := beta * C` over a full `m x n` matrix; `beta == 0` writes zeros
/// without reading `C`.
fn scale_matrix<T: Scalar>(layout: Layout, m: usize, n: usize, beta: T, c: &mut [T], ldc: usize) {
    if beta == T::one() {
        return;
    }
    // Scale along the contiguous dimension.
    let (outer, inner) = match layout {
        Layout::RowMajor => (m, n),
        Layout::ColMajor => (n, m),
    };
    for o in 0..outer {
        kernel::scal(beta, &mut c[o * ldc..o * ldc + inner]);
    }
}

/// Row `i`'s column range inside the `uplo` triangle of an `n x n` matrix.
#[inline(always)]
fn tri_cols(uplo: Uplo, n: usize, i: usize) -> (usize, usize) {
    match uplo {
        Uplo::Upper => (i, n),
        Uplo::Lower => (0, i + 1),
    }
}

/// `C := beta * C` over the `uplo` triangle. With `herm`, the diagonal is
/// reduced to its real part before scaling.
fn scale_triangle<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    let zero = beta == T::zero();
    for i in 0..n {
        let (lo, hi) = tri_cols(uplo, n, i);
        for j in lo..hi {
            let idx = layout.index(i, j, ldc);
            if zero {
                c[idx] = T::zero();
            } else if herm && i == j {
                c[idx] = T::from_real(c[idx].re()) * beta;
            } else if beta != T::one() {
                c[idx] *= beta;
            }
        }
    }
}

/// `C += update(i, j)` over the `uplo` triangle, keeping only the real part
/// of the diagonal update when `herm` is set.
fn update_triangle<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    c: &mut [T],
    ldc: usize,
    update: impl Fn(usize, usize) -> T,
) {
    for i in 0..n {
        let (lo, hi) = tri_cols(uplo, n, i);
        for j in lo..hi {
            let idx = layout.index(i, j, ldc);
            let u = update(i, j);
            if herm && i == j {
                c[idx] = T::from_real(c[idx].re() + u.re());
            } else {
                c[idx] += u;
            }
        }
    }
}

// ============================================================================
// GEMM: General Matrix Multiply
// C := alpha * op(A) * op(B) + beta * C
// ============================================================================

/// General matrix multiply: `C := alpha * op(A) * op(B) + beta * C`.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`. Columns of
/// `op(B)` are gathered once and reused across all rows of `op(A)`.
/// `beta == 0` overwrites `C` without reading it, and `alpha == 0` never
/// reads `A` or `B`.
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
) {
    if m == 0 || n == 0 {
        return;
    }
    scale_matrix(layout, m, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }

    // Pre-gather op(B) columns: k elements per column, n columns.
    let mut b_cols = Vec::with_capacity(n * k);
    for j in 0..n {
        b_cols.extend_from_slice(&op_col(layout, trans_b, b, ldb, j, k));
    }

    for i in 0..m {
        let a_row = op_row(layout, trans_a, a, lda, i, k);
        for j in 0..n {
            let dot = kernel::dot(&a_row, &b_cols[j * k..(j + 1) * k]);
            c[layout.index(i, j, ldc)] += alpha * dot;
        }
    }
}

// ============================================================================
// SYMM / HEMM: Symmetric / Hermitian matrix multiply
// C := alpha * A * B + beta * C  or  C := alpha * B * A + beta * C
// ============================================================================

fn sym_mm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    herm: bool,
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
) {
    if m == 0 || n == 0 {
        return;
    }
    scale_matrix(layout, m, n, beta, c, ldc);
    if alpha == T::zero() {
        return;
    }

    match side {
        Side::Left => {
            // C[i,j] += alpha * sum_p(A[i,p] * B[p,j]), A is m x m
            let mut b_cols = Vec::with_capacity(n * m);
            for j in 0..n {
                b_cols.extend_from_slice(&line(layout, true, false, b, ldb, j, m));
            }
            let mut a_row = vec![T::zero(); m];
            for i in 0..m {
                for (p, v) in a_row.iter_mut().enumerate() {
                    *v = sym_elem(layout, uplo, herm, a, lda, i, p);
                }
                for j in 0..n {
                    let dot = kernel::dot(&a_row, &b_cols[j * m..(j + 1) * m]);
                    c[layout.index(i, j, ldc)] += alpha * dot;
                }
            }
        }
        Side::Right => {
            // C[i,j] += alpha * sum_p(B[i,p] * A[p,j]), A is n x n
            let mut a_cols = Vec::with_capacity(n * n);
            for j in 0..n {
                for p in 0..n {
                    a_cols.push(sym_elem(layout, uplo, herm, a, lda, p, j));
                }
            }
            for i in 0..m {
                let b_row = line(layout, false, false, b, ldb, i, n);
                for j in 0..n {
                    let dot = kernel::dot(&b_row, &a_cols[j * n..(j + 1) * n]);
                    c[layout.index(i, j, ldc)] += alpha * dot;
                }
            }
        }
    }
}

/// Symmetric matrix multiply: `C := alpha * A * B + beta * C` (`Side::Left`)
/// or `C := alpha * B * A + beta * C` (`Side::Right`), reading only the
/// `uplo` triangle of `A`.
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
) {
    sym_mm(layout, side, uplo, false, m, n, alpha, a, lda, b, ldb, beta, c, ldc);
}

/// Hermitian matrix multiply; as [`symm`] with the mirrored triangle
/// conjugated and the diagonal of `A` taken as real.
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
) {
    sym_mm(layout, side, uplo, true, m, n, alpha, a, lda, b, ldb, beta, c, ldc);
}

// ============================================================================
// SYRK / HERK: Symmetric / Hermitian rank-k update
// C := alpha * op(A) * op(A)^T + beta * C
// ============================================================================

/// Rows of `op(A)` (`n` rows of `k` elements). With `conj_trans` the
/// transposed forms are conjugated, giving the rows of `A^H`.
fn op_rows<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    conj_trans: bool,
    a: &[T],
    lda: usize,
    n: usize,
    k: usize,
) -> Vec<Cow<'_, [T]>> {
    let t = trans.is_trans();
    (0..n)
        .map(|i| line(layout, t, t && conj_trans, a, lda, i, k))
        .collect()
}

/// Symmetric rank-k update: `C := alpha * A * A^T + beta * C` (`NoTrans`)
/// or `C := alpha * A^T * A + beta * C` (`Trans`). `A` is `n x k` or
/// `k x n` respectively; only the `uplo` triangle of `C` is touched.
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
) {
    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return;
    }
    scale_triangle(layout, uplo, false, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }
    let rows = op_rows(layout, trans, false, a, lda, n, k);
    update_triangle(layout, uplo, false, n, c, ldc, |i, j| {
        alpha * kernel::dot(&rows[i], &rows[j])
    });
}

/// Hermitian rank-k update: `C := alpha * A * A^H + beta * C` (`NoTrans`)
/// or `C := alpha * A^H * A + beta * C` (`ConjTrans`), with real `alpha`
/// and `beta`. The diagonal of `C` is left with a zero imaginary part.
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
) {
    let alpha = T::from_real(alpha);
    let beta = T::from_real(beta);
    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return;
    }
    scale_triangle(layout, uplo, true, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }
    let rows = op_rows(layout, trans, true, a, lda, n, k);
    // C[i,j] = sum_p r_i[p] * conj(r_j[p])
    update_triangle(layout, uplo, true, n, c, ldc, |i, j| {
        alpha * kernel::dotc(&rows[j], &rows[i])
    });
}

// ============================================================================
// SYR2K / HER2K: Symmetric / Hermitian rank-2k update
// ============================================================================

/// Symmetric rank-2k update:
/// `C := alpha * A * B^T + alpha * B * A^T + beta * C` (`NoTrans`) or
/// `C := alpha * A^T * B + alpha * B^T * A + beta * C` (`Trans`).
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
) {
    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return;
    }
    scale_triangle(layout, uplo, false, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }
    let a_rows = op_rows(layout, trans, false, a, lda, n, k);
    let b_rows = op_rows(layout, trans, false, b, ldb, n, k);
    update_triangle(layout, uplo, false, n, c, ldc, |i, j| {
        alpha * (kernel::dot(&a_rows[i], &b_rows[j]) + kernel::dot(&b_rows[i], &a_rows[j]))
    });
}

/// Hermitian rank-2k update:
/// `C := alpha * A * B^H + conj(alpha) * B * A^H + beta * C` (`NoTrans`) or
/// `C := alpha * A^H * B + conj(alpha) * B^H * A + beta * C` (`ConjTrans`),
/// with real `beta`. The diagonal of `C` is left with a zero imaginary part.
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
) {
    let beta = T::from_real(beta);
    if n == 0 || ((alpha == T::zero() || k == 0) && beta == T::one()) {
        return;
    }
    scale_triangle(layout, uplo, true, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }
    let a_rows = op_rows(layout, trans, true, a, lda, n, k);
    let b_rows = op_rows(layout, trans, true, b, ldb, n, k);
    let alpha_conj = alpha.conj();
    update_triangle(layout, uplo, true, n, c, ldc, |i, j| {
        alpha * kernel::dotc(&b_rows[j], &a_rows[i])
            + alpha_conj * kernel::dotc(&a_rows[j], &b_rows[i])
    });
}

// ============================================================================
// TRMM / TRSM: Triangular multiply / solve with multiple right-hand sides
// B := alpha * op(A) * B,  B := alpha * B * op(A)
// op(A) * X = alpha * B,   X * op(A) = alpha * B
// ============================================================================

/// Visit the independent triangular systems of `B`: its columns when `A`
/// multiplies from the left, its rows when from the right.
///
/// A row `b_i` of `B` times `op(A)` is `op(A)^T * b_i`, so the right side
/// transposes the operator: `A` becomes `A^T`, `A^T` becomes `A` and `A^H`
/// becomes `conj(A)`. `visit` receives `(trans, conj, x, stride)`.
fn for_each_system<T: Scalar>(
    layout: Layout,
    side: Side,
    trans: Transpose,
    m: usize,
    n: usize,
    b: &mut [T],
    ldb: usize,
    mut visit: impl FnMut(bool, bool, &mut [T], Strided),
) {
    match side {
        Side::Left => {
            for j in 0..n {
                let (start, stride) = layout.col(j, ldb);
                let sx = Strided::new(m, stride as isize);
                visit(trans.is_trans(), trans.is_conj(), &mut b[start..], sx);
            }
        }
        Side::Right => {
            for i in 0..m {
                let (start, stride) = layout.row(i, ldb);
                let sx = Strided::new(n, stride as isize);
                visit(!trans.is_trans(), trans.is_conj(), &mut b[start..], sx);
            }
        }
    }
}

/// Triangular matrix multiply: `B := alpha * op(A) * B` (`Side::Left`, `A`
/// is `m x m`) or `B := alpha * B * op(A)` (`Side::Right`, `A` is `n x n`).
///
/// `alpha == 0` zeroes `B` without reading `A`.
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
) {
    if m == 0 || n == 0 {
        return;
    }
    scale_matrix(layout, m, n, alpha, b, ldb);
    if alpha == T::zero() {
        return;
    }
    let order = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let stored = |i: usize, j: usize| a[layout.index(i, j, lda)];
    for_each_system(layout, side, trans, m, n, b, ldb, |t, conj, x, sx| {
        tri_mv(uplo, t, conj, diag, order, order - 1, stored, x, sx);
    });
}

/// Triangular solve with multiple right-hand sides: `op(A) * X = alpha * B`
/// (`Side::Left`) or `X * op(A) = alpha * B` (`Side::Right`); `X`
/// overwrites `B`.
///
/// No singularity test is performed. `alpha == 0` zeroes `B` without
/// reading `A`.
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
) {
    if m == 0 || n == 0 {
        return;
    }
    scale_matrix(layout, m, n, alpha, b, ldb);
    if alpha == T::zero() {
        return;
    }
    let order = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let stored = |i: usize, j: usize| a[layout.index(i, j, lda)];
    for_each_system(layout, side, trans, m, n, b, ldb, |t, conj, x, sx| {
        tri_sv(uplo, t, conj, diag, order, order - 1, stored, x, sx);
    });
}
