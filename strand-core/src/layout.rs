//! CBLAS-style selectors and storage addressing.
//!
//! Every kernel in strand resolves its operands through this module: the
//! selector enums carry the CBLAS discriminants, and the offset helpers map a
//! logical `(row, column)` or vector index onto a position in the caller's
//! flat buffer for full, packed and banded storage.
//!
//! None of these helpers check bounds. An offset outside the buffer surfaces
//! as a slice index panic in the kernel that uses it.

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    #[default]
    RowMajor = 101,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor = 102,
}

/// Transpose operation for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose (for complex types).
    ConjTrans = 113,
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

/// BLAS side specifier (left/right multiplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

impl Layout {
    /// Leading dimension stride for an M x N matrix.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Linear index into a flat array for element (i, j) of an M x N matrix.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }

    /// Start offset and element stride of row `i`.
    #[inline(always)]
    pub fn row(self, i: usize, ld: usize) -> (usize, usize) {
        match self {
            Layout::RowMajor => (i * ld, 1),
            Layout::ColMajor => (i, ld),
        }
    }

    /// Start offset and element stride of column `j`.
    #[inline(always)]
    pub fn col(self, j: usize, ld: usize) -> (usize, usize) {
        match self {
            Layout::RowMajor => (j, ld),
            Layout::ColMajor => (j * ld, 1),
        }
    }
}

impl Transpose {
    /// True for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }

    /// True only for `ConjTrans`.
    #[inline(always)]
    pub fn is_conj(self) -> bool {
        matches!(self, Transpose::ConjTrans)
    }

    /// Shape `(rows, cols)` of `op(A)` for a stored `rows x cols` matrix.
    #[inline(always)]
    pub fn apply_dims(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (rows, cols),
            Transpose::Trans | Transpose::ConjTrans => (cols, rows),
        }
    }
}

impl Uplo {
    /// Whether `(i, j)` lies in this triangle, diagonal included.
    #[inline(always)]
    pub fn contains(self, i: usize, j: usize) -> bool {
        match self {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        }
    }
}

impl Diag {
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        matches!(self, Diag::Unit)
    }
}

/// Number of elements in packed storage of an `n x n` triangle.
#[inline(always)]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of element `(i, j)` in packed triangular storage.
///
/// `(i, j)` must lie in the `uplo` triangle. Column-major storage walks the
/// triangle column by column, row-major row by row:
///
/// | layout   | uplo  | offset                         |
/// |----------|-------|--------------------------------|
/// | ColMajor | Upper | `i + j(j+1)/2`                 |
/// | ColMajor | Lower | `i + j(2n-j-1)/2`              |
/// | RowMajor | Upper | `j + i(2n-i-1)/2`              |
/// | RowMajor | Lower | `j + i(i+1)/2`                 |
#[inline(always)]
pub fn packed_index(layout: Layout, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    match (layout, uplo) {
        (Layout::ColMajor, Uplo::Upper) => i + j * (j + 1) / 2,
        (Layout::ColMajor, Uplo::Lower) => i + j * (2 * n - j - 1) / 2,
        (Layout::RowMajor, Uplo::Upper) => j + i * (2 * n - i - 1) / 2,
        (Layout::RowMajor, Uplo::Lower) => j + i * (i + 1) / 2,
    }
}

/// Offset of element `(i, j)` of a band matrix with `kl` sub-diagonals and
/// `ku` super-diagonals.
///
/// Row-major band storage keeps each matrix row in one band row, with the
/// main diagonal in column `kl`. Column-major keeps each matrix column in
/// one band column, with the main diagonal in row `ku`. `(i, j)` must
/// satisfy `j <= i + ku` and `i <= j + kl`.
#[inline(always)]
pub fn band_index(layout: Layout, kl: usize, ku: usize, i: usize, j: usize, ld: usize) -> usize {
    match layout {
        Layout::RowMajor => i * ld + kl + j - i,
        Layout::ColMajor => j * ld + ku + i - j,
    }
}

/// `(kl, ku)` of a triangular or symmetric band matrix with `k` off-diagonals.
#[inline(always)]
pub fn tri_band(uplo: Uplo, k: usize) -> (usize, usize) {
    match uplo {
        Uplo::Upper => (0, k),
        Uplo::Lower => (k, 0),
    }
}

/// Offset map for a strided vector view.
///
/// Logical element `i` of an `n`-element view with stride `inc` sits at
/// `i * inc` when `inc > 0` and at `(n - 1 - i) * |inc|` when `inc < 0`, so
/// the slice handed to a kernel always begins at the lowest address touched
/// and the logical order is the same for either sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strided {
    origin: isize,
    inc: isize,
}

impl Strided {
    #[inline(always)]
    pub fn new(n: usize, inc: isize) -> Self {
        let origin = if inc < 0 && n > 0 {
            (n as isize - 1) * -inc
        } else {
            0
        };
        Self { origin, inc }
    }

    /// Buffer offset of logical element `i`.
    #[inline(always)]
    pub fn at(self, i: usize) -> usize {
        (self.origin + i as isize * self.inc) as usize
    }
}

/// Minimum buffer length for an `n`-element vector with stride `inc`.
#[inline(always)]
pub fn vector_extent(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) * inc.unsigned_abs()
    }
}

/// Minimum buffer length for an `rows x cols` matrix with leading dimension `ld`.
#[inline(always)]
pub fn matrix_extent(layout: Layout, rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    match layout {
        Layout::RowMajor => (rows - 1) * ld + cols,
        Layout::ColMajor => (cols - 1) * ld + rows,
    }
}
