#![allow(dead_code)]

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use num_traits::Float;
use rand::{Rng, SeedableRng};
use strand_blas::{Complex64, Layout, RealScalar, Scalar, Transpose, Uplo};
use strand_core::layout::{band_index, packed_index, packed_len, vector_extent, Strided};

pub const LAYOUTS: [Layout; 2] = [Layout::RowMajor, Layout::ColMajor];
pub const TRANSPOSES: [Transpose; 3] = [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Element types the property tests sample.
pub trait Sample: Scalar + approx::RelativeEq<Epsilon = f64> {
    fn sample(rng: &mut StdRng) -> Self;
}

impl Sample for f64 {
    fn sample(rng: &mut StdRng) -> Self {
        rng.gen_range(-1.0..1.0)
    }
}

impl Sample for Complex64 {
    fn sample(rng: &mut StdRng) -> Self {
        Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    }
}

/// A NaN of any element type, used to fill storage a routine must not read.
pub fn poison<T: Scalar>() -> T {
    T::from_real(T::Real::nan())
}

pub fn random_vec<T: Sample>(rng: &mut StdRng, n: usize) -> Vec<T> {
    (0..n).map(|_| T::sample(rng)).collect()
}

/// A logical dense matrix held row-major, independent of any BLAS storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<T> {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<T>,
}

impl<T: Scalar> Dense<T> {
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    /// Lay the matrix out in BLAS storage with leading dimension `ld`,
    /// filling the padding with `pad`.
    pub fn store(&self, layout: Layout, ld: usize, pad: T) -> Vec<T> {
        let outer = match layout {
            Layout::RowMajor => self.rows,
            Layout::ColMajor => self.cols,
        };
        let mut buf = vec![pad; outer * ld];
        for i in 0..self.rows {
            for j in 0..self.cols {
                buf[layout.index(i, j, ld)] = self.get(i, j);
            }
        }
        buf
    }

    /// Store only the `uplo` triangle; everything else is `fill`.
    pub fn store_triangle(&self, layout: Layout, uplo: Uplo, ld: usize, fill: T) -> Vec<T> {
        let mut buf = self.store(layout, ld, fill);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if !uplo.contains(i, j) {
                    buf[layout.index(i, j, ld)] = fill;
                }
            }
        }
        buf
    }

    /// Packed storage of the `uplo` triangle of a square matrix.
    pub fn store_packed(&self, layout: Layout, uplo: Uplo) -> Vec<T> {
        let n = self.rows;
        let mut ap = vec![T::zero(); packed_len(n)];
        for i in 0..n {
            for j in 0..n {
                if uplo.contains(i, j) {
                    ap[packed_index(layout, uplo, n, i, j)] = self.get(i, j);
                }
            }
        }
        ap
    }

    /// Band storage with `kl` sub- and `ku` super-diagonals; unused slots are `fill`.
    pub fn store_band(&self, layout: Layout, kl: usize, ku: usize, ld: usize, fill: T) -> Vec<T> {
        let outer = match layout {
            Layout::RowMajor => self.rows,
            Layout::ColMajor => self.cols,
        };
        let mut buf = vec![fill; outer * ld];
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j <= i + ku && i <= j + kl {
                    buf[band_index(layout, kl, ku, i, j, ld)] = self.get(i, j);
                }
            }
        }
        buf
    }

    /// Zero everything outside the band.
    pub fn banded(&self, kl: usize, ku: usize) -> Self {
        Self::from_fn(self.rows, self.cols, |i, j| {
            if j <= i + ku && i <= j + kl {
                self.get(i, j)
            } else {
                T::zero()
            }
        })
    }

    /// The triangle as a logical matrix, with ones on the diagonal when `unit`.
    pub fn triangle(&self, uplo: Uplo, unit: bool) -> Self {
        Self::from_fn(self.rows, self.cols, |i, j| {
            if i == j && unit {
                T::one()
            } else if uplo.contains(i, j) {
                self.get(i, j)
            } else {
                T::zero()
            }
        })
    }

    /// Read a `rows x cols` matrix back out of BLAS storage.
    pub fn load(layout: Layout, rows: usize, cols: usize, buf: &[T], ld: usize) -> Self {
        Self::from_fn(rows, cols, |i, j| buf[layout.index(i, j, ld)])
    }

    pub fn op(&self, trans: Transpose) -> Self {
        match trans {
            Transpose::NoTrans => self.clone(),
            Transpose::Trans => Self::from_fn(self.cols, self.rows, |i, j| self.get(j, i)),
            Transpose::ConjTrans => Self::from_fn(self.cols, self.rows, |i, j| self.get(j, i).conj()),
        }
    }

    pub fn matmul(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows);
        Self::from_fn(self.rows, other.cols, |i, j| {
            let mut s = T::zero();
            for p in 0..self.cols {
                s += self.get(i, p) * other.get(p, j);
            }
            s
        })
    }

    pub fn matvec(&self, x: &[T]) -> Vec<T> {
        (0..self.rows)
            .map(|i| {
                let mut s = T::zero();
                for j in 0..self.cols {
                    s += self.get(i, j) * x[j];
                }
                s
            })
            .collect()
    }
}

impl<T: Sample> Dense<T> {
    pub fn random(rng: &mut StdRng, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: random_vec(rng, rows * cols),
        }
    }

    /// Random symmetric matrix, or Hermitian with a real diagonal when `herm`.
    pub fn symmetric(rng: &mut StdRng, n: usize, herm: bool) -> Self {
        let a = Self::random(rng, n, n);
        Self::from_fn(n, n, |i, j| match (i.cmp(&j), herm) {
            (std::cmp::Ordering::Greater, true) => a.get(j, i).conj(),
            (std::cmp::Ordering::Greater, false) => a.get(j, i),
            (std::cmp::Ordering::Equal, true) => T::from_real(a.get(i, i).re()),
            _ => a.get(i, j),
        })
    }

    /// Random triangular matrix with a dominant diagonal, zero outside `upper`'s triangle.
    pub fn triangular(rng: &mut StdRng, n: usize, upper: bool) -> Self {
        let mut m = Self::random(rng, n, n);
        for i in 0..n {
            for j in 0..n {
                let inside = if upper { i <= j } else { i >= j };
                if !inside {
                    m.data[i * n + j] = T::zero();
                }
            }
            m.data[i * n + i] += T::from_real(T::Real::narrow((n + 2) as f64));
        }
        m
    }
}

/// Lay out a logical vector with increment `inc`; the gaps hold `fill`.
pub fn strided<T: Scalar>(v: &[T], inc: isize, fill: T) -> Vec<T> {
    let mut buf = vec![fill; vector_extent(v.len(), inc)];
    let s = Strided::new(v.len(), inc);
    for (i, &vi) in v.iter().enumerate() {
        buf[s.at(i)] = vi;
    }
    buf
}

/// Read `n` logical elements back out of a strided buffer.
pub fn logical<T: Scalar>(buf: &[T], n: usize, inc: isize) -> Vec<T> {
    let s = Strided::new(n, inc);
    (0..n).map(|i| buf[s.at(i)]).collect()
}

pub fn assert_close<T: Sample>(got: &[T], want: &[T], tol: f64) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        assert_relative_eq!(*g, *w, epsilon = tol);
    }
}
