// BLAS functions match CBLAS signatures; many parameters are inherent to the API.
// Numeric kernels use index loops on packed arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # Strand BLAS
//!
//! Dense BLAS level 1/2/3 kernels in pure Rust, with CBLAS argument
//! conventions and no FFI.
//!
//! Every routine is generic over the element type and instantiated for
//! `f32`, `f64`, `Complex32` and `Complex64`, so `dot::<f32>` is `sdot`,
//! `gemm::<Complex64>` is `zgemm`, and so on.
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `dot`, `dotc`, `sdsdot`, `dsdot`, `nrm2`, `asum`,
//!   `iamax`, `copy`, `swap`, `axpy`, `scal`, `rscal`, `rot`, `rotg`, `rotm`, `rotmg`
//! - **Level 2** (matrix-vector): `gemv`, `gbmv`, `trmv`, `tbmv`, `tpmv`, `trsv`,
//!   `tbsv`, `tpsv`, `symv`, `sbmv`, `spmv`, `hemv`, `hbmv`, `hpmv`, `ger`, `geru`,
//!   `gerc`, `syr`, `spr`, `her`, `hpr`, `syr2`, `spr2`, `her2`, `hpr2`
//! - **Level 3** (matrix-matrix): `gemm`, `symm`, `hemm`, `syrk`, `herk`, `syr2k`,
//!   `her2k`, `trmm`, `trsm`
//!
//! ## Memory Layout
//!
//! Both row-major and column-major layouts are supported via the CBLAS-style
//! `Layout` parameter, with explicit leading dimensions. Vector increments are
//! signed; a negative increment walks the buffer from its far end.
//!
//! ## Contracts
//!
//! The kernels trust their arguments: an undersized buffer panics on a slice
//! bound, nothing is validated on the hot path. The [`checked`] module (Cargo
//! feature `checked`, on by default) wraps every buffer-taking kernel with the
//! same argument list and returns a [`BlasError`] instead.
//!
//! ```
//! use strand_blas::level3;
//! use strand_blas::{Layout, Transpose};
//!
//! let (m, n, k) = (2, 2, 3);
//! let a = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let b = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let mut c = vec![0.0f64; m * n];
//!
//! level3::gemm(Layout::RowMajor, Transpose::NoTrans, Transpose::NoTrans,
//!              m, n, k, 1.0, &a, k, &b, n, 0.0, &mut c, n);
//! assert_eq!(c, vec![22.0, 28.0, 49.0, 64.0]);
//! ```

#[cfg(feature = "checked")]
pub mod checked;
pub mod level1;
pub mod level2;
pub mod level3;

// Re-export selectors and element types for convenience
pub use strand_core::layout::{Diag, Layout, Side, Transpose, Uplo};
pub use strand_core::{BlasError, Complex32, Complex64, RealScalar, Result, Scalar};

// Re-export the rotation parameter types
pub use level1::{Givens, RotmFlag, RotmParams, Rotmg};
