//! # Strand Core
//!
//! Shared building blocks for the strand BLAS kernels.
//!
//! This crate provides:
//! - **CBLAS selectors**: `Layout`, `Transpose`, `Uplo`, `Diag`, `Side`, with the
//!   CBLAS enum discriminants.
//! - **Storage addressing**: offsets for full, packed and banded matrices and for
//!   strided vectors with signed increments.
//! - **Element traits**: `Scalar` / `RealScalar` over `f32`, `f64`, `Complex32`,
//!   `Complex64`.
//! - **Inner-loop kernels**: contiguous dot/axpy/scal primitives and the strided
//!   gather/scatter helpers the BLAS levels build on.
//! - **Errors**: the `BlasError` taxonomy used by the validating wrappers.

pub mod error;
pub mod kernel;
pub mod layout;
pub mod scalar;

pub use error::{BlasError, Result};
pub use layout::{Diag, Layout, Side, Strided, Transpose, Uplo};
pub use num_complex::{Complex32, Complex64};
pub use scalar::{RealScalar, Scalar};
