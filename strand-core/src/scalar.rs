//! Element traits for the four BLAS element types.
//!
//! `Scalar` is implemented for `f32`, `f64`, `Complex32` and `Complex64`.
//! Kernels are written once against it and monomorphized per type, so the
//! real instantiations compile down to the same loops a hand-written
//! `sgemv`/`dgemv` would use: `conj` is the identity and `im` is zero.

use num_complex::Complex;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// A BLAS element type: real or complex, single or double precision.
pub trait Scalar:
    Copy + Send + Sync + Debug + PartialEq + NumAssign + Neg<Output = Self> + 'static
{
    /// The underlying real type (`Self` for real types).
    type Real: RealScalar;

    /// Whether the type carries an imaginary part.
    const IS_COMPLEX: bool;

    /// Complex conjugate; identity for real types.
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part; zero for real types.
    fn im(self) -> Self::Real;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;

    /// `|re| + |im|`, the magnitude used by `asum` and `iamax`.
    #[inline(always)]
    fn abs1(self) -> Self::Real {
        self.re().abs() + self.im().abs()
    }

    /// Multiply by a real factor.
    fn scale_real(self, r: Self::Real) -> Self;

    /// `conj(self)` when `conj` is set.
    #[inline(always)]
    fn conj_if(self, conj: bool) -> Self {
        if conj {
            self.conj()
        } else {
            self
        }
    }
}

/// Real element types (`f32`, `f64`).
pub trait RealScalar: Scalar<Real = Self> + Float {
    /// Widen to `f64` for mixed-precision accumulation.
    fn widen(self) -> f64;

    /// Narrow from `f64`.
    fn narrow(v: f64) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = $t;
                const IS_COMPLEX: bool = false;

                #[inline(always)]
                fn conj(self) -> Self {
                    self
                }

                #[inline(always)]
                fn re(self) -> Self {
                    self
                }

                #[inline(always)]
                fn im(self) -> Self {
                    0.0
                }

                #[inline(always)]
                fn from_real(re: Self) -> Self {
                    re
                }

                #[inline(always)]
                fn abs1(self) -> Self {
                    self.abs()
                }

                #[inline(always)]
                fn scale_real(self, r: Self) -> Self {
                    self * r
                }
            }

            impl RealScalar for $t {
                #[inline(always)]
                fn widen(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn narrow(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_real_scalar!(f32, f64);

impl<R: RealScalar> Scalar for Complex<R> {
    type Real = R;
    const IS_COMPLEX: bool = true;

    #[inline(always)]
    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    #[inline(always)]
    fn re(self) -> R {
        self.re
    }

    #[inline(always)]
    fn im(self) -> R {
        self.im
    }

    #[inline(always)]
    fn from_real(re: R) -> Self {
        Complex::new(re, R::zero())
    }

    #[inline(always)]
    fn scale_real(self, r: R) -> Self {
        Complex::new(self.re * r, self.im * r)
    }
}
