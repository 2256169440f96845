//! Error types for argument validation.
//!
//! The kernels never return errors; these are produced by the optional
//! `checked` layer in `strand-blas`, which validates a call's contract
//! before forwarding it.

use thiserror::Error;

/// Result type alias using [`BlasError`].
pub type Result<T> = std::result::Result<T, BlasError>;

/// A violated calling contract, naming the routine and the argument at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    /// A vector increment of zero.
    #[error("{routine}: {arg} must be non-zero")]
    ZeroStride {
        routine: &'static str,
        arg: &'static str,
    },

    /// A buffer shorter than the extent its dimensions and stride imply.
    #[error("{routine}: {arg} has {len} elements but the call addresses {needed}")]
    BufferTooShort {
        routine: &'static str,
        arg: &'static str,
        len: usize,
        needed: usize,
    },

    /// A leading dimension below the minor extent (or band width) it must cover.
    #[error("{routine}: {arg} = {ld} is smaller than the required {min}")]
    LeadingDimension {
        routine: &'static str,
        arg: &'static str,
        ld: usize,
        min: usize,
    },

    /// A selector value the routine does not accept for this element type.
    #[error("{routine}: {arg} = {value} is not accepted: {reason}")]
    InvalidSelector {
        routine: &'static str,
        arg: &'static str,
        value: &'static str,
        reason: &'static str,
    },
}

impl BlasError {
    /// Name of the routine that rejected the call.
    pub fn routine(&self) -> &'static str {
        match self {
            BlasError::ZeroStride { routine, .. }
            | BlasError::BufferTooShort { routine, .. }
            | BlasError::LeadingDimension { routine, .. }
            | BlasError::InvalidSelector { routine, .. } => routine,
        }
    }

    /// Name of the offending argument.
    pub fn arg(&self) -> &'static str {
        match self {
            BlasError::ZeroStride { arg, .. }
            | BlasError::BufferTooShort { arg, .. }
            | BlasError::LeadingDimension { arg, .. }
            | BlasError::InvalidSelector { arg, .. } => arg,
        }
    }
}
