//! Conversion policy for cross-type construction and assignment
//!
//! Building a vector from a sequence of a different element type performs an
//! implicit numeric cast per element. The cast itself always succeeds or
//! fails deterministically; what varies is how loudly the type mismatch is
//! reported. That choice is a [`ConversionPolicy`] passed into every
//! cross-type entry point rather than a hard-coded console write, so the
//! behavior is testable and suppressible.

use std::any::{type_name, TypeId};

use log::warn;
use num_traits::NumCast;

use crate::errors::{Result, VectorError};
use crate::tensor::promote::Scalar;

/// How a cross-type construction or assignment reports the type mismatch
///
/// The default is [`Warn`](ConversionPolicy::Warn): the operation succeeds
/// and a non-blocking diagnostic is logged. Same-type operations never
/// report anything under any policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionPolicy {
    /// Convert without comment
    Silent,
    /// Convert and emit a `log::warn!` diagnostic naming both types
    #[default]
    Warn,
    /// Refuse the operation with [`VectorError::ConversionRejected`]
    Reject,
}

/// Apply the policy once per operation, before any elements are cast
///
/// Emits the conversion notice (or rejects) when and only when the source
/// and destination element types differ.
pub(crate) fn notice<U: Scalar, T: Scalar>(policy: ConversionPolicy, op: &'static str) -> Result<()> {
    if TypeId::of::<U>() == TypeId::of::<T>() {
        return Ok(());
    }
    match policy {
        ConversionPolicy::Silent => Ok(()),
        ConversionPolicy::Warn => {
            warn!(
                "{} performing implicit conversion from {} to {}",
                op,
                type_name::<U>(),
                type_name::<T>()
            );
            Ok(())
        }
        ConversionPolicy::Reject => Err(VectorError::ConversionRejected {
            from: type_name::<U>(),
            to: type_name::<T>(),
            op,
        }),
    }
}

/// Checked numeric cast of a single element
///
/// Unlike a C-style cast this never wraps: a value with no representation in
/// the destination type is an error, not a reinterpretation.
pub(crate) fn cast<U: Scalar, T: Scalar>(value: U, op: &'static str) -> Result<T> {
    <T as NumCast>::from(value).ok_or_else(|| VectorError::ConversionOverflow {
        value: value.to_string(),
        target: type_name::<T>(),
        op,
    })
}

/// Cast a borrowed sequence element by element, validating before anything
/// else mutates
pub(crate) fn cast_slice<U: Scalar, T: Scalar>(src: &[U], op: &'static str) -> Result<Vec<T>> {
    src.iter().map(|&value| cast(value, op)).collect()
}

/// Cast an owned sequence element by element
pub(crate) fn cast_vec<U: Scalar, T: Scalar>(src: Vec<U>, op: &'static str) -> Result<Vec<T>> {
    src.into_iter().map(|value| cast(value, op)).collect()
}
