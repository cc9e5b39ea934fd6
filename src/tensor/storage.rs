//! # Vector Storage Variants
//!
//! The container supports two sizing modes: a length pinned at compile time
//! and a length free to vary at runtime. Rather than branching on the mode
//! inside every constructor, the length policy lives here, behind one trait:
//!
//! - [`Fixed<T, N>`] — inline `[T; N]` storage; adopting a source whose
//!   length is not exactly `N` is a length-mismatch error
//! - [`Dynamic<T>`] — growable `Vec<T>` storage; adopts any length
//!
//! Construction and assignment logic in [`vector`](super::vector) is written
//! once against [`Storage`] and dispatched per variant.

use crate::errors::{Result, VectorError};
use crate::tensor::promote::Scalar;

/// Shared interface over the two storage variants
///
/// Exposes length, slice access, and the length-policed handover operations
/// used by every constructor and assignment path.
pub trait Storage: Sized {
    /// Element type held by this storage
    type Elem: Scalar;

    /// Number of elements currently held
    fn len(&self) -> usize;

    /// Borrow the elements in order
    fn as_slice(&self) -> &[Self::Elem];

    /// Mutably borrow the elements in order
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Build a storage holding exactly `items`, enforcing this variant's
    /// length policy; `op` names the calling operation for error messages
    fn from_exact(items: Vec<Self::Elem>, op: &'static str) -> Result<Self>;

    /// Replace the held elements with `items` under the same length policy,
    /// leaving the storage untouched on error
    fn adopt(&mut self, items: Vec<Self::Elem>, op: &'static str) -> Result<()>;
}

/// Fixed-length inline storage: the length is always exactly `N`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed<T: Scalar, const N: usize> {
    elems: [T; N],
}

impl<T: Scalar, const N: usize> Fixed<T, N> {
    /// Zero-initialized storage
    pub(crate) fn zeroed() -> Self {
        Fixed {
            elems: [T::zero(); N],
        }
    }

    /// Wrap an array of exactly the right length
    pub(crate) fn from_array(elems: [T; N]) -> Self {
        Fixed { elems }
    }
}

impl<T: Scalar, const N: usize> Storage for Fixed<T, N> {
    type Elem = T;

    fn len(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[T] {
        &self.elems
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    fn from_exact(items: Vec<T>, op: &'static str) -> Result<Self> {
        let elems: [T; N] = items.try_into().map_err(|items: Vec<T>| {
            VectorError::LengthMismatch {
                expected: N,
                actual: items.len(),
                op,
            }
        })?;
        Ok(Fixed { elems })
    }

    fn adopt(&mut self, items: Vec<T>, op: &'static str) -> Result<()> {
        if items.len() != N {
            return Err(VectorError::LengthMismatch {
                expected: N,
                actual: items.len(),
                op,
            });
        }
        self.elems.copy_from_slice(&items);
        Ok(())
    }
}

/// Dynamic-length heap storage: the length tracks whatever was last adopted
#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic<T: Scalar> {
    elems: Vec<T>,
}

impl<T: Scalar> Dynamic<T> {
    /// Empty storage
    pub(crate) fn empty() -> Self {
        Dynamic { elems: Vec::new() }
    }

    /// Wrap an owned sequence without copying
    pub(crate) fn from_vec(elems: Vec<T>) -> Self {
        Dynamic { elems }
    }

    /// Append a single element
    pub(crate) fn push(&mut self, value: T) {
        self.elems.push(value);
    }
}

impl<T: Scalar> Storage for Dynamic<T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.elems.len()
    }

    fn as_slice(&self) -> &[T] {
        &self.elems
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    fn from_exact(items: Vec<T>, _op: &'static str) -> Result<Self> {
        Ok(Dynamic { elems: items })
    }

    fn adopt(&mut self, items: Vec<T>, _op: &'static str) -> Result<()> {
        self.elems = items;
        Ok(())
    }
}
