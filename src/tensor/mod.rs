//! Generic one-dimensional vector container
//!
//! The [`Vector`] type and its supporting machinery: the two storage
//! variants ([`storage`]), numeric promotion for mixed-type arithmetic
//! ([`promote`]), and the conversion policy for cross-type construction
//! ([`convert`]). The coordinate types in [`coords`](crate::coords) are
//! fixed-length refinements of this container and delegate all storage and
//! arithmetic to it.

pub mod convert;
pub mod promote;
pub mod storage;
pub mod vector;

pub use convert::ConversionPolicy;
pub use promote::{Promote, Promoted, Scalar};
pub use storage::{Dynamic, Fixed, Storage};
pub use vector::{DynVector, FixedVector, Orientation, Vector};
