//! Coordvec: generic 1D numeric vectors with coordinate specializations
//!
//! This crate provides a one-dimensional vector container with dual sizing
//! modes (fixed compile-time length or growable runtime length), mixed-type
//! arithmetic with numeric promotion, and three coordinate-system
//! specializations layered on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use coordvec::{Cartesian, DynVector, Geodetic};
//!
//! // Dynamic vector arithmetic with type promotion
//! let a = DynVector::from_slice(&[1, 2, 3]);
//! let b = DynVector::from_slice(&[0.5, 0.5, 0.5]);
//! let sum = a.try_add(&b).unwrap();
//! assert_eq!(sum.as_slice(), &[1.5, 2.5, 3.5]);
//!
//! // Fixed-arity coordinate types delegate arithmetic to the container
//! let x = Cartesian::new(1.0, 0.0, 0.0);
//! let y = Cartesian::new(0.0, 1.0, 0.0);
//! assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
//!
//! // Geodetic coordinates validate their range on every construction
//! assert!(Geodetic::new(91.0, 0.0).is_err());
//! ```

pub mod coords;
pub mod errors;
pub mod tensor;

// Re-export commonly used types
pub use coords::{Cartesian, Geodetic, Spherical};
pub use errors::{Result, VectorError};
pub use tensor::{
    ConversionPolicy, DynVector, FixedVector, Orientation, Promote, Promoted, Scalar, Vector,
};
