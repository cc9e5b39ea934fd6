//! Coordinate specializations of the vector container
//!
//! Three fixed-arity refinements of [`Vector`](crate::tensor::Vector):
//! [`Cartesian`] (3 components, unconstrained), [`Spherical`] (2
//! components, unconstrained), and [`Geodetic`] (2 components,
//! range-constrained). Each composes a fixed-length vector and delegates
//! all storage and arithmetic to it; the container never knows about them.

pub mod cartesian;
pub mod geodetic;
pub mod spherical;

pub use cartesian::Cartesian;
pub use geodetic::Geodetic;
pub use spherical::Spherical;
