//! # Cartesian Coordinate Type
//!
//! A 3D Cartesian coordinate built as a fixed-length refinement of the
//! generic vector container.
//!
//! ## Design Philosophy
//!
//! `Cartesian<T>` owns a [`FixedVector<T, 3>`] and adds nothing to it but
//! named access and arity-checked construction. The `x`/`y`/`z` accessors
//! index into the single underlying element sequence — there is exactly one
//! source of truth, never a stored copy of a component. All arithmetic comes
//! from the container through `Deref`; results of arithmetic are plain
//! dynamic vectors, not re-validated coordinates.
//!
//! There is deliberately no "length" or "length + fill value" constructor:
//! those only make sense when the caller chooses the length, which a
//! fixed-arity coordinate type never allows.
//!
//! ## Examples
//!
//! ```rust
//! use coordvec::coords::Cartesian;
//!
//! let a = Cartesian::new(1.0, 0.0, 0.0);
//! let b = Cartesian::new(0.0, 1.0, 0.0);
//!
//! // Arithmetic delegates to the container
//! let z = a.cross(&b).unwrap();
//! assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use nalgebra::Vector3;

use crate::errors::{Result, VectorError};
use crate::tensor::convert::{self, ConversionPolicy};
use crate::tensor::{FixedVector, Scalar};

/// 3D Cartesian coordinate: a length-3 refinement of the vector container
///
/// Components `x`, `y`, `z` alias elements 0, 1, 2 of the underlying
/// storage. No range constraint applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian<T: Scalar> {
    vec: FixedVector<T, 3>,
}

impl<T: Scalar> Cartesian<T> {
    /// Construct from the three components
    pub fn new(x: T, y: T, z: T) -> Self {
        Cartesian {
            vec: FixedVector::from_array([x, y, z]),
        }
    }

    /// Construct from three components of a possibly different type
    pub fn converted_new<U: Scalar>(x: U, y: U, z: U, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "cartesian construction")?;
        Ok(Self::new(
            convert::cast(x, "cartesian construction")?,
            convert::cast(y, "cartesian construction")?,
            convert::cast(z, "cartesian construction")?,
        ))
    }

    /// Construct from a slice, which must have exactly 3 elements
    pub fn try_from_slice(src: &[T]) -> Result<Self> {
        Self::converted_from(src, ConversionPolicy::Silent)
    }

    /// Construct from a borrowed sequence of a possibly different element
    /// type; the source must have exactly 3 elements
    pub fn converted_from<U: Scalar>(src: &[U], policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "cartesian construction")?;
        Self::adopt_items(convert::cast_slice(src, "cartesian construction")?)
    }

    /// Construct by consuming an owned sequence of a possibly different
    /// element type; the source must have exactly 3 elements
    pub fn converted_from_vec<U: Scalar>(src: Vec<U>, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "cartesian construction")?;
        Self::adopt_items(convert::cast_vec(src, "cartesian construction")?)
    }

    /// Replace all three components from a borrowed sequence, which must
    /// have exactly 3 elements; the coordinate is untouched on error
    pub fn assign_from<U: Scalar>(&mut self, src: &[U], policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, T>(policy, "cartesian assignment")?;
        let items = convert::cast_slice(src, "cartesian assignment")?;
        self.check_arity(items.len(), "cartesian assignment")?;
        self.vec.as_mut_slice().copy_from_slice(&items);
        Ok(())
    }

    /// Replace all three components by consuming an owned sequence
    pub fn assign_from_vec<U: Scalar>(&mut self, src: Vec<U>, policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, T>(policy, "cartesian assignment")?;
        let items = convert::cast_vec(src, "cartesian assignment")?;
        self.check_arity(items.len(), "cartesian assignment")?;
        self.vec.as_mut_slice().copy_from_slice(&items);
        Ok(())
    }

    /// X component (element 0)
    pub fn x(&self) -> T {
        self.vec[0]
    }

    /// Y component (element 1)
    pub fn y(&self) -> T {
        self.vec[1]
    }

    /// Z component (element 2)
    pub fn z(&self) -> T {
        self.vec[2]
    }

    /// Overwrite the X component
    pub fn set_x(&mut self, value: T) {
        self.vec[0] = value;
    }

    /// Overwrite the Y component
    pub fn set_y(&mut self, value: T) {
        self.vec[1] = value;
    }

    /// Overwrite the Z component
    pub fn set_z(&mut self, value: T) {
        self.vec[2] = value;
    }

    /// Convert to a nalgebra `Vector3` for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Create from a nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<T>) -> Self {
        Cartesian::new(vec.x, vec.y, vec.z)
    }

    fn adopt_items(items: Vec<T>) -> Result<Self> {
        match <[T; 3]>::try_from(items) {
            Ok(elems) => Ok(Cartesian {
                vec: FixedVector::from_array(elems),
            }),
            Err(items) => Err(VectorError::LengthMismatch {
                expected: 3,
                actual: items.len(),
                op: "cartesian construction",
            }),
        }
    }

    fn check_arity(&self, actual: usize, op: &'static str) -> Result<()> {
        if actual != 3 {
            return Err(VectorError::LengthMismatch {
                expected: 3,
                actual,
                op,
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Deref for Cartesian<T> {
    type Target = FixedVector<T, 3>;

    fn deref(&self) -> &FixedVector<T, 3> {
        &self.vec
    }
}

impl<T: Scalar> DerefMut for Cartesian<T> {
    fn deref_mut(&mut self) -> &mut FixedVector<T, 3> {
        &mut self.vec
    }
}

impl<T: Scalar> fmt::Display for Cartesian<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::DynVector;

    #[test]
    fn test_component_accessors_alias_storage() {
        let mut coord = Cartesian::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x(), 1.0);
        assert_eq!(coord.y(), 2.0);
        assert_eq!(coord.z(), 3.0);

        // A write through the container surface is visible through the
        // named accessor, and vice versa
        coord[0] = 10.0;
        assert_eq!(coord.x(), 10.0);
        coord.set_z(30.0);
        assert_eq!(coord[2], 30.0);
    }

    #[test]
    fn test_length_is_always_three() {
        let coord = Cartesian::new(1, 2, 3);
        assert_eq!(coord.len(), 3);

        let err = Cartesian::<i32>::try_from_slice(&[1, 2]).unwrap_err();
        assert!(matches!(err, VectorError::LengthMismatch { expected: 3, actual: 2, .. }));

        let err = Cartesian::<i32>::converted_from_vec(vec![1, 2, 3, 4], ConversionPolicy::Silent)
            .unwrap_err();
        assert!(matches!(err, VectorError::LengthMismatch { expected: 3, actual: 4, .. }));
    }

    #[test]
    fn test_converted_construction() {
        let coord = Cartesian::<f64>::converted_new(1i32, 2, 3, ConversionPolicy::Silent).unwrap();
        assert_eq!(coord.as_slice(), &[1.0, 2.0, 3.0]);

        let err = Cartesian::<f64>::converted_from(&[1i32, 2, 3], ConversionPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, VectorError::ConversionRejected { .. }));
    }

    #[test]
    fn test_assignment() {
        let mut coord = Cartesian::new(1.0, 2.0, 3.0);
        coord
            .assign_from(&[4i32, 5, 6], ConversionPolicy::Silent)
            .unwrap();
        assert_eq!(coord.as_slice(), &[4.0, 5.0, 6.0]);

        let err = coord.assign_from(&[1.0, 2.0], ConversionPolicy::Silent).unwrap_err();
        assert!(matches!(err, VectorError::LengthMismatch { .. }));
        assert_eq!(coord.as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_arithmetic_delegates_to_container() {
        let a = Cartesian::new(1, 2, 3);
        let b = Cartesian::new(4, 5, 6);

        // Results are plain containers, not re-validated coordinates
        let sum: DynVector<i32> = a.try_add(&b).unwrap();
        assert_eq!(sum.as_slice(), &[5, 7, 9]);

        let cross = a.cross(&b).unwrap();
        assert_eq!(cross.as_slice(), &[-3, 6, -3]);

        let dot = a.inner(&b).unwrap();
        assert_eq!(dot, 32);
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let coord = Cartesian::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();
        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);

        let back = Cartesian::from_vector3(vec);
        assert_eq!(back, coord);
    }

    #[test]
    fn test_display() {
        let coord = Cartesian::new(1, 2, 3);
        assert_eq!(format!("{}", coord), "[1, 2, 3]");
    }
}
