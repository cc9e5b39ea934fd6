//! Spherical coordinate type
//!
//! Azimuth/elevation pairs as a length-2 refinement of the vector
//! container. No range constraint applies and no angle normalization is
//! performed: values are stored exactly as given, wrapped or not.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::errors::{Result, VectorError};
use crate::tensor::convert::{self, ConversionPolicy};
use crate::tensor::{FixedVector, Scalar};

/// Spherical coordinate: azimuth and elevation, in that order
///
/// `az` aliases element 0 and `el` element 1 of the underlying storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical<T: Scalar> {
    vec: FixedVector<T, 2>,
}

impl<T: Scalar> Spherical<T> {
    /// Construct from azimuth and elevation
    pub fn new(az: T, el: T) -> Self {
        Spherical {
            vec: FixedVector::from_array([az, el]),
        }
    }

    /// Construct from components of a possibly different type
    pub fn converted_new<U: Scalar>(az: U, el: U, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "spherical construction")?;
        Ok(Self::new(
            convert::cast(az, "spherical construction")?,
            convert::cast(el, "spherical construction")?,
        ))
    }

    /// Construct from a slice, which must have exactly 2 elements
    pub fn try_from_slice(src: &[T]) -> Result<Self> {
        Self::converted_from(src, ConversionPolicy::Silent)
    }

    /// Construct from a borrowed sequence of a possibly different element
    /// type; the source must have exactly 2 elements
    pub fn converted_from<U: Scalar>(src: &[U], policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "spherical construction")?;
        Self::adopt_items(convert::cast_slice(src, "spherical construction")?)
    }

    /// Construct by consuming an owned sequence of a possibly different
    /// element type; the source must have exactly 2 elements
    pub fn converted_from_vec<U: Scalar>(src: Vec<U>, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "spherical construction")?;
        Self::adopt_items(convert::cast_vec(src, "spherical construction")?)
    }

    /// Replace both components from a borrowed sequence, which must have
    /// exactly 2 elements; the coordinate is untouched on error
    pub fn assign_from<U: Scalar>(&mut self, src: &[U], policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, T>(policy, "spherical assignment")?;
        let items = convert::cast_slice(src, "spherical assignment")?;
        if items.len() != 2 {
            return Err(VectorError::LengthMismatch {
                expected: 2,
                actual: items.len(),
                op: "spherical assignment",
            });
        }
        self.vec.as_mut_slice().copy_from_slice(&items);
        Ok(())
    }

    /// Replace both components by consuming an owned sequence
    pub fn assign_from_vec<U: Scalar>(&mut self, src: Vec<U>, policy: ConversionPolicy) -> Result<()> {
        self.assign_from(&src, policy)
    }

    /// Azimuth (element 0)
    pub fn az(&self) -> T {
        self.vec[0]
    }

    /// Elevation (element 1)
    pub fn el(&self) -> T {
        self.vec[1]
    }

    /// Overwrite the azimuth
    pub fn set_az(&mut self, value: T) {
        self.vec[0] = value;
    }

    /// Overwrite the elevation
    pub fn set_el(&mut self, value: T) {
        self.vec[1] = value;
    }

    fn adopt_items(items: Vec<T>) -> Result<Self> {
        match <[T; 2]>::try_from(items) {
            Ok(elems) => Ok(Spherical {
                vec: FixedVector::from_array(elems),
            }),
            Err(items) => Err(VectorError::LengthMismatch {
                expected: 2,
                actual: items.len(),
                op: "spherical construction",
            }),
        }
    }
}

impl<T: Scalar> Deref for Spherical<T> {
    type Target = FixedVector<T, 2>;

    fn deref(&self) -> &FixedVector<T, 2> {
        &self.vec
    }
}

impl<T: Scalar> DerefMut for Spherical<T> {
    fn deref_mut(&mut self) -> &mut FixedVector<T, 2> {
        &mut self.vec
    }
}

impl<T: Scalar> fmt::Display for Spherical<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_alias_storage() {
        let mut coord = Spherical::new(45.0, 30.0);
        assert_eq!(coord.az(), 45.0);
        assert_eq!(coord.el(), 30.0);

        coord.set_az(90.0);
        assert_eq!(coord[0], 90.0);
        coord[1] = -10.0;
        assert_eq!(coord.el(), -10.0);
    }

    #[test]
    fn test_no_normalization() {
        // Values outside any conventional angular range are stored as given
        let coord = Spherical::new(720.0, -450.0);
        assert_eq!(coord.az(), 720.0);
        assert_eq!(coord.el(), -450.0);
    }

    #[test]
    fn test_length_is_always_two() {
        let coord = Spherical::new(1.0, 2.0);
        assert_eq!(coord.len(), 2);

        let err = Spherical::<f64>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, VectorError::LengthMismatch { expected: 2, actual: 3, .. }));
    }

    #[test]
    fn test_converted_construction_and_assignment() {
        let coord = Spherical::<f64>::converted_new(45i32, 30, ConversionPolicy::Silent).unwrap();
        assert_eq!(coord.as_slice(), &[45.0, 30.0]);

        let mut coord = Spherical::<f64>::converted_from(&[1.0f32, 2.0], ConversionPolicy::Warn)
            .unwrap();
        coord
            .assign_from_vec(vec![3i64, 4], ConversionPolicy::Silent)
            .unwrap();
        assert_eq!(coord.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_arithmetic_delegates_to_container() {
        let a = Spherical::new(1.0, 2.0);
        let b = Spherical::new(3.0, 4.0);

        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.as_slice(), &[4.0, 6.0]);

        // Cross product is 3D-only; a pair of 2-element operands is an
        // arity error even though the lengths match
        assert!(matches!(
            a.cross(&b).unwrap_err(),
            VectorError::Arity { required: 3, actual: 2, .. }
        ));
    }
}
