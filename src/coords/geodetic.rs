//! # Geodetic Coordinate Type
//!
//! Latitude/longitude pairs as a length-2 refinement of the vector
//! container, with a range invariant the other coordinate types do not
//! have: latitude must lie in [-90, 90] degrees and longitude in
//! [-180, 180].
//!
//! The invariant is checked on every construction path and every assignment
//! path, before any storage is touched, so no instance holding an
//! out-of-range value is ever observable — not even transiently inside a
//! failed constructor. There is no "invalid-but-constructed" state.
//!
//! Because an unchecked mutable handle on the underlying container could be
//! driven out of range, `Geodetic` exposes only a read `Deref`; mutation
//! goes through the validated setters and `assign_*` methods.
//!
//! ## Examples
//!
//! ```rust
//! use coordvec::coords::Geodetic;
//!
//! let sydney = Geodetic::new(-33.87, 151.21).unwrap();
//! assert_eq!(sydney.lat(), -33.87);
//!
//! // Out-of-range latitude fails, naming the field and bounds
//! assert!(Geodetic::new(91.0, 0.0).is_err());
//! ```

use std::fmt;
use std::ops::Deref;

use crate::errors::{Result, VectorError};
use crate::tensor::convert::{self, ConversionPolicy};
use crate::tensor::{FixedVector, Scalar};

/// Inclusive latitude bounds in degrees
pub const LAT_BOUNDS: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees
pub const LON_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Geodetic coordinate: latitude and longitude in degrees, in that order
///
/// `lat` aliases element 0 and `lon` element 1 of the underlying storage.
/// Every successfully constructed or assigned instance satisfies the range
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic<T: Scalar> {
    vec: FixedVector<T, 2>,
}

fn check_bound<T: Scalar>(field: &'static str, value: T, bounds: (f64, f64)) -> Result<()> {
    let (min, max) = bounds;
    // A value with no finite f64 rendering cannot satisfy the invariant
    let v = value.to_f64().unwrap_or(f64::NAN);
    if !(v >= min && v <= max) {
        return Err(VectorError::Range {
            field,
            value: value.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

fn check_range<T: Scalar>(lat: T, lon: T) -> Result<()> {
    check_bound("lat", lat, LAT_BOUNDS)?;
    check_bound("lon", lon, LON_BOUNDS)
}

impl<T: Scalar> Geodetic<T> {
    /// Construct from latitude and longitude, validating both bounds
    pub fn new(lat: T, lon: T) -> Result<Self> {
        check_range(lat, lon)?;
        Ok(Geodetic {
            vec: FixedVector::from_array([lat, lon]),
        })
    }

    /// Construct from components of a possibly different type
    pub fn converted_new<U: Scalar>(lat: U, lon: U, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "geodetic construction")?;
        Self::new(
            convert::cast(lat, "geodetic construction")?,
            convert::cast(lon, "geodetic construction")?,
        )
    }

    /// Construct from a slice, which must have exactly 2 in-range elements
    pub fn try_from_slice(src: &[T]) -> Result<Self> {
        Self::converted_from(src, ConversionPolicy::Silent)
    }

    /// Construct from a borrowed sequence of a possibly different element
    /// type; the source must have exactly 2 in-range elements
    pub fn converted_from<U: Scalar>(src: &[U], policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "geodetic construction")?;
        Self::adopt_items(convert::cast_slice(src, "geodetic construction")?)
    }

    /// Construct by consuming an owned sequence of a possibly different
    /// element type; the source must have exactly 2 in-range elements
    pub fn converted_from_vec<U: Scalar>(src: Vec<U>, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "geodetic construction")?;
        Self::adopt_items(convert::cast_vec(src, "geodetic construction")?)
    }

    /// Replace both components from a borrowed sequence, which must have
    /// exactly 2 in-range elements; the coordinate is untouched on error
    ///
    /// Re-assigning a coordinate's own current values always succeeds.
    pub fn assign_from<U: Scalar>(&mut self, src: &[U], policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, T>(policy, "geodetic assignment")?;
        let items = convert::cast_slice(src, "geodetic assignment")?;
        if items.len() != 2 {
            return Err(VectorError::LengthMismatch {
                expected: 2,
                actual: items.len(),
                op: "geodetic assignment",
            });
        }
        check_range(items[0], items[1])?;
        self.vec.as_mut_slice().copy_from_slice(&items);
        Ok(())
    }

    /// Replace both components by consuming an owned sequence
    pub fn assign_from_vec<U: Scalar>(&mut self, src: Vec<U>, policy: ConversionPolicy) -> Result<()> {
        self.assign_from(&src, policy)
    }

    /// Latitude in degrees (element 0)
    pub fn lat(&self) -> T {
        self.vec[0]
    }

    /// Longitude in degrees (element 1)
    pub fn lon(&self) -> T {
        self.vec[1]
    }

    /// Overwrite the latitude, validating its bound
    pub fn set_lat(&mut self, value: T) -> Result<()> {
        check_bound("lat", value, LAT_BOUNDS)?;
        self.vec[0] = value;
        Ok(())
    }

    /// Overwrite the longitude, validating its bound
    pub fn set_lon(&mut self, value: T) -> Result<()> {
        check_bound("lon", value, LON_BOUNDS)?;
        self.vec[1] = value;
        Ok(())
    }

    fn adopt_items(items: Vec<T>) -> Result<Self> {
        match <[T; 2]>::try_from(items) {
            Ok([lat, lon]) => Self::new(lat, lon),
            Err(items) => Err(VectorError::LengthMismatch {
                expected: 2,
                actual: items.len(),
                op: "geodetic construction",
            }),
        }
    }
}

impl<T: Scalar> Deref for Geodetic<T> {
    type Target = FixedVector<T, 2>;

    fn deref(&self) -> &FixedVector<T, 2> {
        &self.vec
    }
}

impl<T: Scalar> fmt::Display for Geodetic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}
