//! # Generic Vector Container
//!
//! A one-dimensional numeric container generic over its element type and its
//! [`Storage`] variant. The two type aliases name the two sizing modes:
//!
//! - [`FixedVector<T, N>`] — length pinned to `N` at compile time
//! - [`DynVector<T>`] — length free to vary at runtime
//!
//! Every vector carries an [`Orientation`] (row or column), set once at
//! construction and never changed. The orientation is informational within
//! this crate; no transpose semantics are implemented.
//!
//! ## Arithmetic
//!
//! All arithmetic is pure: operands are never mutated and the result is a
//! freshly allocated [`DynVector`] whose element type is the promoted common
//! type of the operand element types (see [`promote`](super::promote)). The
//! result carries the left operand's orientation.
//!
//! Elementwise multiply/divide broadcast a length-1 operand on either side;
//! add/subtract deliberately do not. That asymmetry is part of the contract
//! and is pinned down in the test suite.
//!
//! ## Examples
//!
//! ```rust
//! use coordvec::tensor::{DynVector, FixedVector};
//!
//! let a = FixedVector::<i32, 3>::from_array([1, 2, 3]);
//! let b = DynVector::from_slice(&[4.5, 6.7, 8.9]);
//!
//! // Mixed-type inner product promotes to f64
//! let dot: f64 = a.inner(&b).unwrap();
//! assert!((dot - 44.6).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::zero;

use crate::errors::{Result, VectorError};
use crate::tensor::convert::{self, ConversionPolicy};
use crate::tensor::promote::{self, Promote, Promoted, Scalar};
use crate::tensor::storage::{Dynamic, Fixed, Storage};

/// Row/column tag attached to a vector at construction
///
/// Exactly one of row/column holds for any vector. Parsed from the
/// single-character tags `'r'` and `'c'`; anything else falls back to the
/// column default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Row vector
    Row,
    /// Column vector (the default)
    #[default]
    Column,
}

impl Orientation {
    /// Parse an orientation from its single-character tag
    pub fn from_tag(tag: char) -> Self {
        if tag == 'r' {
            Orientation::Row
        } else {
            Orientation::Column
        }
    }

    /// True for row vectors
    pub fn is_row(self) -> bool {
        self == Orientation::Row
    }

    /// True for column vectors
    pub fn is_col(self) -> bool {
        self == Orientation::Column
    }
}

/// One-dimensional numeric vector over a [`Storage`] variant
///
/// See the [module documentation](self) for the construction and arithmetic
/// contracts. Most code names this type through the [`FixedVector`] and
/// [`DynVector`] aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<S: Storage> {
    storage: S,
    orientation: Orientation,
}

/// Vector whose length is pinned to `N` at compile time
pub type FixedVector<T, const N: usize> = Vector<Fixed<T, N>>;

/// Vector whose length may vary at runtime
pub type DynVector<T> = Vector<Dynamic<T>>;

impl<S: Storage> Vector<S> {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when the vector holds no elements
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// The orientation chosen at construction
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// True for row vectors
    pub fn is_row(&self) -> bool {
        self.orientation.is_row()
    }

    /// True for column vectors
    pub fn is_col(&self) -> bool {
        self.orientation.is_col()
    }

    /// Choose the orientation as part of construction
    ///
    /// Consumes and returns the vector so it chains onto a constructor; the
    /// orientation is fixed from then on.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Borrow the elements in order
    pub fn as_slice(&self) -> &[S::Elem] {
        self.storage.as_slice()
    }

    /// Mutably borrow the elements in order
    pub fn as_mut_slice(&mut self) -> &mut [S::Elem] {
        self.storage.as_mut_slice()
    }

    /// Element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&S::Elem> {
        self.storage.as_slice().get(index)
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, S::Elem> {
        self.storage.as_slice().iter()
    }

    //***************************** CONVERSION *****************************

    /// Construct from a borrowed sequence of a possibly different element
    /// type
    ///
    /// Each element is cast with overflow checking; when the element types
    /// differ, `policy` decides whether the mismatch is silent, logged, or
    /// rejected. Fixed-length targets require the source length to equal `N`
    /// exactly.
    pub fn converted_from<U: Scalar>(src: &[U], policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, S::Elem>(policy, "vector construction")?;
        let items = convert::cast_slice(src, "vector construction")?;
        Ok(Vector {
            storage: S::from_exact(items, "vector construction")?,
            orientation: Orientation::default(),
        })
    }

    /// Construct by consuming an owned sequence of a possibly different
    /// element type
    ///
    /// Same contract as [`converted_from`](Self::converted_from).
    pub fn converted_from_vec<U: Scalar>(src: Vec<U>, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, S::Elem>(policy, "vector construction")?;
        let items = convert::cast_vec(src, "vector construction")?;
        Ok(Vector {
            storage: S::from_exact(items, "vector construction")?,
            orientation: Orientation::default(),
        })
    }

    /// Replace the contents from a borrowed sequence of a possibly different
    /// element type
    ///
    /// Fixed-length targets require an exact length match; dynamic targets
    /// adopt the foreign length. On any error the vector is left unchanged.
    /// The orientation never changes.
    pub fn assign_from<U: Scalar>(&mut self, src: &[U], policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, S::Elem>(policy, "vector assignment")?;
        let items = convert::cast_slice(src, "vector assignment")?;
        self.storage.adopt(items, "vector assignment")
    }

    /// Replace the contents by consuming an owned sequence of a possibly
    /// different element type
    ///
    /// Same contract as [`assign_from`](Self::assign_from).
    pub fn assign_from_vec<U: Scalar>(&mut self, src: Vec<U>, policy: ConversionPolicy) -> Result<()> {
        convert::notice::<U, S::Elem>(policy, "vector assignment")?;
        let items = convert::cast_vec(src, "vector assignment")?;
        self.storage.adopt(items, "vector assignment")
    }

    //***************************** ELEMENTWISE ****************************

    /// Elementwise addition; operands must have equal length
    pub fn try_add<S2>(&self, other: &Vector<S2>) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        self.zip_exact(other, "elementwise addition", |a, b| a + b)
    }

    /// Elementwise subtraction; operands must have equal length
    pub fn try_sub<S2>(&self, other: &Vector<S2>) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        self.zip_exact(other, "elementwise subtraction", |a, b| a - b)
    }

    /// Elementwise multiplication; equal lengths, or a length-1 operand on
    /// either side broadcasts against the other
    pub fn try_mul<S2>(&self, other: &Vector<S2>) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        self.zip_broadcast(other, "elementwise multiplication", |a, b| a * b)
    }

    /// Elementwise division; equal lengths, or a length-1 operand on either
    /// side broadcasts against the other
    pub fn try_div<S2>(&self, other: &Vector<S2>) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        self.zip_broadcast(other, "elementwise division", |a, b| a / b)
    }

    //***************************** PRODUCTS *******************************

    /// Inner product: the sum of pairwise products as a single scalar
    ///
    /// Operands must have equal length.
    pub fn inner<S2>(&self, other: &Vector<S2>) -> Result<Promoted<S::Elem, S2::Elem>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        if other.len() != self.len() {
            return Err(VectorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
                op: "inner product",
            });
        }
        let mut acc = zero::<Promoted<S::Elem, S2::Elem>>();
        for (&a, &b) in self.iter().zip(other.iter()) {
            let (wa, wb) = promote::pair(a, b);
            acc = acc + wa * wb;
        }
        Ok(acc)
    }

    /// Cross product via the determinant expansion
    ///
    /// A 3D-only operation: both operands must have length exactly 3, and
    /// any other length (including equal-but-non-3 lengths) is an arity
    /// error.
    pub fn cross<S2>(&self, other: &Vector<S2>) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
    {
        if self.len() != 3 {
            return Err(VectorError::Arity {
                required: 3,
                actual: self.len(),
                op: "cross product",
            });
        }
        if other.len() != 3 {
            return Err(VectorError::Arity {
                required: 3,
                actual: other.len(),
                op: "cross product",
            });
        }

        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let (a0, b0) = promote::pair(lhs[0], rhs[0]);
        let (a1, b1) = promote::pair(lhs[1], rhs[1]);
        let (a2, b2) = promote::pair(lhs[2], rhs[2]);

        let elems = vec![a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0];
        Ok(DynVector::from_vec(elems).with_orientation(self.orientation))
    }

    //***************************** SCALARS ********************************

    /// Add the same scalar to every element
    pub fn scalar_add<U: Scalar>(&self, scalar: U) -> DynVector<Promoted<S::Elem, U>>
    where
        S::Elem: Promote<U>,
    {
        self.map_scalar(scalar, |a, b| a + b)
    }

    /// Subtract the same scalar from every element
    pub fn scalar_sub<U: Scalar>(&self, scalar: U) -> DynVector<Promoted<S::Elem, U>>
    where
        S::Elem: Promote<U>,
    {
        self.map_scalar(scalar, |a, b| a - b)
    }

    /// Multiply every element by the same scalar
    pub fn scalar_mul<U: Scalar>(&self, scalar: U) -> DynVector<Promoted<S::Elem, U>>
    where
        S::Elem: Promote<U>,
    {
        self.map_scalar(scalar, |a, b| a * b)
    }

    /// Divide every element by the same scalar
    pub fn scalar_div<U: Scalar>(&self, scalar: U) -> DynVector<Promoted<S::Elem, U>>
    where
        S::Elem: Promote<U>,
    {
        self.map_scalar(scalar, |a, b| a / b)
    }

    //***************************** HELPERS ********************************

    fn zip_exact<S2, F>(
        &self,
        other: &Vector<S2>,
        op: &'static str,
        combine: F,
    ) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
        F: Fn(Promoted<S::Elem, S2::Elem>, Promoted<S::Elem, S2::Elem>) -> Promoted<S::Elem, S2::Elem>,
    {
        if other.len() != self.len() {
            return Err(VectorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
                op,
            });
        }
        let elems = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| {
                let (wa, wb) = promote::pair(a, b);
                combine(wa, wb)
            })
            .collect();
        Ok(DynVector::from_vec(elems).with_orientation(self.orientation))
    }

    fn zip_broadcast<S2, F>(
        &self,
        other: &Vector<S2>,
        op: &'static str,
        combine: F,
    ) -> Result<DynVector<Promoted<S::Elem, S2::Elem>>>
    where
        S2: Storage,
        S::Elem: Promote<S2::Elem>,
        F: Fn(Promoted<S::Elem, S2::Elem>, Promoted<S::Elem, S2::Elem>) -> Promoted<S::Elem, S2::Elem>,
    {
        if self.len() != other.len() && self.len() != 1 && other.len() != 1 {
            return Err(VectorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
                op,
            });
        }

        // A length-1 side repeats its single element against the other
        let len = if self.len() == 1 { other.len() } else { self.len() };
        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let elems = (0..len)
            .map(|i| {
                let a = lhs[if lhs.len() == 1 { 0 } else { i }];
                let b = rhs[if rhs.len() == 1 { 0 } else { i }];
                let (wa, wb) = promote::pair(a, b);
                combine(wa, wb)
            })
            .collect();
        Ok(DynVector::from_vec(elems).with_orientation(self.orientation))
    }

    fn map_scalar<U, F>(&self, scalar: U, combine: F) -> DynVector<Promoted<S::Elem, U>>
    where
        U: Scalar,
        S::Elem: Promote<U>,
        F: Fn(Promoted<S::Elem, U>, Promoted<S::Elem, U>) -> Promoted<S::Elem, U>,
    {
        let elems = self
            .iter()
            .map(|&a| {
                let (wa, wb) = promote::pair(a, scalar);
                combine(wa, wb)
            })
            .collect();
        DynVector::from_vec(elems).with_orientation(self.orientation)
    }
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// Zero-initialized vector of length `N`
    pub fn zeroed() -> Self {
        Vector {
            storage: Fixed::zeroed(),
            orientation: Orientation::default(),
        }
    }

    /// Wrap an array of exactly the right length
    pub fn from_array(elems: [T; N]) -> Self {
        Vector {
            storage: Fixed::from_array(elems),
            orientation: Orientation::default(),
        }
    }

    /// Construct from a slice whose length must equal `N` exactly
    pub fn try_from_slice(src: &[T]) -> Result<Self> {
        Self::converted_from(src, ConversionPolicy::Silent)
    }

    /// Fill the first `len` elements with `value`, leaving the rest zero
    ///
    /// `len` must not exceed `N`.
    pub fn filled(len: usize, value: T) -> Result<Self> {
        if len > N {
            return Err(VectorError::LengthMismatch {
                expected: N,
                actual: len,
                op: "fill construction",
            });
        }
        let mut elems = [T::zero(); N];
        for slot in elems.iter_mut().take(len) {
            *slot = value;
        }
        Ok(Self::from_array(elems))
    }

    /// Fill with a value of a possibly different type, under `policy`
    pub fn filled_from<U: Scalar>(len: usize, value: U, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "fill construction")?;
        let value = convert::cast(value, "fill construction")?;
        Self::filled(len, value)
    }
}

impl<T: Scalar> DynVector<T> {
    /// Empty vector
    pub fn new() -> Self {
        Vector {
            storage: Dynamic::empty(),
            orientation: Orientation::default(),
        }
    }

    /// Copy the elements of a slice
    pub fn from_slice(src: &[T]) -> Self {
        Self::from_vec(src.to_vec())
    }

    /// Take ownership of an existing sequence without copying
    pub fn from_vec(elems: Vec<T>) -> Self {
        Vector {
            storage: Dynamic::from_vec(elems),
            orientation: Orientation::default(),
        }
    }

    /// Vector of `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }

    /// Fill with a value of a possibly different type, under `policy`
    pub fn filled_from<U: Scalar>(len: usize, value: U, policy: ConversionPolicy) -> Result<Self> {
        convert::notice::<U, T>(policy, "fill construction")?;
        let value = convert::cast(value, "fill construction")?;
        Ok(Self::filled(len, value))
    }

    /// Append a single element
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }
}

impl<T: Scalar> Default for DynVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> Index<usize> for Vector<S> {
    type Output = S::Elem;

    fn index(&self, index: usize) -> &S::Elem {
        &self.storage.as_slice()[index]
    }
}

impl<S: Storage> IndexMut<usize> for Vector<S> {
    fn index_mut(&mut self, index: usize) -> &mut S::Elem {
        &mut self.storage.as_mut_slice()[index]
    }
}

impl<'a, S: Storage> IntoIterator for &'a Vector<S> {
    type Item = &'a S::Elem;
    type IntoIter = std::slice::Iter<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Renders as `[e0, e1, ..., en-1]`; diagnostics only, not a persisted
/// format
impl<S: Storage> fmt::Display for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}
