//! # Numeric Type Promotion
//!
//! Mixed-type arithmetic needs a single result type both operand types can
//! widen into without loss. This module encodes the usual arithmetic
//! conversions over the primitive numeric grid as a trait, so the vector
//! arithmetic in [`vector`](super::vector) can be written once, generically.
//!
//! ## Promotion Rules
//!
//! - Floating point beats integer (`i32` + `f64` → `f64`)
//! - Wider beats narrower within a signedness (`i16` + `i64` → `i64`)
//! - Mixed signed/unsigned promotes to the narrowest signed type that
//!   represents both (`i32` + `u16` → `i32`, `i8` + `u8` → `i16`)
//! - `u64` against a signed type has no common signed representation and
//!   follows the C convention of promoting to `u64`
//!
//! ## Examples
//!
//! ```rust
//! use coordvec::tensor::{Promote, Promoted};
//!
//! fn common<A: Promote<B>, B: coordvec::tensor::Scalar>(a: A, b: B) -> Promoted<A, B> {
//!     A::widen_lhs(a) + A::widen_rhs(b)
//! }
//!
//! let sum = common(1i32, 2.5f64);
//! assert_eq!(sum, 3.5f64);
//! ```

use std::fmt;

use num_traits::{Num, NumCast};

/// Element types the vector container accepts
///
/// A blanket umbrella over the numeric machinery every element type needs:
/// value semantics, ring arithmetic, checked casting, ordering, and the
/// formatting used by rendering and error messages.
pub trait Scalar:
    Copy + Num + NumCast + PartialOrd + fmt::Display + fmt::Debug + 'static
{
}

impl<T> Scalar for T where
    T: Copy + Num + NumCast + PartialOrd + fmt::Display + fmt::Debug + 'static
{
}

/// Common arithmetic type of `Self` and `Rhs`
///
/// `Output` is the promoted type; `widen_lhs`/`widen_rhs` are the lossless
/// (or, for the `u64`-vs-signed corner, C-conventional) widening casts into
/// it. Implemented for every ordered pair of primitive numeric types.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The common type both operands widen into
    type Output: Scalar;

    /// Widen the left operand
    fn widen_lhs(lhs: Self) -> <Self as Promote<Rhs>>::Output;

    /// Widen the right operand
    fn widen_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for the common type of two element types
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Widen both sides of a mixed-type operand pair at once
#[inline]
pub(crate) fn pair<A: Promote<B>, B: Scalar>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>) {
    (A::widen_lhs(a), A::widen_rhs(b))
}

macro_rules! promote_self {
    ($($t:ty),* $(,)?) => {$(
        impl Promote<$t> for $t {
            type Output = $t;
            #[inline]
            fn widen_lhs(lhs: $t) -> $t {
                lhs
            }
            #[inline]
            fn widen_rhs(rhs: $t) -> $t {
                rhs
            }
        }
    )*};
}

macro_rules! promote_pair {
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {$(
        impl Promote<$b> for $a {
            type Output = $out;
            #[inline]
            fn widen_lhs(lhs: $a) -> $out {
                lhs as $out
            }
            #[inline]
            fn widen_rhs(rhs: $b) -> $out {
                rhs as $out
            }
        }
        impl Promote<$a> for $b {
            type Output = $out;
            #[inline]
            fn widen_lhs(lhs: $b) -> $out {
                lhs as $out
            }
            #[inline]
            fn widen_rhs(rhs: $a) -> $out {
                rhs as $out
            }
        }
    )*};
}

promote_self!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

promote_pair! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, u8 => i16;
    i8, u16 => i32;
    i8, u32 => i64;
    i8, u64 => u64;
    i8, f32 => f32;
    i8, f64 => f64;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, u8 => i16;
    i16, u16 => i32;
    i16, u32 => i64;
    i16, u64 => u64;
    i16, f32 => f32;
    i16, f64 => f64;
    i32, i64 => i64;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => i64;
    i32, u64 => u64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i64, u64 => u64;
    i64, f32 => f32;
    i64, f64 => f64;
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, f32 => f32;
    u8, f64 => f64;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, f32 => f32;
    u16, f64 => f64;
    u32, u64 => u64;
    u32, f32 => f32;
    u32, f64 => f64;
    u64, f32 => f32;
    u64, f64 => f64;
    f32, f64 => f64;
}
