//! Error types for the coordvec library
//!
//! Every failure in this crate is synchronous and catchable: a precondition
//! violation returns one of the variants below immediately, with no partial
//! mutation of either operand. There is no process-terminating category.

use thiserror::Error;

/// Main error type for vector and coordinate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A fixed-length target received a source of the wrong length, or
    /// elementwise operands differ in length without one being broadcastable
    #[error("{op} requires length {expected}, got {actual}")]
    LengthMismatch {
        /// The length the operation required
        expected: usize,
        /// The length it actually received
        actual: usize,
        /// The operation that was attempted
        op: &'static str,
    },

    /// An operation with a fixed operand arity (cross product) received an
    /// operand of the wrong length
    #[error("{op} requires operands of length {required}, got {actual}")]
    Arity {
        /// The arity the operation is defined for
        required: usize,
        /// The offending operand's length
        actual: usize,
        /// The operation that was attempted
        op: &'static str,
    },

    /// A coordinate component fell outside its valid bounds
    #[error("{field} must be within [{min}, {max}], got {value}")]
    Range {
        /// The named field that failed validation
        field: &'static str,
        /// The offending value, rendered for the message
        value: String,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// A cross-type construction or assignment was refused under
    /// [`ConversionPolicy::Reject`](crate::tensor::ConversionPolicy)
    #[error("{op} rejected implicit conversion from {from} to {to}")]
    ConversionRejected {
        /// Source element type name
        from: &'static str,
        /// Destination element type name
        to: &'static str,
        /// The operation that was attempted
        op: &'static str,
    },

    /// A numeric cast had no valid representation in the destination type
    /// (e.g. a negative value into an unsigned integer)
    #[error("{op} cannot represent {value} as {target}")]
    ConversionOverflow {
        /// The value that could not be represented
        value: String,
        /// Destination type name
        target: &'static str,
        /// The operation that was attempted
        op: &'static str,
    },
}

/// Result type for coordvec operations
pub type Result<T> = std::result::Result<T, VectorError>;
