use ndarray::{ShapeError};
use thiserror::{Error};

/// Everything that can go wrong while deriving the labels of a result.
///
/// No operation mutates its operands, so an `Err` leaves every existing
/// [`LabeledArray`] exactly as it was.
///
/// [`LabeledArray`]: super::LabeledArray
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    /// The index expression is malformed, e.g. it contains two ellipses or
    /// consumes more axes than the array has.
    #[error("Invalid index expression: {reason}.")]
    InvalidIndex { reason: String },

    /// An integer key lies outside `-len..len` for its axis.
    #[error("Index {index} is out of bounds for axis {axis} with length {len}.")]
    IndexOutOfBounds { index: isize, axis: usize, len: usize },

    /// A numeric axis reference lies outside `-ndim..ndim`.
    #[error("Axis {axis} is out of bounds for an array of rank {ndim}.")]
    AxisOutOfBounds { axis: isize, ndim: usize },

    /// A symbolic axis reference matches none of the array's labels.
    #[error("No axis is labelled `{label}`.")]
    LabelNotFound { label: String },

    /// Two different labels ended up on the same broadcast position.
    #[error("Conflicting labels `{lhs}` and `{rhs}` on broadcast axis {axis}.")]
    ConflictingLabels { axis: usize, lhs: String, rhs: String },

    /// The axis specifier cannot be interpreted by the active resolver.
    #[error("Axis specifier not supported: {reason}.")]
    NotSupported { reason: String },

    /// The same axis was named twice in one reduction.
    #[error("Axis {axis} is repeated.")]
    RepeatedAxis { axis: usize },

    /// The requested axis order is not a permutation of `0..ndim`.
    #[error("{axes:?} is not a permutation of the {ndim} axes.")]
    InvalidPermutation { axes: Vec<usize>, ndim: usize },

    /// The operand shapes cannot be broadcast together.
    #[error("Cannot broadcast shape {lhs:?} with shape {rhs:?}.")]
    IncompatibleShapes { lhs: Vec<usize>, rhs: Vec<usize> },

    /// A replacement label sequence has the wrong length.
    #[error("Expected {expected} labels, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },

    /// The numeric library refused a reshape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl AxisError {
    pub(crate) fn invalid_index(reason: impl Into<String>) -> Self {
        AxisError::InvalidIndex {reason: reason.into()}
    }

    pub(crate) fn not_supported(reason: impl Into<String>) -> Self {
        AxisError::NotSupported {reason: reason.into()}
    }
}
