//! How axis arguments are turned into axis numbers.
//!
//! Every operation of [`LabeledArray`] that takes an axis argument passes it
//! through [`AxisResolver::resolve_axis()`] and nowhere else. The resolver is a
//! type parameter of `LabeledArray`, so choosing one is how symbolic axis
//! references are switched on:
//!
//! ```
//! use ndarray::{ArrayD, IxDyn};
//! use axislabels::{LabeledArray, AxisRef, ByLabel};
//! let x: LabeledArray<f64, &str, ByLabel> = LabeledArray::new(
//!     ArrayD::zeros(IxDyn(&[2, 4, 5])),
//!     ["a", "b", "c"],
//! );
//! let y = x.sum(AxisRef::Label("b"), false).unwrap().into_array().unwrap();
//! assert_eq!(y.shape(), [2, 5]);
//! ```
//!
//! [`LabeledArray`]: super::LabeledArray

use std::fmt::{Debug};

use super::{AxisError, Labels};

/// A reference to one axis: a number, or (for resolvers that support it) a
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisRef<L> {
    /// An axis number. Negative counts from the last axis.
    Index(isize),
    /// The axis carrying this label.
    Label(L),
}

impl<L> From<isize> for AxisRef<L> {
    fn from(axis: isize) -> Self { AxisRef::Index(axis) }
}

impl<L> From<usize> for AxisRef<L> {
    fn from(axis: usize) -> Self { AxisRef::Index(axis as isize) }
}

impl<L> From<i32> for AxisRef<L> {
    fn from(axis: i32) -> Self { AxisRef::Index(axis as isize) }
}

// ----------------------------------------------------------------------------

/// The axes a reduction applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axes<L> {
    /// Every axis.
    All,
    /// A single axis.
    One(AxisRef<L>),
    /// Several axes, in any order.
    Many(Vec<AxisRef<L>>),
}

impl<L> From<AxisRef<L>> for Axes<L> {
    fn from(axis: AxisRef<L>) -> Self { Axes::One(axis) }
}

impl<L> From<isize> for Axes<L> {
    fn from(axis: isize) -> Self { Axes::One(axis.into()) }
}

impl<L> From<usize> for Axes<L> {
    fn from(axis: usize) -> Self { Axes::One(axis.into()) }
}

impl<L> From<i32> for Axes<L> {
    fn from(axis: i32) -> Self { Axes::One(axis.into()) }
}

impl<L, A: Into<AxisRef<L>>> From<Vec<A>> for Axes<L> {
    fn from(axes: Vec<A>) -> Self { Axes::Many(axes.into_iter().map(Into::into).collect()) }
}

impl<L, A: Into<AxisRef<L>>, const N: usize> From<[A; N]> for Axes<L> {
    fn from(axes: [A; N]) -> Self { Axes::Many(axes.into_iter().map(Into::into).collect()) }
}

/// `None` means every axis.
impl<L, A: Into<Axes<L>>> From<Option<A>> for Axes<L> {
    fn from(axes: Option<A>) -> Self { axes.map_or(Axes::All, Into::into) }
}

// ----------------------------------------------------------------------------

/// Turns an [`AxisRef`] into an axis number of an array labelled `labels`.
///
/// Implement this to change how axis arguments are interpreted, e.g. to look
/// labels up case-insensitively.
pub trait AxisResolver<L> {
    /// Returns the axis, in `0..labels.len()`, that `axis` refers to.
    fn resolve_axis(&self, axis: &AxisRef<L>, labels: &Labels<L>) -> Result<usize, AxisError>;
}

/// The default [`AxisResolver`]: axes must be given by number.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Positional;

impl<L> AxisResolver<L> for Positional {
    fn resolve_axis(&self, axis: &AxisRef<L>, labels: &Labels<L>) -> Result<usize, AxisError> {
        match *axis {
            AxisRef::Index(axis) => normalize_axis(axis, labels.len()),
            AxisRef::Label(_) => Err(AxisError::not_supported(
                "axes can only be referred to by label with a label-aware resolver",
            )),
        }
    }
}

/// An [`AxisResolver`] that also accepts labels, matched exactly against the
/// array's labels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ByLabel;

impl<L: PartialEq + Debug> AxisResolver<L> for ByLabel {
    fn resolve_axis(&self, axis: &AxisRef<L>, labels: &Labels<L>) -> Result<usize, AxisError> {
        match axis {
            AxisRef::Index(axis) => normalize_axis(*axis, labels.len()),
            AxisRef::Label(label) => labels.position(label).ok_or_else(|| {
                AxisError::LabelNotFound {label: format!("{:?}", label)}
            }),
        }
    }
}

/// Maps a possibly negative axis number onto `0..ndim`.
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize, AxisError> {
    super::index::wrap_index(axis, ndim).ok_or(AxisError::AxisOutOfBounds {axis, ndim})
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Labels<&'static str> { Labels::from(["a", "b", "c"]) }

    #[test]
    fn positional() {
        assert_eq!(Positional.resolve_axis(&AxisRef::Index(1), &abc()), Ok(1));
        assert_eq!(Positional.resolve_axis(&AxisRef::Index(-1), &abc()), Ok(2));
        assert_eq!(
            Positional.resolve_axis(&AxisRef::Index(3), &abc()),
            Err(AxisError::AxisOutOfBounds {axis: 3, ndim: 3}),
        );
        assert!(matches!(
            Positional.resolve_axis(&AxisRef::Label("b"), &abc()),
            Err(AxisError::NotSupported {..}),
        ));
    }

    #[test]
    fn by_label() {
        assert_eq!(ByLabel.resolve_axis(&AxisRef::Label("c"), &abc()), Ok(2));
        assert_eq!(ByLabel.resolve_axis(&AxisRef::Index(-3), &abc()), Ok(0));
        assert_eq!(
            ByLabel.resolve_axis(&AxisRef::Label("d"), &abc()),
            Err(AxisError::LabelNotFound {label: "\"d\"".into()}),
        );
    }

    #[test]
    fn axes_conversions() {
        assert_eq!(Axes::<&str>::from(1), Axes::One(AxisRef::Index(1)));
        assert_eq!(Axes::<&str>::from([1, 2]), Axes::Many(vec![AxisRef::Index(1), AxisRef::Index(2)]));
        assert_eq!(Axes::<&str>::from(None::<isize>), Axes::All);
        assert_eq!(Axes::<&str>::from(Some(-1)), Axes::One(AxisRef::Index(-1)));
        assert_eq!(Axes::from(vec![AxisRef::Label("a")]), Axes::Many(vec![AxisRef::Label("a")]));
    }
}
