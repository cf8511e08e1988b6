//! Per-axis labels for dense n-dimensional arrays.
//!
//! [`LabeledArray<A, L>`] wraps an [`ndarray::ArrayD<A>`] together with one
//! optional label of type `L` per axis. The numerical work is all done by
//! `ndarray`; this crate works out what the labels of each result should be.
//!
//! - Indexing with [`LabeledArray::slice()`] keeps the labels of sliced axes,
//!   drops those of axes removed by an integer, and leaves axes inserted by
//!   [`NewAxis`] unlabelled. The index expression is first normalized by
//!   [`resolve()`], which expands the [`Ellipsis`] and pairs every key with
//!   the axis it consumes.
//! - Transposition and other axis permutations permute the labels the same
//!   way.
//! - Reductions such as [`LabeledArray::sum()`] remove the labels of reduced
//!   axes, unless asked to keep the dimensions.
//! - Flattening and reshaping may merge or split axes, so they drop all
//!   labels.
//! - Elementwise operations broadcast the labels of their operands with
//!   [`broadcast_labels()`]. Different labels on the same axis are an error.
//!
//! Labels are compared only for equality; anything `Clone + PartialEq` will
//! do. Axis arguments go through an [`AxisResolver`], which is a type
//! parameter of `LabeledArray`. The default, [`Positional`], only understands
//! axis numbers; [`ByLabel`] also finds axes by label.
//!
//! Every operation returns a new `LabeledArray` and reports failures as an
//! [`AxisError`].

mod error;
pub use error::{AxisError};

mod index;
pub use index::{Key, Slice, NewAxis, Ellipsis, resolve, Resolve, selects_element};

mod labels;
pub use labels::{Labels};

mod broadcast;
pub use broadcast::{broadcast_labels, broadcast_shapes};

pub mod axis;
pub use axis::{AxisRef, Axes, AxisResolver, Positional, ByLabel, normalize_axis};

mod array;
pub use array::{LabeledArray, Value};

pub mod ops;
pub use ops::{Binary};
