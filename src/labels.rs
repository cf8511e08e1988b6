use std::fmt::{Display};
use std::slice::{Iter};

use super::{Key};

/// One optional label per axis of an array, in axis order.
///
/// `None` is the absence marker: the axis has no label. Labels are opaque;
/// they are only ever compared for equality.
///
/// Every operation here returns a new `Labels`. None of them edits a sequence
/// in place.
///
/// ```
/// use axislabels::{Labels};
/// let labels = Labels::from(["a", "b", "c"]);
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels.get(1), Some(&"b"));
/// assert_eq!(labels.reversed(), Labels::from(["c", "b", "a"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Labels<L>(Vec<Option<L>>);

impl<L> Labels<L> {
    /// Constructs a `Labels` from per-axis optional labels.
    pub fn new(labels: impl IntoIterator<Item=Option<L>>) -> Self {
        Self(labels.into_iter().collect())
    }

    /// Returns `ndim` absence markers.
    pub fn unlabeled(ndim: usize) -> Self {
        Self((0..ndim).map(|_| None).collect())
    }

    /// The number of axes.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The label of `axis`, or `None` if it is unlabelled or out of range.
    pub fn get(&self, axis: usize) -> Option<&L> {
        self.0.get(axis).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> Iter<'_, Option<L>> { self.0.iter() }

    pub fn as_slice(&self) -> &[Option<L>] { &self.0 }

    pub fn into_vec(self) -> Vec<Option<L>> { self.0 }
}

impl<L: PartialEq> Labels<L> {
    /// Returns the first axis labelled `label`.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.0.iter().position(|l| l.as_ref() == Some(label))
    }
}

impl<L: Clone> Labels<L> {
    /// The labels of the result of indexing, given the output of
    /// [`resolve()`] for the index expression.
    ///
    /// Axes kept by a slice keep their label, axes inserted by
    /// [`Key::NewAxis`] are unlabelled, and axes removed by an integer key
    /// vanish.
    ///
    /// # Panics
    ///
    /// Panics if a pair refers to an axis beyond `self.len()`, i.e. if `pairs`
    /// was resolved against a different rank.
    ///
    /// ```
    /// use axislabels::{keys, resolve, Labels, NewAxis};
    /// let labels = Labels::from(["a", "b", "c"]);
    /// let indexed = labels.index(resolve(&keys![NewAxis, 0], 3).unwrap());
    /// assert_eq!(indexed, Labels::new([None, Some("b"), Some("c")]));
    /// ```
    ///
    /// [`resolve()`]: super::resolve()
    pub fn index(&self, pairs: impl IntoIterator<Item=(Key, Option<usize>)>) -> Self {
        pairs.into_iter().filter_map(|pair| match pair {
            (Key::NewAxis, _) | (_, None) => Some(None),
            (Key::Slice(_), Some(axis)) => Some(self.0[axis].clone()),
            _ => None,
        }).collect()
    }

    /// The labels after reordering the axes so that new axis `k` is old axis
    /// `axes[k]`.
    ///
    /// `axes` must consist of valid axis numbers.
    pub fn permuted(&self, axes: &[usize]) -> Self {
        axes.iter().map(|&axis| self.0[axis].clone()).collect()
    }

    /// The labels after reversing the order of the axes.
    pub fn reversed(&self) -> Self {
        self.0.iter().rev().cloned().collect()
    }

    /// The labels after removing `axes`, keeping the order of the rest.
    pub fn without(&self, axes: &[usize]) -> Self {
        self.0.iter().enumerate()
            .filter(|(axis, _)| !axes.contains(axis))
            .map(|(_, label)| label.clone())
            .collect()
    }
}

impl<L> Default for Labels<L> {
    fn default() -> Self { Self(Vec::new()) }
}

impl<L> From<Vec<Option<L>>> for Labels<L> {
    fn from(labels: Vec<Option<L>>) -> Self { Self(labels) }
}

/// Every axis labelled.
impl<L, const N: usize> From<[L; N]> for Labels<L> {
    fn from(labels: [L; N]) -> Self { labels.into_iter().map(Some).collect() }
}

impl<L> FromIterator<Option<L>> for Labels<L> {
    fn from_iter<I: IntoIterator<Item=Option<L>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, L> IntoIterator for &'a Labels<L> {
    type Item = &'a Option<L>;
    type IntoIter = Iter<'a, Option<L>>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Renders e.g. `(a, _, c)`.
impl<L: Display> Display for Labels<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (axis, label) in self.0.iter().enumerate() {
            if axis > 0 { write!(f, ", ")?; }
            match label {
                Some(label) => write!(f, "{}", label)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, ")")
    }
}

// ----------------------------------------------------------------------------
