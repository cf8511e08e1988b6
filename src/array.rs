use std::fmt::{Debug};
use std::ops::{Add, Mul};

use ndarray::{Array, ArrayD, Axis, SliceInfoElem};
use num_traits::{One, Zero};

use super::{
    AxisError, Labels, Key, AxisRef, Axes, AxisResolver, Positional,
    resolve, selects_element, broadcast_labels,
};
use super::broadcast::{zip_with};
use super::index::{wrap_index};
use super::ops::{Binary, Pair};

/// A dense array of `A`s whose axes carry optional labels of type `L`.
///
/// The labels follow the axes through every operation: indexing, transposing,
/// reducing, reshaping and elementwise arithmetic all derive the labels of
/// their result, then delegate the numerical work to [`ndarray`]. Operations
/// never modify `self`; they return a new `LabeledArray`.
///
/// `R` decides how axis arguments are interpreted; see [`AxisResolver`].
///
/// ```
/// use ndarray::{ArrayD, IxDyn};
/// use axislabels::{keys, LabeledArray, Labels, Ellipsis, NewAxis};
///
/// let x: LabeledArray<f64, &str> = LabeledArray::new(
///     ArrayD::zeros(IxDyn(&[2, 4, 5])),
///     ["a", "b", "c"],
/// );
/// let y = x.slice(keys![NewAxis, Ellipsis, 0]).unwrap().into_array().unwrap();
/// assert_eq!(y.shape(), [1, 2, 4]);
/// assert_eq!(y.labels(), &Labels::new([None, Some("a"), Some("b")]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray<A, L, R = Positional> {
    array: ArrayD<A>,
    labels: Labels<L>,
    resolver: R,
}

/// The result of an operation that may produce a bare scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<A, L, R = Positional> {
    /// A single element. It has no axes, hence no labels.
    Scalar(A),
    Array(LabeledArray<A, L, R>),
}

impl<A, L, R> Value<A, L, R> {
    pub fn into_array(self) -> Option<LabeledArray<A, L, R>> {
        match self { Value::Array(a) => Some(a), Value::Scalar(_) => None }
    }

    pub fn into_scalar(self) -> Option<A> {
        match self { Value::Scalar(a) => Some(a), Value::Array(_) => None }
    }

    /// The labels of the result, if it is an array.
    pub fn labels(&self) -> Option<&Labels<L>> {
        match self { Value::Array(a) => Some(a.labels()), Value::Scalar(_) => None }
    }
}

// ----------------------------------------------------------------------------

impl<A, L, R: Default> LabeledArray<A, L, R> {
    /// Labels `array` with `labels`.
    ///
    /// # Panics
    ///
    /// Panics if the number of labels differs from the rank of `array`.
    pub fn new(array: ArrayD<A>, labels: impl Into<Labels<L>>) -> Self {
        let labels = labels.into();
        assert_eq!(array.ndim(), labels.len(), "Need one label per axis");
        Self {array, labels, resolver: R::default()}
    }

    /// Wraps a plain array. No axis is labelled.
    pub fn from_array(array: ArrayD<A>) -> Self {
        let labels = Labels::unlabeled(array.ndim());
        Self {array, labels, resolver: R::default()}
    }
}

impl<A, L, R: Default> From<ArrayD<A>> for LabeledArray<A, L, R> {
    fn from(array: ArrayD<A>) -> Self { Self::from_array(array) }
}

impl<A, L, R> LabeledArray<A, L, R> {
    pub fn array(&self) -> &ArrayD<A> { &self.array }

    pub fn into_array(self) -> ArrayD<A> { self.array }

    pub fn labels(&self) -> &Labels<L> { &self.labels }

    pub fn resolver(&self) -> &R { &self.resolver }

    pub fn shape(&self) -> &[usize] { self.array.shape() }

    pub fn ndim(&self) -> usize { self.array.ndim() }

    /// The label of `axis`, if it has one.
    pub fn label(&self, axis: usize) -> Option<&L> { self.labels.get(axis) }

    /// Replaces the resolver, keeping the data and labels.
    pub fn with_resolver<S>(self, resolver: S) -> LabeledArray<A, L, S> {
        LabeledArray {array: self.array, labels: self.labels, resolver}
    }

    /// Replaces the labels wholesale.
    ///
    /// # Errors
    ///
    /// [`AxisError::LengthMismatch`] if there is not one label per axis.
    pub fn with_labels(self, labels: impl Into<Labels<L>>) -> Result<Self, AxisError> {
        let labels = labels.into();
        if labels.len() != self.ndim() {
            return Err(AxisError::LengthMismatch {expected: self.ndim(), actual: labels.len()});
        }
        Ok(Self {labels, ..self})
    }
}

impl<A, L, R> LabeledArray<A, L, R> where
    L: Clone + PartialEq + Debug,
    R: AxisResolver<L> + Clone,
{
    /// Pairs a derived array with its derived labels.
    fn attach<B>(&self, op: &'static str, array: ArrayD<B>, labels: Labels<L>) -> LabeledArray<B, L, R> {
        debug_assert_eq!(array.ndim(), labels.len());
        tracing::trace!(op, from = ?self.labels, to = ?labels, "derived labels");
        LabeledArray {array, labels, resolver: self.resolver.clone()}
    }

    /// Wraps an array derived from `self` by some operation that doesn't
    /// track axes itself.
    ///
    /// The result inherits the labels of `self` if `array` has the same rank,
    /// and is unlabelled otherwise.
    pub fn derive<B>(&self, array: ArrayD<B>) -> LabeledArray<B, L, R> {
        let labels = if array.ndim() == self.ndim() {
            self.labels.clone()
        } else {
            Labels::unlabeled(array.ndim())
        };
        self.attach("derive", array, labels)
    }

    /// Applies `f` to every element.
    pub fn mapv<B>(&self, f: impl FnMut(A) -> B) -> LabeledArray<B, L, R> where A: Clone {
        self.derive(self.array.mapv(f))
    }

    /// Applies `f` to the underlying array; see [`Self::derive()`].
    pub fn map_array<B>(&self, f: impl FnOnce(&ArrayD<A>) -> ArrayD<B>) -> LabeledArray<B, L, R> {
        self.derive(f(&self.array))
    }

    /// The axis that `axis` refers to, according to the resolver.
    pub fn resolve_axis(&self, axis: impl Into<AxisRef<L>>) -> Result<usize, AxisError> {
        let axis = axis.into();
        self.resolver.resolve_axis(&axis, &self.labels).map_err(|e| {
            tracing::debug!(?axis, error = %e, "cannot resolve axis");
            e
        })
    }

    /// The first axis labelled `label`.
    pub fn axis_of(&self, label: &L) -> Option<usize> { self.labels.position(label) }

    // ------------------------------------------------------------------------

    fn slice_elem(&self, key: Key, axis: Option<usize>) -> Result<SliceInfoElem, AxisError> {
        match (key, axis) {
            (Key::NewAxis, _) => Ok(SliceInfoElem::NewAxis),
            (Key::Index(index), Some(axis)) => {
                let len = self.array.len_of(Axis(axis));
                let index = wrap_index(index, len)
                    .ok_or(AxisError::IndexOutOfBounds {index, axis, len})?;
                Ok(SliceInfoElem::Index(index as isize))
            },
            (Key::Slice(slice), Some(axis)) => {
                if slice.step == 0 { return Err(AxisError::invalid_index("slice step cannot be zero")); }
                let (start, end) = slice.clamp(self.array.len_of(Axis(axis)));
                Ok(SliceInfoElem::Slice {start: start as isize, end: Some(end as isize), step: slice.step})
            },
            (Key::Ellipsis, _) | (_, None) => Err(AxisError::invalid_index("unexpanded ellipsis")),
        }
    }

    /// Indexes `self` with the expression `keys`, which may be a single
    /// [`Key`] or a sequence built with [`keys!`].
    ///
    /// Integer keys remove their axis and its label, slices keep both, and
    /// [`Key::NewAxis`] inserts an unlabelled axis of length 1. Axes beyond
    /// the end of `keys` are kept whole. Exactly one integer key per axis
    /// selects a [`Value::Scalar`].
    ///
    /// ```
    /// use ndarray::{ArrayD, IxDyn};
    /// use axislabels::{keys, LabeledArray, Labels, Key, Value, Ellipsis};
    ///
    /// let x: LabeledArray<f64, &str> = LabeledArray::new(
    ///     ArrayD::zeros(IxDyn(&[2, 4, 5])),
    ///     ["a", "b", "c"],
    /// );
    /// let labels = |v: Value<f64, &'static str>| v.labels().cloned();
    /// assert_eq!(labels(x.slice(Key::Index(0)).unwrap()), Some(Labels::from(["b", "c"])));
    /// assert_eq!(labels(x.slice(keys![.., 0]).unwrap()), Some(Labels::from(["a", "c"])));
    /// assert_eq!(labels(x.slice(keys![Ellipsis, 0, 0, 0]).unwrap()), Some(Labels::default()));
    /// assert_eq!(x.slice(keys![0, 0, 0]).unwrap(), Value::Scalar(0.0));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AxisError::InvalidIndex`] if the expression is malformed.
    /// - [`AxisError::IndexOutOfBounds`] if an integer key is out of range.
    ///
    /// [`keys!`]: crate::keys
    pub fn slice(&self, keys: impl AsRef<[Key]>) -> Result<Value<A, L, R>, AxisError> where
        A: Clone,
    {
        let keys = keys.as_ref();
        let pairs = resolve(keys, self.ndim())?;
        let labels = self.labels.index(pairs.clone());
        let info = pairs
            .map(|(key, axis)| self.slice_elem(key, axis))
            .collect::<Result<Vec<_>, _>>()?;
        let view = self.array.slice(info.as_slice());
        if selects_element(keys, self.ndim()) {
            if let Some(a) = view.iter().next() { return Ok(Value::Scalar(a.clone())); }
        }
        Ok(Value::Array(self.attach("slice", view.to_owned(), labels)))
    }

    // ------------------------------------------------------------------------

    /// Reverses the order of the axes, and of the labels.
    pub fn transpose(&self) -> Self where A: Clone {
        self.attach("transpose", self.array.t().to_owned(), self.labels.reversed())
    }

    /// [`Self::transpose()`] if there are at least two axes, otherwise a copy
    /// of `self`.
    pub fn t(&self) -> Self where A: Clone {
        if self.ndim() > 1 { self.transpose() } else { self.clone() }
    }

    /// Reorders the axes so that axis `k` of the result is axis `axes[k]` of
    /// `self`. Each element of `axes` goes through the resolver.
    ///
    /// ```
    /// use ndarray::{ArrayD, IxDyn};
    /// use axislabels::{LabeledArray, Labels};
    /// let x: LabeledArray<f64, &str> = LabeledArray::new(ArrayD::zeros(IxDyn(&[2, 4, 5])), ["a", "b", "c"]);
    /// let y = x.permuted_axes([2, 0, 1]).unwrap();
    /// assert_eq!(y.shape(), [5, 2, 4]);
    /// assert_eq!(y.labels(), &Labels::from(["c", "a", "b"]));
    /// ```
    ///
    /// # Errors
    ///
    /// [`AxisError::InvalidPermutation`] unless every axis appears exactly
    /// once, or any error of the resolver.
    pub fn permuted_axes<I>(&self, axes: I) -> Result<Self, AxisError> where
        A: Clone,
        I: IntoIterator,
        I::Item: Into<AxisRef<L>>,
    {
        let axes = axes.into_iter()
            .map(|axis| self.resolve_axis(axis))
            .collect::<Result<Vec<_>, _>>()?;
        self.permute(axes)
    }

    fn permute(&self, axes: Vec<usize>) -> Result<Self, AxisError> where A: Clone {
        let mut sorted = axes.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(0..self.ndim()) {
            return Err(AxisError::InvalidPermutation {axes, ndim: self.ndim()});
        }
        let labels = self.labels.permuted(&axes);
        let array = self.array.view().permuted_axes(axes).to_owned();
        Ok(self.attach("permute", array, labels))
    }

    /// Exchanges two axes.
    pub fn swap_axes(&self, a: impl Into<AxisRef<L>>, b: impl Into<AxisRef<L>>) -> Result<Self, AxisError> where
        A: Clone,
    {
        let (a, b) = (self.resolve_axis(a)?, self.resolve_axis(b)?);
        let mut axes: Vec<usize> = (0..self.ndim()).collect();
        axes.swap(a, b);
        self.permute(axes)
    }

    /// Moves axis `from` so that it becomes axis `to`, keeping the order of
    /// the others.
    ///
    /// ```
    /// use ndarray::{ArrayD, IxDyn};
    /// use axislabels::{LabeledArray, Labels};
    /// let x: LabeledArray<f64, &str> = LabeledArray::new(ArrayD::zeros(IxDyn(&[2, 4, 5])), ["a", "b", "c"]);
    /// let y = x.move_axis(-1, 0).unwrap();
    /// assert_eq!(y.shape(), [5, 2, 4]);
    /// assert_eq!(y.labels(), &Labels::from(["c", "a", "b"]));
    /// ```
    pub fn move_axis(&self, from: impl Into<AxisRef<L>>, to: impl Into<AxisRef<L>>) -> Result<Self, AxisError> where
        A: Clone,
    {
        let (from, to) = (self.resolve_axis(from)?, self.resolve_axis(to)?);
        let mut axes: Vec<usize> = (0..self.ndim()).filter(|&axis| axis != from).collect();
        axes.insert(to, from);
        self.permute(axes)
    }

    // ------------------------------------------------------------------------

    /// Reduces `axes` with `fold`, starting each lane from `init`.
    ///
    /// With `keepdims`, reduced axes stay in the result with length 1 and
    /// keep their labels. Otherwise they are removed along with their labels,
    /// and reducing [`Axes::All`] gives a [`Value::Scalar`].
    ///
    /// # Errors
    ///
    /// [`AxisError::RepeatedAxis`] if an axis is named twice, or any error of
    /// the resolver.
    pub fn fold_axes<F>(
        &self,
        axes: impl Into<Axes<L>>,
        keepdims: bool,
        init: A,
        fold: F,
    ) -> Result<Value<A, L, R>, AxisError> where
        A: Clone,
        F: Fn(&A, &A) -> A,
    {
        let axes = match axes.into() {
            Axes::All => None,
            Axes::One(axis) => Some(vec![axis]),
            Axes::Many(axes) => Some(axes),
        };
        let reduced = match &axes {
            None => (0..self.ndim()).collect(),
            Some(refs) => self.resolve_distinct(refs)?,
        };
        let mut sorted = reduced.clone();
        sorted.sort_unstable();
        let mut array = self.array.clone();
        for &axis in sorted.iter().rev() {
            array = array.fold_axis(Axis(axis), init.clone(), |acc, a| fold(acc, a));
            if keepdims { array = array.insert_axis(Axis(axis)); }
        }
        if keepdims {
            return Ok(Value::Array(self.attach("reduce", array, self.labels.clone())));
        }
        if axes.is_none() {
            if let Some(a) = array.iter().next() { return Ok(Value::Scalar(a.clone())); }
        }
        let labels = self.labels.without(&reduced);
        Ok(Value::Array(self.attach("reduce", array, labels)))
    }

    fn resolve_distinct(&self, axes: &[AxisRef<L>]) -> Result<Vec<usize>, AxisError> {
        let mut resolved = Vec::with_capacity(axes.len());
        for axis in axes {
            let axis = self.resolve_axis(axis.clone())?;
            if resolved.contains(&axis) { return Err(AxisError::RepeatedAxis {axis}); }
            resolved.push(axis);
        }
        Ok(resolved)
    }

    /// Sums over `axes`; see [`Self::fold_axes()`].
    ///
    /// ```
    /// use ndarray::{ArrayD, IxDyn};
    /// use axislabels::{LabeledArray, Labels, Axes};
    /// let x: LabeledArray<f64, &str> = LabeledArray::new(ArrayD::ones(IxDyn(&[2, 4, 5])), ["a", "b", "c"]);
    /// let labels = |axes: Axes<&'static str>, keepdims| x.sum(axes, keepdims).unwrap().labels().cloned();
    /// assert_eq!(labels(1.into(), false), Some(Labels::from(["a", "c"])));
    /// assert_eq!(labels([1, 2].into(), false), Some(Labels::from(["a"])));
    /// assert_eq!(labels([1, 2].into(), true), Some(Labels::from(["a", "b", "c"])));
    /// assert_eq!(x.sum(Axes::All, false).unwrap().into_scalar(), Some(40.0));
    /// ```
    pub fn sum(&self, axes: impl Into<Axes<L>>, keepdims: bool) -> Result<Value<A, L, R>, AxisError> where
        A: Clone + Zero + Add<Output=A>,
    {
        self.fold_axes(axes, keepdims, A::zero(), |acc, a| acc.clone() + a.clone())
    }

    /// Multiplies over `axes`; see [`Self::fold_axes()`].
    pub fn product(&self, axes: impl Into<Axes<L>>, keepdims: bool) -> Result<Value<A, L, R>, AxisError> where
        A: Clone + One + Mul<Output=A>,
    {
        self.fold_axes(axes, keepdims, A::one(), |acc, a| acc.clone() * a.clone())
    }

    // ------------------------------------------------------------------------

    /// The elements in row-major order, as a 1-dimensional unlabelled array.
    pub fn flatten(&self) -> Self where A: Clone {
        let array = Array::from_vec(self.array.iter().cloned().collect()).into_dyn();
        self.attach("flatten", array, Labels::unlabeled(1))
    }

    /// The elements in row-major order, rearranged to `shape`. The result is
    /// unlabelled, since axes may have been merged or split.
    ///
    /// # Errors
    ///
    /// [`AxisError::Shape`] if `shape` has a different number of elements.
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, AxisError> where A: Clone {
        let array = self.array.to_shape(shape.to_vec())?.into_owned();
        let labels = Labels::unlabeled(array.ndim());
        Ok(self.attach("reshape", array, labels))
    }

    // ------------------------------------------------------------------------

    /// Combines `self` with `other` elementwise using the operator `B`,
    /// broadcasting both shapes and labels.
    ///
    /// ```
    /// use ndarray::{arr1, arr2};
    /// use axislabels::{LabeledArray, Labels, ops::Add};
    /// let x: LabeledArray<i32, &str> = LabeledArray::new(arr2(&[[1, 2], [3, 4]]).into_dyn(), ["row", "col"]);
    /// let y: LabeledArray<i32, &str> = LabeledArray::new(arr1(&[10, 20]).into_dyn(), ["col"]);
    /// let z = x.binary::<_, Add>(&y).unwrap();
    /// assert_eq!(z.array(), &arr2(&[[11, 22], [13, 24]]).into_dyn());
    /// assert_eq!(z.labels(), &Labels::from(["row", "col"]));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AxisError::ConflictingLabels`] if different labels line up.
    /// - [`AxisError::IncompatibleShapes`] if the shapes don't broadcast.
    pub fn binary<U, B>(&self, other: &LabeledArray<U, L, R>) -> Result<LabeledArray<B::Output, L, R>, AxisError> where
        A: Clone,
        U: Clone,
        B: Binary<A, U>,
    {
        let labels = broadcast_labels(&[Some(&self.labels), Some(&other.labels)])?;
        let array = zip_with(&self.array, &other.array, |a, u| B::call(a.clone(), u.clone()))?;
        Ok(self.attach("binary", array, labels))
    }

    /// Like [`Self::binary()`] with an unlabelled `other`.
    pub fn binary_array<U, B>(&self, other: &ArrayD<U>) -> Result<LabeledArray<B::Output, L, R>, AxisError> where
        A: Clone,
        U: Clone,
        B: Binary<A, U>,
    {
        let labels = broadcast_labels(&[Some(&self.labels), None])?;
        let array = zip_with(&self.array, other, |a, u| B::call(a.clone(), u.clone()))?;
        Ok(self.attach("binary", array, labels))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U: Clone>(&self, other: &LabeledArray<U, L, R>) -> Result<LabeledArray<(A, U), L, R>, AxisError> where
        A: Clone,
    {
        self.binary::<U, Pair>(other)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2, ArrayD, IxDyn};

    use super::*;
    use crate::{keys, ByLabel, Ellipsis, NewAxis, Slice};

    type Abc = LabeledArray<f64, &'static str>;

    fn abc() -> Abc {
        let data = (0..40).map(f64::from).collect::<Vec<_>>();
        LabeledArray::new(ArrayD::from_shape_vec(IxDyn(&[2, 4, 5]), data).unwrap(), ["a", "b", "c"])
    }

    fn some(labels: &[Option<&'static str>]) -> Labels<&'static str> {
        Labels::new(labels.iter().copied())
    }

    fn sliced(x: &Abc, keys: &[Key]) -> Abc {
        x.slice(keys).unwrap().into_array().unwrap()
    }

    #[test]
    #[should_panic]
    fn wrong_number_of_labels() {
        let _: Abc = LabeledArray::new(ArrayD::zeros(IxDyn(&[2, 4])), ["a", "b", "c"]);
    }

    #[test]
    fn from_plain_array() {
        let x: Abc = ArrayD::zeros(IxDyn(&[2, 3])).into();
        assert_eq!(x.labels(), &Labels::unlabeled(2));
        assert_eq!(x.label(0), None);
    }

    #[test]
    fn slicing() {
        let x = abc();
        assert_eq!(x.labels(), &Labels::from(["a", "b", "c"]));
        assert_eq!(sliced(&x, &keys![0]).labels(), &Labels::from(["b", "c"]));
        assert_eq!(sliced(&x, &keys![.., 0]).labels(), &Labels::from(["a", "c"]));
        assert_eq!(sliced(&x, &keys![.., .., 0]).labels(), &Labels::from(["a", "b"]));
        assert_eq!(sliced(&x, &keys![Ellipsis, 0]).labels(), &Labels::from(["a", "b"]));

        let y = sliced(&x, &keys![Ellipsis, 0, 0, 0]);
        assert_eq!(y.ndim(), 0);
        assert!(y.labels().is_empty());
    }

    #[test]
    fn slicing_data() {
        let x = abc();
        let y = sliced(&x, &keys![1, 1..3, -1]);
        assert_eq!(y.array(), &arr1(&[29.0, 34.0]).into_dyn());
        assert_eq!(y.labels(), &Labels::from(["b"]));
        assert_eq!(sliced(&x, &keys![.., 2..100]).shape(), [2, 2, 5]);
        assert_eq!(sliced(&x, &keys![.., Slice::from(..).step_by(2)]).shape(), [2, 2, 5]);
    }

    #[test]
    fn new_axis_slicing() {
        let x = abc();
        assert_eq!(sliced(&x, &keys![NewAxis]).labels(), &some(&[None, Some("a"), Some("b"), Some("c")]));
        assert_eq!(sliced(&x, &keys![NewAxis]).shape(), [1, 2, 4, 5]);
        assert_eq!(sliced(&x, &keys![NewAxis, 0]).labels(), &some(&[None, Some("b"), Some("c")]));
        assert_eq!(sliced(&x, &keys![.., NewAxis]).labels(), &some(&[Some("a"), None, Some("b"), Some("c")]));
        assert_eq!(sliced(&x, &keys![.., .., 0, NewAxis]).labels(), &some(&[Some("a"), Some("b"), None]));
        assert_eq!(sliced(&x, &keys![NewAxis, Ellipsis, 0]).labels(), &some(&[None, Some("a"), Some("b")]));
        assert_eq!(sliced(&x, &keys![Ellipsis, NewAxis, 0]).labels(), &some(&[Some("a"), Some("b"), None]));
        assert_eq!(sliced(&x, &keys![Ellipsis, NewAxis, 0]).shape(), [2, 4, 1]);
    }

    #[test]
    fn scalar_slicing() {
        let x = abc();
        assert_eq!(x.slice(keys![1, 2, 3]).unwrap(), Value::Scalar(33.0));
        assert_eq!(x.slice(keys![-1, -1, -1]).unwrap().into_scalar(), Some(39.0));
        let zero_d = x.slice(keys![Ellipsis, 1, 2, 3]).unwrap().into_array().unwrap();
        assert_eq!(zero_d.array().iter().next(), Some(&33.0));
    }

    #[test]
    fn bad_indices() {
        let x = abc();
        assert_eq!(
            x.slice(keys![2]),
            Err(AxisError::IndexOutOfBounds {index: 2, axis: 0, len: 2}),
        );
        assert!(matches!(x.slice(keys![0, 0, 0, 0]), Err(AxisError::InvalidIndex {..})));
        assert!(matches!(x.slice(keys![Ellipsis, Ellipsis]), Err(AxisError::InvalidIndex {..})));
        assert!(matches!(
            x.slice(keys![Slice::FULL.step_by(0)]),
            Err(AxisError::InvalidIndex {..}),
        ));
    }

    #[test]
    fn transposing() {
        let x = abc();
        assert_eq!(x.transpose().labels(), &Labels::from(["c", "b", "a"]));
        assert_eq!(x.transpose().shape(), [5, 4, 2]);
        assert_eq!(x.t().labels(), &Labels::from(["c", "b", "a"]));
        assert_eq!(x.transpose().transpose(), x);
    }

    #[test]
    fn transposing_low_rank() {
        let v: Abc = LabeledArray::new(arr1(&[1.0, 2.0]).into_dyn(), ["v"]);
        assert_eq!(v.t(), v);
        let s: Abc = LabeledArray::new(ArrayD::zeros(IxDyn(&[])), Labels::default());
        assert_eq!(s.t(), s);
    }

    #[test]
    fn permuting() {
        let x = abc();
        let y = x.permuted_axes([1, 2, 0]).unwrap();
        assert_eq!(y.labels(), &Labels::from(["b", "c", "a"]));
        assert_eq!(y.array()[[3, 4, 1]], x.array()[[1, 3, 4]]);
        assert!(matches!(x.permuted_axes([0, 0, 1]), Err(AxisError::InvalidPermutation {..})));
        assert!(matches!(x.permuted_axes([0, 1]), Err(AxisError::InvalidPermutation {..})));
        assert!(matches!(x.permuted_axes([0, 1, 3]), Err(AxisError::AxisOutOfBounds {..})));
    }

    #[test]
    fn swapping_and_moving() {
        let x = abc();
        assert_eq!(x.swap_axes(0, -1).unwrap().labels(), &Labels::from(["c", "b", "a"]));
        let y = x.move_axis(-1, 0).unwrap();
        assert_eq!(y.shape(), [5, 2, 4]);
        assert_eq!(y.labels(), &Labels::from(["c", "a", "b"]));
        assert_eq!(x.move_axis(0, 2).unwrap().labels(), &Labels::from(["b", "c", "a"]));
    }

    #[test]
    fn summing() {
        let x = abc();
        let labels = |axes: Axes<&'static str>, keepdims| x.sum(axes, keepdims).unwrap().labels().cloned();
        assert_eq!(labels(1.into(), false), Some(Labels::from(["a", "c"])));
        assert_eq!(labels([1].into(), false), Some(Labels::from(["a", "c"])));
        assert_eq!(labels([1, 2].into(), false), Some(Labels::from(["a"])));
        assert_eq!(labels([1].into(), true), Some(Labels::from(["a", "b", "c"])));
        assert_eq!(labels([1, 2].into(), true), Some(Labels::from(["a", "b", "c"])));
        assert_eq!(labels(Axes::All, true), Some(Labels::from(["a", "b", "c"])));
        assert_eq!(labels(Axes::All, false), None);
    }

    #[test]
    fn summing_data() {
        let x = abc();
        let y = x.sum([2, 1], true).unwrap().into_array().unwrap();
        assert_eq!(y.shape(), [2, 1, 1]);
        assert_eq!(y.array().iter().copied().collect::<Vec<_>>(), [190.0, 590.0]);
        let z = x.sum(0, false).unwrap().into_array().unwrap();
        assert_eq!(z.shape(), [4, 5]);
        assert_eq!(z.array()[[0, 0]], 20.0);
        assert_eq!(x.sum(Axes::All, false).unwrap(), Value::Scalar(780.0));
        assert_eq!(x.sum(Axes::All, true).unwrap().into_array().unwrap().shape(), [1, 1, 1]);
    }

    #[test]
    fn other_reductions() {
        let x: LabeledArray<i32, &str> = LabeledArray::new(arr2(&[[1, 2], [3, 4]]).into_dyn(), ["r", "c"]);
        let p = x.product(-1, false).unwrap().into_array().unwrap();
        assert_eq!(p.array(), &arr1(&[2, 12]).into_dyn());
        assert_eq!(p.labels(), &Labels::from(["r"]));
        let m = x.fold_axes(0, false, i32::MIN, |acc, a| (*acc).max(*a)).unwrap();
        assert_eq!(m.into_array().unwrap().array(), &arr1(&[3, 4]).into_dyn());
    }

    #[test]
    fn bad_reductions() {
        let x = abc();
        assert_eq!(x.sum([1, -2], false), Err(AxisError::RepeatedAxis {axis: 1}));
        assert_eq!(x.sum(3, false), Err(AxisError::AxisOutOfBounds {axis: 3, ndim: 3}));
        assert!(matches!(x.sum(AxisRef::Label("b"), false), Err(AxisError::NotSupported {..})));
    }

    #[test]
    fn symbolic_axes() {
        let x = abc().with_resolver(ByLabel);
        let y = x.sum(AxisRef::Label("b"), false).unwrap().into_array().unwrap();
        assert_eq!(y.labels(), &Labels::from(["a", "c"]));
        let y = x.permuted_axes([AxisRef::Label("c"), AxisRef::Label("a"), AxisRef::Index(1)]).unwrap();
        assert_eq!(y.labels(), &Labels::from(["c", "a", "b"]));
        assert_eq!(
            x.sum(AxisRef::Label("z"), false),
            Err(AxisError::LabelNotFound {label: "\"z\"".into()}),
        );
        assert_eq!(x.resolve_axis(AxisRef::Label("c")), Ok(2));
        assert_eq!(x.axis_of(&"b"), Some(1));
    }

    #[test]
    fn shape_changes() {
        let x = abc();
        let flat = x.flatten();
        assert_eq!(flat.shape(), [40]);
        assert_eq!(flat.labels(), &Labels::unlabeled(1));
        assert_eq!(flat.array()[[7]], 7.0);
        let y = x.reshape(&[8, 5]).unwrap();
        assert_eq!(y.labels(), &Labels::unlabeled(2));
        assert_eq!(y.array()[[1, 0]], 5.0);
        assert!(matches!(x.reshape(&[3, 3]), Err(AxisError::Shape(_))));
    }

    #[test]
    fn deriving() {
        let x = abc();
        let y = x.mapv(|a| a > 10.0);
        assert_eq!(y.labels(), x.labels());
        let z = x.map_array(|a| a.sum_axis(Axis(0)));
        assert_eq!(z.labels(), &Labels::unlabeled(2));
    }

    #[test]
    fn relabelling() {
        let x = abc();
        let y = x.clone().with_labels(Labels::new([None, Some("q"), None])).unwrap();
        assert_eq!(y.label(1), Some(&"q"));
        assert_eq!(x.labels(), &Labels::from(["a", "b", "c"]));
        assert_eq!(
            x.with_labels(["a"]).map(|_| ()),
            Err(AxisError::LengthMismatch {expected: 3, actual: 1}),
        );
    }

    #[test]
    fn combining() {
        let x: LabeledArray<i32, &str> = LabeledArray::new(arr2(&[[1, 2], [3, 4]]).into_dyn(), ["row", "col"]);
        let col: LabeledArray<i32, &str> = LabeledArray::new(arr1(&[10, 20]).into_dyn(), ["col"]);
        let row: LabeledArray<i32, &str> = LabeledArray::new(arr1(&[10, 20]).into_dyn(), ["row"]);
        let xx = x.binary::<_, crate::ops::Mul>(&x).unwrap();
        assert_eq!(xx.labels(), x.labels());
        assert_eq!(xx.array(), &arr2(&[[1, 4], [9, 16]]).into_dyn());
        assert_eq!(x.zip(&col).unwrap().array()[[1, 0]], (3, 10));
        assert!(matches!(x.binary::<_, crate::ops::Add>(&row), Err(AxisError::ConflictingLabels {axis: 1, ..})));

        let plain = arr2(&[[1], [2]]).into_dyn();
        let y = x.binary_array::<_, crate::ops::Sub>(&plain).unwrap();
        assert_eq!(y.labels(), x.labels());
        assert_eq!(y.array(), &arr2(&[[0, 1], [1, 2]]).into_dyn());
        assert!(matches!(
            x.binary_array::<_, crate::ops::Sub>(&arr1(&[1, 2, 3]).into_dyn()),
            Err(AxisError::IncompatibleShapes {..}),
        ));
    }
}
