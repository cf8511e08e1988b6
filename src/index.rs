use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::slice::{Iter};

use super::{AxisError};

/// A strided range of positions along one axis.
///
/// `start` and `end` may be negative, in which case they count from the end
/// of the axis. `end: None` means "to the end of the axis". Out-of-range
/// bounds are clamped rather than rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: isize,
    pub end: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// The slice that keeps a whole axis.
    pub const FULL: Slice = Slice {start: 0, end: None, step: 1};

    pub fn new(start: isize, end: Option<isize>, step: isize) -> Self {
        Self {start, end, step}
    }

    /// Returns `self` with its step replaced by `step`.
    ///
    /// ```
    /// use axislabels::{Slice};
    /// assert_eq!(Slice::from(1..7).step_by(2), Slice::new(1, Some(7), 2));
    /// ```
    pub fn step_by(self, step: isize) -> Self {
        Self {step, ..self}
    }

    /// Returns the absolute `(start, end)` of this slice on an axis of length
    /// `len`, clamped to `0..=len` and with `end >= start`.
    ///
    /// ```
    /// use axislabels::{Slice};
    /// assert_eq!(Slice::from(-3..).clamp(5), (2, 5));
    /// assert_eq!(Slice::from(2..100).clamp(5), (2, 5));
    /// assert_eq!(Slice::from(4..1).clamp(5), (4, 4));
    /// ```
    pub fn clamp(self, len: usize) -> (usize, usize) {
        let absolute = |i: isize| if i < 0 {
            (i + len as isize).max(0) as usize
        } else {
            (i as usize).min(len)
        };
        let start = absolute(self.start);
        let end = self.end.map_or(len, absolute);
        (start, end.max(start))
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self { Slice::FULL }
}

macro_rules! impl_slice_from_range {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            fn from(r: Range<$index>) -> Self {
                Slice::new(r.start as isize, Some(r.end as isize), 1)
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            fn from(r: RangeFrom<$index>) -> Self {
                Slice::new(r.start as isize, None, 1)
            }
        }

        impl From<RangeTo<$index>> for Slice {
            fn from(r: RangeTo<$index>) -> Self {
                Slice::new(0, Some(r.end as isize), 1)
            }
        }

        impl From<RangeInclusive<$index>> for Slice {
            fn from(r: RangeInclusive<$index>) -> Self {
                let end = *r.end() as isize;
                Slice::new(*r.start() as isize, if end == -1 { None } else { Some(end + 1) }, 1)
            }
        }

        impl From<RangeToInclusive<$index>> for Slice {
            fn from(r: RangeToInclusive<$index>) -> Self {
                let end = r.end as isize;
                Slice::new(0, if end == -1 { None } else { Some(end + 1) }, 1)
            }
        }

        impl From<$index> for Key {
            fn from(index: $index) -> Self { Key::Index(index as isize) }
        }

        impl From<Range<$index>> for Key {
            fn from(r: Range<$index>) -> Self { Key::Slice(r.into()) }
        }

        impl From<RangeFrom<$index>> for Key {
            fn from(r: RangeFrom<$index>) -> Self { Key::Slice(r.into()) }
        }

        impl From<RangeTo<$index>> for Key {
            fn from(r: RangeTo<$index>) -> Self { Key::Slice(r.into()) }
        }

        impl From<RangeInclusive<$index>> for Key {
            fn from(r: RangeInclusive<$index>) -> Self { Key::Slice(r.into()) }
        }

        impl From<RangeToInclusive<$index>> for Key {
            fn from(r: RangeToInclusive<$index>) -> Self { Key::Slice(r.into()) }
        }
    };
}

impl_slice_from_range!(isize);
impl_slice_from_range!(usize);
impl_slice_from_range!(i32);

// ----------------------------------------------------------------------------

/// Marker that inserts an axis of length 1 without consuming one.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NewAxis;

/// Marker that stands for as many full slices as the array needs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ellipsis;

/// One element of an index expression.
///
/// A bare `Key` is also an index expression: it behaves like a one-element
/// sequence. Use [`keys!`] to build longer expressions.
///
/// [`keys!`]: crate::keys
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Selects one position and removes the axis. Negative counts from the end.
    Index(isize),
    /// Keeps the axis, possibly narrowed.
    Slice(Slice),
    /// Inserts an unlabelled axis of length 1.
    NewAxis,
    /// Expands to full slices until every axis is accounted for.
    Ellipsis,
}

impl Key {
    /// A full slice, i.e. `..`.
    pub const FULL: Key = Key::Slice(Slice::FULL);

    /// Whether this key consumes an axis of the array being indexed.
    pub fn consumes_axis(self) -> bool {
        !matches!(self, Key::NewAxis | Key::Ellipsis)
    }
}

impl From<Slice> for Key {
    fn from(slice: Slice) -> Self { Key::Slice(slice) }
}

impl From<RangeFull> for Key {
    fn from(_: RangeFull) -> Self { Key::FULL }
}

impl From<NewAxis> for Key {
    fn from(_: NewAxis) -> Self { Key::NewAxis }
}

impl From<Ellipsis> for Key {
    fn from(_: Ellipsis) -> Self { Key::Ellipsis }
}

impl std::convert::AsRef<[Key]> for Key {
    fn as_ref(&self) -> &[Key] { std::slice::from_ref(self) }
}

/// Builds an index expression, an array of [`Key`]s, from anything that
/// converts into a `Key`: integers, ranges, [`Slice`]s, [`NewAxis`] and
/// [`Ellipsis`].
///
/// ```
/// use axislabels::{keys, Key, Slice, NewAxis, Ellipsis};
/// assert_eq!(keys![NewAxis, 1..3, Ellipsis, -1], [
///     Key::NewAxis,
///     Key::Slice(Slice::new(1, Some(3), 1)),
///     Key::Ellipsis,
///     Key::Index(-1),
/// ]);
/// ```
#[macro_export]
macro_rules! keys {
    ($($key:expr),* $(,)?) => {
        [$($crate::Key::from($key)),*]
    };
}

// ----------------------------------------------------------------------------

/// Maps a possibly negative `index` onto `0..len`.
pub(crate) fn wrap_index(index: isize, len: usize) -> Option<usize> {
    let wrapped = if index < 0 { index + len as isize } else { index };
    if 0 <= wrapped && (wrapped as usize) < len { Some(wrapped as usize) } else { None }
}

/// Whether `keys` picks out a single element of an array of rank `ndim`, so
/// that indexing yields a bare scalar rather than an array.
///
/// That is the case only for exactly `ndim` integer keys. In particular
/// `[Ellipsis, 0, 0, 0]` on a rank-3 array yields a 0-dimensional array.
pub fn selects_element(keys: &[Key], ndim: usize) -> bool {
    keys.len() == ndim && keys.iter().all(|key| matches!(key, Key::Index(_)))
}

/// Resolves the index expression `keys` against an array of rank `ndim`.
///
/// The result pairs every key of the normalized expression with the axis of
/// the original array that it consumes, or `None` for a [`Key::NewAxis`].
/// The ellipsis is expanded into full slices and unindexed trailing axes get
/// an implicit full slice, so every original axis appears exactly once.
///
/// ```
/// use axislabels::{keys, resolve, Key, Ellipsis, NewAxis};
/// let pairs: Vec<_> = resolve(&keys![0, Ellipsis, 3], 4).unwrap().collect();
/// assert_eq!(pairs, [
///     (Key::Index(0), Some(0)),
///     (Key::FULL, Some(1)),
///     (Key::FULL, Some(2)),
///     (Key::Index(3), Some(3)),
/// ]);
///
/// let pairs: Vec<_> = resolve(&keys![NewAxis, 1], 2).unwrap().collect();
/// assert_eq!(pairs, [
///     (Key::NewAxis, None),
///     (Key::Index(1), Some(0)),
///     (Key::FULL, Some(1)),
/// ]);
/// ```
///
/// # Errors
///
/// [`AxisError::InvalidIndex`] if `keys` contains more than one ellipsis or
/// consumes more than `ndim` axes.
pub fn resolve(keys: &[Key], ndim: usize) -> Result<Resolve<'_>, AxisError> {
    let ellipses = keys.iter().filter(|&&key| key == Key::Ellipsis).count();
    if ellipses > 1 {
        return Err(AxisError::invalid_index("an index can only have a single ellipsis"));
    }
    let used = keys.iter().filter(|key| key.consumes_axis()).count();
    if used > ndim {
        return Err(AxisError::invalid_index(format!(
            "{} axes are indexed but the array has only {}", used, ndim,
        )));
    }
    let width = if ellipses == 1 { ndim - used } else { 0 };
    Ok(Resolve {keys: keys.iter(), width, fill: 0, axis: 0, ndim})
}

/// The return type of [`resolve()`].
///
/// Pairs are computed on demand. Clone it to walk the same expression again.
#[derive(Debug, Clone)]
pub struct Resolve<'a> {
    keys: Iter<'a, Key>,
    /// How many full slices the ellipsis expands to.
    width: usize,
    /// Full slices still owed to the ellipsis being expanded.
    fill: usize,
    /// The next original axis to be consumed.
    axis: usize,
    ndim: usize,
}

impl<'a> Resolve<'a> {
    fn consume(&mut self, key: Key) -> (Key, Option<usize>) {
        let axis = self.axis;
        self.axis += 1;
        (key, Some(axis))
    }
}

impl<'a> Iterator for Resolve<'a> {
    type Item = (Key, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.fill > 0 {
                self.fill -= 1;
                return Some(self.consume(Key::FULL));
            }
            match self.keys.next() {
                Some(Key::Ellipsis) => { self.fill = self.width; },
                Some(Key::NewAxis) => return Some((Key::NewAxis, None)),
                Some(&key) => return Some(self.consume(key)),
                None if self.axis < self.ndim => return Some(self.consume(Key::FULL)),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let inserted = self.keys.clone().filter(|&&key| key == Key::NewAxis).count();
        let remaining = inserted + (self.ndim - self.axis);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Resolve<'a> {}

// ----------------------------------------------------------------------------
