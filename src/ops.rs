//! Elementwise operators on [`LabeledArray`]s.
//!
//! For each binary operator in [`std::ops`] this module contains a type of the
//! same name that cannot be instantiated and that implements [`Binary`]. For
//! example, [`Add`] corresponds to [`std::ops::Add`]. Pass one as the type
//! parameter of [`LabeledArray::binary()`] to pick the operation.
//!
//! The [`std::ops`] traits themselves are implemented for references to
//! `LabeledArray`s. Since combining labels can fail, the output is a
//! [`Result`]:
//!
//! ```
//! use ndarray::{arr1};
//! use axislabels::{LabeledArray, Labels, AxisError};
//! let x: LabeledArray<i32, &str> = LabeledArray::new(arr1(&[1, 2]).into_dyn(), ["t"]);
//! let y: LabeledArray<i32, &str> = LabeledArray::new(arr1(&[3, 4]).into_dyn(), ["u"]);
//! assert_eq!((&x + &x).unwrap().array(), &arr1(&[2, 4]).into_dyn());
//! assert!(matches!(&x * &y, Err(AxisError::ConflictingLabels {..})));
//! ```

use std::fmt::{Debug};

use ndarray::{ArrayD};

use super::{AxisError, AxisResolver, LabeledArray};

/// A function that combines an element `T` of one array with an element `U`
/// of another.
///
/// Implementors are types that cannot be instantiated, such as empty
/// enumerations; only the type is ever passed around.
pub trait Binary<T, U> {
    type Output;

    fn call(t: T, u: U) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// An implementation of [`Binary`] that constructs a pair.
pub enum Pair {}

impl<T, U> Binary<T, U> for Pair {
    type Output = (T, U);
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { (t, u) }
}

// ----------------------------------------------------------------------------

pub enum Add {}

impl<T, U> Binary<T, U> for Add where T: std::ops::Add<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.add(u) }
}

// ----------------------------------------------------------------------------

pub enum Sub {}

impl<T, U> Binary<T, U> for Sub where T: std::ops::Sub<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.sub(u) }
}

// ----------------------------------------------------------------------------

pub enum Mul {}

impl<T, U> Binary<T, U> for Mul where T: std::ops::Mul<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.mul(u) }
}

// ----------------------------------------------------------------------------

pub enum Div {}

impl<T, U> Binary<T, U> for Div where T: std::ops::Div<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.div(u) }
}

// ----------------------------------------------------------------------------

pub enum Rem {}

impl<T, U> Binary<T, U> for Rem where T: std::ops::Rem<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.rem(u) }
}

// ----------------------------------------------------------------------------

pub enum BitAnd {}

impl<T, U> Binary<T, U> for BitAnd where T: std::ops::BitAnd<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.bitand(u) }
}

// ----------------------------------------------------------------------------

pub enum BitOr {}

impl<T, U> Binary<T, U> for BitOr where T: std::ops::BitOr<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.bitor(u) }
}

// ----------------------------------------------------------------------------

pub enum BitXor {}

impl<T, U> Binary<T, U> for BitXor where T: std::ops::BitXor<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.bitxor(u) }
}

// ----------------------------------------------------------------------------

pub enum Shl {}

impl<T, U> Binary<T, U> for Shl where T: std::ops::Shl<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.shl(u) }
}

// ----------------------------------------------------------------------------

pub enum Shr {}

impl<T, U> Binary<T, U> for Shr where T: std::ops::Shr<U> {
    type Output = T::Output;
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { t.shr(u) }
}

// ----------------------------------------------------------------------------

/// Implements [`std::ops::$op`] for `&LabeledArray`, with either a
/// `&LabeledArray` or a plain `&ArrayD` on the right.
macro_rules! impl_op_for_labeled {
    ($op:ident { $method:ident }) => {
        impl<'a, 'b, A, U, L, R> std::ops::$op<&'b LabeledArray<U, L, R>> for &'a LabeledArray<A, L, R> where
            A: Clone + std::ops::$op<U>,
            U: Clone,
            L: Clone + PartialEq + Debug,
            R: AxisResolver<L> + Clone,
        {
            type Output = Result<LabeledArray<<$op as Binary<A, U>>::Output, L, R>, AxisError>;
            fn $method(self, other: &'b LabeledArray<U, L, R>) -> Self::Output { self.binary::<U, $op>(other) }
        }

        impl<'a, 'b, A, U, L, R> std::ops::$op<&'b ArrayD<U>> for &'a LabeledArray<A, L, R> where
            A: Clone + std::ops::$op<U>,
            U: Clone,
            L: Clone + PartialEq + Debug,
            R: AxisResolver<L> + Clone,
        {
            type Output = Result<LabeledArray<<$op as Binary<A, U>>::Output, L, R>, AxisError>;
            fn $method(self, other: &'b ArrayD<U>) -> Self::Output { self.binary_array::<U, $op>(other) }
        }
    };
}

impl_op_for_labeled! { Add { add } }
impl_op_for_labeled! { Sub { sub } }
impl_op_for_labeled! { Mul { mul } }
impl_op_for_labeled! { Div { div } }
impl_op_for_labeled! { Rem { rem } }
impl_op_for_labeled! { BitAnd { bitand } }
impl_op_for_labeled! { BitOr { bitor } }
impl_op_for_labeled! { BitXor { bitxor } }
impl_op_for_labeled! { Shl { shl } }
impl_op_for_labeled! { Shr { shr } }

// ----------------------------------------------------------------------------
