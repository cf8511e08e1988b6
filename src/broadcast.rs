use std::fmt::{Debug};

use ndarray::{ArrayD, Zip};

use super::{AxisError, Labels};

/// Computes the labels of the result of an elementwise operation on
/// `operands`.
///
/// Each operand is the [`Labels`] of a labelled array, or `None` for a plain
/// array, which contributes nothing. The sequences are right-aligned as for
/// shape broadcasting: shorter ones are padded on the left with absence
/// markers. At each position the non-absent labels must agree, and the result
/// is that label; a position where every operand is unlabelled stays
/// unlabelled.
///
/// ```
/// use axislabels::{broadcast_labels, Labels};
/// let x = Labels::from(["row", "col"]);
/// let y = Labels::new([None, Some("col")]);
/// let z = Labels::from(["batch", "row", "col"]);
/// assert_eq!(broadcast_labels(&[Some(&x), Some(&y), None]).unwrap(), x);
/// assert_eq!(broadcast_labels(&[Some(&x), Some(&z)]).unwrap(), z);
/// ```
///
/// # Errors
///
/// [`AxisError::ConflictingLabels`] if two different labels meet at the same
/// position.
pub fn broadcast_labels<L>(operands: &[Option<&Labels<L>>]) -> Result<Labels<L>, AxisError> where
    L: Clone + PartialEq + Debug,
{
    let labelled: Vec<&Labels<L>> = operands.iter().flatten().copied().collect();
    let ndim = labelled.iter().map(|labels| labels.len()).max().unwrap_or(0);
    let mut result = Vec::with_capacity(ndim);
    for axis in 0..ndim {
        let mut unanimous: Option<&L> = None;
        for labels in &labelled {
            let offset = ndim - labels.len();
            if axis < offset { continue; }
            let Some(label) = labels.get(axis - offset) else { continue };
            match unanimous {
                None => { unanimous = Some(label); },
                Some(previous) if previous == label => {},
                Some(previous) => {
                    tracing::debug!(axis, lhs = ?previous, rhs = ?label, "conflicting labels");
                    return Err(AxisError::ConflictingLabels {
                        axis,
                        lhs: format!("{:?}", previous),
                        rhs: format!("{:?}", label),
                    });
                },
            }
        }
        result.push(unanimous.cloned());
    }
    Ok(Labels::from(result))
}

// ----------------------------------------------------------------------------

/// Computes the shape that `shapes` broadcast to.
///
/// Shapes are right-aligned. At each position every extent must be `1` or
/// equal to the others; the result is the common extent, or `1` if all are
/// `1`.
///
/// ```
/// use axislabels::{broadcast_shapes};
/// assert_eq!(broadcast_shapes(&[&[4, 1], &[3, 1, 5]]).unwrap(), [3, 4, 5]);
/// assert!(broadcast_shapes(&[&[2], &[3]]).is_err());
/// ```
///
/// # Errors
///
/// [`AxisError::IncompatibleShapes`] if two extents differ and neither is `1`.
pub fn broadcast_shapes(shapes: &[&[usize]]) -> Result<Vec<usize>, AxisError> {
    shapes.iter().try_fold(Vec::new(), |lhs, &rhs| broadcast_pair(&lhs, rhs))
}

fn broadcast_pair(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, AxisError> {
    let ndim = lhs.len().max(rhs.len());
    let extent = |shape: &[usize], axis: usize| {
        let offset = ndim - shape.len();
        if axis < offset { 1 } else { shape[axis - offset] }
    };
    (0..ndim).map(|axis| match (extent(lhs, axis), extent(rhs, axis)) {
        (1, e) | (e, 1) => Ok(e),
        (e, f) if e == f => Ok(e),
        _ => Err(AxisError::IncompatibleShapes {lhs: lhs.to_vec(), rhs: rhs.to_vec()}),
    }).collect()
}

/// Broadcasts `lhs` and `rhs` to a common shape and combines them elementwise.
pub(crate) fn zip_with<A, U, T>(
    lhs: &ArrayD<A>,
    rhs: &ArrayD<U>,
    mut f: impl FnMut(&A, &U) -> T,
) -> Result<ArrayD<T>, AxisError> {
    let shape = broadcast_shapes(&[lhs.shape(), rhs.shape()])?;
    let incompatible = || AxisError::IncompatibleShapes {lhs: lhs.shape().to_vec(), rhs: rhs.shape().to_vec()};
    let lhs = lhs.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let rhs = rhs.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    Ok(Zip::from(lhs).and(rhs).map_collect(|a, u| f(a, u)))
}

// ----------------------------------------------------------------------------
