//! Per-axis bracket search.
//!
//! Locates the grid cell containing a coordinate along one axis and the
//! fractional position inside it, applying the table's [`BoundaryPolicy`]
//! when the coordinate falls at or past an edge.
//!
//! Note that the upper edge is inclusive: a coordinate exactly equal to the
//! last tick is treated as past the upper edge, so an `Error` upper mode
//! rejects it. A coordinate exactly equal to the first tick is interior and
//! produces the default bracket.
use num_traits::Float;

use crate::boundary::{BoundaryMode, BoundaryPolicy, Side};

/// Lower-corner index of the containing cell and the interpolation weight
/// toward the upper corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket<T> {
    pub index: usize,
    pub weight: T,
}

impl<T: Float> Default for Bracket<T> {
    /// The bracket of the first tick: index 0, weight 0.
    #[inline]
    fn default() -> Self {
        Self {
            index: 0,
            weight: T::zero(),
        }
    }
}

/// Find the bracket for `value` on a monotonically increasing `axis`.
///
/// Assumes the axis is sorted; this is not checked.
/// An empty axis yields the default bracket.
///
/// # Errors
/// * The side of the axis that `value` fell past, if that side's mode is `Error`
#[inline]
pub fn search_axis<T: Float>(
    axis: &[T],
    value: T,
    policy: &BoundaryPolicy,
) -> Result<Bracket<T>, Side> {
    let mut bracket = Bracket::default();

    let (first, last) = match (axis.first(), axis.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Ok(bracket),
    };
    let n = axis.len();

    if value >= last {
        bracket.index = n.saturating_sub(2);
        bracket.weight = match policy.upper {
            BoundaryMode::Error => return Err(Side::Upper),
            BoundaryMode::Constant => T::one(),
            BoundaryMode::Linear => {
                let ratio = if last == T::zero() {
                    value / axis[bracket.index]
                } else {
                    (value - last) / last
                };
                T::one() + ratio.abs()
            }
        };
    } else if value < first {
        bracket.weight = match policy.lower {
            BoundaryMode::Error => return Err(Side::Lower),
            BoundaryMode::Constant => T::zero(),
            BoundaryMode::Linear => {
                let reference = if first == T::zero() {
                    axis.get(1).copied().unwrap_or(first)
                } else {
                    first
                };
                T::one() + ((value - first) / reference).abs()
            }
        };
    } else if value > first {
        // Bisection search for the cell with axis[i] <= value < axis[i + 1]
        let i = axis[..n - 1]
            .partition_point(|&x| x <= value)
            .saturating_sub(1);
        let (x0, x1) = (axis[i], axis[i + 1]);

        bracket.index = i;
        bracket.weight = (value - x0) / (x1 - x0);
    }

    // A single tick has no upper neighbor, so it is held in every mode
    if n == 1 {
        bracket.weight = T::zero();
    }

    Ok(bracket)
}
