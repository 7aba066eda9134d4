//! Error kinds for table construction, lookup, and record (de)serialization.
use thiserror::Error;

use crate::boundary::Side;

/// Error type for lookup table operations
#[derive(Debug, Error)]
pub enum LutError {
    /// A general lookup was given a point with the wrong number of coordinates
    #[error("Dimension mismatch: table has {expected} axes, point has {found} coordinates")]
    DimensionMismatch { expected: usize, found: usize },

    /// A batch lookup was given coordinate slices that differ in length from the output
    #[error("Length mismatch: expected {expected} observation points, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A coordinate fell past an axis edge whose boundary mode is `Error`
    #[error(
        "Out of bounds access for LookupTable<{value_type}, {ndims}>: \
         value {value} is past the {side} edge of axis {axis}"
    )]
    OutOfBounds {
        axis: usize,
        side: Side,
        value: f64,
        value_type: &'static str,
        ndims: usize,
    },

    /// Attempted to append an axis to a table that already has all of its axes
    #[error("Table already has all {ndims} axes")]
    TooManyAxes { ndims: usize },

    /// The table is missing axes or sample data
    #[error("Incomplete table: {axes} of {ndims} axes, {data} of {expected} samples")]
    Incomplete {
        axes: usize,
        ndims: usize,
        data: usize,
        expected: usize,
    },

    /// Sample data length does not match the product of the axis sizes
    #[error("Data length mismatch: expected {expected} samples, found {found}")]
    DataLength { expected: usize, found: usize },

    /// A record declares an axis size that disagrees with the axis it describes
    #[error("Axis {axis} declares {declared} entries but has {actual}")]
    AxisSizeMismatch {
        axis: usize,
        declared: usize,
        actual: usize,
    },

    /// A corner of the interpolation cell lies outside the sample data
    #[error("Sample offset {offset} is outside data of length {len}")]
    SampleOffset { offset: usize, len: usize },

    /// JSON encoding or decoding failed
    #[error("Record error: {0}")]
    Record(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, LutError>;
