//! Mapping from per-axis grid indices to a flat offset into the sample data.

/// A storage order for N-dimensional samples held in a flat slice.
pub trait IndexScheme {
    /// Flat offset of the grid point at `loc`, given the size of each axis.
    ///
    /// `dims` and `loc` must have the same, nonzero length.
    fn offset(dims: &[usize], loc: &[usize]) -> usize;
}

/// C-style ordering, with the last axis varying fastest:
/// (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct RowMajor;

/// Fortran-style ordering, with the first axis varying fastest:
/// (z(x0, y0), z(x1, y0), ..., z(xn, y0), z(x0, y1), ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnMajor;

impl IndexScheme for RowMajor {
    #[inline]
    fn offset(dims: &[usize], loc: &[usize]) -> usize {
        let ndims = loc.len();
        let mut stride = 1;
        let mut i = loc[ndims - 1];
        for j in (0..ndims - 1).rev() {
            // Stride between blocks along axis j is the product of the sizes of higher axes
            stride *= dims[j + 1];
            i += loc[j] * stride;
        }
        i
    }
}

impl IndexScheme for ColumnMajor {
    #[inline]
    fn offset(dims: &[usize], loc: &[usize]) -> usize {
        let ndims = loc.len();
        let mut stride = 1;
        let mut i = loc[0];
        for j in 1..ndims {
            stride *= dims[j - 1];
            i += loc[j] * stride;
        }
        i
    }
}
