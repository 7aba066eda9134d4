//! Convenience methods for constructing table axes and sample data in a way
//! that echoes, but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// A single point yields just `start`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return Vec::from_iter(core::iter::once(start).take(n));
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn),
/// which is the order a [`LookupTable`](crate::LookupTable) expects its data in.
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Evaluates `f` at every point of the grid spanned by `axes`,
/// producing sample data in C ordering.
pub fn sample_grid<T, F>(axes: &[Vec<T>], f: F) -> Vec<T>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    meshgrid(axes.iter().collect())
        .iter()
        .map(|p| f(&p[..]))
        .collect()
}
