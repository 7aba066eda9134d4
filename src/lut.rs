//! Multilinear lookup table on a rectilinear grid.
//!
//! ```rust
//! use multilut::{BoundaryMode, LookupTable};
//!
//! // f(x, y) = x * y sampled on an uneven grid
//! let x = vec![-1.0_f64, 0.0, 1.0, 2.5];
//! let y = vec![0.0_f64, 2.0, 3.0];
//! let z: Vec<f64> = x.iter().flat_map(|&xi| y.iter().map(move |&yi| xi * yi)).collect();
//!
//! let mut lut = LookupTable::<f64, 2>::new();
//! lut.add_axis(x)?.add_axis(y)?;
//! lut.set_data(z)?;
//! lut.boundary_policy_mut().set_all(BoundaryMode::Constant);
//!
//! assert!((lut.value(&[0.5, 2.5])? - 1.25).abs() < 1e-12);
//! assert_eq!(lut.value(&[10.0, 10.0])?, 7.5); // held at the corner sample
//! # Ok::<(), multilut::LutError>(())
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean
use log::{debug, trace};
use num_traits::{Float, NumCast};

use crate::boundary::{BoundaryPolicy, Side};
use crate::error::{LutError, Result};
use crate::index::{IndexScheme, RowMajor};
use crate::search::{search_axis, Bracket};

/// An N-dimensional multilinear lookup table on a rectilinear grid.
///
/// Assumes C-style ordering of data (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
/// Assumes axes are monotonically _increasing_. Checking this is expensive, and is
/// left to the user.
///
/// Axes are appended one at a time, then the sample data is assigned once all `N`
/// axes are known. Lookups never mutate the table, so a finished table can be shared
/// between threads for concurrent reads.
///
/// Operation Complexity
/// * O(2^ndims) + log2(gridsize) per lookup, in all regions.
///
/// Memory Complexity
/// * Per-lookup storage is O(N) on the stack, with no allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable<T: Float, const N: usize> {
    /// x, y, ... coordinate axes, each entry of size axes_sizes[i]
    axes: Vec<Vec<T>>,

    /// Size of each axis
    axes_sizes: Vec<usize>,

    /// Values at each grid point, size prod(axes_sizes)
    data: Vec<T>,

    /// Extrapolation behavior shared by every axis
    boundary_policy: BoundaryPolicy,
}

impl<T: Float, const N: usize> Default for LookupTable<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, const N: usize> LookupTable<T, N> {
    /// An empty table with the default (strict) boundary policy.
    pub fn new() -> Self {
        const {
            assert!(
                N > 0 && N < usize::BITS as usize,
                "Lookup tables need between 1 and usize::BITS - 1 dimensions"
            );
        }
        Self {
            axes: Vec::with_capacity(N),
            axes_sizes: Vec::with_capacity(N),
            data: Vec::new(),
            boundary_policy: BoundaryPolicy::default(),
        }
    }

    /// An empty table with the given boundary policy.
    pub fn with_policy(boundary_policy: BoundaryPolicy) -> Self {
        let mut lut = Self::new();
        lut.boundary_policy = boundary_policy;
        lut
    }

    /// Build a complete table in one step.
    ///
    /// # Errors
    /// * If `data.len()` is not the product of the axis sizes
    pub fn from_parts(
        axes: [Vec<T>; N],
        data: Vec<T>,
        boundary_policy: BoundaryPolicy,
    ) -> Result<Self> {
        let mut lut = Self::with_policy(boundary_policy);
        for axis in axes {
            lut.add_axis(axis)?;
        }
        lut.set_data(data)?;
        Ok(lut)
    }

    /// Append the next axis. Axes are numbered in the order they are added.
    ///
    /// # Errors
    /// * If the table already has `N` axes
    pub fn add_axis(&mut self, axis: impl Into<Vec<T>>) -> Result<&mut Self> {
        if self.axes.len() == N {
            return Err(LutError::TooManyAxes { ndims: N });
        }
        let axis = axis.into();
        self.axes_sizes.push(axis.len());
        self.axes.push(axis);
        Ok(self)
    }

    /// Assign the sample data, in C-style order, replacing any previous data.
    ///
    /// # Errors
    /// * If fewer than `N` axes have been added
    /// * If `data.len()` is not the product of the axis sizes
    pub fn set_data(&mut self, data: impl Into<Vec<T>>) -> Result<()> {
        let data = data.into();
        let expected = self.nvals();
        if self.axes.len() != N {
            return Err(LutError::Incomplete {
                axes: self.axes.len(),
                ndims: N,
                data: data.len(),
                expected,
            });
        }
        if data.len() != expected {
            return Err(LutError::DataLength {
                expected,
                found: data.len(),
            });
        }
        debug!("LookupTable<{N}> filled with {expected} samples on {:?}", self.axes_sizes);
        self.data = data;
        Ok(())
    }

    /// Coordinates of axis `i`, if it has been added.
    pub fn axis(&self, i: usize) -> Option<&[T]> {
        self.axes.get(i).map(|a| &a[..])
    }

    pub fn axes(&self) -> &[Vec<T>] {
        &self.axes
    }

    pub fn axes_sizes(&self) -> &[usize] {
        &self.axes_sizes
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary_policy
    }

    pub fn set_boundary_policy(&mut self, boundary_policy: BoundaryPolicy) {
        self.boundary_policy = boundary_policy;
    }

    pub fn boundary_policy_mut(&mut self) -> &mut BoundaryPolicy {
        &mut self.boundary_policy
    }

    /// Whether all `N` axes and a matching set of samples are present.
    pub fn is_complete(&self) -> bool {
        self.axes.len() == N && self.data.len() == self.nvals()
    }

    /// Look up a single coordinate along the first axis.
    ///
    /// Intended for one-dimensional tables. On a table with more axes,
    /// only the first axis is searched and the data is indexed as if it
    /// were one-dimensional.
    ///
    /// # Errors
    /// * If the table is incomplete
    /// * If `x` is past an edge whose boundary mode is `Error`
    pub fn value_scalar(&self, x: T) -> Result<T> {
        self.check_complete()?;

        let Bracket { index, weight } = search_axis(&self.axes[0], x, &self.boundary_policy)
            .map_err(|side| self.out_of_bounds(0, side, x))?;

        let y0 = self.sample(index)?;
        if index + 1 < self.axes_sizes[0] {
            let y1 = self.sample(index + 1)?;
            Ok(y0 + (y1 - y0) * weight)
        } else {
            Ok(y0)
        }
    }

    /// Look up a point given as a slice of exactly `N` coordinates.
    ///
    /// # Errors
    /// * If `x.len() != N`
    /// * If the table is incomplete
    /// * If any coordinate is past an edge whose boundary mode is `Error`
    pub fn value(&self, x: &[T]) -> Result<T> {
        if x.len() != N {
            return Err(LutError::DimensionMismatch {
                expected: N,
                found: x.len(),
            });
        }
        let mut point = [T::zero(); N];
        point.copy_from_slice(x);
        self.interp_one(point)
    }

    /// Interpolate the value at a point,
    /// using fixed-size intermediate storage of O(ndims) and no allocation.
    ///
    /// # Errors
    /// * If the table is incomplete
    /// * If any coordinate is past an edge whose boundary mode is `Error`
    #[inline]
    pub fn interp_one(&self, x: [T; N]) -> Result<T> {
        self.check_complete()?;

        // Brackets start at (index 0, weight 0), which is the exact
        // answer for an axis that the search leaves untouched.
        let mut brackets = [Bracket::default(); N];
        for i in 0..N {
            brackets[i] = search_axis(&self.axes[i], x[i], &self.boundary_policy)
                .map_err(|side| self.out_of_bounds(i, side, x[i]))?;
        }

        // Walk the 2^N vertices of the containing cell. Bit `i` of the vertex
        // number picks the upper (set) or lower (clear) index along axis `i`.
        let nverts = 1_usize << N;
        let mut loc = [0_usize; N];
        let mut out = T::zero();
        for s in 0..nverts {
            let mut factor = T::one();
            for i in 0..N {
                let Bracket { index, weight } = brackets[i];
                if s & (1 << i) != 0 {
                    loc[i] = index + 1;
                    factor = factor * weight;
                } else {
                    loc[i] = index;
                    factor = factor * (T::one() - weight);
                }
            }

            // Vertices with no weight are skipped, which also keeps the
            // upper index of a clamped edge from being read
            if factor.abs() <= T::epsilon() {
                continue;
            }

            let k = RowMajor::offset(&self.axes_sizes, &loc);
            out = out + factor * self.sample(k)?;
        }

        Ok(out)
    }

    /// Interpolate on a contiguous list of observation points,
    /// given as one slice of coordinates per axis.
    ///
    /// # Errors
    ///   * If the number of coordinates on any axis does not match the output size
    ///   * Any error from [`LookupTable::interp_one`]; no further points are evaluated
    pub fn interp(&self, x: &[&[T]; N], out: &mut [T]) -> Result<()> {
        let n = out.len();

        // Make sure the size of inputs and output match
        if let Some(xx) = x.iter().find(|xx| xx.len() != n) {
            return Err(LutError::LengthMismatch {
                expected: n,
                found: xx.len(),
            });
        }

        let mut tmp = [T::zero(); N];
        for i in 0..n {
            (0..N).for_each(|j| tmp[j] = x[j][i]);
            out[i] = self.interp_one(tmp)?;
        }

        Ok(())
    }

    /// Evaluate the table, allocating a new Vec for the output.
    ///
    /// # Errors
    /// * Any error from [`LookupTable::interp`]
    pub fn interp_alloc(&self, x: &[&[T]; N]) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); x[0].len()];
        self.interp(x, &mut out)?;
        Ok(out)
    }

    /// Number of samples the axes call for
    #[inline]
    fn nvals(&self) -> usize {
        self.axes_sizes.iter().product()
    }

    #[inline]
    fn check_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(LutError::Incomplete {
                axes: self.axes.len(),
                ndims: N,
                data: self.data.len(),
                expected: self.nvals(),
            })
        }
    }

    #[inline]
    fn sample(&self, offset: usize) -> Result<T> {
        self.data
            .get(offset)
            .copied()
            .ok_or(LutError::SampleOffset {
                offset,
                len: self.data.len(),
            })
    }

    fn out_of_bounds(&self, axis: usize, side: Side, value: T) -> LutError {
        let value = <f64 as NumCast>::from(value).unwrap_or(f64::NAN);
        trace!("LookupTable<{N}> lookup at {value} past the {side} edge of axis {axis}");
        LutError::OutOfBounds {
            axis,
            side,
            value,
            value_type: core::any::type_name::<T>(),
            ndims: N,
        }
    }
}
