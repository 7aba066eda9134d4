//! N-dimensional multilinear lookup tables on rectilinear grids,
//! with a per-side policy for queries outside the sampled domain.
//!
//! A [`LookupTable`] owns its axes, the samples on the grid they span, and a
//! [`BoundaryPolicy`]. A lookup brackets each coordinate on its axis, then takes
//! the weighted sum of the 2^ndims samples at the corners of the containing cell.
//!
//! # Performance Scalings
//! There are 2^ndims grid values that contribute to each observation point,
//! and each axis is located with a bisection search, which takes a worst-case
//! number of iterations of log2(axis size).
//!
//! | Operation                     | RAM       | Interp. / Extrap. Cost       |
//! |-------------------------------|-----------|------------------------------|
//! | LookupTable::value            | O(ndims)  | O(2^ndims) + log2(gridsize)  |
//! | LookupTable::value_scalar     | O(1)      | O(1) + log2(gridsize)        |
//!
//! # Boundary Modes
//! Coordinates below the first tick follow the policy's `lower` mode, and
//! coordinates at or above the last tick follow its `upper` mode:
//! * `Error` fails the lookup with [`LutError::OutOfBounds`]
//! * `Constant` holds the edge sample
//! * `Linear` extends the edge cell with weight `1 + |(x - edge) / reference|`,
//!   where the reference is the edge tick, or its neighbor when the edge tick is zero
//!
//! # Example: 1D
//! ```rust
//! use multilut::{BoundaryMode, LookupTable};
//!
//! let mut lut = LookupTable::<f64, 1>::new();
//! lut.boundary_policy_mut().set_all(BoundaryMode::Linear);
//! lut.add_axis(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
//! lut.set_data(vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0])?;
//!
//! assert_eq!(lut.value_scalar(2.5)?, 5.0);
//! assert!((lut.value_scalar(12.0)? - 12.8).abs() < 1e-12);
//! # Ok::<(), multilut::LutError>(())
//! ```
//!
//! # Example: 2D
//! ```rust
//! use multilut::{utils::sample_grid, BoundaryMode, BoundaryPolicy, LookupTable};
//!
//! let x = vec![-1.0_f64, 0.0, 1.0, 2.0];
//! let y = vec![-2.0_f64, 0.0, 2.0, 4.0];
//! let z = sample_grid(&[x.clone(), y.clone()], |p| p[0] * p[1]);
//!
//! let lut = LookupTable::from_parts([x, y], z, BoundaryPolicy::uniform(BoundaryMode::Error))?;
//! assert!((lut.value(&[0.5, 1.0])? - 0.5).abs() < 1e-12);
//! assert!(lut.value(&[3.0, 0.0]).is_err());
//! # Ok::<(), multilut::LutError>(())
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod boundary;
pub mod error;
pub mod index;
pub mod lut;
pub mod record;
pub mod search;
pub mod utils;

pub use boundary::{BoundaryMode, BoundaryPolicy, Side};
pub use error::{LutError, Result};
pub use index::{ColumnMajor, IndexScheme, RowMajor};
pub use lut::LookupTable;
pub use record::LutRecord;
pub use search::{search_axis, Bracket};

#[cfg(test)]
pub(crate) mod testing;
