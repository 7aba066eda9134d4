//! Record form of a lookup table: `axes`, `axes_sizes`, and `data`.
//!
//! The boundary policy is not part of the record; a decoded table starts with
//! the default (strict) policy unless one is supplied.
//!
//! ```rust
//! use multilut::{BoundaryMode, BoundaryPolicy, LookupTable};
//!
//! let lut = LookupTable::<f64, 1>::from_parts(
//!     [vec![0.0, 1.0]],
//!     vec![3.0, 5.0],
//!     BoundaryPolicy::uniform(BoundaryMode::Linear),
//! )?;
//!
//! let s = lut.to_json_string()?;
//! assert_eq!(s, r#"{"axes":[[0.0,1.0]],"axes_sizes":[2],"data":[3.0,5.0]}"#);
//!
//! let back: LookupTable<f64, 1> =
//!     LookupTable::from_json_str(&s, BoundaryPolicy::uniform(BoundaryMode::Linear))?;
//! assert_eq!(back, lut);
//! # Ok::<(), multilut::LutError>(())
//! ```
use log::debug;
use num_traits::Float;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::boundary::BoundaryPolicy;
use crate::error::{LutError, Result};
use crate::lut::LookupTable;

/// Owned record of a table's grid and samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LutRecord<T> {
    pub axes: Vec<Vec<T>>,
    pub axes_sizes: Vec<usize>,
    pub data: Vec<T>,
}

/// Borrowed view with the same layout as [`LutRecord`], so encoding does not copy.
#[derive(Serialize)]
struct LutRecordRef<'a, T> {
    axes: &'a [Vec<T>],
    axes_sizes: &'a [usize],
    data: &'a [T],
}

impl<T: Float, const N: usize> From<&LookupTable<T, N>> for LutRecord<T> {
    fn from(lut: &LookupTable<T, N>) -> Self {
        Self {
            axes: lut.axes().to_vec(),
            axes_sizes: lut.axes_sizes().to_vec(),
            data: lut.data().to_vec(),
        }
    }
}

impl<T: Float, const N: usize> TryFrom<LutRecord<T>> for LookupTable<T, N> {
    type Error = LutError;

    /// Rebuild a table with the default boundary policy.
    ///
    /// # Errors
    /// * If the record does not have exactly `N` axes and `N` axis sizes
    /// * If any declared axis size disagrees with its axis
    /// * If the data length is not the product of the axis sizes
    fn try_from(record: LutRecord<T>) -> Result<Self> {
        let LutRecord {
            axes,
            axes_sizes,
            data,
        } = record;

        for found in [axes.len(), axes_sizes.len()] {
            if found != N {
                return Err(LutError::DimensionMismatch { expected: N, found });
            }
        }
        for (i, (axis, &declared)) in axes.iter().zip(axes_sizes.iter()).enumerate() {
            if axis.len() != declared {
                return Err(LutError::AxisSizeMismatch {
                    axis: i,
                    declared,
                    actual: axis.len(),
                });
            }
        }

        let mut lut = Self::new();
        for axis in axes {
            lut.add_axis(axis)?;
        }
        lut.set_data(data)?;
        debug!("Decoded LookupTable<{N}> record with axes {axes_sizes:?}");

        Ok(lut)
    }
}

impl<T: Float + Serialize, const N: usize> Serialize for LookupTable<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        LutRecordRef {
            axes: self.axes(),
            axes_sizes: self.axes_sizes(),
            data: self.data(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Float + Deserialize<'de>, const N: usize> Deserialize<'de> for LookupTable<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let record = LutRecord::<T>::deserialize(deserializer)?;
        Self::try_from(record).map_err(D::Error::custom)
    }
}

impl<T: Float + Serialize, const N: usize> LookupTable<T, N> {
    /// Encode the table as a compact JSON record.
    ///
    /// # Errors
    /// * If the encoder fails, which for floats means a non-finite value
    ///   was written somewhere it cannot be represented
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode the table as an indented JSON record.
    ///
    /// # Errors
    /// * See [`LookupTable::to_json_string`]
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode the table as an in-memory JSON record.
    ///
    /// # Errors
    /// * See [`LookupTable::to_json_string`]
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<T: Float + DeserializeOwned, const N: usize> LookupTable<T, N> {
    /// Decode a JSON record and attach the given boundary policy.
    ///
    /// # Errors
    /// * If any of the three fields is missing or malformed
    /// * If the fields do not describe a complete `N`-dimensional table
    pub fn from_json_str(s: &str, boundary_policy: BoundaryPolicy) -> Result<Self> {
        let mut lut: Self = serde_json::from_str(s)?;
        lut.set_boundary_policy(boundary_policy);
        Ok(lut)
    }

    /// Decode an in-memory JSON record and attach the given boundary policy.
    ///
    /// # Errors
    /// * See [`LookupTable::from_json_str`]
    pub fn from_json_value(
        value: serde_json::Value,
        boundary_policy: BoundaryPolicy,
    ) -> Result<Self> {
        let mut lut: Self = serde_json::from_value(value)?;
        lut.set_boundary_policy(boundary_policy);
        Ok(lut)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::LutRecord;
    use crate::boundary::{BoundaryMode, BoundaryPolicy};
    use crate::error::LutError;
    use crate::lut::LookupTable;
    use crate::utils::*;

    fn product_2d() -> LookupTable<f64, 2> {
        let x = vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![-2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        let xy = meshgrid(Vec::from([&x, &y]));
        let z: Vec<f64> = xy.iter().map(|p| p[0] * p[1]).collect();
        LookupTable::from_parts([x, y], z, BoundaryPolicy::uniform(BoundaryMode::Linear)).unwrap()
    }

    #[test]
    fn test_record_fields() {
        let lut = LookupTable::<f64, 2>::from_parts(
            [vec![0.0, 1.0], vec![10.0, 20.0, 30.0]],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            BoundaryPolicy::uniform(BoundaryMode::Constant),
        )
        .unwrap();

        let expected = json!({
            "axes": [[0.0, 1.0], [10.0, 20.0, 30.0]],
            "axes_sizes": [2, 3],
            "data": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        });
        assert_eq!(lut.to_json_value().unwrap(), expected);

        // The policy stays with the owner
        let s = lut.to_json_string_pretty().unwrap();
        assert!(!s.contains("boundary"));
        assert!(!s.contains("constant"));
    }

    #[test]
    fn test_round_trip() {
        let lut = product_2d();
        let s = lut.to_json_string().unwrap();

        // Plain decoding gets the default policy
        let strict: LookupTable<f64, 2> = serde_json::from_str(&s).unwrap();
        assert_eq!(strict.boundary_policy(), BoundaryPolicy::default());
        assert!(strict.value(&[12.0, 0.0]).is_err());

        let back = LookupTable::<f64, 2>::from_json_str(&s, lut.boundary_policy()).unwrap();
        assert_eq!(back.axes(), lut.axes());
        assert_eq!(back.axes_sizes(), lut.axes_sizes());
        assert_eq!(back.data(), lut.data());
        assert_eq!(back, lut);

        let xobs = linspace(-3.0, 7.0, 9);
        let yobs = linspace(-5.0, 14.0, 11);
        for p in meshgrid(Vec::from([&xobs, &yobs])) {
            let a = lut.value(&p).unwrap();
            let b = back.value(&p).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_record_conversion() {
        let lut = product_2d();
        let record = LutRecord::from(&lut);
        assert_eq!(record.axes_sizes, vec![7, 7]);

        let back = LookupTable::<f64, 2>::try_from(record.clone()).unwrap();
        assert_eq!(back.data(), lut.data());

        let mut bad = record.clone();
        bad.axes_sizes[1] = 6;
        assert!(matches!(
            LookupTable::<f64, 2>::try_from(bad),
            Err(LutError::AxisSizeMismatch {
                axis: 1,
                declared: 6,
                actual: 7
            })
        ));

        let mut bad = record.clone();
        bad.data.pop();
        assert!(matches!(
            LookupTable::<f64, 2>::try_from(bad),
            Err(LutError::DataLength {
                expected: 49,
                found: 48
            })
        ));

        assert!(matches!(
            LookupTable::<f64, 3>::try_from(record),
            Err(LutError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_missing_field() {
        let policy = BoundaryPolicy::default();
        for s in [
            r#"{"axes_sizes": [2], "data": [0.0, 1.0]}"#,
            r#"{"axes": [[0.0, 1.0]], "data": [0.0, 1.0]}"#,
            r#"{"axes": [[0.0, 1.0]], "axes_sizes": [2]}"#,
        ] {
            match LookupTable::<f64, 1>::from_json_str(s, policy) {
                Err(LutError::Record(e)) => assert!(e.to_string().contains("missing field")),
                other => panic!("expected a record error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_inconsistent_record() {
        let s = r#"{"axes": [[0.0, 1.0]], "axes_sizes": [3], "data": [0.0, 1.0]}"#;
        match LookupTable::<f64, 1>::from_json_str(s, BoundaryPolicy::default()) {
            Err(LutError::Record(e)) => assert!(e.to_string().contains("declares 3 entries")),
            other => panic!("expected a record error, got {other:?}"),
        }

        let v = json!({"axes": [[0.0, 1.0]], "axes_sizes": [2], "data": [0.0]});
        assert!(LookupTable::<f64, 1>::from_json_value(v, BoundaryPolicy::default()).is_err());
    }
}
