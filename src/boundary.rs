//! Extrapolation policy for queries that fall outside an axis.
//!
//! A single [`BoundaryPolicy`] applies to every axis of a table: one mode for
//! coordinates below the first tick, one for coordinates at or above the last.
use core::fmt;

use serde::{Deserialize, Serialize};

/// What to do with a coordinate past one edge of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Fail the lookup.
    #[default]
    Error,
    /// Hold the edge sample.
    Constant,
    /// Extend the edge cell using a magnitude-based weight,
    /// `1 + |(x - edge) / reference|`.
    Linear,
}

/// Which edge of an axis a coordinate fell past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Lower,
    Upper,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

/// Pair of extrapolation modes, applied identically to every axis of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryPolicy {
    /// Mode for coordinates below the first tick
    pub lower: BoundaryMode,
    /// Mode for coordinates at or above the last tick
    pub upper: BoundaryMode,
}

impl BoundaryPolicy {
    pub fn new(lower: BoundaryMode, upper: BoundaryMode) -> Self {
        Self { lower, upper }
    }

    /// Same mode on both sides.
    pub fn uniform(mode: BoundaryMode) -> Self {
        Self::new(mode, mode)
    }

    /// Set both sides to the same mode.
    pub fn set_all(&mut self, mode: BoundaryMode) {
        self.lower = mode;
        self.upper = mode;
    }

    /// Mode that governs the given side.
    #[inline]
    pub fn mode(&self, side: Side) -> BoundaryMode {
        match side {
            Side::Lower => self.lower,
            Side::Upper => self.upper,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let policy = BoundaryPolicy::default();
        assert_eq!(policy.lower, BoundaryMode::Error);
        assert_eq!(policy.upper, BoundaryMode::Error);
    }

    #[test]
    fn test_set_all() {
        let mut policy = BoundaryPolicy::new(BoundaryMode::Error, BoundaryMode::Linear);
        assert_eq!(policy.mode(Side::Lower), BoundaryMode::Error);
        assert_eq!(policy.mode(Side::Upper), BoundaryMode::Linear);

        policy.set_all(BoundaryMode::Constant);
        assert_eq!(policy, BoundaryPolicy::uniform(BoundaryMode::Constant));
    }

    #[test]
    fn test_policy_json_names() {
        let policy = BoundaryPolicy::new(BoundaryMode::Constant, BoundaryMode::Linear);
        let s = serde_json::to_string(&policy).unwrap();
        assert_eq!(s, r#"{"lower":"constant","upper":"linear"}"#);

        let back: BoundaryPolicy = serde_json::from_str(&s).unwrap();
        assert_eq!(back, policy);
    }
}
