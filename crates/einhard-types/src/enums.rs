//! The registered datatype set.
//!
//! Every column of a dataset declares one of these semantic types. The set
//! is closed: names outside it are rejected when a dataset is built.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Registered types
// ---------------------------------------------------------------------------

/// Semantic type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RegisteredType {
    /// Continuous numeric measurement.
    Real,
    /// Whole-number measurement or count.
    Integer,
    /// Categorical label.
    Discrete,
}

impl RegisteredType {
    /// Every registered type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Real, Self::Integer, Self::Discrete];

    /// The wire name of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Integer => "integer",
            Self::Discrete => "discrete",
        }
    }
}

impl core::fmt::Display for RegisteredType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegisteredType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTypeName(s.to_owned()))
    }
}

/// A type name that is not part of the registered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeName(pub String);

impl core::fmt::Display for UnknownTypeName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Unknown type.", self.0)
    }
}

impl std::error::Error for UnknownTypeName {}
