//! Observation cells and rows.
//!
//! An [`Observation`] is one row of a dataset: a mapping from column name to
//! an [`ObservationValue`]. Cells are tagged by shape only. Whether a row
//! fits a dataset is decided by `einhard-dataset`, not here.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row record keyed by column name.
pub type Observation = BTreeMap<String, ObservationValue>;

/// A single cell of an observation.
///
/// On the wire a cell is a bare JSON scalar: integers decode to
/// [`Integer`](Self::Integer), any other number to [`Real`](Self::Real),
/// strings to [`Discrete`](Self::Discrete) and `null` to
/// [`Absent`](Self::Absent). Booleans, arrays and objects are not cells,
/// and neither is an integer literal outside the `i64` range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum ObservationValue {
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Real(f64),
    /// A categorical label.
    Discrete(String),
    /// No value recorded.
    #[default]
    Absent,
}

impl ObservationValue {
    /// Whether this cell holds no value.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The integer payload, if any.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The real payload, if any.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

}

impl<'de> Deserialize<'de> for ObservationValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ObservationValueVisitor)
    }
}

struct ObservationValueVisitor;

impl<'de> Visitor<'de> for ObservationValueVisitor {
    type Value = ObservationValue;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an i64 integer, a number, a string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ObservationValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(ObservationValue::Integer)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ObservationValue::Real(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ObservationValue::Discrete(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ObservationValue::Discrete(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ObservationValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ObservationValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        ObservationValue::deserialize(deserializer)
    }
}

impl core::fmt::Display for ObservationValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Discrete(v) => f.write_str(v),
            Self::Absent => f.write_str("null"),
        }
    }
}

impl From<i64> for ObservationValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ObservationValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for ObservationValue {
    fn from(v: &str) -> Self {
        Self::Discrete(v.to_owned())
    }
}

impl From<String> for ObservationValue {
    fn from(v: String) -> Self {
        Self::Discrete(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for ObservationValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}
