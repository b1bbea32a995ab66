//! Datatype and dataset definitions.
//!
//! These are the plain structures exchanged over HTTP. A create request body
//! decodes into a [`DatasetDefinition`], and a registered dataset serializes
//! back into the same shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::values::Observation;

// ---------------------------------------------------------------------------
// Datatype definition
// ---------------------------------------------------------------------------

/// Declaration of one dataset column as it appears on the wire.
///
/// `type` is kept as a raw string so that an unregistered type name reaches
/// schema validation instead of failing JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DatatypeDefinition {
    /// Column name, unique within its dataset.
    pub name: String,
    /// Semantic type name (`real`, `integer` or `discrete`).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether observations may leave this column empty. Defaults to `false`.
    #[serde(default)]
    pub omittable: bool,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl DatatypeDefinition {
    /// Build a definition from its parts.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        omittable: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            omittable,
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset definition
// ---------------------------------------------------------------------------

/// Plain structure of a whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DatasetDefinition {
    /// Dataset identifier.
    pub name: String,
    /// Column declarations in column order.
    pub datatypes: Vec<DatatypeDefinition>,
    /// Row records in insertion order. May be omitted on create.
    #[serde(default)]
    pub observations: Vec<Observation>,
}
