//! Shared type definitions for Einhard datasets.
//!
//! This crate holds the plain, JSON-shaped structures that cross the HTTP
//! boundary. They carry no validation of their own: a [`DatasetDefinition`]
//! is only a candidate until `einhard-dataset` accepts it. Types defined here
//! flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- The registered datatype set
//! - [`values`] -- Observation cells and rows
//! - [`structs`] -- Datatype and dataset definitions

pub mod enums;
pub mod structs;
pub mod values;

// Re-export all public types at crate root for convenience.
pub use enums::{RegisteredType, UnknownTypeName};
pub use structs::{DatasetDefinition, DatatypeDefinition};
pub use values::{Observation, ObservationValue};
