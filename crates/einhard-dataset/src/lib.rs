//! Schema-validated datasets for Einhard.
//!
//! A dataset is a named list of typed columns ("datatypes") plus the rows
//! ("observations") recorded against them. This crate owns the rules that
//! decide whether a column declaration, a dataset or a single row is
//! well-formed, and how accepted rows accumulate.
//!
//! # Modules
//!
//! - [`descriptor`] -- Validated column declarations
//! - [`table`] -- Column-oriented row storage
//! - [`dataset`] -- Construction, validation and appends
//! - [`registry`] -- Name-keyed collection of datasets
//! - [`error`] -- [`DatasetError`] and its [`ErrorKind`] families

pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod table;

pub use dataset::Dataset;
pub use descriptor::DatatypeDescriptor;
pub use error::{DatasetError, ErrorKind};
pub use registry::DatasetRegistry;
pub use table::{Column, Table};
