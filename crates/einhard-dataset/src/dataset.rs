//! Datasets: typed columns plus the observations recorded against them.
//!
//! A [`Dataset`] is never partially built. Construction checks every
//! datatype, then every initial observation, and only then fills the
//! [`Table`]. Appends after construction are validated the same way and
//! either land whole or leave the dataset untouched.
//!
//! # Row rule
//!
//! A row is accepted when:
//! 1. every key names a declared column,
//! 2. every real value is finite, and
//! 3. every non-omittable column holds a non-null value.
//!
//! Columns the row leaves out are stored as absent cells.

use std::collections::BTreeSet;

use einhard_types::{DatasetDefinition, DatatypeDefinition, Observation, ObservationValue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::descriptor::DatatypeDescriptor;
use crate::error::DatasetError;
use crate::table::Table;

/// A named, schema-validated collection of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    datatypes: Vec<DatatypeDescriptor>,
    table: Table,
}

impl Dataset {
    /// Build a dataset from its datatypes and optional initial rows.
    ///
    /// All datatypes are checked before any row is looked at, and all rows
    /// are checked before any is stored.
    ///
    /// # Errors
    ///
    /// Schema violations ([`DatasetError::UnknownType`],
    /// [`DatasetError::EmptyName`], [`DatasetError::NoDatatypes`],
    /// [`DatasetError::EmptyColumnName`], [`DatasetError::DuplicateColumn`])
    /// for bad declarations, and [`DatasetError::InvalidRow`] wrapping the
    /// row rule failure of the first rejected initial observation.
    pub fn new(
        name: impl Into<String>,
        datatypes: &[DatatypeDefinition],
        observations: Vec<Observation>,
    ) -> Result<Self, DatasetError> {
        let descriptors = datatypes
            .iter()
            .map(DatatypeDescriptor::from_definition)
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_descriptors(name, descriptors, observations)
    }

    /// Build a dataset from already validated descriptors.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::new`], minus unknown types.
    pub fn with_descriptors(
        name: impl Into<String>,
        datatypes: Vec<DatatypeDescriptor>,
        observations: Vec<Observation>,
    ) -> Result<Self, DatasetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DatasetError::EmptyName);
        }
        if datatypes.is_empty() {
            return Err(DatasetError::NoDatatypes { dataset: name });
        }

        let mut seen = BTreeSet::new();
        for (position, d) in datatypes.iter().enumerate() {
            if d.name().is_empty() {
                return Err(DatasetError::EmptyColumnName { position });
            }
            if !seen.insert(d.name()) {
                return Err(DatasetError::DuplicateColumn {
                    column: d.name().to_owned(),
                });
            }
        }

        let table = Table::new(datatypes.iter().map(|d| d.name().to_owned()));
        let mut dataset = Self {
            name,
            datatypes,
            table,
        };

        for (row, observation) in observations.iter().enumerate() {
            dataset.validate(observation).map_err(|e| e.in_row(row))?;
        }
        for observation in observations {
            dataset.table.push_row(observation);
        }

        debug!(
            dataset = %dataset.name,
            columns = dataset.datatypes.len(),
            rows = dataset.table.len(),
            "dataset built"
        );
        Ok(dataset)
    }

    /// Build a dataset from its plain structure.
    ///
    /// Equivalent to [`Dataset::new`] with the structure's fields.
    pub fn from_definition(def: DatasetDefinition) -> Result<Self, DatasetError> {
        Self::new(def.name, &def.datatypes, def.observations)
    }

    /// The plain structure of this dataset.
    ///
    /// Every observation carries every declared column; cells that were
    /// never supplied are `null`.
    pub fn to_definition(&self) -> DatasetDefinition {
        DatasetDefinition {
            name: self.name.clone(),
            datatypes: self
                .datatypes
                .iter()
                .map(DatatypeDescriptor::to_definition)
                .collect(),
            observations: self.observations(),
        }
    }

    /// Check a row against the row rule without storing it.
    ///
    /// Undeclared keys are reported first, then NaN or infinite reals, then
    /// missing values. Missing values are reported for the first required
    /// column in declared order.
    ///
    /// # Errors
    ///
    /// [`DatasetError::UnknownColumn`], [`DatasetError::NonFiniteValue`] or
    /// [`DatasetError::MissingValue`].
    pub fn validate(&self, row: &Observation) -> Result<(), DatasetError> {
        if let Some(column) = row.keys().find(|k| !self.table.has_column(k)) {
            return Err(DatasetError::UnknownColumn {
                column: column.clone(),
            });
        }

        let non_finite = row
            .iter()
            .find(|(_, v)| v.as_f64().is_some_and(|x| !x.is_finite()));
        if let Some((column, _)) = non_finite {
            return Err(DatasetError::NonFiniteValue {
                column: column.clone(),
            });
        }

        let missing = self.datatypes.iter().find(|d| {
            !d.omittable() && row.get(d.name()).is_none_or(ObservationValue::is_absent)
        });
        if let Some(d) = missing {
            return Err(DatasetError::MissingValue {
                column: d.name().to_owned(),
            });
        }

        Ok(())
    }

    /// Append one observation as the new last row.
    ///
    /// On error the dataset is unchanged. A key that names no declared
    /// column is a schema error even when every required value is present.
    ///
    /// # Errors
    ///
    /// [`DatasetError::MissingValue`] naming the first non-omittable column
    /// without a value, [`DatasetError::UnknownColumn`] for an undeclared
    /// key, or [`DatasetError::NonFiniteValue`] for a NaN or infinite real.
    pub fn add_observation(&mut self, row: Observation) -> Result<(), DatasetError> {
        self.validate(&row)?;
        self.table.push_row(row);
        debug!(dataset = %self.name, rows = self.table.len(), "observation appended");
        Ok(())
    }

    /// Dataset identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column declarations in column order.
    pub fn datatypes(&self) -> &[DatatypeDescriptor] {
        &self.datatypes
    }

    /// The underlying tabular store.
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Number of observations.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no observation has been recorded.
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All observations in append order.
    pub fn observations(&self) -> Vec<Observation> {
        self.table.rows().collect()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_definition().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let def = DatasetDefinition::deserialize(deserializer)?;
        Self::from_definition(def).map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for Dataset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Data Types: [")?;
        for (i, d) in self.datatypes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        writeln!(f, "]")?;
        write!(f, "{}", self.table)
    }
}
