//! The dataset registry: every dataset created during this process, keyed
//! by name.
//!
//! The registry has no locking of its own. Whoever serves requests owns it
//! and decides how access is serialized.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use einhard_types::DatasetDefinition;
use tracing::{info, warn};

use crate::dataset::Dataset;
use crate::error::DatasetError;

/// In-memory mapping of dataset name to [`Dataset`].
///
/// Starts empty. Registering a dataset under a name that is already taken
/// replaces the old one outright. Iteration is in ascending name order.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            datasets: BTreeMap::new(),
        }
    }

    /// Build a dataset from `definition` and register it.
    ///
    /// A definition that fails validation leaves the registry as it was.
    ///
    /// # Errors
    ///
    /// Any [`DatasetError`] raised while building the dataset.
    pub fn create(&mut self, definition: DatasetDefinition) -> Result<&Dataset, DatasetError> {
        let name = definition.name.clone();
        let dataset = Dataset::from_definition(definition).inspect_err(|e| {
            warn!(dataset = %name, kind = %e.kind(), error = %e, "dataset definition rejected");
        })?;
        Ok(self.register(dataset))
    }

    /// Register a built dataset under its own name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, dataset: Dataset) -> &Dataset {
        let rows = dataset.len();
        match self.datasets.entry(dataset.name().to_owned()) {
            Entry::Occupied(mut slot) => {
                info!(dataset = %slot.key(), rows, replaced = true, "dataset registered");
                slot.insert(dataset);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                info!(dataset = %slot.key(), rows, replaced = false, "dataset registered");
                slot.insert(dataset)
            }
        }
    }

    /// Every registered dataset in name order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Dataset)> {
        self.datasets.iter().map(|(name, ds)| (name.as_str(), ds))
    }

    /// Plain structure of every registered dataset, keyed by name.
    pub fn to_definitions(&self) -> BTreeMap<String, DatasetDefinition> {
        self.datasets
            .iter()
            .map(|(name, ds)| (name.clone(), ds.to_definition()))
            .collect()
    }

    /// Look up a dataset by name.
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    /// Registered dataset names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    /// Number of registered datasets.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
