//! Validated column declarations.

use einhard_types::{DatatypeDefinition, RegisteredType};

use crate::error::DatasetError;

/// A column declaration whose type has been checked against the registered
/// set. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeDescriptor {
    name: String,
    kind: RegisteredType,
    omittable: bool,
    description: String,
}

impl DatatypeDescriptor {
    /// Build a descriptor, rejecting type names outside the registered set.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownType`] when `type_name` is not one of
    /// `real`, `integer` or `discrete`.
    pub fn new(
        name: impl Into<String>,
        type_name: &str,
        omittable: bool,
        description: impl Into<String>,
    ) -> Result<Self, DatasetError> {
        let name = name.into();
        let kind = type_name
            .parse::<RegisteredType>()
            .map_err(|e| DatasetError::UnknownType {
                column: name.clone(),
                type_name: e.0,
            })?;
        Ok(Self {
            name,
            kind,
            omittable,
            description: description.into(),
        })
    }

    /// Build a descriptor from its wire definition.
    pub fn from_definition(def: &DatatypeDefinition) -> Result<Self, DatasetError> {
        Self::new(def.name.as_str(), &def.type_name, def.omittable, def.description.as_str())
    }

    /// The wire definition of this descriptor.
    pub fn to_definition(&self) -> DatatypeDefinition {
        DatatypeDefinition::new(
            self.name.as_str(),
            self.kind.as_str(),
            self.omittable,
            self.description.as_str(),
        )
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered semantic type.
    pub const fn kind(&self) -> RegisteredType {
        self.kind
    }

    /// Whether rows may leave this column empty.
    pub const fn omittable(&self) -> bool {
        self.omittable
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl core::fmt::Display for DatatypeDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.kind)?;
        if self.omittable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
