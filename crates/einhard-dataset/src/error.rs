//! Error types for the `einhard-dataset` crate.
//!
//! All fallible operations in this crate return [`DatasetError`]. Every
//! variant belongs to one of two families reported by [`DatasetError::kind`]:
//! schema violations, which abort construction of a whole dataset, and
//! missing required values, which abort a single append.

/// Family a [`DatasetError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dataset definition or a row does not fit the declared schema.
    SchemaValidation,
    /// A non-omittable column has no value in a row.
    MissingRequiredValue,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SchemaValidation => f.write_str("SchemaValidationError"),
            Self::MissingRequiredValue => f.write_str("MissingRequiredValueError"),
        }
    }
}

/// Errors raised while building a dataset or appending observations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// A column declares a type outside the registered set.
    #[error("{type_name}: Unknown type.")]
    UnknownType {
        /// Column carrying the bad declaration.
        column: String,
        /// The rejected type name.
        type_name: String,
    },

    /// The dataset name is empty.
    #[error("Dataset name must not be empty.")]
    EmptyName,

    /// The dataset declares no columns.
    #[error("Dataset '{dataset}' must declare at least one datatype.")]
    NoDatatypes {
        /// The dataset being built.
        dataset: String,
    },

    /// A column declaration has an empty name.
    #[error("Datatype at position {position} has an empty name.")]
    EmptyColumnName {
        /// Zero-based position in the datatype list.
        position: usize,
    },

    /// Two columns share a name.
    #[error("{column}: Declared more than once.")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },

    /// A row references a column the dataset does not declare.
    #[error("{column}: Not among the registered data types for the dataset.")]
    UnknownColumn {
        /// The undeclared column.
        column: String,
    },

    /// A row holds a NaN or infinite real, which JSON cannot carry.
    #[error("{column}: Real values must be finite.")]
    NonFiniteValue {
        /// Column holding the non-finite value.
        column: String,
    },

    /// A row leaves a non-omittable column empty.
    #[error("Missing non-omittable value {column}.")]
    MissingValue {
        /// First missing required column, in declared order.
        column: String,
    },

    /// An initial observation failed validation.
    #[error("Observation {row}: {source}")]
    InvalidRow {
        /// Zero-based index of the rejected row.
        row: usize,
        /// Why the row was rejected.
        #[source]
        source: Box<Self>,
    },
}

impl DatasetError {
    /// The family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingValue { .. } => ErrorKind::MissingRequiredValue,
            Self::InvalidRow { source, .. } => source.kind(),
            Self::UnknownType { .. }
            | Self::EmptyName
            | Self::NoDatatypes { .. }
            | Self::EmptyColumnName { .. }
            | Self::DuplicateColumn { .. }
            | Self::UnknownColumn { .. }
            | Self::NonFiniteValue { .. } => ErrorKind::SchemaValidation,
        }
    }

    /// Whether this error rejects the schema or a row's columns.
    pub fn is_schema_violation(&self) -> bool {
        self.kind() == ErrorKind::SchemaValidation
    }

    /// Attach the index of the initial observation that failed.
    pub(crate) fn in_row(self, row: usize) -> Self {
        Self::InvalidRow {
            row,
            source: Box::new(self),
        }
    }
}
