//! Column-oriented observation store.
//!
//! A [`Table`] keeps one [`Column`] per declared datatype, in declared order.
//! Every append pushes exactly one cell onto every column, so all columns
//! share the same length and row `i` is the `i`-th cell of each column.

use core::fmt::Write as _;

use einhard_types::{Observation, ObservationValue};

/// One named column of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    name: String,
    values: Vec<ObservationValue>,
}

impl Column {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells in row order.
    pub fn values(&self) -> &[ObservationValue] {
        &self.values
    }

    /// Number of cells that hold a value.
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_absent()).count()
    }
}

/// Tabular store with synchronized row indices across columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Create an empty table with the given columns, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: names
                .into_iter()
                .map(|name| Column {
                    name: name.into(),
                    values: Vec::new(),
                })
                .collect(),
            rows: 0,
        }
    }

    /// Number of rows.
    pub const fn len(&self) -> usize {
        self.rows
    }

    /// Whether the table has no rows.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Columns in declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Whether `name` is one of this table's columns.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Append a row. Columns missing from `row` receive an absent cell.
    ///
    /// Keys of `row` that name no column are dropped; callers validate rows
    /// before appending.
    pub(crate) fn push_row(&mut self, mut row: Observation) {
        for column in &mut self.columns {
            let cell = row.remove(&column.name).unwrap_or_default();
            column.values.push(cell);
        }
        self.rows = self.rows.saturating_add(1);
    }

    /// Materialize row `index` as an observation holding every column.
    pub fn row(&self, index: usize) -> Option<Observation> {
        if index >= self.rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| {
                    let cell = c.values.get(index).cloned().unwrap_or_default();
                    (c.name.clone(), cell)
                })
                .collect(),
        )
    }

    /// Iterate over all rows in append order.
    pub fn rows(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.rows).filter_map(|i| self.row(i))
    }
}

fn cell_text(column: &Column, index: usize) -> String {
    match column.values.get(index) {
        Some(ObservationValue::Absent) | None => String::from("-"),
        Some(v) => v.to_string(),
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let index_width = self.rows.to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| {
                (0..self.rows)
                    .map(|i| cell_text(c, i).chars().count())
                    .chain(core::iter::once(c.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut line = format!("{:index_width$}", "");
        for (column, width) in self.columns.iter().zip(widths.iter().copied()) {
            write!(line, "  {:>width$}", column.name)?;
        }
        writeln!(f, "{}", line.trim_end())?;

        for i in 0..self.rows {
            let mut line = format!("{i:>index_width$}");
            for (column, width) in self.columns.iter().zip(widths.iter().copied()) {
                write!(line, "  {:>width$}", cell_text(column, i))?;
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
