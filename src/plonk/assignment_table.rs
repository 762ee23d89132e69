use serde::{Deserialize, Serialize};

/// Column of cell values.
pub type Column<F> = Vec<F>;

/// Cell values of every column, grouped by column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable<F> {
    witnesses: Vec<Column<F>>,
    public_inputs: Vec<Column<F>>,
    constants: Vec<Column<F>>,
    selectors: Vec<Column<F>>,
}

impl<F> AssignmentTable<F> {
    /// Creates a table from its column groups.
    pub fn new(
        witnesses: Vec<Column<F>>,
        public_inputs: Vec<Column<F>>,
        constants: Vec<Column<F>>,
        selectors: Vec<Column<F>>,
    ) -> Self {
        Self {
            witnesses,
            public_inputs,
            constants,
            selectors,
        }
    }

    /// Witness columns.
    pub fn witnesses(&self) -> &[Column<F>] {
        &self.witnesses
    }

    /// Public input columns.
    pub fn public_inputs(&self) -> &[Column<F>] {
        &self.public_inputs
    }

    /// Constant columns.
    pub fn constants(&self) -> &[Column<F>] {
        &self.constants
    }

    /// Selector columns.
    pub fn selectors(&self) -> &[Column<F>] {
        &self.selectors
    }

    fn groups(&self) -> [&[Column<F>]; 4] {
        [
            self.witnesses.as_slice(),
            self.public_inputs.as_slice(),
            self.constants.as_slice(),
            self.selectors.as_slice(),
        ]
    }

    /// Length of the longest column.
    pub fn rows_amount(&self) -> usize {
        self.groups()
            .iter()
            .flat_map(|group| group.iter().map(Vec::len))
            .max()
            .unwrap_or(0)
    }

    /// Summarises the table layout.
    pub fn description(&self, usable_rows: u64) -> TableDescription {
        TableDescription {
            witness_columns: self.witnesses.len(),
            public_input_columns: self.public_inputs.len(),
            constant_columns: self.constants.len(),
            selector_columns: self.selectors.len(),
            usable_rows,
            rows_amount: self.rows_amount(),
        }
    }

    /// Splits the table into its column groups.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Vec<Column<F>>,
        Vec<Column<F>>,
        Vec<Column<F>>,
        Vec<Column<F>>,
    ) {
        (self.witnesses, self.public_inputs, self.constants, self.selectors)
    }
}

/// Column counts and row counts of an assignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    /// Number of witness columns.
    pub witness_columns: usize,
    /// Number of public input columns.
    pub public_input_columns: usize,
    /// Number of constant columns.
    pub constant_columns: usize,
    /// Number of selector columns.
    pub selector_columns: usize,
    /// Rows available to the circuit.
    pub usable_rows: u64,
    /// Length of the longest column.
    pub rows_amount: usize,
}

impl TableDescription {
    /// Total number of columns.
    pub fn total_columns(&self) -> usize {
        self.witness_columns
            + self.public_input_columns
            + self.constant_columns
            + self.selector_columns
    }
}
