/// Column group a variable refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColumnType {
    /// Private witness column.
    Witness = 0,
    /// Public input column.
    PublicInput = 1,
    /// Fixed constant column.
    Constant = 2,
    /// Gate selector column.
    Selector = 3,
}

impl ColumnType {
    /// All column types in tag order.
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Witness,
        ColumnType::PublicInput,
        ColumnType::Constant,
        ColumnType::Selector,
    ];

    /// Wire tag of the column type.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Parses a wire tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(ColumnType::Witness),
            1 => Some(ColumnType::PublicInput),
            2 => Some(ColumnType::Constant),
            3 => Some(ColumnType::Selector),
            _ => None,
        }
    }
}

/// Reference to a table cell relative to (or absolute from) the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Column index within its group.
    pub index: u64,
    /// Row offset.
    pub rotation: i32,
    /// Whether `rotation` is relative to the evaluated row.
    pub relative: bool,
    /// Column group.
    pub column: ColumnType,
}

impl Variable {
    /// Creates a variable.
    pub const fn new(index: u64, rotation: i32, relative: bool, column: ColumnType) -> Self {
        Self {
            index,
            rotation,
            relative,
            column,
        }
    }

    /// Relative witness variable, the common case inside gates.
    pub const fn witness(index: u64, rotation: i32) -> Self {
        Self::new(index, rotation, true, ColumnType::Witness)
    }
}
