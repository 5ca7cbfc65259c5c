use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("expected a {rows}x{columns} grid, got {found_rows}x{found_columns}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },

    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("pattern '{name}' does not fit in a {rows}x{columns} grid at the requested origin")]
    PatternDoesNotFit {
        name: &'static str,
        rows: usize,
        columns: usize,
    },

    #[error("malformed grid text: {message}")]
    Parse { message: String },
}

impl LifeError {
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
