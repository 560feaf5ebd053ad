use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Board must have at least one column and one row")]
    EmptyBoard,
    #[error("Board has no room for a safe tile next to a mine")]
    NoSafeTiles,
}

pub type Result<T> = core::result::Result<T, FieldError>;
