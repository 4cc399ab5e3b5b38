//! Errors raised while building or querying the address model.

use thiserror::Error;

/// Validation and lookup failures of the admin level types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Level was not a positive integer, or the name was empty.
    #[error("invalid admin level {level} with name {name:?}")]
    InvalidAdminLevel { level: i64, name: String },

    /// Two entries of one collection share a level number.
    #[error("admin level {level} appears more than once")]
    DuplicateAdminLevel { level: u32 },

    #[error("admin level {level} not found")]
    AdminLevelNotFound { level: u32 },
}

pub type Result<T> = std::result::Result<T, AddressError>;
