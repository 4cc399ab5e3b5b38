//! Immutable value model for Google Maps geocoding results.
//!
//! A response adapter drives the `with_*` API of [`GoogleAddress`] to build a
//! result; application code then reads it back through the accessors and the
//! [`Location`] trait.

pub mod config;
pub mod error;
pub mod models;

pub use error::AddressError;
pub use models::{
    Address, AdminLevel, AdminLevelCollection, ConflictPolicy, GoogleAddress, Location,
    RawAdminLevel,
};
