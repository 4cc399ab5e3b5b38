//! Core data models for a geocoded address result.

pub mod address;
pub mod admin;
pub mod google;

pub use address::{Address, Bounds, Coordinates, Country, Location};
pub use admin::{AdminLevel, AdminLevelCollection, ConflictPolicy, RawAdminLevel};
pub use google::GoogleAddress;
