//! Repository layer: parcel persistence contracts and SQLite implementation.
//!
//! # Invariants
//! - Each operation issues exactly one SQL statement.
//! - Status guards are evaluated by SQLite inside the mutating statement.
//! - `NotFound` is reported separately from transport (`Db`) errors.

pub mod parcel_repo;
