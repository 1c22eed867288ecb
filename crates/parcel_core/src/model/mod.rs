//! Domain model for tracked shipments.
//!
//! # Invariants
//! - Every parcel is identified by a store-assigned `ParcelNumber`.
//! - Only `registered` parcels may change address or be deleted.

pub mod parcel;
