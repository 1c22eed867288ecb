//! Parcel use-case services.
//!
//! # Responsibility
//! - Turn store primitives into tracker workflows (register, advance, ...).
//! - Keep CLI callers decoupled from SQL details.

pub mod parcel_service;
