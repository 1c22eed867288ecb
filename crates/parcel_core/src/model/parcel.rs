//! Parcel domain model.
//!
//! # Responsibility
//! - Define the record persisted in the `parcel` relation.
//! - Encode the `registered -> sent -> delivered` lifecycle.
//!
//! # Invariants
//! - `number` is assigned by the store and never reused.
//! - `client` and `created_at` never change after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned parcel identifier.
pub type ParcelNumber = i64;

/// External client identifier owning a parcel.
pub type ClientId = i64;

/// Lifecycle stage of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted but not yet handed to a carrier. The only mutable stage.
    Registered,
    /// In transit.
    Sent,
    /// Handed to the recipient. Terminal.
    Delivered,
}

impl ParcelStatus {
    /// Text form stored in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Returns the following lifecycle stage, or `None` once delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    /// Whether address changes and deletion are permitted in this stage.
    pub fn allows_mutation(self) -> bool {
        self == Self::Registered
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text that does not name a known lifecycle stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

impl FromStr for ParcelStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "registered" => Ok(Self::Registered),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A tracked shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Zero until the store assigns one; ignored on insert.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    pub address: String,
    /// RFC3339 timestamp, e.g. `2024-01-01T00:00:00Z`.
    pub created_at: String,
}

impl Parcel {
    /// Builds an unsaved parcel in the `registered` stage.
    pub fn new(client: ClientId, address: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }
}

impl Display for Parcel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parcel #{} client={} status={} address=\"{}\" created_at={}",
            self.number, self.client, self.status, self.address, self.created_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Parcel, ParcelStatus};

    #[test]
    fn status_text_roundtrips_through_from_str() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        let err = "lost".parse::<ParcelStatus>().unwrap_err();
        assert!(err.to_string().contains("lost"));
        assert!("Registered".parse::<ParcelStatus>().is_err());
    }

    #[test]
    fn lifecycle_advances_and_stops_at_delivered() {
        assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
        assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
        assert_eq!(ParcelStatus::Delivered.next(), None);
    }

    #[test]
    fn only_registered_allows_mutation() {
        assert!(ParcelStatus::Registered.allows_mutation());
        assert!(!ParcelStatus::Sent.allows_mutation());
        assert!(!ParcelStatus::Delivered.allows_mutation());
    }

    #[test]
    fn new_parcel_starts_registered_without_number() {
        let parcel = Parcel::new(7, "Main st 1", "2024-01-01T00:00:00Z");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.status, ParcelStatus::Registered);
        assert_eq!(parcel.address, "Main st 1");
    }
}
