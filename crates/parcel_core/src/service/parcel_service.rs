//! Parcel tracking workflows on top of a `ParcelStore`.
//!
//! # Invariants
//! - Newly registered parcels always start in `registered`.
//! - Status only moves forward: `registered -> sent -> delivered`.
//! - Store errors are returned unchanged; soft no-ops stay soft.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelStore, RepoError, RepoResult};
use log::info;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Use-case wrapper around a parcel store.
pub struct ParcelService<S: ParcelStore> {
    store: S,
}

impl<S: ParcelStore> ParcelService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store, for read-only callers that need raw access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a new parcel for `client`, timestamped now (UTC).
    ///
    /// Returns the stored record including its assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::new(client, address, now_rfc3339()?);
        parcel.number = self.store.add(&parcel)?;

        info!(
            "event=parcel_register module=service status=ok number={} client={} created_at={}",
            parcel.number, parcel.client, parcel.created_at
        );
        Ok(parcel)
    }

    /// All parcels owned by `client`, oldest first.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.store.get_by_client(client)
    }

    /// Advances a parcel one lifecycle stage.
    ///
    /// Returns the new status, or `None` when the parcel is already
    /// delivered (nothing is written in that case).
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no parcel has `number`.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let parcel = self.store.get(number)?;
        let Some(next) = parcel.status.next() else {
            info!("event=parcel_next_status module=service status=skipped number={number} reason=delivered");
            return Ok(None);
        };

        self.store.set_status(number, next)?;
        info!(
            "event=parcel_next_status module=service status=ok number={number} from={} to={next}",
            parcel.status
        );
        Ok(Some(next))
    }

    /// Changes the delivery address; a no-op unless the parcel is registered.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.store.set_address(number, address)
    }

    /// Deletes the parcel; a no-op unless the parcel is registered.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.store.delete(number)
    }
}

fn now_rfc3339() -> RepoResult<String> {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0)
        .unwrap_or(now)
        .format(&Rfc3339)
        .map_err(|err| RepoError::InvalidData(format!("failed to format created_at: {err}")))
}

#[cfg(test)]
mod tests {
    use super::now_rfc3339;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[test]
    fn timestamps_are_second_precision_rfc3339() {
        let stamp = now_rfc3339().expect("formatting current time should succeed");
        let parsed = OffsetDateTime::parse(&stamp, &Rfc3339).expect("stamp should parse");
        assert_eq!(parsed.nanosecond(), 0);
        assert!(stamp.ends_with('Z'));
    }
}
