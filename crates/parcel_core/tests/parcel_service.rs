use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, ParcelStore, RepoError, SqliteParcelStore};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[test]
fn register_assigns_number_and_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    let parcel = service.register(1000, "Pushkin st 1").unwrap();

    assert!(parcel.number > 0);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    OffsetDateTime::parse(&parcel.created_at, &Rfc3339).unwrap();
    assert_eq!(service.store().get(parcel.number).unwrap(), parcel);
}

#[test]
fn next_status_walks_lifecycle_then_stops() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());
    let number = service.register(1, "a").unwrap().number;

    assert_eq!(service.next_status(number).unwrap(), Some(ParcelStatus::Sent));
    assert_eq!(
        service.next_status(number).unwrap(),
        Some(ParcelStatus::Delivered)
    );
    assert_eq!(service.next_status(number).unwrap(), None);
    assert_eq!(
        service.store().get(number).unwrap().status,
        ParcelStatus::Delivered
    );
}

#[test]
fn next_status_on_missing_parcel_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    assert!(matches!(
        service.next_status(12),
        Err(RepoError::NotFound(12))
    ));
}

#[test]
fn change_address_and_delete_respect_registered_guard() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    let kept = service.register(7, "first").unwrap().number;
    let removed = service.register(7, "second").unwrap().number;

    service.change_address(kept, "first, updated").unwrap();
    service.next_status(kept).unwrap();
    service.change_address(kept, "ignored").unwrap();
    service.delete(kept).unwrap();
    service.delete(removed).unwrap();

    let parcels = service.client_parcels(7).unwrap();
    assert_eq!(parcels.len(), 1);
    assert_eq!(parcels[0].number, kept);
    assert_eq!(parcels[0].address, "first, updated");
    assert_eq!(parcels[0].status, ParcelStatus::Sent);
}
