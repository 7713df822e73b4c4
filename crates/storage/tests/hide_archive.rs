#![forbid(unsafe_code)]

use rd_core::filter::{FilterSpec, PageRequest, Visibility};
use rd_core::model::EntityKind;
use rd_storage::{NewCity, NewMoveIn, NewProperty, NewTenant, NewUnit, SqliteStore, StoreError};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("rd_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn seed_unit(store: &SqliteStore) -> i64 {
    let city_id = store
        .create_city(&NewCity {
            city: "Springfield".to_string(),
        })
        .expect("create city");
    let property_id = store
        .create_property(&NewProperty {
            city_id: Some(city_id),
            property_name: "Elm Court".to_string(),
        })
        .expect("create property");
    store
        .create_unit(&NewUnit {
            property_id: Some(property_id),
            unit_name: "12B".to_string(),
            tenants: None,
        })
        .expect("create unit")
}

fn move_in(unit_id: i64, date: &str, created_at_ms: i64) -> NewMoveIn {
    NewMoveIn {
        unit_id: Some(unit_id),
        move_in_date: date.to_string(),
        signed_lease: None,
        tenant_name: None,
        last_notice_sent: None,
        created_at_ms,
    }
}

fn visible_ids(store: &SqliteStore, visibility: Visibility) -> Vec<i64> {
    store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default().with_visibility(visibility),
            &PageRequest::all(),
        )
        .expect("list")
        .rows()
        .iter()
        .map(|row| row.id)
        .collect()
}

#[test]
fn hide_and_unhide_move_a_record_between_partitions() {
    let store = SqliteStore::open(temp_dir("hide_unhide")).expect("open store");
    let unit_id = seed_unit(&store);
    let record = store
        .create_move_in(&move_in(unit_id, "2026-03-01", 100))
        .expect("create move in");

    assert!(store.hide(EntityKind::MoveIn, record.id).expect("hide"));
    assert_eq!(visible_ids(&store, Visibility::Visible), Vec::<i64>::new());
    assert_eq!(visible_ids(&store, Visibility::Hidden), vec![record.id]);

    assert!(!store.unhide(EntityKind::MoveIn, record.id).expect("unhide"));
    assert_eq!(visible_ids(&store, Visibility::Visible), vec![record.id]);
    assert_eq!(visible_ids(&store, Visibility::Hidden), Vec::<i64>::new());
}

#[test]
fn archive_preserves_the_hidden_flag() {
    let store = SqliteStore::open(temp_dir("archive_preserves_hidden")).expect("open store");
    let unit_id = seed_unit(&store);
    let record = store
        .create_move_in(&move_in(unit_id, "2026-03-01", 100))
        .expect("create move in");

    store.hide(EntityKind::MoveIn, record.id).expect("hide");
    store.archive(EntityKind::MoveIn, record.id).expect("archive");
    assert_eq!(
        visible_ids(&store, Visibility::ArchivedOnly),
        vec![record.id]
    );
    assert_eq!(visible_ids(&store, Visibility::Hidden), Vec::<i64>::new());

    // A hidden record comes back from the archive still hidden.
    store.restore(EntityKind::MoveIn, record.id).expect("restore");
    assert_eq!(visible_ids(&store, Visibility::Hidden), vec![record.id]);
    assert_eq!(visible_ids(&store, Visibility::Visible), Vec::<i64>::new());
}

#[test]
fn flag_updates_on_unknown_ids_fail() {
    let store = SqliteStore::open(temp_dir("unknown_ids")).expect("open store");

    let err = store
        .hide(EntityKind::MoveIn, 42)
        .expect_err("expected unknown id");
    assert!(matches!(err, StoreError::UnknownId));

    let err = store
        .archive(EntityKind::PaymentPlan, 42)
        .expect_err("expected unknown id");
    assert!(matches!(err, StoreError::UnknownId));
}

#[test]
fn archiving_a_unit_archives_its_tenants() {
    let mut store = SqliteStore::open(temp_dir("archive_unit")).expect("open store");
    let unit_id = seed_unit(&store);
    let tenant_id = store
        .create_tenant(&NewTenant {
            unit_id: Some(unit_id),
            first_name: "Rosa".to_string(),
            last_name: "Diaz".to_string(),
        })
        .expect("create tenant");

    store.archive_unit(unit_id).expect("archive unit");
    let unit = store.get_unit(unit_id).expect("get unit").expect("unit row");
    assert!(unit.is_archived);
    let tenant = store
        .get_tenant(tenant_id)
        .expect("get tenant")
        .expect("tenant row");
    assert!(tenant.is_archived);

    // Restoring the unit does not restore its tenants.
    store.restore_unit(unit_id).expect("restore unit");
    let unit = store.get_unit(unit_id).expect("get unit").expect("unit row");
    assert!(!unit.is_archived);
    let tenant = store
        .get_tenant(tenant_id)
        .expect("get tenant")
        .expect("tenant row");
    assert!(tenant.is_archived);

    let err = store.archive_unit(4_242).expect_err("expected unknown id");
    assert!(matches!(err, StoreError::UnknownId));
}
