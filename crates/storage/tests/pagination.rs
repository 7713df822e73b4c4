#![forbid(unsafe_code)]

use rd_core::filter::{FilterSpec, PageRequest, PerPage};
use rd_core::model::EntityKind;
use rd_storage::{Listing, NewCity, NewMoveIn, NewProperty, NewUnit, SqliteStore};
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

fn page(per_page: u32, page: u32) -> PageRequest {
    PageRequest {
        per_page: PerPage::Limit(per_page),
        page,
    }
}

#[test]
fn all_sentinel_returns_a_bare_list() {
    let store = SqliteStore::open(temp_dir("all_sentinel")).expect("open store");
    let unit_id = seed_unit(&store);
    for day in 1..=4 {
        store
            .create_move_in(&move_in(unit_id, &format!("2026-03-{day:02}"), day))
            .expect("create move in");
    }

    let listing = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::all(),
        )
        .expect("list all");
    match listing {
        Listing::All(rows) => assert_eq!(rows.len(), 4),
        Listing::Paged(_) => panic!("expected bare list under the all sentinel"),
    }
}

#[test]
fn default_page_size_is_fifteen() {
    let store = SqliteStore::open(temp_dir("default_page_size")).expect("open store");
    let unit_id = seed_unit(&store);
    for n in 1..=20i64 {
        store
            .create_move_in(&move_in(unit_id, &format!("2026-03-{n:02}"), n))
            .expect("create move in");
    }

    let listing = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::default(),
        )
        .expect("list default page");
    let Listing::Paged(page) = listing else {
        panic!("expected a paged listing");
    };
    assert_eq!(page.data.len(), 15);
    assert_eq!(page.per_page, 15);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 2);
    assert_eq!(page.total, 20);
}

#[test]
fn page_metadata_tracks_the_window() {
    let store = SqliteStore::open(temp_dir("page_metadata")).expect("open store");
    let unit_id = seed_unit(&store);
    for n in 1..=7i64 {
        store
            .create_move_in(&move_in(unit_id, &format!("2026-03-{n:02}"), n))
            .expect("create move in");
    }

    let first = store
        .list(EntityKind::MoveIn, &FilterSpec::default(), &page(3, 1))
        .expect("page 1");
    let Listing::Paged(first) = first else {
        panic!("expected a paged listing");
    };
    assert_eq!(first.data.len(), 3);
    assert_eq!(first.from, Some(1));
    assert_eq!(first.to, Some(3));
    assert_eq!(first.prev_page, None);
    assert_eq!(first.next_page, Some(2));
    assert_eq!(first.last_page, 3);

    let last = store
        .list(EntityKind::MoveIn, &FilterSpec::default(), &page(3, 3))
        .expect("page 3");
    let Listing::Paged(last) = last else {
        panic!("expected a paged listing");
    };
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.from, Some(7));
    assert_eq!(last.to, Some(7));
    assert_eq!(last.prev_page, Some(2));
    assert_eq!(last.next_page, None);
}

#[test]
fn out_of_range_page_is_empty_but_keeps_metadata() {
    let store = SqliteStore::open(temp_dir("out_of_range_page")).expect("open store");
    let unit_id = seed_unit(&store);
    for n in 1..=4i64 {
        store
            .create_move_in(&move_in(unit_id, &format!("2026-03-{n:02}"), n))
            .expect("create move in");
    }

    let listing = store
        .list(EntityKind::MoveIn, &FilterSpec::default(), &page(3, 9))
        .expect("page 9");
    let Listing::Paged(page) = listing else {
        panic!("expected a paged listing");
    };
    assert!(page.data.is_empty());
    assert_eq!(page.current_page, 9);
    assert_eq!(page.last_page, 2);
    assert_eq!(page.total, 4);
    assert_eq!(page.from, None);
    assert_eq!(page.to, None);
    assert_eq!(page.prev_page, Some(8));
    assert_eq!(page.next_page, None);
}

#[test]
fn pages_concatenate_into_the_all_listing() {
    let store = SqliteStore::open(temp_dir("pages_concatenate")).expect("open store");
    let unit_id = seed_unit(&store);
    // Colliding dates and timestamps so the window boundaries cut through
    // every tie-break level.
    for n in 0..11i64 {
        let day = 1 + n % 3;
        store
            .create_move_in(&move_in(unit_id, &format!("2026-03-{day:02}"), n % 2))
            .expect("create move in");
    }

    let all = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::all(),
        )
        .expect("list all");
    let expected: Vec<i64> = all.rows().iter().map(|row| row.id).collect();
    assert_eq!(expected.len(), 11);

    let mut stitched = Vec::new();
    for page_no in 1..=4 {
        let listing = store
            .list(EntityKind::MoveIn, &FilterSpec::default(), &page(3, page_no))
            .expect("list page");
        let Listing::Paged(current) = listing else {
            panic!("expected a paged listing");
        };
        stitched.extend(current.data.iter().map(|row| row.id));
    }
    assert_eq!(stitched, expected);
}

#[test]
fn all_sentinel_on_an_empty_family_returns_an_empty_list() {
    let store = SqliteStore::open(temp_dir("all_sentinel_empty")).expect("open store");

    let listing = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::all(),
        )
        .expect("list all");
    match listing {
        Listing::All(rows) => assert!(rows.is_empty()),
        Listing::Paged(_) => panic!("expected bare list under the all sentinel"),
    }
}

#[test]
fn empty_family_yields_one_empty_page() {
    let store = SqliteStore::open(temp_dir("empty_family")).expect("open store");

    let listing = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::default(),
        )
        .expect("list empty");
    let Listing::Paged(page) = listing else {
        panic!("expected a paged listing");
    };
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.last_page, 1);
    assert_eq!(page.from, None);
    assert_eq!(page.to, None);
}

#[test]
fn ordering_is_date_then_recency_then_id() {
    let store = SqliteStore::open(temp_dir("ordering")).expect("open store");
    let unit_id = seed_unit(&store);

    let older_date = store
        .create_move_in(&move_in(unit_id, "2026-02-28", 900))
        .expect("create older date");
    let early_created = store
        .create_move_in(&move_in(unit_id, "2026-03-01", 100))
        .expect("create early");
    let late_created = store
        .create_move_in(&move_in(unit_id, "2026-03-01", 300))
        .expect("create late");
    let late_twin = store
        .create_move_in(&move_in(unit_id, "2026-03-01", 300))
        .expect("create twin");

    let listing = store
        .list(
            EntityKind::MoveIn,
            &FilterSpec::default(),
            &PageRequest::all(),
        )
        .expect("list");
    let ids: Vec<i64> = listing.rows().iter().map(|row| row.id).collect();

    // Same date and created_at resolve by id, newest row first.
    assert_eq!(
        ids,
        vec![late_twin.id, late_created.id, early_created.id, older_date.id]
    );
}
