mod common;

use common::create_test_store;

use duty_core::records::{
    GroupRef, RecordDragSource, RecordDropTarget, RecordSet, resolve_record_drag,
};
use duty_core::{WorkRecord, WorkRecordGroup};

use googletest::prelude::*;

fn record(id: &str, group: Option<&str>) -> WorkRecord {
    let mut r = WorkRecord::new(id, id.to_uppercase());
    r.content = format!("content of {id}");
    r.group_id = group.map(str::to_string);
    r
}

fn sample_set() -> RecordSet {
    RecordSet::new(
        vec![
            record("r1", Some("g1")),
            record("r2", None),
            record("r3", Some("g1")),
        ],
        vec![WorkRecordGroup::new("g1", "Group one")],
    )
}

#[tokio::test]
async fn given_saved_record_set_when_loaded_then_flat_order_round_trips() {
    let store = create_test_store().await;
    let set = sample_set();

    store.save_record_set(&set).await.unwrap();
    let loaded = store.load_records().await.unwrap();

    assert_that!(loaded, eq(&set));
}

#[tokio::test]
async fn given_group_reorder_gesture_when_groups_saved_then_order_persists() {
    let store = create_test_store().await;
    let mut set = sample_set();
    set.groups.push(WorkRecordGroup::new("g2", "Group two"));
    store.save_record_set(&set).await.unwrap();

    let outcome = resolve_record_drag(
        &mut set,
        &RecordDragSource::GroupHeader {
            group: GroupRef::Group("g2".to_string()),
        },
        Some(&RecordDropTarget::GroupHeader {
            group: GroupRef::Group("g1".to_string()),
        }),
    );
    assert_that!(outcome.is_changed(), eq(true));
    store.save_groups(&set.groups).await.unwrap();

    let loaded = store.load_records().await.unwrap();
    assert_that!(loaded.groups[0].id.as_str(), eq("g2"));
    assert_that!(loaded.groups[1].id.as_str(), eq("g1"));
}

#[tokio::test]
async fn given_record_membership_change_when_saved_then_it_persists() {
    let store = create_test_store().await;
    let mut set = sample_set();
    store.save_record_set(&set).await.unwrap();

    resolve_record_drag(
        &mut set,
        &RecordDragSource::Record {
            id: "r2".to_string(),
        },
        Some(&RecordDropTarget::GroupContent {
            group: GroupRef::Group("g1".to_string()),
        }),
    );
    store.save_records(&set.records).await.unwrap();

    let loaded = store.load_records().await.unwrap();
    let r2 = loaded.records.iter().find(|r| r.id == "r2").unwrap();
    assert_that!(r2.group_id.as_deref(), some(eq("g1")));
}
