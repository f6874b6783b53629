use crate::protocol::{ClientMessage, ClientPayload, SectionPayload, ServerMessage, ServerPayload};

use duty_core::{BoardState, ContainerId, DropTarget};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_drag_end_json_when_parsed_then_tagged_target_decodes() {
    let raw = json!({
        "messageId": "m1",
        "payload": {
            "type": "dragEnd",
            "activeId": "task_1",
            "over": { "kind": "shiftTab", "shiftId": "shift_0812" }
        }
    });

    let parsed: ClientMessage = serde_json::from_value(raw).unwrap();

    assert_that!(parsed.message_id, eq("m1"));
    match parsed.payload {
        ClientPayload::DragEnd { active_id, over } => {
            assert_that!(active_id, eq("task_1"));
            assert_that!(
                over,
                some(eq(&DropTarget::ShiftTab {
                    shift_id: "shift_0812".to_string()
                }))
            );
        }
        other => panic!("expected DragEnd, got {other:?}"),
    }
}

#[test]
fn given_container_header_target_then_container_is_tagged_not_prefixed() {
    let target = DropTarget::ContainerHeader {
        container: ContainerId::shift("shift_1218"),
    };

    let value = serde_json::to_value(&target).unwrap();

    assert_that!(value["kind"].as_str(), some(eq("containerHeader")));
    assert_that!(value["container"]["kind"].as_str(), some(eq("shift")));
    assert_that!(value["container"]["id"].as_str(), some(eq("shift_1218")));
}

#[test]
fn given_missing_over_field_then_drag_end_parses_as_cancelled() {
    let raw = json!({
        "messageId": "m2",
        "payload": { "type": "dragEnd", "activeId": "task_1" }
    });

    let parsed: ClientMessage = serde_json::from_value(raw).unwrap();

    match parsed.payload {
        ClientPayload::DragEnd { over, .. } => assert_that!(over, none()),
        other => panic!("expected DragEnd, got {other:?}"),
    }
}

#[test]
fn given_section_broadcast_then_wire_shape_names_section_and_request() {
    let board = BoardState::with_defaults();
    let message = ServerMessage::new(
        "req-9",
        ServerPayload::SectionChanged {
            section: SectionPayload::config(&board),
        },
    );

    let value = serde_json::to_value(&message).unwrap();

    assert_that!(value["messageId"].as_str(), some(eq("req-9")));
    assert_that!(value["payload"]["type"].as_str(), some(eq("sectionChanged")));
    assert_that!(
        value["payload"]["section"]["section"].as_str(),
        some(eq("config"))
    );
    assert_that!(
        value["payload"]["section"]["basicTasks"].is_array(),
        eq(true)
    );
}

#[test]
fn given_client_payloads_then_serde_round_trips() {
    let payloads = vec![
        ClientPayload::GetBoard,
        ClientPayload::AddTask {
            container: ContainerId::Handover,
        },
        ClientPayload::ToggleCheck {
            shift_id: "shift_0812".to_string(),
            task_id: "basic_radio_check".to_string(),
        },
        ClientPayload::ClearTrash,
        ClientPayload::Ping { timestamp: 42 },
    ];

    for payload in payloads {
        let message = ClientMessage {
            message_id: "rt".to_string(),
            payload,
        };
        let encoded = serde_json::to_string(&message).unwrap();
        let decoded: ClientMessage = serde_json::from_str(&encoded).unwrap();
        let re_encoded = serde_json::to_string(&decoded).unwrap();
        assert_that!(re_encoded, eq(&encoded));
    }
}
