mod common;

use common::{TEST_ACCESS_KEY, create_secured_server, create_test_server};

use googletest::prelude::*;
use serde_json::{Value, json};

#[tokio::test]
async fn given_ws_client_when_board_requested_then_snapshot_returned() {
    let test = create_test_server().await;
    let mut ws = test
        .server
        .get_websocket("/ws")
        .await
        .into_websocket()
        .await;

    ws.send_text(json!({ "messageId": "m1", "payload": { "type": "getBoard" } }).to_string())
        .await;
    let reply: Value = serde_json::from_str(&ws.receive_text().await).unwrap();

    assert_that!(reply["messageId"].as_str(), some(eq("m1")));
    assert_that!(reply["payload"]["type"].as_str(), some(eq("board")));
    assert_that!(
        reply["payload"]["board"]["shiftSections"].as_array().unwrap(),
        len(eq(4))
    );
}

#[tokio::test]
async fn given_two_clients_when_one_drags_then_other_receives_section_change() {
    let test = create_test_server().await;
    let board = test.store.load_board().await.unwrap();
    let first = board.basic_tasks[0].id.clone();
    let second = board.basic_tasks[1].id.clone();

    let mut mover = test
        .server
        .get_websocket("/ws")
        .await
        .into_websocket()
        .await;
    let mut watcher = test
        .server
        .get_websocket("/ws")
        .await
        .into_websocket()
        .await;

    mover
        .send_text(
            json!({
                "messageId": "drag-1",
                "payload": {
                    "type": "dragEnd",
                    "activeId": first,
                    "over": { "kind": "task", "id": second }
                }
            })
            .to_string(),
        )
        .await;

    let ack: Value = serde_json::from_str(&mover.receive_text().await).unwrap();
    assert_that!(ack["payload"]["type"].as_str(), some(eq("ack")));
    assert_that!(ack["payload"]["changed"].as_bool(), some(eq(true)));

    // The other device sees the committed section, tagged with the
    // originating request id.
    let broadcast: Value = serde_json::from_str(&watcher.receive_text().await).unwrap();
    assert_that!(broadcast["messageId"].as_str(), some(eq("drag-1")));
    assert_that!(
        broadcast["payload"]["type"].as_str(),
        some(eq("sectionChanged"))
    );
    assert_that!(
        broadcast["payload"]["section"]["section"].as_str(),
        some(eq("config"))
    );
}

#[tokio::test]
async fn given_cancelled_drag_then_ack_only_and_no_broadcast_follows() {
    let test = create_test_server().await;
    let board = test.store.load_board().await.unwrap();
    let task = board.basic_tasks[0].id.clone();

    let mut ws = test
        .server
        .get_websocket("/ws")
        .await
        .into_websocket()
        .await;

    ws.send_text(
        json!({
            "messageId": "drag-2",
            "payload": { "type": "dragEnd", "activeId": task }
        })
        .to_string(),
    )
    .await;
    let ack: Value = serde_json::from_str(&ws.receive_text().await).unwrap();
    assert_that!(ack["payload"]["changed"].as_bool(), some(eq(false)));

    // A follow-up request answers next, proving nothing was broadcast in
    // between.
    ws.send_text(json!({ "messageId": "p1", "payload": { "type": "ping", "timestamp": 7 } }).to_string())
        .await;
    let pong: Value = serde_json::from_str(&ws.receive_text().await).unwrap();
    assert_that!(pong["payload"]["type"].as_str(), some(eq("pong")));
}

#[tokio::test]
async fn given_secured_server_when_ws_key_in_query_then_upgrade_succeeds() {
    let test = create_secured_server().await;

    let mut ws = test
        .server
        .get_websocket(&format!("/ws?key={TEST_ACCESS_KEY}"))
        .await
        .into_websocket()
        .await;

    ws.send_text(json!({ "messageId": "m1", "payload": { "type": "getBoard" } }).to_string())
        .await;
    let reply: Value = serde_json::from_str(&ws.receive_text().await).unwrap();
    assert_that!(reply["payload"]["type"].as_str(), some(eq("board")));
}

#[tokio::test]
async fn given_secured_server_when_ws_key_missing_then_upgrade_rejected() {
    let test = create_secured_server().await;

    let response = test.server.get_websocket("/ws").await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn given_invalid_json_frame_then_error_reply_and_connection_survives() {
    let test = create_test_server().await;
    let mut ws = test
        .server
        .get_websocket("/ws")
        .await
        .into_websocket()
        .await;

    ws.send_text("not json").await;
    let reply: Value = serde_json::from_str(&ws.receive_text().await).unwrap();
    assert_that!(reply["payload"]["type"].as_str(), some(eq("error")));
    assert_that!(
        reply["payload"]["code"].as_str(),
        some(eq("INVALID_MESSAGE"))
    );

    ws.send_text(json!({ "messageId": "m2", "payload": { "type": "getBoard" } }).to_string())
        .await;
    let next: Value = serde_json::from_str(&ws.receive_text().await).unwrap();
    assert_that!(next["payload"]["type"].as_str(), some(eq("board")));
}
