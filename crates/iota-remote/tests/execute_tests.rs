#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{tx, tx_string, FakeNodeClient};
use iota_remote::{
    BroadcastTransactions, Command, ErrorClass, ErrorIndicators, ExecutableAction,
    InterruptAttachingToTangle, NodeAction, RemoteApiError, ResultState,
};
use serde_json::json;

#[test]
fn test_execute_success_returns_finished_result() {
    let client = FakeNodeClient::replying(200, r#"{"someField":"value"}"#);

    let result = InterruptAttachingToTangle.execute(&client).unwrap();

    assert_eq!(result.state(), ResultState::Success);
    assert_eq!(result.status_code(), Some(200));
    assert_eq!(result.body(), Some(&json!({"someField": "value"})));
    assert_eq!(result.payload().unwrap().duration, None);
    assert!(result.error().is_none());
}

#[test]
fn test_execute_sends_the_wire_payload() {
    let client = FakeNodeClient::replying(200, r#"{"duration":3}"#);
    let action = BroadcastTransactions::with_transactions([tx('A'), tx('A')]);

    let result = action.execute(&client).unwrap();

    assert_eq!(result.payload().unwrap().duration, Some(3));
    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        serde_json::Value::Object(sent[0].clone()),
        json!({
            "command": "broadcastTransactions",
            "trytes": [tx_string('A'), tx_string('A')],
        })
    );
}

#[test]
fn test_execute_raises_node_error_with_message_and_status() {
    let client = FakeNodeClient::replying(500, r#"{"error":"bad request"}"#);

    let err = InterruptAttachingToTangle.execute(&client).unwrap_err();

    assert_eq!(err.class(), ErrorClass::Protocol);
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("bad request"));
    match err {
        RemoteApiError::NodeError {
            command, message, ..
        } => {
            assert_eq!(command, "interruptAttachingToTangle");
            assert_eq!(message, "bad request");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_execute_error_field_on_success_status() {
    let client = FakeNodeClient::replying(
        200,
        r#"{"exception":"Could not complete request","duration":1}"#,
    );

    let err = BroadcastTransactions::with_transactions([tx('A')])
        .execute(&client)
        .unwrap_err();

    assert_eq!(err.status_code(), Some(200));
    assert!(err.to_string().contains("Could not complete request"));
}

#[test]
fn test_transport_error_propagates_unchanged() {
    let transport = RemoteApiError::Transport {
        command: "broadcastTransactions".to_string(),
        message: "connection refused".to_string(),
    };
    let client = FakeNodeClient::failing(transport.clone());

    let err = BroadcastTransactions::new().execute(&client).unwrap_err();

    assert_eq!(err, transport);
    assert_eq!(err.class(), ErrorClass::Transport);
}

#[test]
fn test_validation_error_never_reaches_client() {
    let client = FakeNodeClient::replying(200, "{}");
    let mut action = BroadcastTransactions::new();

    let err = action.add_transaction_trytes("abc").unwrap_err();

    assert_eq!(err.class(), ErrorClass::Validation);
    assert!(client.sent().is_empty());
}

#[test]
fn test_each_execute_dispatches_fresh() {
    let client = FakeNodeClient::replying(200, r#"{"duration":0}"#);
    let action = InterruptAttachingToTangle;

    let first = action.execute(&client).unwrap();
    let second = action.execute(&client).unwrap();

    assert_eq!(client.sent().len(), 2);
    assert_ne!(first.request_id(), second.request_id());
}

#[test]
fn test_client_supplies_error_indicators() {
    let client = FakeNodeClient::replying(200, r#"{"failure":"node is syncing"}"#)
        .with_indicators(ErrorIndicators {
            fields: vec!["failure".to_string()],
            non_success_status_is_error: true,
        });

    let err = InterruptAttachingToTangle.execute(&client).unwrap_err();
    assert!(err.to_string().contains("node is syncing"));
}

#[test]
fn test_malformed_success_body_is_protocol_error() {
    let client = FakeNodeClient::replying(200, "<html>gateway</html>");

    let err = InterruptAttachingToTangle.execute(&client).unwrap_err();

    assert!(matches!(err, RemoteApiError::MalformedResponse { .. }));
    assert_eq!(err.class(), ErrorClass::Protocol);
}

#[test]
fn test_payload_type_mismatch_is_malformed() {
    let client = FakeNodeClient::replying(200, r#"{"duration":"slow"}"#);

    let err = InterruptAttachingToTangle.execute(&client).unwrap_err();
    assert!(matches!(err, RemoteApiError::MalformedResponse { .. }));
}

#[test]
fn test_node_action_execute_dispatches_by_variant() {
    let client = FakeNodeClient::replying(200, r#"{"duration":9}"#);
    let action = NodeAction::from(BroadcastTransactions::with_transactions([tx('B')]));

    let result = action.execute(&client).unwrap();

    assert_eq!(result.command(), Command::BroadcastTransactions);
    assert_eq!(result.status_code(), Some(200));
    assert_eq!(result.duration(), Some(9));
    assert_eq!(client.sent()[0]["command"], "broadcastTransactions");
}
