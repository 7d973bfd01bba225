#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{tx, FakeNodeClient};
use iota_remote::{
    BroadcastTransactions, ExecutableAction, InterruptAttachingToTangle, RawResponse,
};

#[test]
fn test_independent_actions_share_one_client() {
    let client = FakeNodeClient::with_responder(|payload| {
        let duration = match payload["command"].as_str() {
            Some("broadcastTransactions") => 10,
            _ => 20,
        };
        Ok(RawResponse {
            code: 200,
            raw: format!(r#"{{"duration":{duration}}}"#),
        })
    });
    let broadcast = BroadcastTransactions::with_transactions([tx('D'), tx('E')]);
    let interrupt = InterruptAttachingToTangle;

    let (broadcast_results, interrupt_results) = std::thread::scope(|s| {
        let b = s.spawn(|| {
            (0..8)
                .map(|_| broadcast.execute(&client).unwrap())
                .collect::<Vec<_>>()
        });
        let i = s.spawn(|| {
            (0..8)
                .map(|_| interrupt.execute(&client).unwrap())
                .collect::<Vec<_>>()
        });
        (b.join().unwrap(), i.join().unwrap())
    });

    assert!(broadcast_results
        .iter()
        .all(|r| r.payload().unwrap().duration == Some(10)));
    assert!(interrupt_results
        .iter()
        .all(|r| r.payload().unwrap().duration == Some(20)));
    assert_eq!(client.sent().len(), 16);
    assert_eq!(broadcast.transactions().len(), 2);
}
