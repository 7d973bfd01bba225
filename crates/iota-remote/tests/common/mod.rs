use iota_remote::result::{ErrorIndicators, RawResponse};
use iota_remote::types::transaction::TRANSACTION_TRYTES_LEN;
use iota_remote::{Action, NodeApiClient, RemoteApiError, Result, Transaction};
use serde_json::{Map, Value};
use std::sync::Mutex;

type Responder = Box<dyn Fn(&Map<String, Value>) -> Result<RawResponse> + Send + Sync>;

/// In-memory dispatch client that records every payload it is asked to send
pub struct FakeNodeClient {
    responder: Responder,
    sent: Mutex<Vec<Map<String, Value>>>,
    indicators: ErrorIndicators,
}

#[allow(dead_code)]
impl FakeNodeClient {
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> Result<RawResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            sent: Mutex::new(Vec::new()),
            indicators: ErrorIndicators::default(),
        }
    }

    /// Always answer with the given status and body
    pub fn replying(code: u16, raw: &str) -> Self {
        let raw = raw.to_string();
        Self::with_responder(move |_| {
            Ok(RawResponse {
                code,
                raw: raw.clone(),
            })
        })
    }

    /// Always fail at the transport level
    pub fn failing(err: RemoteApiError) -> Self {
        Self::with_responder(move |_| Err(err.clone()))
    }

    pub fn with_indicators(mut self, indicators: ErrorIndicators) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn sent(&self) -> Vec<Map<String, Value>> {
        self.sent.lock().unwrap().clone()
    }
}

impl NodeApiClient for FakeNodeClient {
    fn send(&self, action: &dyn Action) -> Result<RawResponse> {
        let payload = action.json_serialize();
        self.sent.lock().unwrap().push(payload.clone());
        (self.responder)(&payload)
    }

    fn error_indicators(&self) -> ErrorIndicators {
        self.indicators.clone()
    }
}

/// A well-formed transaction whose trytes are all `fill`
#[allow(dead_code)]
pub fn tx(fill: char) -> Transaction {
    tx_string(fill).parse().unwrap()
}

#[allow(dead_code)]
pub fn tx_string(fill: char) -> String {
    std::iter::repeat(fill).take(TRANSACTION_TRYTES_LEN).collect()
}
