use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{PendingCall, StealthClient};
use crate::config::StealthConfig;
use crate::rpc::{RequestEnvelope, Result, Transport};

/// Transport that records every envelope and replays queued responses.
///
/// With nothing queued it answers `{"result": null, "error": null}`.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<RequestEnvelope>>,
    responses: Mutex<VecDeque<Result<Value>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    pub(crate) fn push_response(&self, response: Result<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<RequestEnvelope> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> RequestEnvelope {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &RequestEnvelope) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"result": null, "error": null})))
    }
}

pub(crate) fn recording_client() -> (StealthClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let client = StealthClient::with_transport(StealthConfig::default(), transport.clone());
    (client, transport)
}

/// Await `call` and return the method and params that went over the wire.
pub(crate) async fn sent(
    call: PendingCall,
    transport: &RecordingTransport,
) -> (String, Vec<Value>) {
    call.await.expect("call should succeed");
    let request = transport.last();
    (request.method, request.params)
}
