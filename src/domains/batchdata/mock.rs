//! Recording [`PropertyApi`] used by tool tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use super::{BatchDataError, BatchDataResult, Endpoint, PropertyApi};

/// Captures every outbound request and answers with a canned reply.
pub struct MockApi {
    calls: Mutex<Vec<(Endpoint, Value)>>,
    reply: Reply,
}

enum Reply {
    Json(Value),
    Status(u16, &'static str),
}

impl MockApi {
    /// Answer every request with `response`.
    pub fn responding(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Json(response),
        }
    }

    /// Fail every request with an HTTP status.
    pub fn failing(status: u16, status_text: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Status(status, status_text),
        }
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<(Endpoint, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PropertyApi for MockApi {
    async fn execute(&self, endpoint: Endpoint, body: &Value) -> BatchDataResult<Value> {
        self.calls.lock().unwrap().push((endpoint, body.clone()));
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status, text) => Err(BatchDataError::ApiRequest {
                status: *status,
                status_text: text.to_string(),
            }),
        }
    }
}
