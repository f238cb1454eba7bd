mod cache_tests;
mod wait_tests;

use crate::client::StxClient;
use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::transport::{HttpBackend, RawResponse, RequestSpec};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Scripted backend: pops canned responses in order and records every
/// request together with the token it was sent with.
pub struct MockBackend {
    responses: Mutex<VecDeque<Result<RawResponse, SdkError>>>,
    requests: Mutex<Vec<(RequestSpec, String)>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(MockBackend {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub async fn push(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .await
            .push_back(Ok(RawResponse { status, body }));
    }

    pub async fn push_failure(&self, error: SdkError) {
        self.responses.lock().await.push_back(Err(error));
    }

    pub async fn requests(&self) -> Vec<RequestSpec> {
        self.requests
            .lock()
            .await
            .iter()
            .map(|(spec, _)| spec.clone())
            .collect()
    }

    pub async fn tokens(&self) -> Vec<String> {
        self.requests
            .lock()
            .await
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl HttpBackend for MockBackend {
    async fn execute(&self, spec: &RequestSpec, token: &str) -> Result<RawResponse, SdkError> {
        self.requests
            .lock()
            .await
            .push((spec.clone(), token.to_string()));
        self.responses.lock().await.pop_front().unwrap_or_else(|| {
            Ok(RawResponse {
                status: 404,
                body: json!({ "message": "not found" }),
            })
        })
    }
}

pub fn create_test_client(backend: Arc<MockBackend>) -> StxClient {
    StxClient::with_backend(ClientConfig::new("test-token"), backend)
}

/// Wire-shaped transaction body; `expires_in_secs` is relative to now,
/// `None` meaning the transaction never expires.
pub fn transaction_body(id: i64, status: &str, expires_in_secs: Option<i64>) -> Value {
    let now = Utc::now();
    json!({
        "id": id,
        "userId": "user-1",
        "targetId": null,
        "amount": 10,
        "quitType": null,
        "createdAt": now.to_rfc3339(),
        "updatedAt": now.to_rfc3339(),
        "expiresAt": expires_in_secs.map(|s| (now + Duration::seconds(s)).to_rfc3339()),
        "guildId": "guild-1",
        "channelId": "channel-1",
        "messageId": null,
        "reason": null,
        "type": "API",
        "status": status,
    })
}

pub fn giveaway_body(id: i64, ended: bool, expires_in_secs: i64) -> Value {
    let now = Utc::now();
    json!({
        "id": id,
        "localId": 1,
        "title": "Weekly STX drop",
        "description": null,
        "ended": ended,
        "serverStayRequired": false,
        "usersWins": 1,
        "expiresAt": (now + Duration::seconds(expires_in_secs)).to_rfc3339(),
        "createdAt": now.to_rfc3339(),
        "updatedAt": now.to_rfc3339(),
    })
}
