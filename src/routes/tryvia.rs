use crate::error::SdkError;
use crate::models::{SessionToken, TryviaFilter, TryviaResponse};
use crate::transport::{Executor, RequestSpec};
use std::sync::Arc;

/// Quiz session routes. Stateless pass-throughs: the session token scopes
/// question retrieval server-side, nothing is cached locally.
pub struct TryviaRoutes {
    executor: Arc<Executor>,
}

impl TryviaRoutes {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        TryviaRoutes { executor }
    }

    /// Generates a quiz session token (valid for six hours).
    pub async fn session_token(&self) -> Result<SessionToken, SdkError> {
        self.executor
            .send(RequestSpec::get("/tryvia/generateToken"), None, None)
            .await
    }

    /// Fetches questions, optionally filtered by session, tags, difficulty,
    /// amount and question type.
    pub async fn questions(&self, filter: Option<&TryviaFilter>) -> Result<TryviaResponse, SdkError> {
        let mut spec = RequestSpec::get("/tryvia/questions");
        if let Some(filter) = filter {
            if let Some(session_token) = &filter.session_token {
                spec = spec.query("sessionToken", session_token.clone());
            }
            if !filter.tags.is_empty() {
                spec = spec.query("tags", filter.tags.join("+"));
            }
            if let Some(difficulty) = filter.difficulty {
                spec = spec.query("difficulty", difficulty.as_str());
            }
            if let Some(amount) = filter.amount {
                spec = spec.query("amount", amount.to_string());
            }
            if let Some(kind) = filter.kind {
                spec = spec.query("type", kind.as_str());
            }
        }
        self.executor.send(spec, None, None).await
    }
}
