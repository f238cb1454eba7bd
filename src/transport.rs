use crate::cache::{ALL_PERMISSIONS, PERMISSIONS_KEY, TtlCache};
use crate::error::{ErrorKind, SdkError};
use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Transport-agnostic description of one outbound API call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>) -> Self {
        RequestSpec {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        RequestSpec::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        RequestSpec::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        RequestSpec::new(Method::Patch, path)
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response as seen on the wire: any HTTP status plus the decoded JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The capability the SDK needs from an HTTP stack: run one request, report
/// the response for any status. `Err` is reserved for connection-level
/// failures where no response exists at all.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, spec: &RequestSpec, token: &str) -> Result<RawResponse, SdkError>;
}

/// Production backend over a shared [`reqwest::Client`].
pub struct ReqwestBackend {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        ReqwestBackend {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds the outgoing request. The authentication token is inserted
    /// last so it replaces any `Authorization` value the caller supplied.
    pub(crate) fn build(&self, spec: &RequestSpec, token: &str) -> Result<reqwest::Request, SdkError> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut builder = match spec.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Patch => self.http.patch(&url),
        };

        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        for (name, value) in &spec.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }

        let mut request = builder.build()?;
        let token = reqwest::header::HeaderValue::from_str(token)
            .map_err(|_| SdkError::invalid_request("token contains invalid header characters"))?;
        request
            .headers_mut()
            .insert(reqwest::header::AUTHORIZATION, token);
        Ok(request)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, spec: &RequestSpec, token: &str) -> Result<RawResponse, SdkError> {
        let request = self.build(spec, token)?;
        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(RawResponse { status, body })
    }
}

/// Wraps a backend with the cross-cutting request behavior: cached
/// permission pre-flight, token attachment and uniform error
/// classification. It never mutates the cache itself; callers write
/// response data back where it belongs.
pub struct Executor {
    backend: Arc<dyn HttpBackend>,
    token: String,
    debug: bool,
}

impl Executor {
    pub fn new(backend: Arc<dyn HttpBackend>, token: String, debug: bool) -> Self {
        Executor {
            backend,
            token,
            debug,
        }
    }

    /// Runs one API call and deserializes the 2xx body into `T`.
    ///
    /// When `required_permission` and `cache` are both given and the cache
    /// holds a permission set, the call is denied locally (no network
    /// traffic) unless the set contains the permission or `"ALL"`. The
    /// server re-checks regardless; this only saves the round trip.
    pub async fn send<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        required_permission: Option<&str>,
        cache: Option<&TtlCache>,
    ) -> Result<T, SdkError> {
        if let (Some(permission), Some(cache)) = (required_permission, cache) {
            if let Some(permissions) = cache.get::<Vec<String>>(PERMISSIONS_KEY).await? {
                let granted = permissions.iter().any(|p| p == permission)
                    || permissions.iter().any(|p| p == ALL_PERMISSIONS);
                if !granted {
                    warn!(
                        "denied {} locally: missing permission {permission}",
                        spec.path
                    );
                    return Err(SdkError::missing_permission(permission));
                }
            }
        }

        debug!("{:?} {}", spec.method, spec.path);
        let response = match self.backend.execute(&spec, &self.token).await {
            Ok(response) => response,
            Err(err) => {
                if self.debug {
                    return Err(err);
                }
                let message = err.to_string();
                return Err(classify(None, &message));
            }
        };

        if response.is_success() {
            return serde_json::from_value(response.body).map_err(|e| {
                SdkError::api(
                    ErrorKind::UnknownError,
                    format!("unexpected response shape: {e}"),
                )
            });
        }

        if self.debug {
            return Err(SdkError::Raw {
                status: response.status,
                body: response.body,
            });
        }

        let message = extract_message(&response.body)
            .unwrap_or_else(|| format!("request failed with status {}", response.status));
        Err(classify(Some(response.status), &message))
    }
}

/// Pulls a human-readable message out of an error body: `message` field
/// first, then `error`.
fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map(str::to_owned)
}

fn classify(status: Option<u16>, message: &str) -> SdkError {
    let kind = ErrorKind::from_message(message)
        .unwrap_or_else(|| status.map_or(ErrorKind::UnknownError, ErrorKind::from_status));
    SdkError::api(kind, message)
}
