use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Machine-readable classification of a failed SDK operation.
///
/// Kinds are resolved from the server's error message first and fall back to
/// the HTTP status code when the message is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    UserNotFound,
    InsufficientFunds,
    TransactionNotFound,
    GiveawayNotFound,
    GiveawayAlreadyEnded,
    CompanyNotFound,
    PetNotFound,
    FishNotFound,
    StockNotFound,
    FishingRodNotFound,
    CooldownNotFound,
    UserBlacklisted,
    InvalidRequest,
    InternalServerError,
    Unauthorized,
    Forbidden,
    RateLimited,
    NotFound,
    BadRequest,
    TransactionNotPending,
    TransactionError,
    GiveawayError,
    TransactionNotApproved,
    UnknownError,
}

static MESSAGE_KINDS: Lazy<HashMap<&'static str, ErrorKind>> = Lazy::new(|| {
    HashMap::from([
        ("user not found", ErrorKind::UserNotFound),
        ("not enough money", ErrorKind::InsufficientFunds),
        ("insufficient funds", ErrorKind::InsufficientFunds),
        ("you are not on this server", ErrorKind::UserNotFound),
        ("transaction is not pending", ErrorKind::TransactionNotPending),
        ("transaction time is too long", ErrorKind::BadRequest),
        ("transaction not found", ErrorKind::TransactionNotFound),
        ("giveaway not found", ErrorKind::GiveawayNotFound),
        ("giveaway already ended", ErrorKind::GiveawayAlreadyEnded),
        ("company not found", ErrorKind::CompanyNotFound),
        ("pet not found", ErrorKind::PetNotFound),
        ("fish not found", ErrorKind::FishNotFound),
        ("stock not found", ErrorKind::StockNotFound),
        ("fishing rod not found", ErrorKind::FishingRodNotFound),
        ("cooldown not found", ErrorKind::CooldownNotFound),
        ("user is blacklisted", ErrorKind::UserBlacklisted),
        ("invalid request", ErrorKind::InvalidRequest),
        ("internal server error", ErrorKind::InternalServerError),
        ("unauthorized", ErrorKind::Unauthorized),
        ("forbidden", ErrorKind::Forbidden),
        ("rate limited", ErrorKind::RateLimited),
        ("not found", ErrorKind::NotFound),
        ("bad request", ErrorKind::BadRequest),
    ])
});

impl ErrorKind {
    /// Looks up a server message in the known-message table. The message is
    /// trimmed and lowercased before the lookup; the caller keeps the
    /// original text for display.
    pub fn from_message(message: &str) -> Option<ErrorKind> {
        let normalized = message.trim().to_lowercase();
        MESSAGE_KINDS.get(normalized.as_str()).copied()
    }

    /// Status-code fallback used when the message is not in the table.
    pub fn from_status(status: u16) -> ErrorKind {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::InternalServerError,
            _ => ErrorKind::UnknownError,
        }
    }
}

#[derive(Debug, Error)]
pub enum SdkError {
    /// A classified API failure or a local precondition failure. Carries the
    /// resolved kind and the original, unnormalized message.
    #[error("{message}")]
    Api { kind: ErrorKind, message: String },

    /// Connection-level failure, surfaced unclassified in debug mode so the
    /// full error chain stays available.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP error response passed through untouched in debug mode.
    #[error("request failed with status {status}: {body}")]
    Raw { status: u16, body: serde_json::Value },
}

impl SdkError {
    pub fn api(kind: ErrorKind, message: impl Into<String>) -> Self {
        SdkError::Api {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        SdkError::api(ErrorKind::InvalidRequest, message)
    }

    pub fn missing_permission(permission: &str) -> Self {
        SdkError::api(
            ErrorKind::Forbidden,
            format!("Missing permission: {permission}"),
        )
    }

    pub fn insufficient_funds(message: impl Into<String>) -> Self {
        SdkError::api(ErrorKind::InsufficientFunds, message)
    }

    pub fn transaction_error(message: impl Into<String>) -> Self {
        SdkError::api(ErrorKind::TransactionError, message)
    }

    pub fn giveaway_error(message: impl Into<String>) -> Self {
        SdkError::api(ErrorKind::GiveawayError, message)
    }

    /// The resolved kind; unclassified transport failures report
    /// [`ErrorKind::UnknownError`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Api { kind, .. } => *kind,
            SdkError::Transport(_) | SdkError::Raw { .. } => ErrorKind::UnknownError,
        }
    }
}
