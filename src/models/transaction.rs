use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
    Expired,
    /// Only ever reported by the blocking wait route, never in a snapshot.
    Deleted,
}

impl TransactionStatus {
    /// A terminal status never transitions again.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Api,
    User,
    Admin,
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuitType {
    Sub,
    Sum,
}

/// Server-side state of one transaction. A handle replaces its copy
/// wholesale on every fetch; fields are never merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub target_id: Option<String>,
    pub amount: i64,
    pub quit_type: Option<QuitType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` means the transaction never expires on its own.
    pub expires_at: Option<DateTime<Utc>>,
    pub guild_id: Option<String>,
    pub channel_id: Option<String>,
    pub message_id: Option<String>,
    pub reason: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
}

/// Envelope of `GET /transaction/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionEnvelope {
    pub data: Transaction,
}

/// Response of the give/take routes.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StxTransactionResponse {
    pub transaction_id: i64,
    pub success: bool,
    pub message: String,
    pub data: Transaction,
    /// Bot balance after the mutation; written back to the shared cache.
    pub bot_balance: i64,
}

/// Response of the server-side blocking wait route.
#[derive(Clone, Debug, Deserialize)]
pub struct WaitResponse {
    pub status: TransactionStatus,
}

/// Confirmation window accepted by the give/take routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiresIn {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "2m")]
    TwoMinutes,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "4m")]
    FourMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "20m")]
    TwentyMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "45m")]
    FortyFiveMinutes,
    #[serde(rename = "60m")]
    SixtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "24h")]
    TwentyFourHours,
}
