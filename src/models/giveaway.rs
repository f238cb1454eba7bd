use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side state of one giveaway. `ended == true` is the terminal
/// state; `expires_at` is always set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Giveaway {
    pub id: i64,
    pub local_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ended: bool,
    pub server_stay_required: bool,
    pub users_wins: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<GiveawayParticipant>,
    #[serde(default)]
    pub role_entries: Vec<GiveawayRoleEntry>,
    #[serde(default)]
    pub connected_guilds: Vec<GiveawayGuild>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayParticipant {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub giveaway_id: i64,
    pub is_winner: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayRoleEntry {
    pub id: i64,
    pub giveaway_id: i64,
    pub role_id: String,
    pub extra_entries: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayGuild {
    pub id: i64,
    pub guild_id: String,
    pub channel_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_id: String,
    pub giveaway_id: i64,
    pub is_host: bool,
    #[serde(default)]
    pub black_list_roles: Vec<String>,
    pub xp_required: Option<i64>,
}
