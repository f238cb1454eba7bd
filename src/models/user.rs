use crate::models::football::FootballBet;
use crate::models::giveaway::GiveawayParticipant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub money: i64,
    /// Absent on the bot's own balance route.
    #[serde(default)]
    pub bank: Option<i64>,
}

/// One entry of a user's economy activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLog {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserLogsResponse {
    pub data: Vec<UserLog>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteOrigin {
    Server,
    Website,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub application_id: String,
    pub origin: VoteOrigin,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VotesResponse {
    pub votes: i64,
    pub data: Vec<Vote>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blacklist {
    pub banned_at: DateTime<Utc>,
    pub reason: String,
    pub end_at: DateTime<Utc>,
    pub responsible_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetGender {
    Male,
    Female,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pet_id: i64,
    pub hungry: i64,
    pub life: i64,
    pub happiness: i64,
    pub energy: i64,
    pub is_dead: bool,
    pub gender: PetGender,
    pub is_pregnant: bool,
    pub pregnant_end_at: Option<DateTime<Utc>>,
    pub humor: String,
    pub spouse_id: Option<i64>,
    pub parent1_id: Option<i64>,
    pub parent2_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: i64,
    pub experience: i64,
    pub wage: i64,
    /// Shape varies by company tier (plain strings or skill requirements).
    #[serde(default)]
    pub expectations: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cooldown {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub will_end_in: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishingRod {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub fishing_rod_id: i64,
    pub durability: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishCatch {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub fish_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub id: i64,
    pub user_id: String,
    pub amount: i64,
    pub stock_id: i64,
}

/// Full user record. The base economy fields are always present; the
/// trailing sections arrive only when the matching `include` selection was
/// requested, so they all stay optional on one combined record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub active_pet_id: Option<i64>,
    pub money: i64,
    pub bank: i64,
    pub xp: i64,
    pub company_id: Option<i64>,
    // the API spells this field with the double-s
    #[serde(rename = "afkReasson")]
    pub afk_reason: Option<String>,
    pub afk_time: Option<DateTime<Utc>>,
    pub dm_notification: bool,
    pub blacklist: Option<Blacklist>,
    #[serde(default)]
    pub mails_tags_ignored: Vec<String>,

    #[serde(default)]
    pub pets: Option<Vec<Pet>>,
    #[serde(default)]
    pub active_pet: Option<Pet>,
    #[serde(default)]
    pub giveaways: Option<Vec<GiveawayParticipant>>,
    #[serde(default)]
    pub stocks: Option<Vec<StockHolding>>,
    #[serde(default, rename = "fishs")]
    pub fish: Option<Vec<FishCatch>>,
    #[serde(default)]
    pub fishing_rods: Option<Vec<FishingRod>>,
    #[serde(default)]
    pub cooldowns: Option<Vec<Cooldown>>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub bets: Option<Vec<FootballBet>>,
}
