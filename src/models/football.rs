use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FootballBetType {
    HomeWin,
    Draw,
    AwayWin,
    ExactGoals,
    GoalsHome,
    GoalsAway,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FootballBetStatus {
    Pending,
    Won,
    Lost,
    Canceled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FootballMatchStatus {
    Scheduled,
    Live,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Canceled,
    Awarded,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballTeam {
    pub id: i64,
    pub name: String,
    pub api_id: i64,
    pub venue: String,
    pub short_name: String,
    pub tla: String,
    pub crest: String,
    pub address: String,
    pub club_colors: Option<String>,
    pub area_id: i64,
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballMatch {
    pub id: i64,
    pub status: FootballMatchStatus,
    pub api_id: i64,
    pub start_at: DateTime<Utc>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub competition_id: i64,
    pub goals_home: Option<i64>,
    pub goals_away: Option<i64>,
    pub venue: Option<String>,
    pub odds_home_win: Option<f64>,
    pub odds_draw: Option<f64>,
    pub odds_away_win: Option<f64>,
    /// Present only when the matching `include` selection asked for it.
    #[serde(default)]
    pub home_team: Option<FootballTeam>,
    #[serde(default)]
    pub away_team: Option<FootballTeam>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballBet {
    pub id: i64,
    pub match_id: i64,
    pub user_id: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: FootballBetType,
    pub odds: f64,
    pub status: FootballBetStatus,
    /// Serialized as a string by the API; parse on demand.
    #[serde(default)]
    pub quantity: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, rename = "match")]
    pub football_match: Option<FootballMatch>,
}
