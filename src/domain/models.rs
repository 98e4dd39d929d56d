use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Tour classification derived from the upstream event type string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tour {
    Atp,
    Wta,
    Other,
}

impl Tour {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tour::Atp => "ATP",
            Tour::Wta => "WTA",
            Tour::Other => "OTHER",
        }
    }
}

/// Match status derived from the upstream status string and live flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
    Other(String),
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::NotStarted => "NotStarted",
            MatchStatus::InProgress => "InProgress",
            MatchStatus::Completed => "Completed",
            MatchStatus::Other(raw) => raw,
        }
    }
}

impl Serialize for MatchStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One of the two players in a match, serialized as 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    First,
    Second,
}

impl PlayerSide {
    pub fn number(self) -> u8 {
        match self {
            PlayerSide::First => 1,
            PlayerSide::Second => 2,
        }
    }
}

impl Serialize for PlayerSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRef {
    pub key: String,
    pub name: String,
}

/// Final score of one set; vector order in `MatchSummary::sets` is play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetScore {
    pub p1: u32,
    pub p2: u32,
}

/// A match as shown in the live list and the detail view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub tour: Tour,
    pub tournament: String,
    pub round: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub player1: PlayerRef,
    pub player2: PlayerRef,
    pub sets: Vec<SetScore>,
    pub current_game: Option<String>,
    pub server: Option<PlayerSide>,
}

/// Cumulative points won per player at one moment of the match.
/// `t` is epoch milliseconds; samples are strictly increasing in `t`
/// and non-decreasing in both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MomentumSample {
    pub t: i64,
    pub p1: u32,
    pub p2: u32,
}

/// Granular match statistics. The upstream feed carries no per-stat
/// counters, so everything except the point totals and the momentum
/// sequence stays at zero.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStats {
    pub aces_p1: u32,
    pub aces_p2: u32,
    pub double_faults_p1: u32,
    pub double_faults_p2: u32,
    pub first_serve_pct_p1: u32,
    pub first_serve_pct_p2: u32,
    pub first_serve_won_pct_p1: u32,
    pub first_serve_won_pct_p2: u32,
    pub break_pts_won_p1: u32,
    pub break_pts_won_p2: u32,
    pub break_pts_total_p1: u32,
    pub break_pts_total_p2: u32,
    pub winners_p1: u32,
    pub winners_p2: u32,
    pub unforced_errors_p1: u32,
    pub unforced_errors_p2: u32,
    pub total_pts_won_p1: u32,
    pub total_pts_won_p2: u32,
    pub momentum: Vec<MomentumSample>,
}

impl LiveStats {
    /// Build stats from a reconstructed momentum sequence and its point totals
    pub fn from_momentum(momentum: Vec<MomentumSample>, p1_points: u32, p2_points: u32) -> Self {
        Self {
            total_pts_won_p1: p1_points,
            total_pts_won_p2: p2_points,
            momentum,
            ..Self::default()
        }
    }
}

/// One historical meeting between two players
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct H2HItem {
    pub match_key: String,
    pub date: String,
    pub tournament: String,
    pub round: String,
    pub winner: PlayerSide,
    pub score: String,
}

/// Normalized ranking row; `rank` 0 means unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub rank: u32,
    pub player_key: String,
    pub name: String,
    pub country: Option<String>,
    pub points: Option<u64>,
    pub photo: Option<String>,
}

/// Full detail view for one match
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetails {
    pub summary: MatchSummary,
    pub stats: LiveStats,
    pub h2h: Vec<H2HItem>,
}

/// Payload delivered to a live subscription callback on every poll tick
#[derive(Debug, Clone, Serialize)]
pub struct LiveUpdate {
    pub summary: MatchSummary,
    pub stats: LiveStats,
}
