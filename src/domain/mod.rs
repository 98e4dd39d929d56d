pub mod models;

pub use models::{
    H2HItem, LiveStats, LiveUpdate, MatchDetails, MatchStatus, MatchSummary, MomentumSample,
    PlayerRef, PlayerSide, RankingItem, SetScore, Tour,
};
