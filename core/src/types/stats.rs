use serde::{Deserialize, Serialize};

use super::Account;

/// Battle royale statistics for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrStats {
    pub account: Account,
    pub battle_pass: BattlePass,
    #[serde(default)]
    pub image: Option<String>,
    pub stats: StatsByInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePass {
    pub level: u32,
    pub progress: u32,
}

/// Stats split by input method; a method the player never used is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsByInput {
    pub all: Option<Modes>,
    pub keyboard_mouse: Option<Modes>,
    pub gamepad: Option<Modes>,
    pub touch: Option<Modes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modes {
    pub overall: Option<Score>,
    pub solo: Option<Score>,
    pub duo: Option<Score>,
    pub trio: Option<Score>,
    pub squad: Option<Score>,
    pub ltm: Option<Score>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score: u64,
    #[serde(default)]
    pub score_per_min: f64,
    #[serde(default)]
    pub score_per_match: f64,
    pub wins: u64,
    pub kills: u64,
    #[serde(default)]
    pub kills_per_min: f64,
    #[serde(default)]
    pub kills_per_match: f64,
    pub deaths: u64,
    pub kd: f64,
    pub matches: u64,
    pub win_rate: f64,
    pub minutes_played: u64,
    pub players_outlived: u64,
    pub last_modified: String,
}
