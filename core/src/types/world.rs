use serde::{Deserialize, Serialize};

use super::Account;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub dev_name: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub full_usage_rights: bool,
    pub images: BannerImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImages {
    pub small_icon: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerColor {
    pub id: String,
    pub color: String,
    pub category: String,
    pub sub_category: u32,
}

/// A support-a-creator code and the account it pays out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorCode {
    pub code: String,
    pub account: Account,
    pub status: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub images: MapImages,
    pub pois: Vec<Poi>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImages {
    pub blank: String,
    pub pois: String,
}

/// A named point of interest on the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub location: Location,
}

/// World coordinates in game units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// AES keys for the current build's pak files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aes {
    pub build: String,
    pub main_key: String,
    pub dynamic_keys: Vec<DynamicKey>,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicKey {
    pub pak_filename: String,
    pub pak_guid: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: Option<String>,
    pub sub_name: Option<String>,
    pub description: Option<String>,
    pub game_type: Option<String>,
    pub rating_type: Option<String>,
    pub min_players: i32,
    pub max_players: i32,
    pub max_teams: i32,
    pub max_team_size: i32,
    pub max_squads: i32,
    pub max_squad_size: i32,
    pub is_default: bool,
    pub is_tournament: bool,
    pub is_limited_time_mode: bool,
    pub is_large_team_game: bool,
    pub accumulate_to_profile_stats: bool,
    pub images: PlaylistImages,
    #[serde(default)]
    pub gameplay_tags: Vec<String>,
    pub path: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistImages {
    pub showcase: Option<String>,
    pub mission_icon: Option<String>,
}
