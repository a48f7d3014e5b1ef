use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TypedValue;

/// A battle royale cosmetic as served by the catalogue endpoints
/// (`/v2/cosmetics/br...`).
///
/// The shop serves the same upstream concept with looser optionality; see
/// [`ShopItem`](super::ShopItem). The two are kept apart on purpose so a
/// catalogue entry keeps its guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cosmetic {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TypedValue,
    pub rarity: TypedValue,
    #[serde(default)]
    pub series: Option<Series>,
    #[serde(default)]
    pub set: Option<CosmeticSet>,
    #[serde(default)]
    pub introduction: Option<Introduction>,
    pub images: CosmeticImages,
    #[serde(default)]
    pub variants: Option<Vec<Variant>>,
    #[serde(default)]
    pub search_tags: Vec<String>,
    #[serde(default)]
    pub gameplay_tags: Vec<String>,
    #[serde(default)]
    pub meta_tags: Vec<String>,
    #[serde(default)]
    pub showcase_video: Option<String>,
    #[serde(default)]
    pub dynamic_pak_id: Option<String>,
    #[serde(default)]
    pub display_asset_path: Option<String>,
    #[serde(default)]
    pub definition_path: Option<String>,
    pub path: String,
    pub added: String,
    #[serde(default)]
    pub shop_history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub value: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub backend_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSet {
    pub value: String,
    pub text: String,
    pub backend_value: String,
}

/// Chapter and season a cosmetic first appeared in.
///
/// `backend_value` is a number in the catalogue and a string in shop
/// entries, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Introduction {
    pub chapter: String,
    pub season: String,
    pub text: String,
    pub backend_value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticImages {
    #[serde(default)]
    pub small_icon: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub other: Option<HashMap<String, String>>,
}

/// A selectable style channel (e.g. material, parts) of a cosmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub channel: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<VariantOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub tag: String,
    pub name: String,
    pub image: String,
}

/// Cosmetics added in the latest game build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmetics {
    pub build: String,
    pub previous_build: String,
    pub hash: String,
    pub date: String,
    pub last_addition: String,
    pub items: Vec<Cosmetic>,
}
