use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CosmeticSet, Introduction, Series, TypedValue, Variant};

/// The battle royale item shop for the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub hash: String,
    pub date: String,
    pub vbuck_icon: String,
    pub featured: Option<ShopCategory>,
    pub daily: Option<ShopCategory>,
    pub special_featured: Option<ShopCategory>,
    pub special_daily: Option<ShopCategory>,
    pub votes: Option<ShopVotes>,
    pub vote_winners: Option<ShopVotes>,
}

impl Shop {
    /// Every offer across all categories, in category order.
    pub fn offers(&self) -> impl Iterator<Item = &Offer> {
        [
            &self.featured,
            &self.daily,
            &self.special_featured,
            &self.special_daily,
        ]
        .into_iter()
        .flatten()
        .flat_map(|category| category.entries.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCategory {
    pub name: Option<String>,
    pub entries: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopVotes {
    pub name: String,
    pub entries: Vec<Offer>,
}

/// A purchasable shop entry, bundling one or more items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub regular_price: u32,
    pub final_price: u32,
    #[serde(default)]
    pub bundle: Option<Vec<OfferBundle>>,
    #[serde(default)]
    pub banner: Option<Vec<OfferBanner>>,
    pub giftable: bool,
    pub refundable: bool,
    pub sort_priority: i32,
    #[serde(default)]
    pub categories: Vec<String>,
    pub section_id: String,
    #[serde(default)]
    pub section: Option<Section>,
    pub dev_name: String,
    pub offer_id: String,
    #[serde(default)]
    pub display_asset_path: Option<String>,
    pub tile_size: String,
    pub new_display_asset_path: String,
    pub new_display_asset: NewDisplayAsset,
    pub items: Vec<ShopItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferBundle {
    pub name: String,
    pub info: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferBanner {
    pub value: String,
    pub intensity: String,
    pub backend_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub name: String,
    pub index: i32,
    pub landing_priority: i32,
    pub sort_offers_by_ownership: bool,
    pub show_ineligible_offers: bool,
    pub show_ineligible_offers_if_giftable: bool,
    pub show_timer: bool,
    pub enable_toast_notification: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDisplayAsset {
    pub id: String,
    pub cosmetic_id: Option<String>,
    pub material_instances: Vec<MaterialInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInstance {
    pub id: String,
    #[serde(default)]
    pub images: HashMap<String, String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub scalings: HashMap<String, f64>,
    #[serde(default)]
    pub flags: HashMap<String, bool>,
}

/// A cosmetic as embedded in a shop offer.
///
/// Same upstream concept as [`Cosmetic`](super::Cosmetic), at the shop's
/// version of the schema: more fields may be `null`, and `introduction`
/// and `showcase_video` are always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TypedValue,
    pub rarity: TypedValue,
    pub series: Option<Series>,
    pub set: Option<CosmeticSet>,
    pub introduction: Introduction,
    pub images: ShopItemImages,
    pub variants: Option<Vec<Variant>>,
    pub search_tags: Option<Vec<String>>,
    pub gameplay_tags: Vec<String>,
    pub meta_tags: Option<Vec<String>>,
    pub showcase_video: Option<String>,
    pub dynamic_pak_id: Option<String>,
    pub display_asset_path: Option<String>,
    pub definition_path: String,
    pub path: String,
    pub added: String,
    #[serde(default)]
    pub shop_history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItemImages {
    pub small_icon: String,
    pub icon: String,
    pub featured: Option<String>,
    pub other: Option<HashMap<String, String>>,
}
