//! Response shapes for the Fortnite API.
//!
//! # Design
//! These types mirror the upstream JSON and enforce nothing beyond what serde
//! needs to decode it. Timestamps stay as the upstream strings because the
//! normalizer hands payloads back untouched. Fields the upstream sends as
//! `null` (or omits) are `Option`.

use serde::{Deserialize, Serialize};

mod cosmetic;
mod news;
mod shop;
mod stats;
mod world;

pub use cosmetic::{
    Cosmetic, CosmeticImages, CosmeticSet, Introduction, NewCosmetics, Series, Variant,
    VariantOption,
};
pub use news::{Message, Motd, News, NewsBundle};
pub use shop::{
    MaterialInstance, NewDisplayAsset, Offer, OfferBanner, OfferBundle, Section, Shop,
    ShopCategory, ShopItem, ShopItemImages, ShopVotes,
};
pub use stats::{BattlePass, BrStats, Modes, Score, StatsByInput};
pub use world::{
    Aes, Banner, BannerColor, BannerImages, CreatorCode, DynamicKey, Location, Map, MapImages,
    Playlist, PlaylistImages, Poi,
};

/// A `{ value, displayValue, backendValue }` triple, used for cosmetic types
/// and rarities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedValue {
    pub value: String,
    pub display_value: String,
    pub backend_value: String,
}

/// An Epic account reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}
