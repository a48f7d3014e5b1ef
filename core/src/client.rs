//! Async client: one method per Fortnite API endpoint.
//!
//! # Design
//! `FortniteClient` pairs the stateless `Endpoints` builder with a
//! `Transport` and runs every call through `request::handle_request`. It
//! carries no mutable state, so concurrent calls on a shared client are
//! independent of each other.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::endpoints::{Endpoints, StatsQuery};
use crate::error::ApiResult;
use crate::http::HttpRequest;
use crate::language::{KeyFormat, Language};
use crate::request::handle_request;
use crate::transport::Transport;
use crate::types::{
    Aes, Banner, BannerColor, BrStats, Cosmetic, CreatorCode, Map, NewCosmetics, News,
    NewsBundle, Playlist, Shop,
};

#[cfg(feature = "reqwest")]
use crate::{error::ConfigError, transport::ReqwestTransport};

#[derive(Debug, Clone)]
pub struct FortniteClient<T> {
    endpoints: Endpoints,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl FortniteClient<ReqwestTransport> {
    /// Client for the public host with default settings.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> FortniteClient<T> {
    /// `config.timeout` is not applied here; it belongs to the transport.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            endpoints: config.endpoints(),
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Current AES keys, encoded as `format`.
    pub async fn aes_key(&self, format: KeyFormat) -> ApiResult<Aes> {
        self.send(self.endpoints.aes_key(format)).await
    }

    pub async fn banners(&self, language: Language) -> ApiResult<Vec<Banner>> {
        self.send(self.endpoints.banners(language)).await
    }

    pub async fn banner_colors(&self, language: Language) -> ApiResult<Vec<BannerColor>> {
        self.send(self.endpoints.banner_colors(language)).await
    }

    /// Every battle royale cosmetic.
    pub async fn cosmetics(&self, language: Language) -> ApiResult<Vec<Cosmetic>> {
        self.send(self.endpoints.cosmetics(language)).await
    }

    pub async fn new_cosmetics(&self, language: Language) -> ApiResult<NewCosmetics> {
        self.send(self.endpoints.new_cosmetics(language)).await
    }

    pub async fn cosmetic_by_id(&self, id: &str, language: Language) -> ApiResult<Cosmetic> {
        self.send(self.endpoints.cosmetic_by_id(id, language)).await
    }

    pub async fn search_cosmetics_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
        language: Language,
    ) -> ApiResult<Vec<Cosmetic>> {
        self.send(self.endpoints.search_cosmetics_by_ids(ids, language)).await
    }

    pub async fn creator_code(&self, code: &str) -> ApiResult<CreatorCode> {
        self.send(self.endpoints.creator_code(code)).await
    }

    pub async fn map(&self, language: Language) -> ApiResult<Map> {
        self.send(self.endpoints.map(language)).await
    }

    /// News for every mode at once.
    pub async fn news(&self, language: Language) -> ApiResult<NewsBundle> {
        self.send(self.endpoints.news(language)).await
    }

    /// `Ok(None)` when there is no battle royale news right now.
    pub async fn battle_royale_news(&self, language: Language) -> ApiResult<Option<News>> {
        self.send(self.endpoints.battle_royale_news(language)).await
    }

    /// `Ok(None)` when there is no Save the World news right now.
    pub async fn save_the_world_news(&self, language: Language) -> ApiResult<Option<News>> {
        self.send(self.endpoints.save_the_world_news(language)).await
    }

    /// The upstream has answered this with a failure since late 2023.
    pub async fn creative_news(&self, language: Language) -> ApiResult<Option<News>> {
        self.send(self.endpoints.creative_news(language)).await
    }

    pub async fn playlists(&self, language: Language) -> ApiResult<Vec<Playlist>> {
        self.send(self.endpoints.playlists(language)).await
    }

    pub async fn playlist_by_id(&self, id: &str, language: Language) -> ApiResult<Playlist> {
        self.send(self.endpoints.playlist_by_id(id, language)).await
    }

    pub async fn shop(&self, language: Language) -> ApiResult<Shop> {
        self.send(self.endpoints.shop(language)).await
    }

    pub async fn combined_shop(&self, language: Language) -> ApiResult<Shop> {
        self.send(self.endpoints.combined_shop(language)).await
    }

    /// Needs an API key in the config; upstream answers 401 without one.
    pub async fn br_stats(&self, name: &str, query: &StatsQuery) -> ApiResult<BrStats> {
        self.send(self.endpoints.br_stats(name, query)).await
    }

    pub async fn br_stats_by_account_id(
        &self,
        account_id: &str,
        query: &StatsQuery,
    ) -> ApiResult<BrStats> {
        self.send(self.endpoints.br_stats_by_account_id(account_id, query)).await
    }

    async fn send<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        handle_request(&self.transport, request).await
    }
}
