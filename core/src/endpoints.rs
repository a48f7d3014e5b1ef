//! Stateless URL builders for every Fortnite API endpoint.
//!
//! # Design
//! `Endpoints` holds only a base URL and the headers to send with every
//! request. Each method produces an `HttpRequest` and performs no I/O. Path
//! and query values are interpolated verbatim: callers supply URL-safe ids,
//! and invalid values are left for the upstream to reject.

use crate::http::HttpRequest;
use crate::language::{AccountType, KeyFormat, Language, StatsImage, TimeWindow};

/// Public host of the Fortnite API.
pub const DEFAULT_BASE_URL: &str = "https://fortnite-api.com";

/// Filters for the battle royale stats endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub account_type: AccountType,
    pub time_window: TimeWindow,
    pub image: StatsImage,
}

/// Builds `HttpRequest` values for the Fortnite API.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Vec::new(),
        }
    }

    /// Attach headers sent with every built request.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn aes_key(&self, format: KeyFormat) -> HttpRequest {
        self.get(format!("/v2/aes?keyFormat={format}"))
    }

    pub fn banners(&self, language: Language) -> HttpRequest {
        self.get(format!("/v1/banners?language={language}"))
    }

    pub fn banner_colors(&self, language: Language) -> HttpRequest {
        self.get(format!("/v1/banners/colors?language={language}"))
    }

    pub fn cosmetics(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/cosmetics/br?language={language}"))
    }

    pub fn new_cosmetics(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/cosmetics/br/new?language={language}"))
    }

    pub fn cosmetic_by_id(&self, id: &str, language: Language) -> HttpRequest {
        self.get(format!("/v2/cosmetics/br/{id}?language={language}"))
    }

    /// The ids are joined with `,` into a single `id` value.
    pub fn search_cosmetics_by_ids<S: AsRef<str>>(&self, ids: &[S], language: Language) -> HttpRequest {
        let ids = join_ids(ids);
        self.get(format!("/v2/cosmetics/br/search/ids?id={ids}&language={language}"))
    }

    pub fn creator_code(&self, code: &str) -> HttpRequest {
        self.get(format!("/v2/creatorcode?name={code}"))
    }

    pub fn map(&self, language: Language) -> HttpRequest {
        self.get(format!("/v1/map?language={language}"))
    }

    pub fn news(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/news?language={language}"))
    }

    pub fn battle_royale_news(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/news/br?language={language}"))
    }

    pub fn save_the_world_news(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/news/stw?language={language}"))
    }

    pub fn creative_news(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/news/creative?language={language}"))
    }

    pub fn playlists(&self, language: Language) -> HttpRequest {
        self.get(format!("/v1/playlists?language={language}"))
    }

    pub fn playlist_by_id(&self, id: &str, language: Language) -> HttpRequest {
        self.get(format!("/v1/playlists/{id}?language={language}"))
    }

    pub fn shop(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/shop/br?language={language}"))
    }

    /// The shop with special and regular categories merged.
    pub fn combined_shop(&self, language: Language) -> HttpRequest {
        self.get(format!("/v2/shop/br/combined?language={language}"))
    }

    /// Stats looked up by display name. Upstream requires an API key.
    pub fn br_stats(&self, name: &str, query: &StatsQuery) -> HttpRequest {
        self.get(format!(
            "/v2/stats/br/v2?name={name}&accountType={}&timeWindow={}&image={}",
            query.account_type, query.time_window, query.image
        ))
    }

    /// Stats looked up by account id; `query.account_type` does not apply.
    pub fn br_stats_by_account_id(&self, account_id: &str, query: &StatsQuery) -> HttpRequest {
        self.get(format!(
            "/v2/stats/br/v2/{account_id}?timeWindow={}&image={}",
            query.time_window, query.image
        ))
    }

    fn get(&self, path_and_query: String) -> HttpRequest {
        HttpRequest {
            url: format!("{}{path_and_query}", self.base_url),
            headers: self.headers.clone(),
        }
    }
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:3000")
    }

    #[test]
    fn default_base_is_public_host() {
        let req = Endpoints::default().map(Language::DEFAULT);
        assert_eq!(req.url, "https://fortnite-api.com/v1/map?language=en");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = Endpoints::new("http://localhost:3000/").banners(Language::German);
        assert_eq!(req.url, "http://localhost:3000/v1/banners?language=de");
    }

    #[test]
    fn ids_are_joined_with_commas() {
        let req = endpoints().search_cosmetics_by_ids(&["a", "b", "c"], Language::default());
        assert_eq!(
            req.url,
            "http://localhost:3000/v2/cosmetics/br/search/ids?id=a,b,c&language=en"
        );
    }

    #[test]
    fn single_id_has_no_separator() {
        let ids = vec!["CID_001".to_string()];
        let req = endpoints().search_cosmetics_by_ids(&ids, Language::French);
        assert!(req.url.ends_with("?id=CID_001&language=fr"));
    }

    #[test]
    fn aes_key_format_defaults_to_hex() {
        let req = endpoints().aes_key(KeyFormat::default());
        assert_eq!(req.url, "http://localhost:3000/v2/aes?keyFormat=hex");
        let req = endpoints().aes_key(KeyFormat::Base64);
        assert_eq!(req.url, "http://localhost:3000/v2/aes?keyFormat=base64");
    }

    #[test]
    fn default_language_is_english_everywhere() {
        let e = endpoints();
        let lang = Language::default();
        for req in [
            e.banners(lang),
            e.banner_colors(lang),
            e.cosmetics(lang),
            e.new_cosmetics(lang),
            e.cosmetic_by_id("x", lang),
            e.map(lang),
            e.news(lang),
            e.battle_royale_news(lang),
            e.save_the_world_news(lang),
            e.creative_news(lang),
            e.playlists(lang),
            e.playlist_by_id("x", lang),
            e.shop(lang),
            e.combined_shop(lang),
        ] {
            assert!(req.url.ends_with("language=en"), "{}", req.url);
        }
    }

    #[test]
    fn values_are_interpolated_without_escaping() {
        let req = endpoints().creator_code("ninja tv");
        assert_eq!(req.url, "http://localhost:3000/v2/creatorcode?name=ninja tv");
    }

    #[test]
    fn stats_query_renders_every_filter() {
        let query = StatsQuery {
            account_type: AccountType::PlayStation,
            time_window: TimeWindow::Season,
            image: StatsImage::Gamepad,
        };
        let req = endpoints().br_stats("Ninja", &query);
        assert_eq!(
            req.url,
            "http://localhost:3000/v2/stats/br/v2?name=Ninja&accountType=psn&timeWindow=season&image=gamepad"
        );
        let req = endpoints().br_stats_by_account_id("4735ce91", &StatsQuery::default());
        assert_eq!(
            req.url,
            "http://localhost:3000/v2/stats/br/v2/4735ce91?timeWindow=lifetime&image=none"
        );
    }

    #[test]
    fn headers_are_attached_to_every_request() {
        let e = endpoints().with_headers(vec![("Authorization".to_string(), "key".to_string())]);
        assert_eq!(e.shop(Language::default()).header("authorization"), Some("key"));
        assert_eq!(e.creator_code("x").header("Authorization"), Some("key"));
        assert!(endpoints().shop(Language::default()).headers.is_empty());
    }
}
