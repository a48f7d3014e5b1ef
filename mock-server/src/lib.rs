//! Axum server imitating the Fortnite API.
//!
//! Every success is wrapped as `{ "status": 200, "data": ... }` and every
//! failure as `{ "status": <code>, "error": <message> }`, matching the
//! upstream envelope.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use fixtures::Catalog;

/// Language codes the upstream accepts.
pub const LANGUAGES: [&str; 14] = [
    "en", "de", "ar", "ja", "es", "fr", "it", "ko", "pl", "pt-BR", "ru", "tr", "zh-CN", "zh-Hant",
];

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::sample())
}

pub fn app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/v2/aes", get(aes))
        .route("/v1/banners", get(banners))
        .route("/v1/banners/colors", get(banner_colors))
        .route("/v2/cosmetics/br", get(cosmetics))
        .route("/v2/cosmetics/br/new", get(new_cosmetics))
        .route("/v2/cosmetics/br/search/ids", get(search_cosmetics))
        .route("/v2/cosmetics/br/{id}", get(cosmetic_by_id))
        .route("/v2/creatorcode", get(creator_code))
        .route("/v1/map", get(map))
        .route("/v2/news", get(news))
        .route("/v2/news/br", get(br_news))
        .route("/v2/news/stw", get(stw_news))
        .route("/v2/news/creative", get(creative_news))
        .route("/v1/playlists", get(playlists))
        .route("/v1/playlists/{id}", get(playlist_by_id))
        .route("/v2/shop/br", get(shop))
        .route("/v2/shop/br/combined", get(combined_shop))
        .route("/v2/stats/br/v2", get(stats_by_name))
        .route("/v2/stats/br/v2/{account_id}", get(stats_by_id))
        .fallback(not_found)
        .layer(middleware::from_fn(trace_requests))
        .with_state(Arc::new(catalog))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Upstream-style error response.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    message: String,
}

impl Failure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = json!({ "status": self.status.as_u16(), "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

type Reply = Result<Json<Value>, Failure>;

fn ok(data: Value) -> Reply {
    Ok(Json(json!({ "status": 200, "data": data })))
}

async fn trace_requests(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::info!(%uri, status = response.status().as_u16(), "served");
    response
}

#[derive(Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

impl LanguageQuery {
    fn check(&self) -> Result<(), Failure> {
        match self.language.as_deref() {
            None => Ok(()),
            Some(code) if LANGUAGES.contains(&code) => Ok(()),
            Some(code) => Err(Failure::new(
                StatusCode::BAD_REQUEST,
                format!("Query parameter 'language' has an invalid value '{code}'"),
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AesQuery {
    pub key_format: Option<String>,
}

async fn aes(State(db): State<Db>, Query(q): Query<AesQuery>) -> Reply {
    match q.key_format.as_deref().unwrap_or("hex") {
        "hex" => ok(db.aes_hex.clone()),
        "base64" => ok(db.aes_base64.clone()),
        other => Err(Failure::new(
            StatusCode::BAD_REQUEST,
            format!("Query parameter 'keyFormat' has an invalid value '{other}'"),
        )),
    }
}

async fn banners(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.banners))
}

async fn banner_colors(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.banner_colors))
}

async fn cosmetics(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.cosmetics))
}

async fn new_cosmetics(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(db.new_cosmetics.clone())
}

async fn cosmetic_by_id(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(q): Query<LanguageQuery>,
) -> Reply {
    q.check()?;
    db.cosmetic(&id)
        .cloned()
        .map_or_else(|| Err(cosmetic_not_found()), ok)
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub id: Option<String>,
    pub language: Option<String>,
}

async fn search_cosmetics(State(db): State<Db>, Query(q): Query<SearchQuery>) -> Reply {
    LanguageQuery { language: q.language }.check()?;
    let ids = q.id.unwrap_or_default();
    let found: Vec<Value> = ids
        .split(',')
        .filter_map(|id| db.cosmetic(id).cloned())
        .collect();
    if found.is_empty() {
        return Err(cosmetic_not_found());
    }
    ok(Value::Array(found))
}

fn cosmetic_not_found() -> Failure {
    Failure::new(StatusCode::NOT_FOUND, "the requested cosmetic id was not found")
}

#[derive(Deserialize)]
pub struct CreatorCodeQuery {
    pub name: Option<String>,
}

async fn creator_code(State(db): State<Db>, Query(q): Query<CreatorCodeQuery>) -> Reply {
    let Some(name) = q.name.filter(|n| !n.is_empty()) else {
        return Err(Failure::new(
            StatusCode::BAD_REQUEST,
            "Query parameter 'name' is missing or empty",
        ));
    };
    db.creator_code(&name).cloned().map_or_else(
        || {
            Err(Failure::new(
                StatusCode::NOT_FOUND,
                "the requested creator code was not found",
            ))
        },
        ok,
    )
}

async fn map(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(db.map.clone())
}

async fn news(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!({ "br": db.br_news, "stw": db.stw_news, "creative": null }))
}

async fn br_news(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.br_news))
}

async fn stw_news(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.stw_news))
}

/// Creative news has been gone upstream since late 2023.
async fn creative_news(Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    Err(Failure::new(
        StatusCode::NOT_FOUND,
        "creative news are not available",
    ))
}

async fn playlists(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(json!(db.playlists))
}

async fn playlist_by_id(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(q): Query<LanguageQuery>,
) -> Reply {
    q.check()?;
    db.playlist(&id).cloned().map_or_else(
        || {
            Err(Failure::new(
                StatusCode::NOT_FOUND,
                "the requested playlist id was not found",
            ))
        },
        ok,
    )
}

async fn shop(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(db.shop.clone())
}

async fn combined_shop(State(db): State<Db>, Query(q): Query<LanguageQuery>) -> Reply {
    q.check()?;
    ok(db.combined_shop.clone())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub time_window: Option<String>,
    pub image: Option<String>,
}

impl StatsQuery {
    fn check(&self) -> Result<(), Failure> {
        check_choice("accountType", self.account_type.as_deref(), &["epic", "psn", "xbl"])?;
        check_choice("timeWindow", self.time_window.as_deref(), &["lifetime", "season"])?;
        check_choice(
            "image",
            self.image.as_deref(),
            &["all", "keyboardMouse", "gamepad", "touch", "none"],
        )
    }
}

fn check_choice(name: &str, value: Option<&str>, allowed: &[&str]) -> Result<(), Failure> {
    match value {
        Some(v) if !allowed.contains(&v) => Err(Failure::new(
            StatusCode::BAD_REQUEST,
            format!("Query parameter '{name}' has an invalid value '{v}'"),
        )),
        _ => Ok(()),
    }
}

fn require_api_key(headers: &HeaderMap) -> Result<(), Failure> {
    let present = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().is_empty());
    if present {
        Ok(())
    } else {
        Err(Failure::new(StatusCode::UNAUTHORIZED, "Invalid or missing api key"))
    }
}

fn account_not_found() -> Failure {
    Failure::new(StatusCode::NOT_FOUND, "the requested account does not exist")
}

async fn stats_by_name(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(q): Query<StatsQuery>,
) -> Reply {
    require_api_key(&headers)?;
    q.check()?;
    let name = q.name.as_deref().unwrap_or_default();
    db.player_by_name(name)
        .cloned()
        .map_or_else(|| Err(account_not_found()), ok)
}

async fn stats_by_id(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(account_id): Path<String>,
    Query(q): Query<StatsQuery>,
) -> Reply {
    require_api_key(&headers)?;
    q.check()?;
    db.player_by_id(&account_id)
        .cloned()
        .map_or_else(|| Err(account_not_found()), ok)
}

async fn not_found() -> Failure {
    Failure::new(StatusCode::NOT_FOUND, "Not Found")
}
