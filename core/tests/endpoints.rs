//! Every endpoint against a recording mock transport.
//!
//! Covers payload passthrough, failure mapping, URL construction and the
//! absence of cross-call state.

mod common;

use common::{mock_client, MockTransport, MOCK_BASE};
use fnapi_core::types::Shop;
use fnapi_core::{
    handle_request, Endpoints, FortniteClient, HttpRequest, HttpResponse, KeyFormat, Language, RequestFailure,
    StatsQuery, Status,
};
use serde_json::{json, Value};

/// Every request the builder can produce, with default arguments.
fn every_request(e: &Endpoints) -> Vec<HttpRequest> {
    let lang = Language::default();
    let query = StatsQuery::default();
    vec![
        e.aes_key(KeyFormat::default()),
        e.banners(lang),
        e.banner_colors(lang),
        e.cosmetics(lang),
        e.new_cosmetics(lang),
        e.cosmetic_by_id("CID_028_Athena_Commando_F", lang),
        e.search_cosmetics_by_ids(&["a", "b"], lang),
        e.creator_code("ninja"),
        e.map(lang),
        e.news(lang),
        e.battle_royale_news(lang),
        e.save_the_world_news(lang),
        e.creative_news(lang),
        e.playlists(lang),
        e.playlist_by_id("Playlist_DefaultSolo", lang),
        e.shop(lang),
        e.combined_shop(lang),
        e.br_stats("Ninja", &query),
        e.br_stats_by_account_id("4735ce91", &query),
    ]
}

/// Drive every typed client method once, discarding payloads.
async fn call_everything(client: &FortniteClient<MockTransport>) -> Vec<Result<(), RequestFailure>> {
    let lang = Language::default();
    let query = StatsQuery::default();
    vec![
        client.aes_key(KeyFormat::default()).await.map(drop),
        client.banners(lang).await.map(drop),
        client.banner_colors(lang).await.map(drop),
        client.cosmetics(lang).await.map(drop),
        client.new_cosmetics(lang).await.map(drop),
        client.cosmetic_by_id("x", lang).await.map(drop),
        client.search_cosmetics_by_ids(&["a", "b", "c"], lang).await.map(drop),
        client.creator_code("ninja").await.map(drop),
        client.map(lang).await.map(drop),
        client.news(lang).await.map(drop),
        client.battle_royale_news(lang).await.map(drop),
        client.save_the_world_news(lang).await.map(drop),
        client.creative_news(lang).await.map(drop),
        client.playlists(lang).await.map(drop),
        client.playlist_by_id("x", lang).await.map(drop),
        client.shop(lang).await.map(drop),
        client.combined_shop(lang).await.map(drop),
        client.br_stats("Ninja", &query).await.map(drop),
        client.br_stats_by_account_id("x", &query).await.map(drop),
    ]
}

fn shop_payload() -> Value {
    json!({
        "hash": "h1",
        "date": "2024-01-01",
        "vbuckIcon": "url",
        "featured": null,
        "daily": null,
        "specialFeatured": null,
        "specialDaily": null,
        "votes": null,
        "voteWinners": null
    })
}

#[tokio::test]
async fn every_endpoint_returns_inner_payload_unchanged() {
    let payload = json!({ "nested": { "list": [1, "two", null], "flag": true }, "n": 1.5 });
    let transport = MockTransport::enveloped(payload.clone());
    for request in every_request(&Endpoints::new(MOCK_BASE)) {
        let url = request.url.clone();
        let value: Value = handle_request(&transport, request).await.unwrap();
        assert_eq!(value, payload, "{url}");
    }
    assert_eq!(transport.requests().len(), 19);
}

#[tokio::test]
async fn every_endpoint_maps_rejection_to_failure_record() {
    let client = mock_client(MockTransport::rejecting(404, "Not Found"));
    let expected = RequestFailure {
        status: Some(Status::Http(404)),
        error: "Not Found".to_string(),
    };
    let results = call_everything(&client).await;
    assert_eq!(results.len(), 19);
    for result in results {
        assert_eq!(result, Err(expected.clone()));
    }
    let json = serde_json::to_value(&expected).unwrap();
    assert_eq!(json, json!({ "status": 404, "error": "Not Found" }));
}

#[tokio::test]
async fn every_endpoint_maps_upstream_error_body_to_failure_record() {
    let body = r#"{"status":404,"error":"Not Found"}"#;
    let transport = MockTransport::new(Ok(fnapi_core::HttpResponse::new(404, body)));
    let client = mock_client(transport);
    for result in call_everything(&client).await {
        let failure = result.unwrap_err();
        assert_eq!(failure.status, Some(Status::Http(404)));
        assert_eq!(failure.error, "Not Found");
    }
}

#[tokio::test]
async fn every_url_defaults_to_english() {
    let client = mock_client(MockTransport::rejecting(500, "down"));
    call_everything(&client).await;
    let urls: Vec<String> = client.transport().requests().into_iter().map(|r| r.url).collect();
    let skipped = ["/v2/aes?", "/v2/creatorcode?", "/v2/stats/"];
    for url in urls.iter().filter(|u| !skipped.iter().any(|s| u.contains(s))) {
        assert!(url.ends_with("language=en"), "{url}");
    }
}

#[tokio::test]
async fn id_list_is_joined_into_one_query_value() {
    let client = mock_client(MockTransport::enveloped(json!([])));
    let found = client
        .search_cosmetics_by_ids(&["a", "b", "c"], Language::default())
        .await
        .unwrap();
    assert!(found.is_empty());
    assert_eq!(
        client.transport().last_url(),
        "https://fortnite-api.com/v2/cosmetics/br/search/ids?id=a,b,c&language=en"
    );
}

#[tokio::test]
async fn aes_key_format_defaults_to_hex() {
    let client = mock_client(MockTransport::rejecting(503, "unavailable"));
    let _ = client.aes_key(KeyFormat::default()).await;
    assert!(client.transport().last_url().ends_with("/v2/aes?keyFormat=hex"));
    let _ = client.aes_key(KeyFormat::Base64).await;
    assert!(client.transport().last_url().ends_with("/v2/aes?keyFormat=base64"));
}

#[tokio::test]
async fn combined_shop_in_german_resolves_to_inner_object() {
    let client = mock_client(MockTransport::enveloped(shop_payload()));
    let shop = client.combined_shop(Language::German).await.unwrap();

    let expected: Shop = serde_json::from_value(shop_payload()).unwrap();
    assert_eq!(shop, expected);
    assert_eq!(shop.hash, "h1");
    assert_eq!(shop.date, "2024-01-01");
    assert!(shop.featured.is_none() && shop.vote_winners.is_none());
    assert_eq!(serde_json::to_value(&shop).unwrap(), shop_payload());
    assert!(client.transport().last_url().contains("shop/br/combined?language=de"));
}

#[tokio::test]
async fn repeated_calls_are_independent() {
    let client = mock_client(MockTransport::enveloped(shop_payload()));
    let first = client.combined_shop(Language::German).await;
    let second = client.combined_shop(Language::German).await;
    assert_eq!(first, second);
    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn concurrent_calls_do_not_interfere() {
    let client = mock_client(MockTransport::enveloped(shop_payload()));
    let (a, b, c) = tokio::join!(
        client.shop(Language::English),
        client.shop(Language::Japanese),
        client.combined_shop(Language::Korean),
    );
    assert_eq!(a, b);
    assert_eq!(b, c);
    let mut urls: Vec<String> = client.transport().requests().into_iter().map(|r| r.url).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "https://fortnite-api.com/v2/shop/br/combined?language=ko",
            "https://fortnite-api.com/v2/shop/br?language=en",
            "https://fortnite-api.com/v2/shop/br?language=ja",
        ]
    );
}

#[tokio::test]
async fn absent_news_is_not_an_error() {
    let client = mock_client(MockTransport::enveloped(Value::Null));
    assert_eq!(client.battle_royale_news(Language::default()).await, Ok(None));
    assert_eq!(client.save_the_world_news(Language::default()).await, Ok(None));
}

#[tokio::test]
async fn news_body_without_data_key_is_a_failure() {
    let client = mock_client(MockTransport::new(Ok(HttpResponse::new(200, r#"{"status":200}"#))));
    let failure = client.save_the_world_news(Language::default()).await.unwrap_err();
    assert_eq!(failure.http_status(), Some(200));
    assert!(failure.error.starts_with("invalid response body"));
}

#[tokio::test]
async fn payload_of_wrong_shape_is_a_failure_not_a_panic() {
    let client = mock_client(MockTransport::enveloped(json!({ "unexpected": true })));
    let failure = client.playlists(Language::default()).await.unwrap_err();
    assert_eq!(failure.status, Some(Status::Http(200)));
    assert!(failure.error.starts_with("invalid response body"));
}

#[tokio::test]
async fn transport_error_code_becomes_status() {
    let transport = MockTransport::new(Err(fnapi_core::TransportError::new(
        Some(Status::Code("ENOTFOUND".to_string())),
        "getaddrinfo ENOTFOUND fortnite-api.com",
    )));
    let failure = mock_client(transport).map(Language::default()).await.unwrap_err();
    assert_eq!(failure.status, Some(Status::Code("ENOTFOUND".to_string())));
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["status"], "ENOTFOUND");
}
