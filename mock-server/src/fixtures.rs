//! In-memory sample data served by the mock server.
//!
//! Payloads are raw JSON in the upstream's camelCase shape, defined
//! independently of the client's types so integration tests catch drift.

use serde_json::{json, Value};

/// Everything the mock server can answer with.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub cosmetics: Vec<Value>,
    pub new_cosmetics: Value,
    pub banners: Vec<Value>,
    pub banner_colors: Vec<Value>,
    pub creator_codes: Vec<Value>,
    pub map: Value,
    pub br_news: Option<Value>,
    pub stw_news: Option<Value>,
    pub playlists: Vec<Value>,
    pub shop: Value,
    pub combined_shop: Value,
    pub aes_hex: Value,
    pub aes_base64: Value,
    pub players: Vec<Value>,
}

impl Catalog {
    pub fn sample() -> Self {
        let cosmetics = vec![
            cosmetic("CID_028_Athena_Commando_F", "Renegade Raider", "rare"),
            cosmetic("CID_029_Athena_Commando_F_Halloween", "Ghoul Trooper", "epic"),
            cosmetic("EID_Floss", "Floss", "rare"),
        ];
        let new_cosmetics = json!({
            "build": "++Fortnite+Release-28.10-CL-31163747",
            "previousBuild": "++Fortnite+Release-28.01-CL-30802003",
            "hash": "c8b0e9a2",
            "date": "2024-01-01T10:00:00Z",
            "lastAddition": "2024-01-01T09:55:00Z",
            "items": [cosmetics[2].clone()]
        });
        let shop = json!({
            "hash": "a1b2c3",
            "date": "2024-01-01T00:00:00Z",
            "vbuckIcon": "https://fortnite-api.com/images/vbuck.png",
            "featured": { "name": "Featured", "entries": [offer("v2:/featured-1", "CID_028_Athena_Commando_F")] },
            "daily": { "name": null, "entries": [offer("v2:/daily-1", "EID_Floss")] },
            "specialFeatured": null,
            "specialDaily": null,
            "votes": null,
            "voteWinners": null
        });
        let combined_shop = json!({
            "hash": "a1b2c3",
            "date": "2024-01-01T00:00:00Z",
            "vbuckIcon": "https://fortnite-api.com/images/vbuck.png",
            "featured": {
                "name": "Featured",
                "entries": [
                    offer("v2:/featured-1", "CID_028_Athena_Commando_F"),
                    offer("v2:/daily-1", "EID_Floss")
                ]
            },
            "daily": null,
            "specialFeatured": null,
            "specialDaily": null,
            "votes": null,
            "voteWinners": null
        });

        Self {
            cosmetics,
            new_cosmetics,
            banners: vec![json!({
                "id": "BRSeason01",
                "devName": "BR Season 1",
                "name": "Season 1",
                "description": "Earned in Season 1.",
                "category": "Battle Pass",
                "fullUsageRights": true,
                "images": {
                    "smallIcon": "https://fortnite-api.com/images/banners/BRSeason01/smallicon.png",
                    "icon": "https://fortnite-api.com/images/banners/BRSeason01/icon.png"
                }
            })],
            banner_colors: vec![
                json!({ "id": "DefaultColor1", "color": "ff5733", "category": "Warm", "subCategory": 1 }),
                json!({ "id": "DefaultColor2", "color": "3380ff", "category": "Cool", "subCategory": 2 }),
            ],
            creator_codes: vec![json!({
                "code": "ninja",
                "account": { "id": "4735ce9132924caf8a5b17789b40f79c", "name": "Ninja" },
                "status": "ACTIVE",
                "verified": false
            })],
            map: json!({
                "images": {
                    "blank": "https://fortnite-api.com/images/map.png",
                    "pois": "https://fortnite-api.com/images/map_en.png"
                },
                "pois": [
                    { "id": "Tilted", "name": "Tilted Towers", "location": { "x": -12.5, "y": 3.0, "z": 1024.0 } },
                    { "id": "Pleasant", "name": "Pleasant Park", "location": { "x": 40210.0, "y": -2410.75, "z": 880.0 } }
                ]
            }),
            br_news: Some(json!({
                "hash": "b7e1",
                "date": "2024-01-01T00:00:00Z",
                "image": "https://fortnite-api.com/images/news/br.gif",
                "motds": [{
                    "id": "motd-1",
                    "title": "New Season",
                    "tabTitle": "Season",
                    "body": "Drop in now.",
                    "image": "https://cdn/motd.png",
                    "titleImage": "https://cdn/motd-title.png",
                    "sortingPriority": 90,
                    "hidden": false,
                    "videoString": null,
                    "videoId": null
                }],
                "messages": null
            })),
            stw_news: None,
            playlists: vec![playlist("Playlist_DefaultSolo", "Solo", 1), playlist("Playlist_DefaultDuo", "Duos", 2)],
            shop,
            combined_shop,
            aes_hex: aes("0x2CCDFD22AD74FBFEE693A81AC11ACE57E6D10D0B8AC5FA90E793A130BC540ED4"),
            aes_base64: aes("LM39Iq10+/7mk6gawRrOV+bRDQuKxfqQ55OhMLxUDtQ="),
            players: vec![player("4735ce9132924caf8a5b17789b40f79c", "Ninja")],
        }
    }

    pub fn cosmetic(&self, id: &str) -> Option<&Value> {
        find(&self.cosmetics, "id", id)
    }

    pub fn playlist(&self, id: &str) -> Option<&Value> {
        find(&self.playlists, "id", id)
    }

    /// Creator codes match case-insensitively, like the upstream.
    pub fn creator_code(&self, code: &str) -> Option<&Value> {
        self.creator_codes
            .iter()
            .find(|c| c["code"].as_str().is_some_and(|v| v.eq_ignore_ascii_case(code)))
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Value> {
        self.players.iter().find(|p| {
            p["account"]["name"]
                .as_str()
                .is_some_and(|v| v.eq_ignore_ascii_case(name))
        })
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Value> {
        self.players.iter().find(|p| p["account"]["id"] == id)
    }
}

fn find<'a>(values: &'a [Value], key: &str, id: &str) -> Option<&'a Value> {
    values.iter().find(|v| v[key] == id)
}

fn cosmetic(id: &str, name: &str, rarity: &str) -> Value {
    let (kind, backend) = if id.starts_with("EID_") {
        ("emote", "AthenaDance")
    } else {
        ("outfit", "AthenaCharacter")
    };
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description."),
        "type": { "value": kind, "displayValue": kind, "backendValue": backend },
        "rarity": { "value": rarity, "displayValue": rarity, "backendValue": format!("EFortRarity::{rarity}") },
        "set": null,
        "introduction": { "chapter": "1", "season": "1", "text": "Introduced in Chapter 1, Season 1.", "backendValue": 1 },
        "images": {
            "smallIcon": format!("https://fortnite-api.com/images/cosmetics/br/{id}/smallicon.png"),
            "icon": format!("https://fortnite-api.com/images/cosmetics/br/{id}/icon.png"),
            "featured": null,
            "other": null
        },
        "variants": null,
        "searchTags": [],
        "gameplayTags": ["Cosmetics.Source.ItemShop"],
        "metaTags": [],
        "path": format!("Athena/Items/Cosmetics/{id}"),
        "added": "2019-08-16T11:31:14Z",
        "shopHistory": ["2017-10-26T00:00:00Z"]
    })
}

fn offer(offer_id: &str, cosmetic_id: &str) -> Value {
    json!({
        "regularPrice": 1200,
        "finalPrice": 1200,
        "bundle": null,
        "banner": null,
        "giftable": true,
        "refundable": true,
        "sortPriority": 0,
        "categories": [],
        "sectionId": "Featured",
        "section": null,
        "devName": format!("[VIRTUAL]1 x {cosmetic_id}"),
        "offerId": offer_id,
        "displayAssetPath": null,
        "tileSize": "Normal",
        "newDisplayAssetPath": format!("/Game/Catalog/NewDisplayAssets/DAv2_{cosmetic_id}"),
        "newDisplayAsset": {
            "id": format!("DAv2_{cosmetic_id}"),
            "cosmeticId": cosmetic_id,
            "materialInstances": [{
                "id": "MI_Featured",
                "images": { "OfferImage": "https://cdn/offer.png" },
                "colors": { "Background_Color_A": "ff0000ff" },
                "scalings": { "ZoomImage_Percent": 0.85 },
                "flags": { "bHasGradient": true }
            }]
        },
        "items": [{
            "id": cosmetic_id,
            "name": cosmetic_id,
            "description": "Shop item.",
            "type": { "value": "outfit", "displayValue": "Outfit", "backendValue": "AthenaCharacter" },
            "rarity": { "value": "rare", "displayValue": "Rare", "backendValue": "EFortRarity::Rare" },
            "series": null,
            "set": null,
            "introduction": { "chapter": "1", "season": "1", "text": "Introduced in Chapter 1, Season 1.", "backendValue": "1" },
            "images": { "smallIcon": "https://cdn/small.png", "icon": "https://cdn/icon.png", "featured": null, "other": null },
            "variants": null,
            "searchTags": null,
            "gameplayTags": [],
            "metaTags": null,
            "showcaseVideo": null,
            "dynamicPakId": null,
            "displayAssetPath": null,
            "definitionPath": format!("/Game/Athena/Items/{cosmetic_id}"),
            "path": format!("Athena/Items/Cosmetics/{cosmetic_id}"),
            "added": "2019-08-16T11:31:14Z",
            "shopHistory": []
        }]
    })
}

fn playlist(id: &str, name: &str, team_size: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "subName": null,
        "description": null,
        "gameType": "EFortGameType::BR",
        "ratingType": "Solo",
        "minPlayers": 2,
        "maxPlayers": 100,
        "maxTeams": 100 / team_size,
        "maxTeamSize": team_size,
        "maxSquads": 100 / team_size,
        "maxSquadSize": team_size,
        "isDefault": true,
        "isTournament": false,
        "isLimitedTimeMode": false,
        "isLargeTeamGame": false,
        "accumulateToProfileStats": true,
        "images": { "showcase": null, "missionIcon": "https://cdn/mission.png" },
        "gameplayTags": [],
        "path": format!("FortniteGame/Content/Athena/Playlists/{id}"),
        "added": "2019-09-19T00:00:00Z"
    })
}

fn aes(main_key: &str) -> Value {
    json!({
        "build": "++Fortnite+Release-28.10-CL-31163747",
        "mainKey": main_key,
        "dynamicKeys": [{
            "pakFilename": "pakchunk1001-WindowsClient.pak",
            "pakGuid": "0C2B3A4F1D6E4A7BB21E9C0F5E6D7A8B",
            "key": main_key
        }],
        "updated": "2024-01-01T00:00:00Z"
    })
}

fn player(id: &str, name: &str) -> Value {
    let score = json!({
        "score": 120500,
        "scorePerMin": 12.5,
        "scorePerMatch": 240.0,
        "wins": 42,
        "kills": 1337,
        "killsPerMin": 0.14,
        "killsPerMatch": 2.66,
        "deaths": 460,
        "kd": 2.906,
        "matches": 502,
        "winRate": 8.366,
        "minutesPlayed": 9640,
        "playersOutlived": 30120,
        "lastModified": "2024-01-01T00:00:00Z"
    });
    json!({
        "account": { "id": id, "name": name },
        "battlePass": { "level": 87, "progress": 35 },
        "image": null,
        "stats": {
            "all": {
                "overall": score.clone(),
                "solo": score,
                "duo": null,
                "trio": null,
                "squad": null,
                "ltm": null
            },
            "keyboardMouse": null,
            "gamepad": null,
            "touch": null
        }
    })
}
