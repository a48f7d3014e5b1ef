use serde::{Deserialize, Serialize};

/// News for one game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub hash: String,
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub motds: Option<Vec<Motd>>,
}

/// A "message of the day" tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motd {
    pub id: String,
    pub title: String,
    pub tab_title: String,
    pub body: String,
    pub image: String,
    pub title_image: String,
    pub sorting_priority: i32,
    pub hidden: bool,
    #[serde(default)]
    pub video_string: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub title: String,
    pub body: String,
    pub image: String,
    #[serde(default)]
    pub adspace: Option<String>,
}

/// Combined news. A mode without current news is `None`, which is not a
/// failure. Creative news has been absent upstream since late 2023.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsBundle {
    #[serde(default)]
    pub br: Option<News>,
    #[serde(default)]
    pub stw: Option<News>,
    #[serde(default)]
    pub creative: Option<News>,
}
