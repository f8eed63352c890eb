use serde::{Deserialize, Deserializer, Serialize};

pub const SUCCESS_MESSAGE: &str = "获取成功";
pub const FAILURE_MESSAGE: &str = "获取失败";

/// Identity fields echoed in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const KUAISHOU_ROUTE: RouteInfo = RouteInfo {
    name: "kuaishou",
    title: "快手",
    subtitle: "热榜",
};

/// Popularity as the upstream delivers it: a number, a preformatted string
/// such as "1234.5万", or an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotValue {
    Number(serde_json::Number),
    Text(String),
    Null,
}

// A present `null` stays `Some(HotValue::Null)`; only an absent key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<HotValue>, D::Error>
where
    D: Deserializer<'de>,
{
    HotValue::deserialize(deserializer).map(Some)
}

/// One normalized hot list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotListEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Poster image URL with `\uXXXX` escapes decoded
    pub pic: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub hot: Option<HotValue>,
    pub url: String,
    pub mobile_url: String,
}

/// The cached dataset together with the time it was fetched, stored as one
/// record so a response's timestamp always belongs to its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedHotList {
    pub data: Vec<HotListEntry>,
    pub update_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Cache,
    Server,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub code: u16,
    pub message: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DataSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<HotListEntry>>,
}

impl ResponseEnvelope {
    pub fn success(route: RouteInfo, from: Option<DataSource>, record: CachedHotList) -> Self {
        Self {
            code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            name: route.name.to_string(),
            title: route.title.to_string(),
            subtitle: route.subtitle.to_string(),
            from,
            total: Some(record.data.len()),
            update_time: Some(record.update_time),
            data: Some(record.data),
        }
    }

    pub fn failure(route: RouteInfo) -> Self {
        Self {
            code: 500,
            message: FAILURE_MESSAGE.to_string(),
            name: route.name.to_string(),
            title: route.title.to_string(),
            subtitle: route.subtitle.to_string(),
            from: None,
            total: None,
            update_time: None,
            data: None,
        }
    }
}
