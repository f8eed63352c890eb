use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::HotListError;
use crate::models::hot_list::{HotListEntry, HotValue};
use crate::utils::unicode::decode_unicode_escapes;

const HOME_RANK_KEY: &str = r#"$ROOT_QUERY.visionHotRank({"page":"home"})"#;
const SHORT_VIDEO_URL: &str = "https://www.kuaishou.com/short-video/";

lazy_static! {
    static ref STATE_PATTERN: Regex =
        Regex::new(r"(?s)window.__APOLLO_STATE__=(.*);\(function\(\)").unwrap();
    static ref ID_PATTERN: Regex = Regex::new(r"clientCacheKey=([A-Za-z0-9]+)").unwrap();
}

/// Pull the home hot-rank list out of a Kuaishou page.
///
/// An empty page yields an empty list. Any item that cannot be resolved
/// fails the whole batch.
pub fn extract(page: &str) -> Result<Vec<HotListEntry>, HotListError> {
    if page.is_empty() {
        debug!("Upstream returned an empty page");
        return Ok(Vec::new());
    }

    extract_entries(page).map_err(|e| {
        error!("Failed to extract hot list: {}", e);
        e
    })
}

fn extract_entries(page: &str) -> Result<Vec<HotListEntry>, HotListError> {
    let blob = STATE_PATTERN
        .captures(page)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| HotListError::Parse("no __APOLLO_STATE__ assignment".to_string()))?
        .as_str();

    let state: Value =
        serde_json::from_str(blob).map_err(|e| HotListError::Parse(e.to_string()))?;
    let client = state
        .get("defaultClient")
        .ok_or_else(|| HotListError::Parse("missing defaultClient".to_string()))?;

    let items = client
        .get(HOME_RANK_KEY)
        .and_then(|rank| rank.get("items"))
        .and_then(|items| items.as_array())
        .ok_or_else(|| HotListError::Parse("missing home hot rank items".to_string()))?;

    debug!("Found {} hot rank items", items.len());

    items.iter().map(|item| resolve_item(client, item)).collect()
}

fn resolve_item(client: &Value, item: &Value) -> Result<HotListEntry, HotListError> {
    let id = item
        .get("id")
        .and_then(|id| id.as_str())
        .ok_or_else(|| HotListError::Item {
            id: item.to_string(),
            field: "id",
        })?;
    let missing = |field| HotListError::Item {
        id: id.to_string(),
        field,
    };

    let video = client.get(id).ok_or_else(|| missing("entry"))?;
    let title = video.get("name").and_then(|n| n.as_str()).map(str::to_string);
    let poster = video
        .get("poster")
        .and_then(|p| p.as_str())
        .ok_or_else(|| missing("poster"))?;
    let key = ID_PATTERN
        .captures(poster)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| missing("clientCacheKey"))?
        .as_str();

    let hot = match video.get("hotValue") {
        Some(Value::Number(n)) => Some(HotValue::Number(n.clone())),
        Some(Value::String(s)) => Some(HotValue::Text(s.clone())),
        Some(Value::Null) => Some(HotValue::Null),
        _ => None,
    };

    let url = format!("{}{}", SHORT_VIDEO_URL, key);
    Ok(HotListEntry {
        title,
        pic: decode_unicode_escapes(poster),
        hot,
        url: url.clone(),
        mobile_url: url,
    })
}
