#![allow(dead_code)]

use async_trait::async_trait;
use kuaishou_hot::api::kuaishou::PageFetcher;
use kuaishou_hot::models::cache::CacheStore;
use kuaishou_hot::HotListError;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const HOME_RANK_KEY: &str = r#"$ROOT_QUERY.visionHotRank({"page":"home"})"#;

/// Build a page embedding `count` home hot-rank items.
pub fn sample_page(count: usize) -> String {
    let mut client = Map::new();
    let mut items = Vec::new();
    for i in 0..count {
        let id = format!("VisionHotRankItem:{}", i);
        items.push(json!({ "id": id }));
        client.insert(
            id,
            json!({
                "name": format!("热门视频{}", i),
                "poster": format!("https://p1.a.yximgs.com/upic/{}.jpg?clientCacheKey=3xvideo{}", i, i),
                "hotValue": format!("{}万", 100 - i),
            }),
        );
    }
    client.insert(HOME_RANK_KEY.to_string(), json!({ "items": items }));
    format!(
        "<!DOCTYPE html><html><body><script>window.__APOLLO_STATE__={};(function(){{var s;(s=document.currentScript)}}());</script></body></html>",
        json!({ "defaultClient": Value::Object(client) })
    )
}

/// Fetcher returning a canned page or a network failure.
pub struct StubFetcher {
    page: Option<String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn ok(page: String) -> Self {
        Self {
            page: Some(page),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            page: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self) -> Result<String, HotListError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page
            .clone()
            .ok_or_else(|| HotListError::Network("connection refused".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheOp {
    Get,
    Set,
    Del,
}

/// Cache that records every operation and uses the default `replace`.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, Value>>,
    ops: Mutex<Vec<CacheOp>>,
}

impl RecordingCache {
    pub fn ops(&self) -> Vec<CacheOp> {
        self.ops.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<CacheOp> {
        self.ops()
            .into_iter()
            .filter(|op| *op != CacheOp::Get)
            .collect()
    }

    pub fn stored(&self, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn seed(&self, key: &str, value: Value) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }
}

#[async_trait]
impl CacheStore for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, HotListError> {
        self.ops.lock().unwrap().push(CacheOp::Get);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), HotListError> {
        self.ops.lock().unwrap().push(CacheOp::Set);
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), HotListError> {
        self.ops.lock().unwrap().push(CacheOp::Del);
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Cache whose every call fails.
pub struct BrokenCache;

#[async_trait]
impl CacheStore for BrokenCache {
    async fn get(&self, _key: &str) -> Result<Option<Value>, HotListError> {
        Err(HotListError::Cache("backend down".to_string()))
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), HotListError> {
        Err(HotListError::Cache("backend down".to_string()))
    }

    async fn del(&self, _key: &str) -> Result<(), HotListError> {
        Err(HotListError::Cache("backend down".to_string()))
    }
}
