use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::kuaishou::PageFetcher;
use crate::errors::HotListError;
use crate::models::cache::CacheStore;
use crate::models::hot_list::{
    CachedHotList, DataSource, ResponseEnvelope, RouteInfo, KUAISHOU_ROUTE,
};
use crate::services::extractor;

pub const CACHE_KEY: &str = "kuaishouData";

/// Serves the Kuaishou hot list through a read-through cache.
pub struct HotListService {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn CacheStore>,
    route: RouteInfo,
}

impl HotListService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            fetcher,
            cache,
            route: KUAISHOU_ROUTE,
        }
    }

    pub fn route(&self) -> RouteInfo {
        self.route
    }

    /// Answer from the cache when possible, otherwise fetch and store.
    pub async fn get_or_cache(&self) -> ResponseEnvelope {
        info!("Fetching {} hot list", self.route.name);
        match self.load_or_fetch().await {
            Ok((from, record)) => ResponseEnvelope::success(self.route, Some(from), record),
            Err(e) => {
                error!("Failed to serve {} hot list: {}", self.route.name, e);
                ResponseEnvelope::failure(self.route)
            }
        }
    }

    /// Always fetch fresh data; fall back to the cached record if that fails.
    pub async fn refresh(&self) -> ResponseEnvelope {
        info!("Refreshing {} hot list", self.route.name);
        match self.fetch_fresh().await {
            Ok(record) => {
                if let Err(e) = self.store(&record).await {
                    warn!("Failed to refresh cached {} hot list: {}", self.route.name, e);
                }
                ResponseEnvelope::success(self.route, None, record)
            }
            Err(e) => {
                error!("Failed to refresh {} hot list: {}", self.route.name, e);
                match self.cached().await {
                    Ok(Some(record)) => {
                        info!("Serving stale {} hot list from cache", self.route.name);
                        ResponseEnvelope::success(self.route, None, record)
                    }
                    Ok(None) => ResponseEnvelope::failure(self.route),
                    Err(e) => {
                        error!("Cache fallback failed: {}", e);
                        ResponseEnvelope::failure(self.route)
                    }
                }
            }
        }
    }

    async fn load_or_fetch(&self) -> Result<(DataSource, CachedHotList), HotListError> {
        if let Some(record) = self.cached().await? {
            return Ok((DataSource::Cache, record));
        }

        info!("Fetching {} hot list from upstream", self.route.name);
        let record = self.fetch_fresh().await?;
        self.cache.set(CACHE_KEY, to_value(&record)?).await?;
        Ok((DataSource::Server, record))
    }

    async fn fetch_fresh(&self) -> Result<CachedHotList, HotListError> {
        let page = self.fetcher.fetch().await?;
        let data = extractor::extract(&page)?;
        Ok(CachedHotList {
            data,
            update_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    async fn store(&self, record: &CachedHotList) -> Result<(), HotListError> {
        self.cache.replace(CACHE_KEY, to_value(record)?).await
    }

    async fn cached(&self) -> Result<Option<CachedHotList>, HotListError> {
        let Some(value) = self.cache.get(CACHE_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Ignoring unreadable cached {} hot list: {}", self.route.name, e);
                Ok(None)
            }
        }
    }
}

fn to_value(record: &CachedHotList) -> Result<serde_json::Value, HotListError> {
    serde_json::to_value(record).map_err(|e| HotListError::Cache(e.to_string()))
}
