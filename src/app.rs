use axum::Router;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::services::hot_list_service::HotListService;

/// Mount the hot list routes with request tracing.
pub fn build_app(service: Arc<HotListService>) -> Router {
    Router::new().merge(routes::routes(service)).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
