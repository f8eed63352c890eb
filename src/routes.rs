use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::hot_list::ResponseEnvelope;
use crate::services::hot_list_service::HotListService;

pub fn routes(service: Arc<HotListService>) -> Router {
    let name = service.route().name;
    Router::new()
        .route(&format!("/{}", name), get(get_hot_list))
        .route(&format!("/{}/new", name), get(refresh_hot_list))
        .with_state(service)
}

/// GET /kuaishou
async fn get_hot_list(
    State(service): State<Arc<HotListService>>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    respond(service.get_or_cache().await)
}

/// GET /kuaishou/new
async fn refresh_hot_list(
    State(service): State<Arc<HotListService>>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    respond(service.refresh().await)
}

fn respond(envelope: ResponseEnvelope) -> (StatusCode, Json<ResponseEnvelope>) {
    let status = StatusCode::from_u16(envelope.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope))
}
