use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use tracing::{info, warn};
use trove_api::{parse_list_params, parse_new_item, ApiError};
use trove_query::list_page;

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err }))).into_response()
}

fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> Response {
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK)
        .await;
    (StatusCode::OK, "ok").into_response()
}

pub(crate) async fn list_items_handler(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let request_id = make_request_id(&state);
    let params = parse_list_params(&raw);
    info!(
        request_id = %request_id,
        route = "/api/items",
        q = params.q.as_deref().unwrap_or(""),
        page = params.page,
        limit = params.limit,
        "list items"
    );
    let resp = match state.store.load_all() {
        Ok(items) => {
            let page = list_page(items, &params);
            state
                .metrics
                .observe_request("/api/items", StatusCode::OK)
                .await;
            Json(page).into_response()
        }
        Err(e) => {
            warn!(request_id = %request_id, "store read failed: {e}");
            state
                .metrics
                .observe_request("/api/items", StatusCode::INTERNAL_SERVER_ERROR)
                .await;
            api_error_response(ApiError::from(e))
        }
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn item_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let request_id = make_request_id(&state);
    // A non-numeric id can match nothing, so it is a miss rather than a
    // parse error.
    let found = match id.parse::<u64>() {
        Ok(id) => state.store.find_by_id(id),
        Err(_) => Ok(None),
    };
    let (status, resp) = match found {
        Ok(Some(item)) => (StatusCode::OK, Json(item).into_response()),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            api_error_response(ApiError::item_not_found()),
        ),
        Err(e) => {
            warn!(request_id = %request_id, "store read failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                api_error_response(ApiError::from(e)),
            )
        }
    };
    state
        .metrics
        .observe_request("/api/items/{id}", status)
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn create_item_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request_id = make_request_id(&state);
    let body = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            state
                .metrics
                .observe_request("/api/items", StatusCode::BAD_REQUEST)
                .await;
            let resp = api_error_response(ApiError::validation(rejection.body_text()));
            return with_request_id(resp, &request_id);
        }
    };
    let (status, resp) = match parse_new_item(&body) {
        Ok(draft) => match state.store.append(draft) {
            Ok(item) => {
                info!(request_id = %request_id, id = item.id, "item created");
                (
                    StatusCode::CREATED,
                    (StatusCode::CREATED, Json(item)).into_response(),
                )
            }
            Err(e) => {
                warn!(request_id = %request_id, "store write failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    api_error_response(ApiError::from(e)),
                )
            }
        },
        Err(err) => (StatusCode::BAD_REQUEST, api_error_response(err)),
    };
    state.metrics.observe_request("/api/items", status).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn stats_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let (status, resp) = match state.stats.get(state.store.as_ref()).await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot).into_response()),
        Err(e) => {
            warn!(request_id = %request_id, "stats computation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                api_error_response(ApiError::from(e)),
            )
        }
    };
    state.metrics.observe_request("/api/stats", status).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn not_found_handler(State(state): State<AppState>) -> Response {
    state
        .metrics
        .observe_request("fallback", StatusCode::NOT_FOUND)
        .await;
    api_error_response(ApiError::route_not_found())
}
