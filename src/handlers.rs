use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::{
    error::{ApiResult, RideError},
    models::Ride,
    state::AppState,
    validation::{resolve_pagination, validate_ride, PaginatedResponse, PaginationQuery},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rides", get(list_rides).post(create_ride))
        .route("/rides/:id", get(get_ride))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn json_rejection(err: JsonRejection) -> RideError {
    RideError::invalid("body", format!("Invalid JSON payload: {}", err.body_text()))
}

fn query_rejection(err: QueryRejection) -> RideError {
    RideError::invalid("query", format!("Invalid query parameters: {}", err.body_text()))
}

pub async fn health() -> &'static str {
    "Healthy"
}

/// POST /rides
pub async fn create_ride(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Vec<Ride>>> {
    let Json(payload) = payload.map_err(|err| state.reject(json_rejection(err)))?;

    let ride = validate_ride(&payload).map_err(|errors| {
        tracing::debug!(?errors, "Rejected ride payload");
        state.reject(RideError::Validation(errors))
    })?;

    let stored = state.rides.create(&ride).await.map_err(|err| state.reject(err))?;
    Ok(Json(vec![stored]))
}

/// GET /rides with optional `limit` and `page`
pub async fn list_rides(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|err| state.reject(query_rejection(err)))?;
    let pagination = resolve_pagination(&query).map_err(|err| state.reject(err))?;

    let rides = state
        .rides
        .list(pagination)
        .await
        .map_err(|err| state.reject(err))?;

    if rides.is_empty() {
        return Err(state.reject(RideError::NotFound));
    }

    let Some(pagination) = pagination else {
        return Ok(Json(rides).into_response());
    };

    let total = state.rides.count().await.map_err(|err| state.reject(err))?;
    Ok(Json(PaginatedResponse {
        page: pagination.page,
        total_page: pagination.total_pages(total),
        data: rides,
    })
    .into_response())
}

/// GET /rides/:id
pub async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Ride>>> {
    let ride_id: i64 = id
        .parse()
        .map_err(|_| state.reject(RideError::invalid("id", "ride id must be an integer")))?;

    let rides = state
        .rides
        .get_by_id(ride_id)
        .await
        .map_err(|err| state.reject(err))?;

    if rides.is_empty() {
        return Err(state.reject(RideError::NotFound));
    }

    Ok(Json(rides))
}
