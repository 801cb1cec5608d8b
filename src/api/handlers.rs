//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{RateResolver, classify_schedule};
use crate::error::EngineError;
use crate::parsing::parse;

use super::request::{BatchPriceRequest, PriceBreakdownRequest, ScheduleRequest, merged_calendar};
use super::response::{ApiError, ApiErrorResponse, BatchPriceResponse, ScheduleResponse};
use super::state::AppState;

/// Largest number of date/period pairs a batch request may price.
pub const MAX_BATCH_ENTRIES: usize = 10_000;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/prices/breakdown", post(breakdown_handler))
        .route("/prices/batch", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /schedule.
///
/// Parses the schedule text and classifies it.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let holidays = merged_calendar(config.holiday_calendar(), &request.holidays);

    let start_time = Instant::now();
    let result = parse(&request.text, request.reference_date).and_then(|schedule| {
        let summary =
            classify_schedule(&schedule, &holidays, config.shift_rules(), &request.options())?;
        Ok((schedule, summary))
    });

    match result {
        Ok((schedule, summary)) => {
            info!(
                correlation_id = %correlation_id,
                days = summary.day_count,
                shifts = summary.shift_count,
                duration_us = start_time.elapsed().as_micros(),
                "Schedule classified successfully"
            );
            json_response(
                StatusCode::OK,
                ScheduleResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    schedule,
                    summary,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /prices/breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceBreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let holidays = merged_calendar(config.holiday_calendar(), &request.holidays);
    let breakdown = RateResolver::new(config.pricing()).price_breakdown(&request.context(), &holidays);

    info!(
        correlation_id = %correlation_id,
        role = %breakdown.role_key,
        tier = %breakdown.tier,
        price = breakdown.final_price,
        "Price resolved"
    );
    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /prices/batch.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchPriceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let entries = request.dates.len().saturating_mul(request.periods.len());
    if entries > MAX_BATCH_ENTRIES {
        warn!(correlation_id = %correlation_id, entries, "Batch request too large");
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!(
                "batch of {} entries exceeds the limit of {}",
                entries, MAX_BATCH_ENTRIES
            )),
        );
    }

    let config = state.config();
    let holidays = merged_calendar(config.holiday_calendar(), &request.holidays);

    let start_time = Instant::now();
    let prices = RateResolver::new(config.pricing()).batch_prices(
        &request.role_key,
        &request.dates,
        &request.periods,
        &holidays,
        request.has_extra_global,
    );
    let total: i64 = prices.iter().map(|p| p.price).sum();

    info!(
        correlation_id = %correlation_id,
        role = %request.role_key,
        entries = prices.len(),
        total,
        duration_us = start_time.elapsed().as_micros(),
        "Batch priced successfully"
    );
    json_response(
        StatusCode::OK,
        BatchPriceResponse {
            role_key: request.role_key,
            prices,
            total,
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{PriceBreakdown, ResolutionTier};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_schedule_returns_200() {
        let body = serde_json::json!({
            "text": "10/09 das 23 às 02",
            "reference_date": "2026-09-01"
        });
        let response = post("/schedule", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.schedule.dates.len(), 1);
        assert_eq!(result.summary.shift_count, 2);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post("/schedule", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_text_returns_400() {
        let response = post("/schedule", "{}".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("text"));
    }

    #[tokio::test]
    async fn test_api_004_unparseable_text_returns_422() {
        let body = serde_json::json!({ "text": "amanhã cedo" });
        let response = post("/schedule", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "PARSE_FAILURE");
        assert_eq!(error.details.as_deref(), Some("unrecognized_format"));
    }

    #[tokio::test]
    async fn test_api_005_breakdown_returns_tier() {
        let body = serde_json::json!({
            "role_key": "garcom",
            "period": "madrugada",
            "date": "2025-07-12"
        });
        let response = post("/prices/breakdown", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let breakdown: PriceBreakdown = serde_json::from_slice(&body).unwrap();
        assert_eq!(breakdown.tier, ResolutionTier::WeekdayFallback);
        assert_eq!(breakdown.final_price, 150);
    }

    #[tokio::test]
    async fn test_api_006_oversized_batch_rejected() {
        let dates: Vec<String> = (0..MAX_BATCH_ENTRIES / 2 + 1)
            .map(|_| "2025-07-10".to_string())
            .collect();
        let body = serde_json::json!({
            "role_key": "garcom",
            "dates": dates,
            "periods": ["manha", "tarde"]
        });
        let response = post("/prices/batch", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
