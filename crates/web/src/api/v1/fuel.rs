use axum::{
    extract::{OriginalUri, Query, Request, State},
    http::StatusCode,
    routing::{get, on},
    Json, Router,
};
use chrono::NaiveDate;
use model::fuel::FuelPriceDay;
use serde::Deserialize;
use spotfinder::fuel::{predict, select_range, summarize, FuelPrediction, FuelStats};

use crate::{
    common::{
        route_not_found, schema_no_example, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

const DEFAULT_PREDICTION_DAYS: u32 = 7;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/prices/schema", get(schema_no_example::<FuelPriceDay>))
        .route("/stats", get(get_stats))
        .route("/prediction", get(get_prediction))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RangeParams {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

async fn get_prices(
    State(WebState { fuel_prices, .. }): State<WebState>,
    Query(params): Query<RangeParams>,
) -> Json<VecResponse<FuelPriceDay>> {
    VecResponse::non_paginated(select_range(&fuel_prices, params.start, params.end)).json()
}

async fn get_stats(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { fuel_prices, .. }): State<WebState>,
    Query(params): Query<RangeParams>,
    req: Request,
) -> RouteResult<FuelStats> {
    let series = select_range(&fuel_prices, params.start, params.end);

    summarize(&series).map(Json).ok_or_else(|| {
        RouteErrorResponse::new(StatusCode::NOT_FOUND)
            .with_method(req.method())
            .with_uri(original_uri.path())
            .with_message("No fuel prices recorded in the requested range.")
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PredictionParams {
    days_ahead: Option<u32>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

async fn get_prediction(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { fuel_prices, .. }): State<WebState>,
    Query(params): Query<PredictionParams>,
    req: Request,
) -> RouteResult<VecResponse<FuelPrediction>> {
    let series = select_range(&fuel_prices, params.start, params.end);
    let days_ahead = params.days_ahead.unwrap_or(DEFAULT_PREDICTION_DAYS);

    predict(&series, days_ahead)
        .map(|predictions| VecResponse::non_paginated(predictions).json())
        .ok_or_else(|| {
            RouteErrorResponse::new(StatusCode::BAD_REQUEST)
                .with_method(req.method())
                .with_uri(original_uri.path())
                .with_message("Predictions need at least 30 days of price history.")
        })
}
