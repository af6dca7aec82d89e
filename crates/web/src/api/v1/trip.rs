use axum::{
    extract::{OriginalUri, Query, Request, State},
    http::StatusCode,
    routing::{get, on},
    Json, Router,
};
use model::fuel::FuelKind;
use serde::Deserialize;
use spotfinder::trip::{estimate, TransportMode, TripCost, TripPlan};

use crate::{
    common::{route_not_found, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    WebState,
};

const DEFAULT_CONSUMPTION_L_PER_100KM: f64 = 7.5;
const DEFAULT_TIME_VALUE_PER_HOUR: f64 = 15.0;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/cost", get(get_cost))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TripParams {
    distance_km: f64,

    parking_duration_hours: f64,

    fee_per_hour: f64,

    /// Overrides the price looked up from the loaded series.
    fuel_price_per_litre: Option<f64>,

    /// Which series column to look the price up from. Defaults to Super E10.
    fuel_kind: Option<FuelKind>,

    consumption_l_per_100km: Option<f64>,

    time_value_per_hour: Option<f64>,

    mode: Option<TransportMode>,
}

async fn get_cost(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { fuel_prices, .. }): State<WebState>,
    Query(params): Query<TripParams>,
    req: Request,
) -> RouteResult<TripCost> {
    let fuel_price_per_litre = match params.fuel_price_per_litre {
        Some(price) => price,
        None => {
            let kind = params.fuel_kind.unwrap_or(FuelKind::SuperE10);
            fuel_prices
                .last()
                .map(|day| day.price(kind))
                .ok_or_else(|| {
                    RouteErrorResponse::new(StatusCode::BAD_REQUEST)
                        .with_method(req.method())
                        .with_uri(original_uri.path())
                        .with_message(
                            "No fuel prices loaded; pass fuelPricePerLitre explicitly.",
                        )
                })?
        }
    };

    let plan = TripPlan {
        distance_km: params.distance_km,
        parking_duration_hours: params.parking_duration_hours,
        fee_per_hour: params.fee_per_hour,
        fuel_price_per_litre,
        consumption_l_per_100km: params
            .consumption_l_per_100km
            .unwrap_or(DEFAULT_CONSUMPTION_L_PER_100KM),
        time_value_per_hour: params
            .time_value_per_hour
            .unwrap_or(DEFAULT_TIME_VALUE_PER_HOUR),
        mode: params.mode.unwrap_or(TransportMode::CarGasoline),
    };

    Ok(Json(estimate(&plan)))
}
