use axum::{
    extract::{OriginalUri, Query, Request, State},
    http::StatusCode,
    routing::{get, on},
    Json, Router,
};
use itertools::Itertools;
use model::{
    parking::{Location, ParkingSpot},
    WithDistance,
};
use serde::Deserialize;
use spotfinder::{
    recommend::{recommend, Recommendation, UserProfile},
    stats::{summarize, SpotStats},
    SortKey, SpotQuery, DEFAULT_PAGE_SIZE,
};

use crate::{
    common::{
        route_not_found, schema, RouteErrorResponse, RouteResult, VecResponse, METHOD_FILTER_ALL,
    },
    WebState,
};

/// Search radius when the caller does not pass one, in kilometers.
const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Radius of the non-paginated `/nearby` shortcut, in kilometers.
const DEFAULT_NEARBY_RADIUS_KM: f64 = 1.0;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(get_spots))
        .route("/nearby", get(get_nearby))
        .route("/stats", get(get_stats))
        .route("/recommendation", get(get_recommendation))
        .route("/cities", get(get_cities))
        .route("/schema", get(schema::<ParkingSpot>))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpotsParams {
    latitude: f64,

    longitude: f64,

    max_distance_km: Option<f64>,

    min_fee: Option<f64>,

    max_fee: Option<f64>,

    #[serde(default)]
    ev_only: bool,

    #[serde(default)]
    weekend_only: bool,

    #[serde(default)]
    cashless_only: bool,

    sort_by: Option<SortKey>,

    /// Case-insensitive match against the record's city column.
    city: Option<String>,

    page: Option<usize>,

    page_size: Option<usize>,
}

impl SpotsParams {
    fn to_query(&self) -> SpotQuery {
        SpotQuery {
            origin: Location::new(self.latitude, self.longitude),
            max_distance_km: self.max_distance_km.unwrap_or(DEFAULT_RADIUS_KM),
            fee_range: (
                self.min_fee.unwrap_or(0.0),
                self.max_fee.unwrap_or(f64::MAX),
            ),
            ev_only: self.ev_only,
            weekend_only: self.weekend_only,
            cashless_only: self.cashless_only,
            sort_key: self.sort_by.unwrap_or_default(),
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Narrows the table to one city before the distance search runs. The
/// query itself is city-agnostic.
fn spots_in_city(spots: &[ParkingSpot], city: Option<&str>) -> Vec<ParkingSpot> {
    match city {
        Some(city) => spots
            .iter()
            .filter(|spot| {
                spot.city
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(city))
            })
            .cloned()
            .collect(),
        None => spots.to_vec(),
    }
}

async fn get_spots(
    State(WebState { spots, .. }): State<WebState>,
    Query(params): Query<SpotsParams>,
) -> Json<VecResponse<WithDistance<ParkingSpot>>> {
    let table = spots_in_city(&spots, params.city.as_deref());
    VecResponse::from(spotfinder::find_spots(&table, &params.to_query())).json()
}

#[derive(Debug, Deserialize)]
pub(crate) struct NearbyParams {
    latitude: f64,
    longitude: f64,
    radius: Option<f64>,
}

async fn get_nearby(
    State(WebState { spots, .. }): State<WebState>,
    Query(params): Query<NearbyParams>,
) -> Json<VecResponse<WithDistance<ParkingSpot>>> {
    let query = SpotQuery::new(
        Location::new(params.latitude, params.longitude),
        params.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_KM),
    );
    VecResponse::non_paginated(spotfinder::matching_spots(&spots, &query)).json()
}

async fn get_stats(
    State(WebState { spots, .. }): State<WebState>,
    Query(params): Query<SpotsParams>,
) -> Json<SpotStats> {
    let table = spots_in_city(&spots, params.city.as_deref());
    Json(summarize(&spotfinder::matching_spots(
        &table,
        &params.to_query(),
    )))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationParams {
    profile: UserProfile,
}

async fn get_recommendation(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { spots, .. }): State<WebState>,
    Query(RecommendationParams { profile }): Query<RecommendationParams>,
    Query(params): Query<SpotsParams>,
    req: Request,
) -> RouteResult<Recommendation> {
    let table = spots_in_city(&spots, params.city.as_deref());
    let matches = spotfinder::matching_spots(&table, &params.to_query());

    recommend(&matches, profile).map(Json).ok_or_else(|| {
        RouteErrorResponse::new(StatusCode::NOT_FOUND)
            .with_method(req.method())
            .with_uri(original_uri.path())
            .with_message("No parking spot matches the requested filters.")
    })
}

async fn get_cities(
    State(WebState { spots, .. }): State<WebState>,
) -> Json<VecResponse<String>> {
    let cities = spots
        .iter()
        .filter_map(|spot| spot.city.clone())
        .unique()
        .sorted()
        .collect::<Vec<_>>();
    VecResponse::non_paginated(cities).json()
}
