use axum::{
    extract::{OriginalUri, Query, Request, State},
    http::StatusCode,
    Json,
};
use model::parking::Location;
use serde::Deserialize;

use crate::{
    common::{RouteErrorResponse, RouteResult},
    WebState,
};

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeParams {
    address: String,
}

pub(crate) async fn geocode(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { geocoder, .. }): State<WebState>,
    Query(params): Query<GeocodeParams>,
    req: Request,
) -> RouteResult<Location> {
    let location = geocoder.geocode(&params.address).await?;

    location.map(Json).ok_or_else(|| {
        RouteErrorResponse::new(StatusCode::NOT_FOUND)
            .with_method(req.method())
            .with_uri(original_uri.path())
            .with_message("The address could not be resolved to coordinates.")
    })
}
