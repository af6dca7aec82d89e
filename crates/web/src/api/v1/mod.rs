use axum::{
    routing::{get, on},
    Router,
};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

mod fuel;
mod geocode;
mod spots;
mod trip;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .nest_service("/spots", spots::routes(state.clone()))
        .nest_service("/fuel", fuel::routes(state.clone()))
        .nest_service("/trip", trip::routes(state.clone()))
        .route("/geocode", get(geocode::geocode).with_state(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}
