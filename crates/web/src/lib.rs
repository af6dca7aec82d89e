pub use crate::common::RouteResult;

use std::sync::Arc;

use axum::{extract::FromRef, Router};
use model::{fuel::FuelPriceDay, parking::ParkingSpot};
use tokio::net::TcpListener;

pub mod api;
pub mod common;
pub mod config;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub spots: Arc<Vec<ParkingSpot>>,
    pub fuel_prices: Arc<Vec<FuelPriceDay>>,
    pub geocoder: Arc<geocoding::Client>,
}

pub async fn start_web_server(listen_address: &str, state: WebState) -> std::io::Result<()> {
    let routes = Router::new().nest_service("/api", api::routes(state));

    let listener = TcpListener::bind(listen_address).await?;
    log::info!("listening on http://{listen_address}");
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
