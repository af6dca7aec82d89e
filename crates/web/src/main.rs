use std::sync::Arc;

use web::{config::WebConfig, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = WebConfig::from_env();

    // parking records
    let spots = match &config.parking_csv {
        Some(path) => datasets::parking::read_parking_csv(path)
            .expect("could not load the parking records."),
        None => datasets::seed::seed_spots(),
    };
    log::info!("loaded {} parking records", spots.len());

    // fuel price series
    let fuel_prices = match &config.fuel_csv {
        Some(path) => {
            datasets::fuel::read_fuel_csv(path).expect("could not load the fuel price export.")
        }
        None => {
            log::warn!("no fuel price export configured, fuel endpoints will serve no data");
            Vec::new()
        }
    };
    log::info!("loaded {} fuel price days", fuel_prices.len());

    // geocoder
    let geocoder = geocoding::Client::new(&config.geocoder_base_url, &config.geocoder_user_agent)
        .expect("could not build the geocoding client.");

    let state = WebState {
        spots: Arc::new(spots),
        fuel_prices: Arc::new(fuel_prices),
        geocoder: Arc::new(geocoder),
    };

    start_web_server(&config.listen_address, state)
        .await
        .expect("web server terminated.");
}
