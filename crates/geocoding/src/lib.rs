//! Free-text address to coordinates, via a Nominatim-compatible search API.
//! The geocoder is an opaque collaborator: one request per lookup, the best
//! hit or nothing. Retry policy is left to the operator of the upstream
//! service.

use std::{error::Error, fmt};

use model::parking::Location;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim requires an identifying user agent.
pub const DEFAULT_USER_AGENT: &str = "parking-finder-compare";

#[derive(Debug)]
pub enum GeocodeError {
    Http(reqwest::Error),
    /// The service answered, but not with coordinates we can read.
    MalformedResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Http(why) => write!(f, "geocoding request failed: {why}"),
            GeocodeError::MalformedResponse(why) => {
                write!(f, "unexpected geocoding response: {why}")
            }
        }
    }
}

impl Error for GeocodeError {}

impl From<reqwest::Error> for GeocodeError {
    fn from(why: reqwest::Error) -> Self {
        GeocodeError::Http(why)
    }
}

pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Nominatim encodes coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> GeocodeResult<Self> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Looks up a free-text address or postal code. `Ok(None)` when the
    /// service finds no match; errors only for transport or format trouble.
    pub async fn geocode(&self, address: &str) -> GeocodeResult<Option<Location>> {
        let body = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_search_response(&body)
    }
}

fn parse_search_response(body: &str) -> GeocodeResult<Option<Location>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|why| GeocodeError::MalformedResponse(why.to_string()))?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let latitude = hit.lat.parse::<f64>();
    let longitude = hit.lon.parse::<f64>();
    match (latitude, longitude) {
        (Ok(latitude), Ok(longitude)) => Ok(Some(Location::new(latitude, longitude))),
        _ => Err(GeocodeError::MalformedResponse(format!(
            "non-numeric coordinates '{}', '{}'",
            hit.lat, hit.lon
        ))),
    }
}
