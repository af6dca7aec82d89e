use axum::{
    extract::{OriginalUri, Query, Request},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use geocoding::GeocodeError;
use model::{parking::ParkingSpot, ExampleData, WithDistance};
use schemars::{schema_for, schema_for_value, JsonSchema};
use serde::{Deserialize, Serialize};
use spotfinder::ResultSet;

pub type RouteResult<O> = Result<Json<O>, RouteErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VecResponse<T> {
    pub data: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> VecResponse<T> {
    pub fn non_paginated(data: Vec<T>) -> Self {
        Self {
            data,
            pagination: None,
        }
    }

    pub fn paginated(
        data: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        page_size: usize,
    ) -> Self {
        Self {
            data,
            pagination: Some(Pagination {
                current_page,
                total_pages,
                total_items,
                page_size,
            }),
        }
    }

    pub fn json(self) -> Json<Self> {
        Json(self)
    }
}

impl From<ResultSet> for VecResponse<WithDistance<ParkingSpot>> {
    fn from(value: ResultSet) -> Self {
        Self::paginated(
            value.spots,
            value.page,
            value.total_pages,
            value.total_items,
            value.page_size,
        )
    }
}

// - Services returning commonly used responses -

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemaParams {
    #[serde(default = "Default::default")]
    example_data: bool,
}

pub(crate) async fn schema<T: ExampleData + JsonSchema + Serialize>(
    Query(params): Query<SchemaParams>,
) -> impl IntoResponse {
    if params.example_data {
        Json(schema_for_value!(T::example_data()))
    } else {
        Json(schema_for!(T))
    }
}

pub(crate) async fn schema_no_example<T: JsonSchema + Serialize>(
    Query(_params): Query<SchemaParams>,
) -> impl IntoResponse {
    Json(schema_for!(T))
}

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    RouteErrorResponse::not_found(req.method(), original_uri.path())
}

// - Commonly used responses -

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
        }
    }

    pub fn not_found(method: &Method, uri: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_method(method)
            .with_uri(uri)
            .with_default_message()
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("i dunno what happened here :/");
        self.with_message(message)
    }
}

impl From<GeocodeError> for RouteErrorResponse {
    fn from(value: GeocodeError) -> Self {
        match value {
            GeocodeError::Http(error) => {
                log::warn!("geocoding request failed: {error}");
                Self::new(StatusCode::BAD_GATEWAY)
                    .with_message("The geocoding service could not be reached.")
            }
            GeocodeError::MalformedResponse(error) => {
                log::warn!("geocoding response could not be parsed: {error}");
                Self::new(StatusCode::BAD_GATEWAY)
                    .with_message("The geocoding service returned an unexpected response.")
            }
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_set_becomes_paginated_envelope() {
        let set = ResultSet {
            spots: vec![],
            page: 3,
            page_size: 10,
            total_pages: 5,
            total_items: 42,
        };

        let response = VecResponse::from(set);
        let pagination = response.pagination.expect("pagination figures");

        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.total_pages, 5);
        assert_eq!(pagination.total_items, 42);
        assert_eq!(pagination.page_size, 10);
    }

    #[test]
    fn non_paginated_envelope_skips_pagination() {
        let response = VecResponse::non_paginated(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("pagination").is_none());
    }
}
