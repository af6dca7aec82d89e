use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;

pub mod fuel;
pub mod parking;

/// Types that can produce a plausible sample of themselves. Served by the
/// schema endpoints so API consumers see real-looking payloads.
pub trait ExampleData {
    fn example_data() -> Self;
}

/// A value annotated with its great-circle distance from a query origin.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            content,
        }
    }
}
