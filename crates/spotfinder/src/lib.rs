//! Location-based parking spot filtering and ranking.
//!
//! The single reusable contract behind the mobility dashboards: given a
//! read-only table of parking records and a query, produce the matching,
//! distance-annotated, ordered, paginated subset. Evaluation is pure and
//! synchronous; the caller owns both the table and the query, and no
//! ambient state is consulted. Two calls with the same inputs return the
//! same result.

use std::cmp::Ordering;

use model::{
    parking::{Location, ParkingSpot},
    WithDistance,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

pub mod fuel;
pub mod recommend;
pub mod stats;
pub mod trip;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Distance,
    Fee,
}

/// One filter submission. Built fresh per request and never persisted.
///
/// Ranges are the caller's contract: an inverted `fee_range` or a negative
/// `max_distance_km` is not rejected, it just cannot match anything.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotQuery {
    pub origin: Location,
    /// Inclusive upper bound in kilometers.
    pub max_distance_km: f64,
    /// Inclusive on both ends, EUR per hour.
    pub fee_range: (f64, f64),
    pub ev_only: bool,
    pub weekend_only: bool,
    pub cashless_only: bool,
    pub sort_key: SortKey,
    /// 1-indexed. Pages past the end yield empty slices, not errors;
    /// clamping is up to the caller.
    pub page: usize,
    pub page_size: usize,
}

impl SpotQuery {
    pub fn new(origin: Location, max_distance_km: f64) -> Self {
        Self {
            origin,
            max_distance_km,
            fee_range: (0.0, f64::MAX),
            ev_only: false,
            weekend_only: false,
            cashless_only: false,
            sort_key: SortKey::Distance,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn fee_range(mut self, min: f64, max: f64) -> Self {
        self.fee_range = (min, max);
        self
    }

    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn ev_only(mut self) -> Self {
        self.ev_only = true;
        self
    }

    pub fn weekend_only(mut self) -> Self {
        self.weekend_only = true;
        self
    }

    pub fn cashless_only(mut self) -> Self {
        self.cashless_only = true;
        self
    }
}

/// One page of matches plus the pagination figures the list UI needs.
/// Rebuilt from scratch on every evaluation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub spots: Vec<WithDistance<ParkingSpot>>,
    pub page: usize,
    pub page_size: usize,
    /// At least 1, even for an empty result.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Evaluates a query against the table: filter, annotate, sort, paginate.
pub fn find_spots(records: &[ParkingSpot], query: &SpotQuery) -> ResultSet {
    let matches = matching_spots(records, query);
    paginate(matches, query.page, query.page_size)
}

/// All matching records, distance-annotated and sorted, without pagination.
///
/// Records missing coordinates (or carrying non-finite ones) are dropped
/// up front. The remaining predicates are independent, so their order only
/// matters for cost: the bounding box spares most far-away records the
/// trigonometry before the exact haversine check.
pub fn matching_spots(
    records: &[ParkingSpot],
    query: &SpotQuery,
) -> Vec<WithDistance<ParkingSpot>> {
    let bounds = geo::bounding_box(
        query.origin.latitude,
        query.origin.longitude,
        query.max_distance_km,
    );
    let (min_fee, max_fee) = query.fee_range;

    let mut matches = records
        .iter()
        .filter(|spot| {
            spot.fee_per_hour >= min_fee
                && spot.fee_per_hour <= max_fee
                && (!query.ev_only || spot.ev_charging)
                && (!query.weekend_only || spot.open_weekend)
                && (!query.cashless_only || spot.cashless_payment)
        })
        .filter(|spot| {
            matches!(spot.location, Some(at) if bounds.contains(at.latitude, at.longitude))
        })
        .filter_map(|spot| spot.clone().with_distance_to(&query.origin))
        .filter(|annotated| annotated.distance_km <= query.max_distance_km)
        .collect::<Vec<_>>();

    // Stable sort: records with equal keys keep their table order.
    match query.sort_key {
        SortKey::Distance => matches.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Fee => matches.sort_by(|a, b| {
            a.content
                .fee_per_hour
                .partial_cmp(&b.content.fee_per_hour)
                .unwrap_or(Ordering::Equal)
        }),
    }

    matches
}

fn paginate(
    matches: Vec<WithDistance<ParkingSpot>>,
    page: usize,
    page_size: usize,
) -> ResultSet {
    // A page size of zero would make every page empty and the page count
    // undefined; the smallest useful page is one record.
    let page_size = page_size.max(1);
    let total_items = matches.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let spots = matches
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect::<Vec<_>>();

    ResultSet {
        spots,
        page,
        page_size,
        total_pages,
        total_items,
    }
}
