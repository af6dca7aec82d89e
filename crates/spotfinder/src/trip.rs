//! Round-trip cost and emissions estimate for a parking visit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Assumed average speed for urban door-to-door driving.
pub const CITY_SPEED_KMH: f64 = 30.0;

/// A grown tree absorbs roughly this much CO2 per year.
pub const CO2_KG_PER_TREE_YEAR: f64 = 22.0;

/// Typical tailpipe/well-to-wheel CO2 footprint per mode of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TransportMode {
    CarGasoline,
    CarDiesel,
    ElectricCar,
    HybridCar,
    PublicTransport,
    Bicycle,
    Walking,
    EScooter,
}

impl TransportMode {
    pub fn co2_grams_per_km(&self) -> u32 {
        match self {
            TransportMode::CarGasoline => 120,
            TransportMode::CarDiesel => 110,
            TransportMode::ElectricCar => 30,
            TransportMode::HybridCar => 80,
            TransportMode::PublicTransport => 25,
            TransportMode::Bicycle => 0,
            TransportMode::Walking => 0,
            TransportMode::EScooter => 15,
        }
    }
}

/// Inputs for one estimate. Distances are one-way; the estimate always
/// covers the round trip.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub distance_km: f64,
    pub parking_duration_hours: f64,
    pub fee_per_hour: f64,
    pub fuel_price_per_litre: f64,
    pub consumption_l_per_100km: f64,
    /// What an hour of the driver's time is worth, in EUR.
    pub time_value_per_hour: f64,
    pub mode: TransportMode,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripCost {
    pub fuel_cost: f64,
    pub parking_cost: f64,
    pub time_cost: f64,
    pub total_cost: f64,
    pub co2_kg: f64,
    /// Tree-years needed to absorb the emitted CO2.
    pub trees_to_offset: f64,
}

pub fn estimate(plan: &TripPlan) -> TripCost {
    let round_trip_km = plan.distance_km * 2.0;

    let fuel_cost =
        round_trip_km * plan.consumption_l_per_100km / 100.0 * plan.fuel_price_per_litre;
    let parking_cost = plan.fee_per_hour * plan.parking_duration_hours;
    let time_cost = round_trip_km / CITY_SPEED_KMH * plan.time_value_per_hour;
    let co2_kg = round_trip_km * f64::from(plan.mode.co2_grams_per_km()) / 1000.0;

    TripCost {
        fuel_cost,
        parking_cost,
        time_cost,
        total_cost: fuel_cost + parking_cost + time_cost,
        co2_kg,
        trees_to_offset: co2_kg / CO2_KG_PER_TREE_YEAR,
    }
}
