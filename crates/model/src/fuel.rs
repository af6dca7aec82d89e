use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fuel sorts tracked by the public price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FuelKind {
    SuperE10,
    Diesel,
    SuperE5,
}

impl FuelKind {
    pub const ALL: [FuelKind; 3] = [FuelKind::SuperE10, FuelKind::Diesel, FuelKind::SuperE5];

    /// Column label as printed in the source export.
    pub fn label(&self) -> &'static str {
        match self {
            FuelKind::SuperE10 => "Super E10",
            FuelKind::Diesel => "Diesel",
            FuelKind::SuperE5 => "Super E5",
        }
    }
}

/// One day of average pump prices in EUR per litre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelPriceDay {
    pub date: NaiveDate,
    pub super_e10: f64,
    pub diesel: f64,
    pub super_e5: f64,
}

impl FuelPriceDay {
    pub fn price(&self, kind: FuelKind) -> f64 {
        match kind {
            FuelKind::SuperE10 => self.super_e10,
            FuelKind::Diesel => self.diesel,
            FuelKind::SuperE5 => self.super_e5,
        }
    }
}
