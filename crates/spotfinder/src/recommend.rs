//! Profile-based pick from a set of matching spots ("Smart Recommendations"
//! in the dashboard).

use std::cmp::{Ordering, Reverse};

use model::{parking::ParkingSpot, WithDistance};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum UserProfile {
    Commuter,
    Tourist,
    DeliveryDriver,
    BusinessTraveler,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub profile: UserProfile,
    pub reason: String,
    pub spot: WithDistance<ParkingSpot>,
}

/// Picks one spot for the given profile, or `None` when nothing matched.
/// Ties go to the earliest record in the (already sorted) input.
pub fn recommend(
    spots: &[WithDistance<ParkingSpot>],
    profile: UserProfile,
) -> Option<Recommendation> {
    let pick = match profile {
        // Lowest running cost for the daily commute.
        UserProfile::Commuter => spots.iter().min_by(|a, b| {
            a.content
                .fee_per_hour
                .partial_cmp(&b.content.fee_per_hour)
                .unwrap_or(Ordering::Equal)
        }),
        // Shortest walk to wherever the visit happens.
        UserProfile::Tourist => closest(spots.iter()),
        // Best odds of a free spot on a tight schedule.
        UserProfile::DeliveryDriver => spots
            .iter()
            .min_by_key(|s| Reverse(s.content.available_spots)),
        // Closest spot that can charge the company car; plain closest when
        // none of the matches can.
        UserProfile::BusinessTraveler => {
            closest(spots.iter().filter(|s| s.content.ev_charging))
                .or_else(|| closest(spots.iter()))
        }
    }?;

    Some(Recommendation {
        profile,
        reason: reason(profile, pick),
        spot: pick.clone(),
    })
}

fn closest<'a>(
    spots: impl Iterator<Item = &'a WithDistance<ParkingSpot>>,
) -> Option<&'a WithDistance<ParkingSpot>> {
    spots.min_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    })
}

fn reason(profile: UserProfile, pick: &WithDistance<ParkingSpot>) -> String {
    match profile {
        UserProfile::Commuter => format!(
            "Lowest cost at {:.2} EUR per hour",
            pick.content.fee_per_hour
        ),
        UserProfile::Tourist => format!("Closest match at {:.1} km", pick.distance_km),
        UserProfile::DeliveryDriver => format!(
            "Most available spots ({})",
            pick.content.available_spots
        ),
        UserProfile::BusinessTraveler => {
            if pick.content.ev_charging {
                format!("Closest spot with EV charging at {:.1} km", pick.distance_km)
            } else {
                format!("Closest match at {:.1} km (no EV charging available)", pick.distance_km)
            }
        }
    }
}
