use crate::entities::{ItemSet, TransportPlan};
use crate::io::ext_repr::{ExtItem, ExtTransportPlan, ExtTrip};

/// Exports a transport plan out of the library
pub fn export(items: &ItemSet, plan: &TransportPlan) -> ExtTransportPlan {
    let trips = plan
        .trips()
        .iter()
        .zip(plan.trip_weights(items))
        .map(|(trip, weight)| ExtTrip {
            items: trip.clone(),
            weight,
        })
        .collect();

    ExtTransportPlan {
        n_trips: plan.n_trips(),
        trips,
    }
}

/// Exports an item set out of the library, in insertion order
pub fn export_items(items: &ItemSet) -> Vec<ExtItem> {
    items
        .iter()
        .map(|item| ExtItem {
            name: item.name.clone(),
            weight: item.weight,
        })
        .collect()
}
