use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub name: String,
    pub weight: u64,
}

/// External representation of a [`Trip`](crate::entities::Trip).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtTrip {
    /// Names of the items carried on this trip
    pub items: Vec<String>,
    /// Total weight carried on this trip
    pub weight: u64,
}

/// External representation of a [`TransportPlan`](crate::entities::TransportPlan).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtTransportPlan {
    pub n_trips: usize,
    pub trips: Vec<ExtTrip>,
}
