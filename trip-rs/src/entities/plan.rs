use crate::entities::{ItemSet, Weight};

/// Names of the items carried together on a single trip
pub type Trip = Vec<String>;

/// Allocation of items to trips.
///
/// Trip order carries no meaning, but is kept stable so plans can be compared and printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportPlan {
    trips: Vec<Trip>,
}

impl TransportPlan {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn n_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Total weight carried on each trip, in trip order.
    /// Names unknown to `items` count as weightless, totals saturate at [`Weight::MAX`].
    pub fn trip_weights(&self, items: &ItemSet) -> Vec<Weight> {
        self.trips
            .iter()
            .map(|trip| trip_weight(trip, items))
            .collect()
    }
}

pub(crate) fn trip_weight(trip: &[String], items: &ItemSet) -> Weight {
    trip.iter()
        .filter_map(|name| items.weight(name))
        .fold(0, Weight::saturating_add)
}

impl From<Vec<Trip>> for TransportPlan {
    fn from(trips: Vec<Trip>) -> Self {
        Self::new(trips)
    }
}

impl<'a> IntoIterator for &'a TransportPlan {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
