/// Weight of a single item, and the unit in which trip capacity is expressed
pub type Weight = u64;

/// Item to be carried on one of the trips
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique (within an [`ItemSet`](crate::entities::ItemSet)) name of the item
    pub name: String,
    pub weight: Weight,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: Weight) -> Self {
        Item {
            name: name.into(),
            weight,
        }
    }
}
