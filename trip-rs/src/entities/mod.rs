mod item;
mod item_set;
mod plan;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::Weight;

#[doc(inline)]
pub use item_set::ItemSet;

#[doc(inline)]
pub use plan::TransportPlan;

#[doc(inline)]
pub use plan::Trip;
