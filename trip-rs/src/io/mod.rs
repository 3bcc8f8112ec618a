/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

#[doc(inline)]
pub use export::{export, export_items};

#[doc(inline)]
pub use import::parse_items;
