// crates/hkaddr-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod view;

pub use domain::{AddressRecord, BuildingEntry, Hierarchy, NamePair};
pub use view::{AreaView, BuildingView, CityView, RoadView};

/// Placeholder postal code written on every area. Hong Kong has no postal
/// codes; downstream consumers expect this literal.
pub const ZIP_CODE: &str = "999077";
