// crates/hkaddr-core/src/extract.rs

//! # Feature Extraction
//!
//! Turns one GeoJSON feature into an [`AddressRecord`]. The address lives at
//! `properties.Address.PremisesAddress`, split into a Chinese and an English
//! half that are read independently.

use crate::model::{AddressRecord, NamePair};
use crate::raw::{lookup, lookup_or_null, lookup_str};
use serde_json::Value;

const PREMISES_PATH: [&str; 3] = ["properties", "Address", "PremisesAddress"];

/// Field names that differ between the Chinese and English halves.
struct Side {
    root: &'static str,
    district: &'static str,
    street: &'static str,
    village: &'static str,
}

const CHI: Side = Side {
    root: "ChiPremisesAddress",
    district: "ChiDistrict",
    street: "ChiStreet",
    village: "ChiVillage",
};

const ENG: Side = Side {
    root: "EngPremisesAddress",
    district: "EngDistrict",
    street: "EngStreet",
    village: "EngVillage",
};

/// Returns the `features` array of a parsed document.
///
/// Anything other than an object with an array under `features` yields an
/// empty slice.
pub fn features_of(doc: &Value) -> &[Value] {
    lookup(doc, &["features"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Joins a location prefix and a name with a single space.
///
/// Both parts are trimmed. The space is dropped when either side is empty.
///
/// ```rust
/// use hkaddr_core::extract::join_location;
///
/// assert_eq!(join_location(" Tai Po ", "Road"), "Tai Po Road");
/// assert_eq!(join_location("", " Road "), "Road");
/// assert_eq!(join_location("Tai Po", ""), "Tai Po");
/// assert_eq!(join_location(" ", " "), "");
/// ```
pub fn join_location(location: &str, name: &str) -> String {
    match (location.trim(), name.trim()) {
        ("", name) => name.to_string(),
        (location, "") => location.to_string(),
        (location, name) => format!("{location} {name}"),
    }
}

/// Returns the first value that is non-empty after trimming, trimmed.
pub fn first_non_empty(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Derives the road name for one language half.
///
/// Street data wins over village data whenever a street name is present at
/// all, even if it is only whitespace.
fn road_name(half: &Value, side: &Side) -> String {
    let street_name = lookup_str(half, &[side.street, "StreetName"]);
    if !street_name.is_empty() {
        return join_location(lookup_str(half, &[side.street, "LocationName"]), street_name);
    }

    let village_name = lookup_str(half, &[side.village, "VillageName"]);
    if !village_name.is_empty() {
        return join_location(lookup_str(half, &[side.village, "LocationName"]), village_name);
    }

    String::new()
}

impl AddressRecord {
    /// Extracts the address fields of a single feature.
    ///
    /// Returns `None` when city, area and road are empty in both languages.
    /// Missing or oddly shaped structure is never an error; the affected
    /// fields are just empty.
    pub fn from_feature(feature: &Value) -> Option<Self> {
        let premises = lookup_or_null(feature, &PREMISES_PATH);
        let chi = lookup_or_null(premises, &[CHI.root]);
        let eng = lookup_or_null(premises, &[ENG.root]);

        let record = AddressRecord {
            city: NamePair::new(lookup_str(chi, &["Region"]), lookup_str(eng, &["Region"])),
            area: NamePair::new(
                lookup_str(chi, &[CHI.district]),
                lookup_str(eng, &[ENG.district]),
            ),
            road: NamePair::new(road_name(chi, &CHI), road_name(eng, &ENG)),
            building_no: first_non_empty(&[
                lookup_str(chi, &[CHI.street, "BuildingNoFrom"]),
                lookup_str(eng, &[ENG.street, "BuildingNoFrom"]),
                lookup_str(chi, &[CHI.village, "BuildingNoFrom"]),
                lookup_str(eng, &[ENG.village, "BuildingNoFrom"]),
            ]),
            building_name: NamePair::new(
                lookup_str(chi, &["BuildingName"]),
                lookup_str(eng, &["BuildingName"]),
            ),
        };

        if record.has_no_location() {
            None
        } else {
            Some(record)
        }
    }
}
