// crates/hkaddr-core/src/model/view.rs
use serde::{Deserialize, Serialize};

/// Output document schema. Field order here is the key order on disk.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityView {
    pub city_name: String,
    pub city_eng_name: String,
    pub area_list: Vec<AreaView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AreaView {
    /// Always [`ZIP_CODE`](super::ZIP_CODE); not derived from the data.
    pub zip_code: String,
    pub area_name: String,
    pub area_eng_name: String,
    pub road_list: Vec<RoadView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadView {
    pub road_name: String,
    pub road_eng_name: String,
    /// Omitted from the document when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buildings: Vec<BuildingView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildingView {
    pub building_no: String,
    pub building_name: String,
    pub building_eng_name: String,
}
