// crates/hkaddr-core/src/model/domain.rs
use crate::common::HierarchyStats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A bilingual `(Chinese, English)` name.
///
/// Used as the key for cities, areas and roads. Equality is exact on both
/// components and an empty string is a valid component. The derived ordering
/// compares `cn` first, then `en`, which is the output order at every level.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamePair {
    pub cn: String,
    pub en: String,
}

impl NamePair {
    pub fn new(cn: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            cn: cn.into(),
            en: en.into(),
        }
    }

    /// True when both languages are empty.
    pub fn is_empty(&self) -> bool {
        self.cn.is_empty() && self.en.is_empty()
    }
}

/// One building under a road. Ordered by number, then Chinese name, then
/// English name.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingEntry {
    pub no: String,
    pub name_cn: String,
    pub name_en: String,
}

impl BuildingEntry {
    pub fn new(no: impl Into<String>, name_cn: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            no: no.into(),
            name_cn: name_cn.into(),
            name_en: name_en.into(),
        }
    }

    /// A building only counts if it carries a name in at least one language.
    pub fn has_name(&self) -> bool {
        !(self.name_cn.is_empty() && self.name_en.is_empty())
    }
}

/// Fields extracted from a single input feature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub city: NamePair,
    pub area: NamePair,
    pub road: NamePair,
    pub building_no: String,
    pub building_name: NamePair,
}

impl AddressRecord {
    /// True when none of city/area/road carries a name. Such records are
    /// dropped entirely.
    pub fn has_no_location(&self) -> bool {
        self.city.is_empty() && self.area.is_empty() && self.road.is_empty()
    }

    pub fn building(&self) -> BuildingEntry {
        BuildingEntry::new(
            self.building_no.as_str(),
            self.building_name.cn.as_str(),
            self.building_name.en.as_str(),
        )
    }
}

pub type BuildingSet = BTreeSet<BuildingEntry>;
pub type RoadMap = BTreeMap<NamePair, BuildingSet>;
pub type AreaMap = BTreeMap<NamePair, RoadMap>;
pub type CityMap = BTreeMap<NamePair, AreaMap>;

/// # The Address Tree
///
/// **Structure:** city -> area -> road -> set of buildings.
///
/// All mutation goes through [`Hierarchy::record`], [`Hierarchy::record_road`]
/// and [`Hierarchy::record_building`], which enforce the two admission rules:
/// - a location with no city, area or road name is never inserted;
/// - a building without any name is never inserted (its road still is).
///
/// The maps are ordered, so iterating them already yields output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    cities: CityMap,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one extracted record. Returns `false` if the record had no
    /// location and was ignored.
    pub fn record(&mut self, record: &AddressRecord) -> bool {
        self.record_building(
            record.city.clone(),
            record.area.clone(),
            record.road.clone(),
            record.building(),
        )
    }

    /// Ensures the road exists (creating its city and area on the way).
    /// Returns `false` and inserts nothing if all three keys are empty.
    pub fn record_road(&mut self, city: NamePair, area: NamePair, road: NamePair) -> bool {
        self.road_entry(city, area, road).is_some()
    }

    /// Ensures the road exists, then adds `building` to it if the building is
    /// named. Identical buildings collapse to one entry.
    pub fn record_building(
        &mut self,
        city: NamePair,
        area: NamePair,
        road: NamePair,
        building: BuildingEntry,
    ) -> bool {
        match self.road_entry(city, area, road) {
            Some(buildings) => {
                if building.has_name() {
                    buildings.insert(building);
                }
                true
            }
            None => false,
        }
    }

    fn road_entry(
        &mut self,
        city: NamePair,
        area: NamePair,
        road: NamePair,
    ) -> Option<&mut BuildingSet> {
        if city.is_empty() && area.is_empty() && road.is_empty() {
            return None;
        }
        Some(
            self.cities
                .entry(city)
                .or_default()
                .entry(area)
                .or_default()
                .entry(road)
                .or_default(),
        )
    }

    pub fn cities(&self) -> &CityMap {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn stats(&self) -> HierarchyStats {
        let mut stats = HierarchyStats {
            cities: self.cities.len(),
            ..HierarchyStats::default()
        };
        for areas in self.cities.values() {
            stats.areas += areas.len();
            for roads in areas.values() {
                stats.roads += roads.len();
                stats.buildings += roads.values().map(BTreeSet::len).sum::<usize>();
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hk() -> NamePair {
        NamePair::new("香港", "Hong Kong")
    }

    fn central() -> NamePair {
        NamePair::new("中西區", "Central and Western District")
    }

    fn queens_road() -> NamePair {
        NamePair::new("皇后大道中", "Queen's Road Central")
    }

    #[test]
    fn test_duplicate_buildings_collapse() {
        let mut h = Hierarchy::new();
        let b = BuildingEntry::new("1", "中環中心", "The Center");

        assert!(h.record_building(hk(), central(), queens_road(), b.clone()));
        assert!(h.record_building(hk(), central(), queens_road(), b));

        let stats = h.stats();
        assert_eq!(stats.roads, 1);
        assert_eq!(stats.buildings, 1);
    }

    #[test]
    fn test_unnamed_building_keeps_road_only() {
        let mut h = Hierarchy::new();
        assert!(h.record_building(hk(), central(), queens_road(), BuildingEntry::new("99", "", "")));

        let roads = &h.cities()[&hk()][&central()];
        assert!(roads[&queens_road()].is_empty());
    }

    #[test]
    fn test_half_named_building_is_kept() {
        let mut h = Hierarchy::new();
        h.record_building(hk(), central(), queens_road(), BuildingEntry::new("", "", "Tower"));
        h.record_building(hk(), central(), queens_road(), BuildingEntry::new("", "大廈", ""));

        assert_eq!(h.stats().buildings, 2);
    }

    #[test]
    fn test_empty_location_is_rejected() {
        let mut h = Hierarchy::new();
        let empty = NamePair::default();

        assert!(!h.record_building(
            empty.clone(),
            empty.clone(),
            empty.clone(),
            BuildingEntry::new("1", "大廈", "Mansion"),
        ));
        assert!(!h.record_road(empty.clone(), empty.clone(), empty));
        assert!(h.is_empty());
    }

    #[test]
    fn test_partial_location_is_accepted() {
        let mut h = Hierarchy::new();
        let empty = NamePair::default();
        assert!(h.record_road(empty.clone(), empty, NamePair::new("", "Some Road")));

        assert_eq!(
            h.stats(),
            HierarchyStats {
                cities: 1,
                areas: 1,
                roads: 1,
                buildings: 0
            }
        );
    }

    #[test]
    fn test_record_from_address_record() {
        let mut h = Hierarchy::new();
        let rec = AddressRecord {
            city: hk(),
            area: central(),
            road: queens_road(),
            building_no: "1".into(),
            building_name: NamePair::new("中環中心", "The Center"),
        };
        assert!(h.record(&rec));
        assert!(!h.record(&AddressRecord::default()));

        let buildings = &h.cities()[&hk()][&central()][&queens_road()];
        assert!(buildings.contains(&BuildingEntry::new("1", "中環中心", "The Center")));
    }

    #[test]
    fn test_name_pair_ordering_is_cn_then_en() {
        let mut keys = vec![
            NamePair::new("b", "a"),
            NamePair::new("a", "z"),
            NamePair::new("a", "b"),
            NamePair::new("", "zz"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                NamePair::new("", "zz"),
                NamePair::new("a", "b"),
                NamePair::new("a", "z"),
                NamePair::new("b", "a"),
            ]
        );
    }
}
