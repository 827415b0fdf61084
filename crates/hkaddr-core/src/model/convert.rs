// crates/hkaddr-core/src/model/convert.rs
use super::domain::{AreaMap, BuildingEntry, BuildingSet, Hierarchy, NamePair, RoadMap};
use super::view::{AreaView, BuildingView, CityView, RoadView};
use super::ZIP_CODE;

/// **Output Converter:** Hierarchy -> ordered views.
///
/// Ordering comes from the ordered maps and sets inside [`Hierarchy`], so
/// this is a straight walk with no extra sorting.
pub fn to_views(hierarchy: &Hierarchy) -> Vec<CityView> {
    hierarchy
        .cities()
        .iter()
        .map(|(city, areas)| city_view(city, areas))
        .collect()
}

fn city_view(city: &NamePair, areas: &AreaMap) -> CityView {
    CityView {
        city_name: city.cn.clone(),
        city_eng_name: city.en.clone(),
        area_list: areas
            .iter()
            .map(|(area, roads)| area_view(area, roads))
            .collect(),
    }
}

fn area_view(area: &NamePair, roads: &RoadMap) -> AreaView {
    AreaView {
        zip_code: ZIP_CODE.to_string(),
        area_name: area.cn.clone(),
        area_eng_name: area.en.clone(),
        road_list: roads
            .iter()
            .map(|(road, buildings)| road_view(road, buildings))
            .collect(),
    }
}

fn road_view(road: &NamePair, buildings: &BuildingSet) -> RoadView {
    RoadView {
        road_name: road.cn.clone(),
        road_eng_name: road.en.clone(),
        buildings: buildings.iter().map(building_view).collect(),
    }
}

fn building_view(b: &BuildingEntry) -> BuildingView {
    BuildingView {
        building_no: b.no.clone(),
        building_name: b.name_cn.clone(),
        building_eng_name: b.name_en.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn np(cn: &str, en: &str) -> NamePair {
        NamePair::new(cn, en)
    }

    #[test]
    fn test_every_level_is_sorted() {
        let mut h = Hierarchy::new();
        let city = np("新界", "New Territories");
        let area = np("大埔區", "Tai Po District");

        h.record_road(np("香港", "Hong Kong"), np("灣仔區", "Wan Chai District"), np("軒尼詩道", "Hennessy Road"));
        h.record_building(city.clone(), area.clone(), np("大埔 道", "Tai Po Road"), BuildingEntry::new("2", "B", "b"));
        h.record_building(city.clone(), area.clone(), np("大埔 道", "Tai Po Road"), BuildingEntry::new("10", "A", "a"));
        h.record_building(city.clone(), area.clone(), np("大埔 道", "Tai Po Road"), BuildingEntry::new("2", "A", "z"));
        h.record_road(city.clone(), area.clone(), np("大埔 墟", "Tai Po Market"));
        h.record_road(city.clone(), np("北區", "North District"), np("", "Unnamed"));

        let views = to_views(&h);
        let cities: Vec<&str> = views.iter().map(|c| c.city_name.as_str()).collect();
        assert_eq!(cities, vec!["新界", "香港"]);

        let areas: Vec<&str> = views[0].area_list.iter().map(|a| a.area_name.as_str()).collect();
        assert_eq!(areas, vec!["北區", "大埔區"]);

        let roads: Vec<&str> = views[0].area_list[1]
            .road_list
            .iter()
            .map(|r| r.road_name.as_str())
            .collect();
        assert_eq!(roads, vec!["大埔 墟", "大埔 道"]);

        // "10" < "2" under plain string ordering
        let buildings: Vec<(&str, &str)> = views[0].area_list[1].road_list[1]
            .buildings
            .iter()
            .map(|b| (b.building_no.as_str(), b.building_name.as_str()))
            .collect();
        assert_eq!(buildings, vec![("10", "A"), ("2", "A"), ("2", "B")]);
    }

    #[test]
    fn test_zip_code_is_constant() {
        let mut h = Hierarchy::new();
        h.record_road(np("a", ""), np("b", ""), np("c", ""));
        h.record_road(np("x", ""), np("y", ""), np("z", ""));

        let views = to_views(&h);
        assert!(views
            .iter()
            .flat_map(|c| &c.area_list)
            .all(|a| a.zip_code == "999077"));
    }

    #[test]
    fn test_empty_hierarchy_is_empty_list() {
        assert!(to_views(&Hierarchy::new()).is_empty());
    }
}
