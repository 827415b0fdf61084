// crates/hkaddr-core/src/writer.rs
use crate::error::Result;
use crate::model::CityView;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the city list as compact JSON (no whitespace, non-ASCII kept
/// as-is).
pub fn to_json_string(cities: &[CityView]) -> Result<String> {
    Ok(serde_json::to_string(cities)?)
}

/// Writes the city list to `path`, creating missing parent directories.
pub fn write_output(path: impl AsRef<Path>, cities: &[CityView]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(to_json_string(cities)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AreaView, BuildingView, RoadView};
    use tempfile::tempdir;

    fn sample() -> Vec<CityView> {
        vec![CityView {
            city_name: "香港".into(),
            city_eng_name: "Hong Kong".into(),
            area_list: vec![AreaView {
                zip_code: "999077".into(),
                area_name: "灣仔區".into(),
                area_eng_name: "Wan Chai District".into(),
                road_list: vec![
                    RoadView {
                        road_name: "告士打道".into(),
                        road_eng_name: "Gloucester Road".into(),
                        buildings: vec![BuildingView {
                            building_no: "1".into(),
                            building_name: "中環廣場".into(),
                            building_eng_name: "Central Plaza".into(),
                        }],
                    },
                    RoadView {
                        road_name: "軒尼詩道".into(),
                        road_eng_name: "Hennessy Road".into(),
                        buildings: vec![],
                    },
                ],
            }],
        }]
    }

    #[test]
    fn test_compact_layout_and_key_order() {
        let text = to_json_string(&sample()).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"[{"CityName":"香港","CityEngName":"Hong Kong","AreaList":[{"ZipCode":"999077","#,
                r#""AreaName":"灣仔區","AreaEngName":"Wan Chai District","RoadList":["#,
                r#"{"RoadName":"告士打道","RoadEngName":"Gloucester Road","Buildings":["#,
                r#"{"BuildingNo":"1","BuildingName":"中環廣場","BuildingEngName":"Central Plaza"}]},"#,
                r#"{"RoadName":"軒尼詩道","RoadEngName":"Hennessy Road"}]}]}]"#
            )
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("deep").join("er").join("out.json");

        write_output(&out, &sample()).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, to_json_string(&sample()).unwrap());
        let back: Vec<CityView> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, sample());
    }
}
