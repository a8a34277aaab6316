use crate::core::models::material::{MaterialProperties, MaterialRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Feature table '{path}' contains no data rows")]
    Empty { path: String },
}

// The csv crate cannot deserialize `#[serde(flatten)]`, so rows are read into
// a flat shape mirroring the source columns and then regrouped.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Fips")]
    fips: String,
    surface_area_m2g: f64,
    pore_volume_cm3g: f64,
    hydrophilicity: f64,
    max_water_uptake: f64,
    #[serde(rename = "thermal_stability_K")]
    thermal_stability_k: f64,
    cost_per_kg: f64,
    #[serde(default)]
    daily_water_yield: Option<f64>,
}

impl From<RawRow> for MaterialRecord {
    fn from(row: RawRow) -> Self {
        MaterialRecord {
            fips: row.fips,
            properties: MaterialProperties {
                surface_area_m2g: row.surface_area_m2g,
                pore_volume_cm3g: row.pore_volume_cm3g,
                hydrophilicity: row.hydrophilicity,
                max_water_uptake: row.max_water_uptake,
                thermal_stability_k: row.thermal_stability_k,
                cost_per_kg: row.cost_per_kg,
            },
            daily_water_yield: row.daily_water_yield,
        }
    }
}

/// Loads the material feature table from a CSV file.
///
/// Required columns: `Fips`, `surface_area_m2g`, `pore_volume_cm3g`,
/// `hydrophilicity`, `max_water_uptake`, `thermal_stability_K`,
/// `cost_per_kg`. A missing column or a non-numeric value is a fatal
/// input-shape error; `daily_water_yield` is optional. Row order is
/// preserved.
pub fn load_material_table(path: &Path) -> Result<Vec<MaterialRecord>, TableError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TableError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        let row = result.map_err(|e| TableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        records.push(MaterialRecord::from(row));
    }

    if records.is_empty() {
        return Err(TableError::Empty {
            path: path.to_string_lossy().to_string(),
        });
    }
    Ok(records)
}

/// Writes a table of flat serializable rows (e.g., the ranked export rows) to
/// a CSV file with a header derived from the row type.
pub fn write_ranked_table<S: Serialize>(path: &Path, rows: &[S]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| TableError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    for row in rows {
        writer.serialize(row).map_err(|e| TableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| TableError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "Fips,surface_area_m2g,pore_volume_cm3g,hydrophilicity,max_water_uptake,thermal_stability_K,cost_per_kg,daily_water_yield";

    #[test]
    fn loads_valid_table_preserving_row_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        fs::write(
            &path,
            format!(
                "{HEADER}\n6001,1200.0,0.6,0.7,0.35,620.0,42.0,1.4\n6003,900.0,0.4,0.5,0.25,580.0,30.0,0.9\n"
            ),
        )
        .unwrap();

        let records = load_material_table(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fips, "6001");
        assert_eq!(records[0].properties.thermal_stability_k, 620.0);
        assert_eq!(records[0].daily_water_yield, Some(1.4));
        assert_eq!(records[1].fips, "6003");
    }

    #[test]
    fn loads_table_without_the_optional_yield_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        fs::write(
            &path,
            "Fips,surface_area_m2g,pore_volume_cm3g,hydrophilicity,max_water_uptake,thermal_stability_K,cost_per_kg\n6001,1200.0,0.6,0.7,0.35,620.0,42.0\n",
        )
        .unwrap();

        let records = load_material_table(&path).unwrap();
        assert_eq!(records[0].daily_water_yield, None);
    }

    #[test]
    fn missing_required_column_is_a_fatal_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        fs::write(
            &path,
            "Fips,surface_area_m2g,pore_volume_cm3g\n6001,1200.0,0.6\n",
        )
        .unwrap();

        assert!(matches!(
            load_material_table(&path),
            Err(TableError::Csv { .. })
        ));
    }

    #[test]
    fn non_numeric_field_is_a_fatal_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        fs::write(
            &path,
            format!("{HEADER}\n6001,lots,0.6,0.7,0.35,620.0,42.0,1.4\n"),
        )
        .unwrap();

        assert!(matches!(
            load_material_table(&path),
            Err(TableError::Csv { .. })
        ));
    }

    #[test]
    fn table_with_only_a_header_is_reported_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        fs::write(&path, format!("{HEADER}\n")).unwrap();

        assert!(matches!(
            load_material_table(&path),
            Err(TableError::Empty { .. })
        ));
    }

    #[test]
    fn missing_file_surfaces_a_csv_open_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");
        assert!(load_material_table(&path).is_err());
    }

    #[test]
    fn writes_rows_with_a_derived_header() {
        #[derive(Serialize)]
        struct Row {
            fips: String,
            performance_score: f64,
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("ranked.csv");
        let rows = vec![
            Row {
                fips: "6001".to_string(),
                performance_score: 0.925,
            },
            Row {
                fips: "6003".to_string(),
                performance_score: 0.8,
            },
        ];

        write_ranked_table(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("fips,performance_score"));
        assert_eq!(lines.next(), Some("6001,0.925"));
        assert_eq!(lines.next(), Some("6003,0.8"));
    }
}
