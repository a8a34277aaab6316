use crate::core::models::material::MaterialRecord;
use serde::Serialize;
use std::collections::BTreeMap;

// Advisory thresholds for the recommendation strings. These are
// reporting-layer policy, not optimizer invariants: changing them alters the
// report text, never a ranking.
const HYDROPHILICITY_ADVISORY_THRESHOLD: f64 = 0.6;
const THERMAL_STABILITY_ADVISORY_K: f64 = 600.0;

/// How many rows each key finding lists.
const TOP_N: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: String,
    pub num_samples: usize,
    pub num_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStatistics {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyFinding {
    pub finding: String,
    pub fips: Vec<String>,
    pub values: Vec<f64>,
}

/// Structured summary of a feature table for the reporting dashboard,
/// serializable as a JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    pub dataset_info: DatasetInfo,
    pub feature_statistics: BTreeMap<String, FeatureStatistics>,
    pub key_findings: Vec<KeyFinding>,
    pub recommendations: Vec<String>,
}

fn statistics(values: &[f64]) -> FeatureStatistics {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    // Sample standard deviation, matching the source dataset's summaries.
    let std = if values.len() < 2 {
        0.0
    } else {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if sorted.len() % 2 == 1 {
        sorted[sorted.len() / 2]
    } else {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
    };

    FeatureStatistics {
        mean,
        std,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median,
    }
}

fn top_finding(
    records: &[MaterialRecord],
    finding: &str,
    value: impl Fn(&MaterialRecord) -> Option<f64>,
) -> Option<KeyFinding> {
    let mut scored: Vec<(&MaterialRecord, f64)> = records
        .iter()
        .filter_map(|r| value(r).map(|v| (r, v)))
        .collect();
    if scored.is_empty() {
        return None;
    }
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(TOP_N);

    Some(KeyFinding {
        finding: finding.to_string(),
        fips: scored.iter().map(|(r, _)| r.fips.clone()).collect(),
        values: scored.iter().map(|(_, v)| *v).collect(),
    })
}

/// Summarizes a feature table: per-column statistics, top-`N` key findings,
/// and advisory recommendation strings.
///
/// The daily-yield and cost-effectiveness findings are only produced when the
/// optional `daily_water_yield` column is present in at least one row.
pub fn generate_insights(records: &[MaterialRecord]) -> InsightsReport {
    let has_yield_column = records.iter().any(|r| r.daily_water_yield.is_some());

    let mut columns: Vec<(&str, Vec<f64>)> = vec![
        (
            "surface_area_m2g",
            records
                .iter()
                .map(|r| r.properties.surface_area_m2g)
                .collect(),
        ),
        (
            "pore_volume_cm3g",
            records
                .iter()
                .map(|r| r.properties.pore_volume_cm3g)
                .collect(),
        ),
        (
            "hydrophilicity",
            records
                .iter()
                .map(|r| r.properties.hydrophilicity)
                .collect(),
        ),
        (
            "max_water_uptake",
            records
                .iter()
                .map(|r| r.properties.max_water_uptake)
                .collect(),
        ),
        (
            "thermal_stability_K",
            records
                .iter()
                .map(|r| r.properties.thermal_stability_k)
                .collect(),
        ),
        (
            "cost_per_kg",
            records.iter().map(|r| r.properties.cost_per_kg).collect(),
        ),
    ];
    if has_yield_column {
        columns.push((
            "daily_water_yield",
            records.iter().filter_map(|r| r.daily_water_yield).collect(),
        ));
    }

    let feature_statistics: BTreeMap<String, FeatureStatistics> = columns
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(name, values)| (name.to_string(), statistics(values)))
        .collect();

    let mut key_findings = Vec::new();
    if let Some(finding) = top_finding(records, "Top Surface Area MOFs", |r| {
        Some(r.properties.surface_area_m2g)
    }) {
        key_findings.push(finding);
    }
    if let Some(finding) = top_finding(records, "Highest Daily Water Yield", |r| {
        r.daily_water_yield
    }) {
        key_findings.push(finding);
    }
    if let Some(finding) = top_finding(records, "Most Cost-Effective MOFs", |r| {
        r.daily_water_yield.map(|y| y / r.properties.cost_per_kg)
    }) {
        key_findings.push(finding);
    }

    let mut recommendations = Vec::new();
    if !records.is_empty() {
        let mean_hydrophilicity = records
            .iter()
            .map(|r| r.properties.hydrophilicity)
            .sum::<f64>()
            / records.len() as f64;
        if mean_hydrophilicity < HYDROPHILICITY_ADVISORY_THRESHOLD {
            recommendations.push(
                "Consider MOFs with higher hydrophilicity (>0.7) for improved low-humidity performance"
                    .to_string(),
            );
        }

        let mean_thermal_stability = records
            .iter()
            .map(|r| r.properties.thermal_stability_k)
            .sum::<f64>()
            / records.len() as f64;
        if mean_thermal_stability < THERMAL_STABILITY_ADVISORY_K {
            recommendations.push(
                "Prioritize MOFs with thermal stability >600K for reliable temperature-swing operation"
                    .to_string(),
            );
        }
    }

    InsightsReport {
        dataset_info: DatasetInfo {
            name: "MOF Water Capture".to_string(),
            description: "Metal-Organic Framework atmospheric water capture for AI datacenters"
                .to_string(),
            num_samples: records.len(),
            num_features: columns.len(),
        },
        feature_statistics,
        key_findings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::material::MaterialProperties;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn record(fips: &str, hydrophilicity: f64, yield_l: Option<f64>) -> MaterialRecord {
        MaterialRecord {
            fips: fips.to_string(),
            properties: MaterialProperties {
                surface_area_m2g: 1000.0,
                pore_volume_cm3g: 0.5,
                hydrophilicity,
                max_water_uptake: 0.3,
                thermal_stability_k: 620.0,
                cost_per_kg: 50.0,
            },
            daily_water_yield: yield_l,
        }
    }

    #[test]
    fn statistics_cover_mean_std_and_median() {
        let stats = statistics(&[1.0, 2.0, 3.0, 4.0]);
        assert!(f64_approx_equal(stats.mean, 2.5));
        assert!(f64_approx_equal(stats.median, 2.5));
        assert!(f64_approx_equal(stats.min, 1.0));
        assert!(f64_approx_equal(stats.max, 4.0));
        // Sample std of 1..4 is sqrt(5/3).
        assert!(f64_approx_equal(stats.std, (5.0_f64 / 3.0).sqrt()));
    }

    #[test]
    fn single_value_statistics_have_zero_std() {
        let stats = statistics(&[2.0]);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn odd_length_median_is_the_middle_value() {
        let stats = statistics(&[3.0, 1.0, 2.0]);
        assert!(f64_approx_equal(stats.median, 2.0));
    }

    #[test]
    fn key_findings_list_top_rows_in_descending_order() {
        let records = vec![
            record("a", 0.8, Some(1.0)),
            record("b", 0.8, Some(3.0)),
            record("c", 0.8, Some(2.0)),
            record("d", 0.8, Some(0.5)),
        ];
        let report = generate_insights(&records);

        let yield_finding = report
            .key_findings
            .iter()
            .find(|f| f.finding == "Highest Daily Water Yield")
            .unwrap();
        assert_eq!(yield_finding.fips, vec!["b", "c", "a"]);
        assert_eq!(yield_finding.values, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn yield_findings_are_absent_without_the_yield_column() {
        let records = vec![record("a", 0.8, None), record("b", 0.8, None)];
        let report = generate_insights(&records);

        assert_eq!(report.key_findings.len(), 1);
        assert_eq!(report.key_findings[0].finding, "Top Surface Area MOFs");
        assert!(!report.feature_statistics.contains_key("daily_water_yield"));
        assert_eq!(report.dataset_info.num_features, 6);
    }

    #[test]
    fn low_hydrophilicity_dataset_triggers_the_recommendation() {
        let records = vec![record("a", 0.3, None), record("b", 0.4, None)];
        let report = generate_insights(&records);
        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("hydrophilicity"))
        );
    }

    #[test]
    fn hydrophilic_and_stable_dataset_has_no_recommendations() {
        let records = vec![record("a", 0.8, None), record("b", 0.7, None)];
        let report = generate_insights(&records);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn cost_effectiveness_uses_yield_per_cost() {
        let mut cheap = record("cheap", 0.8, Some(1.0));
        cheap.properties.cost_per_kg = 10.0;
        let expensive = record("expensive", 0.8, Some(2.0));
        let records = vec![expensive, cheap];

        let report = generate_insights(&records);
        let finding = report
            .key_findings
            .iter()
            .find(|f| f.finding == "Most Cost-Effective MOFs")
            .unwrap();
        // 1.0 / 10 beats 2.0 / 50.
        assert_eq!(finding.fips[0], "cheap");
        assert!(f64_approx_equal(finding.values[0], 0.1));
    }

    #[test]
    fn report_serializes_to_json() {
        let records = vec![record("a", 0.8, Some(1.0))];
        let report = generate_insights(&records);
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"dataset_info\""));
        assert!(json.contains("\"MOF Water Capture\""));
    }
}
