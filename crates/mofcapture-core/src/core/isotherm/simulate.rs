use super::models::langmuir_curve;
use crate::core::models::material::MaterialProperties;
use serde::Serialize;

/// Adsorption/desorption cycles per day, driven by the day/night thermal swing
/// (one cycle per 6-hour period).
pub const CYCLES_PER_DAY: f64 = 4.0;

/// Reference temperature for a simulation when the caller does not supply one.
pub const DEFAULT_TEMPERATURE_K: f64 = 298.0;

/// Surface area against which the equilibrium constant is normalized [m²/g].
const REFERENCE_SURFACE_AREA_M2G: f64 = 1000.0;

/// Maximum relative boost of effective capacity from hydrophilicity.
const HYDROPHILICITY_CAPACITY_BOOST: f64 = 0.3;

/// Scale of the equilibrium constant per unit hydrophilicity at the reference
/// surface area.
const EQUILIBRIUM_CONSTANT_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IsothermModel {
    Langmuir,
    Freundlich,
    Toth,
}

impl IsothermModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IsothermModel::Langmuir => "langmuir",
            IsothermModel::Freundlich => "freundlich",
            IsothermModel::Toth => "toth",
        }
    }
}

/// Output of one performance simulation: the uptake curve over the requested
/// humidity range, the derived daily yield, and the model parameters used.
#[derive(Debug, Clone, Serialize)]
pub struct IsothermResult {
    pub humidity: Vec<f64>,
    pub water_uptake: Vec<f64>,
    pub daily_yield_l_per_kg_day: f64,
    pub q_max: f64,
    pub k: f64,
    pub temperature_k: f64,
    pub model: IsothermModel,
}

/// Evenly spaced relative-humidity samples over `[start, end]`.
pub fn humidity_range(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Simulates water uptake of one material across a humidity range.
///
/// Langmuir parameters are derived from coarse structural descriptors rather
/// than fitted to measured isotherm data, so any material table can be scored
/// without per-material calibration series. This is a documented
/// approximation, not a regression model:
///
/// - `q_max = max_water_uptake * (1 + 0.3 * hydrophilicity)` - hydrophilicity
///   boosts effective capacity above the nominal maximum by up to 30%
/// - `k = 5.0 * hydrophilicity * (surface_area / 1000)` - the equilibrium
///   constant grows with hydrophilicity and normalized surface area
///
/// The daily yield is the mean uptake over the range times [`CYCLES_PER_DAY`].
/// `temperature_k` is recorded in the result but does not enter the Langmuir
/// form; the thermal swing is captured by the cycle count.
pub fn simulate_performance(
    material: &MaterialProperties,
    humidity: &[f64],
    temperature_k: f64,
) -> IsothermResult {
    let q_max = material.max_water_uptake
        * (1.0 + HYDROPHILICITY_CAPACITY_BOOST * material.hydrophilicity);
    let k = EQUILIBRIUM_CONSTANT_SCALE
        * material.hydrophilicity
        * (material.surface_area_m2g / REFERENCE_SURFACE_AREA_M2G);

    let water_uptake = langmuir_curve(humidity, q_max, k);

    let mean_uptake = if water_uptake.is_empty() {
        0.0
    } else {
        water_uptake.iter().sum::<f64>() / water_uptake.len() as f64
    };
    let daily_yield_l_per_kg_day = mean_uptake * CYCLES_PER_DAY;

    IsothermResult {
        humidity: humidity.to_vec(),
        water_uptake,
        daily_yield_l_per_kg_day,
        q_max,
        k,
        temperature_k,
        model: IsothermModel::Langmuir,
    }
}
