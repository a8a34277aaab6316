//! Temperature-swing simulation and regeneration-temperature optimization.

use crate::core::isotherm::models::langmuir;
use crate::core::isotherm::simulate::CYCLES_PER_DAY;
use crate::core::models::material::MaterialProperties;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nominal water capacity of a saturated bed [kg water / kg sorbent].
const NOMINAL_CAPACITY_KG_PER_KG: f64 = 0.3;

/// Langmuir equilibrium constant of the swing model's uptake estimate.
const SWING_EQUILIBRIUM_CONSTANT: f64 = 5.0;

/// Risk bands over the ratio `regeneration_temp_k / thermal_stability_k`.
/// Below [`SAFE_TEMP_RATIO`] degradation is negligible; between the two
/// bounds it is measurable; above [`MODERATE_TEMP_RATIO`] the framework is
/// at serious risk of collapse.
const SAFE_TEMP_RATIO: f64 = 0.8;
const MODERATE_TEMP_RATIO: f64 = 0.9;
const RISK_LOW: f64 = 0.1;
const RISK_MODERATE: f64 = 0.5;
const RISK_HIGH: f64 = 0.9;

/// Sweep parameters of [`optimize_regeneration_temp`]: candidates start
/// at `ambient + 30 K`, advance in 10 K steps, and stop at 85% of the
/// material's thermal stability limit.
const SWEEP_MIN_OFFSET_K: f64 = 30.0;
const SWEEP_STEP_K: f64 = 10.0;
const SWEEP_STABILITY_MARGIN: f64 = 0.85;

/// Highest risk score still considered operable during optimization.
const ACCEPTABLE_RISK: f64 = 0.5;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermalError {
    #[error("Thermal property '{field}' must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Thermal property '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error(
        "No safe regeneration window: sweep starts at {sweep_min_k} K but the \
         stability margin caps it at {sweep_max_k} K"
    )]
    NoSafeWindow { sweep_min_k: f64, sweep_max_k: f64 },
}

/// Thermophysical properties of a packed sorbent bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalProperties {
    /// Bed thermal conductivity [W/(m·K)].
    pub thermal_conductivity_w_mk: f64,
    /// Specific heat capacity [J/(kg·K)].
    pub specific_heat_j_kgk: f64,
    /// Bed density [kg/m³].
    pub density_kg_m3: f64,
    /// Decomposition onset temperature [K].
    pub thermal_stability_k: f64,
    /// Heat of water adsorption [kJ/mol].
    pub heat_of_adsorption_kj_mol: f64,
}

impl ThermalProperties {
    /// Thermal properties for a material from the feature table.
    ///
    /// The feature table only carries the stability limit; conductivity,
    /// heat capacity, density and heat of adsorption fall back to values
    /// typical of a MOF powder bed.
    pub fn for_material(material: &MaterialProperties) -> Self {
        Self {
            thermal_conductivity_w_mk: 0.5,
            specific_heat_j_kgk: 1000.0,
            density_kg_m3: 600.0,
            thermal_stability_k: material.thermal_stability_k,
            heat_of_adsorption_kj_mol: 45.0,
        }
    }

    pub fn validate(&self) -> Result<(), ThermalError> {
        let positive = [
            ("thermal_conductivity_w_mk", self.thermal_conductivity_w_mk),
            ("specific_heat_j_kgk", self.specific_heat_j_kgk),
            ("density_kg_m3", self.density_kg_m3),
            ("thermal_stability_k", self.thermal_stability_k),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ThermalError::NonPositive { field, value });
            }
        }
        if self.heat_of_adsorption_kj_mol < 0.0 {
            return Err(ThermalError::Negative {
                field: "heat_of_adsorption_kj_mol",
                value: self.heat_of_adsorption_kj_mol,
            });
        }
        Ok(())
    }
}

/// One operating point of the day/night capture cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingConditions {
    pub ambient_temp_k: f64,
    pub regeneration_temp_k: f64,
    /// Relative humidity during the adsorption half-cycle (0-1).
    pub humidity: f64,
    pub pressure_atm: f64,
    pub cycle_time_s: f64,
}

impl Default for OperatingConditions {
    fn default() -> Self {
        Self {
            ambient_temp_k: 298.0,
            regeneration_temp_k: 373.0,
            humidity: 0.4,
            pressure_atm: 1.0,
            // Four capture cycles per day.
            cycle_time_s: 21_600.0,
        }
    }
}

/// Outcome of one adsorb/heat/desorb cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwingResult {
    /// Water released per cycle [kg water / kg sorbent].
    pub water_yield_kg_per_kg: f64,
    /// Sensible plus adsorption heat demanded by the swing.
    pub energy_consumption_kj: f64,
    /// Peak bed temperature reached during regeneration [K].
    pub max_temperature_k: f64,
    /// Water yield per unit heating energy; zero when the swing demands no
    /// net heating.
    pub thermal_efficiency: f64,
    /// Degradation risk of operating at the regeneration temperature (0-1).
    pub risk_score: f64,
}

impl SwingResult {
    /// Per-day yield, assuming the swing repeats every cycle.
    pub fn daily_yield_kg_per_kg(&self) -> f64 {
        self.water_yield_kg_per_kg * CYCLES_PER_DAY
    }
}

fn risk_band(temp_ratio: f64) -> f64 {
    if temp_ratio < SAFE_TEMP_RATIO {
        RISK_LOW
    } else if temp_ratio < MODERATE_TEMP_RATIO {
        RISK_MODERATE
    } else {
        RISK_HIGH
    }
}

/// Simulates one temperature swing of a sorbent bed.
///
/// The bed saturates at ambient humidity following a Langmuir uptake curve,
/// then releases its load when heated from `ambient_temp_k` to
/// `regeneration_temp_k`. The energy demand is the sensible heat of that
/// swing plus the heat of adsorption; the efficiency divides yield by that
/// demand and falls to zero when the swing demands no net heating.
pub fn simulate_temperature_swing(
    properties: &ThermalProperties,
    conditions: &OperatingConditions,
) -> Result<SwingResult, ThermalError> {
    properties.validate()?;

    let delta_t = conditions.regeneration_temp_k - conditions.ambient_temp_k;
    let energy_consumption_kj =
        properties.specific_heat_j_kgk * delta_t + properties.heat_of_adsorption_kj_mol;

    let uptake_fraction = langmuir(conditions.humidity, 1.0, SWING_EQUILIBRIUM_CONSTANT);
    let water_yield_kg_per_kg = NOMINAL_CAPACITY_KG_PER_KG * uptake_fraction;

    let thermal_efficiency = if energy_consumption_kj > 0.0 {
        water_yield_kg_per_kg / energy_consumption_kj
    } else {
        0.0
    };

    let temp_ratio = conditions.regeneration_temp_k / properties.thermal_stability_k;

    Ok(SwingResult {
        water_yield_kg_per_kg,
        energy_consumption_kj,
        max_temperature_k: conditions.regeneration_temp_k,
        thermal_efficiency,
        risk_score: risk_band(temp_ratio),
    })
}

/// Finds the regeneration temperature with the best thermal efficiency.
///
/// Candidates run from `ambient + 30 K` to 85% of the stability limit in
/// 10 K steps; candidates whose risk score reaches [`ACCEPTABLE_RISK`] are
/// skipped. Returns the input conditions with `regeneration_temp_k`
/// replaced by the winner, or the original temperature when no candidate
/// improves on zero efficiency. Errors when the stability margin leaves no
/// sweep range at all.
pub fn optimize_regeneration_temp(
    properties: &ThermalProperties,
    conditions: &OperatingConditions,
) -> Result<OperatingConditions, ThermalError> {
    properties.validate()?;

    let sweep_min = conditions.ambient_temp_k + SWEEP_MIN_OFFSET_K;
    let sweep_max = properties.thermal_stability_k * SWEEP_STABILITY_MARGIN;
    if sweep_min >= sweep_max {
        return Err(ThermalError::NoSafeWindow {
            sweep_min_k: sweep_min,
            sweep_max_k: sweep_max,
        });
    }

    let mut best_temp = conditions.regeneration_temp_k;
    let mut best_efficiency = 0.0;

    let mut candidate_temp = sweep_min;
    while candidate_temp < sweep_max {
        let candidate = OperatingConditions {
            regeneration_temp_k: candidate_temp,
            ..conditions.clone()
        };
        let result = simulate_temperature_swing(properties, &candidate)?;
        if result.risk_score < ACCEPTABLE_RISK && result.thermal_efficiency > best_efficiency {
            best_efficiency = result.thermal_efficiency;
            best_temp = candidate_temp;
        }
        candidate_temp += SWEEP_STEP_K;
    }

    Ok(OperatingConditions {
        regeneration_temp_k: best_temp,
        ..conditions.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn reference_properties() -> ThermalProperties {
        ThermalProperties {
            thermal_conductivity_w_mk: 0.5,
            specific_heat_j_kgk: 1000.0,
            density_kg_m3: 600.0,
            thermal_stability_k: 573.0,
            heat_of_adsorption_kj_mol: 45.0,
        }
    }

    #[test]
    fn swing_matches_the_closed_form() {
        let conditions = OperatingConditions::default();
        let result =
            simulate_temperature_swing(&reference_properties(), &conditions).unwrap();

        // Heating: 1000 * (373 - 298) + 45.
        assert!(f64_approx_equal(result.energy_consumption_kj, 75_045.0));
        // Uptake at RH 0.4: 5 * 0.4 / (1 + 5 * 0.4) = 2/3.
        assert!(f64_approx_equal(
            result.water_yield_kg_per_kg,
            0.3 * 2.0 / 3.0
        ));
        assert!(f64_approx_equal(
            result.thermal_efficiency,
            0.2 / 75_045.0
        ));
        assert!(f64_approx_equal(result.max_temperature_k, 373.0));
        // 373 / 573 < 0.8.
        assert!(f64_approx_equal(result.risk_score, 0.1));
    }

    #[test]
    fn daily_yield_cycles_the_swing_four_times() {
        let result =
            simulate_temperature_swing(&reference_properties(), &OperatingConditions::default())
                .unwrap();
        assert!(f64_approx_equal(
            result.daily_yield_kg_per_kg(),
            result.water_yield_kg_per_kg * 4.0
        ));
    }

    #[test]
    fn risk_steps_up_through_the_temperature_bands() {
        let properties = reference_properties();
        let mut conditions = OperatingConditions::default();

        conditions.regeneration_temp_k = 0.85 * properties.thermal_stability_k;
        let moderate = simulate_temperature_swing(&properties, &conditions).unwrap();
        assert!(f64_approx_equal(moderate.risk_score, 0.5));

        conditions.regeneration_temp_k = 0.95 * properties.thermal_stability_k;
        let high = simulate_temperature_swing(&properties, &conditions).unwrap();
        assert!(f64_approx_equal(high.risk_score, 0.9));
    }

    #[test]
    fn efficiency_is_zero_without_net_heating() {
        let conditions = OperatingConditions {
            ambient_temp_k: 373.0,
            regeneration_temp_k: 298.0,
            ..OperatingConditions::default()
        };
        let result = simulate_temperature_swing(&reference_properties(), &conditions).unwrap();

        assert!(result.energy_consumption_kj < 0.0);
        assert!(f64_approx_equal(result.thermal_efficiency, 0.0));
    }

    #[test]
    fn optimizer_picks_the_coolest_safe_candidate() {
        // Yield is temperature-independent, so efficiency falls with the
        // swing size and the first candidate wins.
        let conditions = OperatingConditions::default();
        let optimized =
            optimize_regeneration_temp(&reference_properties(), &conditions).unwrap();

        assert!(f64_approx_equal(optimized.regeneration_temp_k, 328.0));
        assert!(f64_approx_equal(optimized.ambient_temp_k, 298.0));

        let result = simulate_temperature_swing(&reference_properties(), &optimized).unwrap();
        assert!(result.risk_score < 0.5);
        assert!(result.thermal_efficiency > 0.0);
    }

    #[test]
    fn optimizer_stays_below_the_stability_margin() {
        let properties = reference_properties();
        let optimized =
            optimize_regeneration_temp(&properties, &OperatingConditions::default()).unwrap();

        assert!(optimized.regeneration_temp_k > 298.0);
        assert!(optimized.regeneration_temp_k < 0.85 * properties.thermal_stability_k);
    }

    #[test]
    fn fragile_framework_leaves_no_sweep_window() {
        let mut properties = reference_properties();
        properties.thermal_stability_k = 300.0;

        let result =
            optimize_regeneration_temp(&properties, &OperatingConditions::default());
        assert!(matches!(result, Err(ThermalError::NoSafeWindow { .. })));
    }

    #[test]
    fn non_positive_specific_heat_is_rejected() {
        let mut properties = reference_properties();
        properties.specific_heat_j_kgk = 0.0;

        let result =
            simulate_temperature_swing(&properties, &OperatingConditions::default());
        assert!(matches!(
            result,
            Err(ThermalError::NonPositive { field, .. }) if field == "specific_heat_j_kgk"
        ));
    }

    #[test]
    fn material_defaults_carry_the_stability_limit_over() {
        let material = MaterialProperties {
            surface_area_m2g: 1500.0,
            pore_volume_cm3g: 0.8,
            hydrophilicity: 0.7,
            max_water_uptake: 0.4,
            thermal_stability_k: 650.0,
            cost_per_kg: 40.0,
        };

        let properties = ThermalProperties::for_material(&material);
        assert!(f64_approx_equal(properties.thermal_stability_k, 650.0));
        assert!(properties.validate().is_ok());
    }
}
