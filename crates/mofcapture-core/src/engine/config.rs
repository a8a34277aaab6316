use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Scoring weight '{0}' must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("Scoring weights must sum to 1.0, got {0}")]
    WeightSum(f64),
}

/// Relative priorities of the four scoring factors.
///
/// The defaults are a deliberate design choice, not a learned model: humidity
/// affinity dominates because the system targets water capture at dry sites,
/// followed by equal thermal and capacity terms and a smaller cost term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub humidity: f64,
    pub thermal: f64,
    pub capacity: f64,
    pub cost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            humidity: 0.3,
            thermal: 0.25,
            capacity: 0.25,
            cost: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeConfig {
    pub weights: ScoringWeights,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }
}

/// Builds an [`OptimizeConfig`], validating any overridden weights.
#[derive(Debug, Default)]
pub struct ScoringConfigBuilder {
    humidity: Option<f64>,
    thermal: Option<f64>,
    capacity: Option<f64>,
    cost: Option<f64>,
}

impl ScoringConfigBuilder {
    const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn humidity_weight(mut self, weight: f64) -> Self {
        self.humidity = Some(weight);
        self
    }
    pub fn thermal_weight(mut self, weight: f64) -> Self {
        self.thermal = Some(weight);
        self
    }
    pub fn capacity_weight(mut self, weight: f64) -> Self {
        self.capacity = Some(weight);
        self
    }
    pub fn cost_weight(mut self, weight: f64) -> Self {
        self.cost = Some(weight);
        self
    }

    pub fn build(self) -> Result<OptimizeConfig, ConfigError> {
        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            humidity: self.humidity.unwrap_or(defaults.humidity),
            thermal: self.thermal.unwrap_or(defaults.thermal),
            capacity: self.capacity.unwrap_or(defaults.capacity),
            cost: self.cost.unwrap_or(defaults.cost),
        };

        let named = [
            ("humidity", weights.humidity),
            ("thermal", weights.thermal),
            ("capacity", weights.capacity),
            ("cost", weights.cost),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight(name));
            }
        }

        let sum = weights.humidity + weights.thermal + weights.capacity + weights.cost;
        if (sum - 1.0).abs() > Self::WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }

        Ok(OptimizeConfig { weights })
    }
}
