use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsothermError {
    #[error("Exponent parameter '{param}' of the {model} isotherm must be non-zero")]
    ZeroExponent {
        model: &'static str,
        param: &'static str,
    },
}

/// Langmuir isotherm: `q = q_max * K * P / (1 + K * P)`.
///
/// For `q_max >= 0` and `k >= 0` the curve passes through the origin, is
/// non-decreasing in `p`, and is bounded above by `q_max`. Callers must
/// guarantee `p >= 0`; the denominator only vanishes at `k * p = -1`, which
/// cannot occur for non-negative inputs.
#[inline]
pub fn langmuir(p: f64, q_max: f64, k: f64) -> f64 {
    (q_max * k * p) / (1.0 + k * p)
}

/// Element-wise Langmuir uptake over a humidity sequence.
pub fn langmuir_curve(pressures: &[f64], q_max: f64, k: f64) -> Vec<f64> {
    pressures.iter().map(|&p| langmuir(p, q_max, k)).collect()
}

/// Freundlich isotherm: `q = K_f * P^(1/n)`.
///
/// Undefined for `n = 0`. Callers must guarantee `p >= 0`.
#[inline]
pub fn freundlich(p: f64, k_f: f64, n: f64) -> Result<f64, IsothermError> {
    if n == 0.0 {
        return Err(IsothermError::ZeroExponent {
            model: "Freundlich",
            param: "n",
        });
    }
    Ok(k_f * p.powf(1.0 / n))
}

/// Toth isotherm: `q = q_max * (b * P) / (1 + (b * P)^t)^(1/t)`.
///
/// Undefined for `t = 0`. Callers must guarantee `p >= 0`.
#[inline]
pub fn toth(p: f64, q_max: f64, b: f64, t: f64) -> Result<f64, IsothermError> {
    if t == 0.0 {
        return Err(IsothermError::ZeroExponent {
            model: "Toth",
            param: "t",
        });
    }
    let bp = b * p;
    Ok(q_max * bp / (1.0 + bp.powf(t)).powf(1.0 / t))
}
