//! 온도 구간에 대한 포화압력 곡선(온도/압력 오프셋 포함).
//!
//! Region 4 밖의 온도는 실패하지 않고 임계점으로 고정된다. 374 °C를 넘으면
//! 결과는 물리적 압력이 아니라 평평한 pc이며, 가파른 "Psat - 110 °C" 곡선은
//! AN/GV 구간 안에서 이 값에 닿는다.

use serde::{Deserialize, Serialize};

use super::if97::{SaturationCorrelation, T_CRIT_K, T_MIN_K};
use crate::units::{celsius_to_kelvin, mpa_to_bar};

/// 포화수.
pub const QUALITY_LIQUID: f64 = 0.0;

/// 포화압력 조회 전후에 적용하는 오프셋.
///
/// `delta_t_c`는 조회 전에 온도에서 뺀다. 즉 `-110`이면 110 °C 높은 온도의
/// 포화압력을 읽는다. `delta_p_bar`는 결과 압력에 더한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationOffset {
    pub delta_t_c: f64,
    pub delta_p_bar: f64,
}

impl SaturationOffset {
    pub const NONE: SaturationOffset = SaturationOffset {
        delta_t_c: 0.0,
        delta_p_bar: 0.0,
    };

    pub fn temperature(delta_t_c: f64) -> Self {
        Self {
            delta_t_c,
            delta_p_bar: 0.0,
        }
    }

    pub fn pressure(delta_p_bar: f64) -> Self {
        Self {
            delta_t_c: 0.0,
            delta_p_bar,
        }
    }
}

/// °C 입력에 대해 상관식에 넘길 켈빈 온도.
///
/// `[T_MIN_K, T_CRIT_K]` 밖(0 °C 미만 포함)이면 임계 온도가 된다.
pub fn clamped_kelvin(t_c: f64, delta_t_c: f64) -> f64 {
    let k = celsius_to_kelvin(t_c - delta_t_c);
    if (T_MIN_K..=T_CRIT_K).contains(&k) {
        k
    } else {
        T_CRIT_K
    }
}

/// 단일 온도(°C)의 포화압력(bar abs).
pub fn saturation_pressure_bar<C>(correlation: &C, t_c: f64, offset: SaturationOffset) -> f64
where
    C: SaturationCorrelation + ?Sized,
{
    let t_k = clamped_kelvin(t_c, offset.delta_t_c);
    mpa_to_bar(correlation.saturation_pressure_mpa(t_k, QUALITY_LIQUID)) + offset.delta_p_bar
}

/// 각 온도의 포화압력(bar abs). 입력과 순서/길이가 같다.
pub fn saturation_curve<C>(correlation: &C, temps_c: &[f64], offset: SaturationOffset) -> Vec<f64>
where
    C: SaturationCorrelation + ?Sized,
{
    temps_c
        .iter()
        .map(|&t| saturation_pressure_bar(correlation, t, offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_domain_edges() {
        assert_eq!(clamped_kelvin(0.0, 0.0), T_MIN_K);
        assert!((clamped_kelvin(373.946, 0.0) - T_CRIT_K).abs() < 1e-9);
    }

    #[test]
    fn clamp_pins_both_sides_to_critical_point() {
        assert_eq!(clamped_kelvin(-5.0, 0.0), T_CRIT_K);
        assert_eq!(clamped_kelvin(10.0, 20.0), T_CRIT_K);
        assert_eq!(clamped_kelvin(300.0, -110.0), T_CRIT_K);
    }

    #[test]
    fn temperature_offset_is_subtracted() {
        let k = clamped_kelvin(200.0, -110.0);
        assert!((k - 583.15).abs() < 1e-9);
    }
}
