//! 온도 구간별 운전 영역 경계.
//!
//! 각 한계는 상수, 온도의 계단 함수, 또는 여러 오프셋 포화 곡선과 상수 중
//! 가장 엄격한 값이다.

use serde::{Deserialize, Serialize};

use crate::config::{Bands, Limits};
use crate::steam::{saturation_curve, SaturationCorrelation, SaturationOffset};

/// 정수 온도의 반개구간 `start..end`(°C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub start: i32,
    pub end: i32,
}

impl TemperatureRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        let span = i64::from(self.end) - i64::from(self.start);
        usize::try_from(span).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 구간의 온도를 1 °C 간격 실수로 돌려준다.
    pub fn values(&self) -> Vec<f64> {
        (self.start..self.end).map(f64::from).collect()
    }
}

/// 계단형 한계의 한 단: `from_c`부터 `bar`를 적용한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub from_c: f64,
    pub bar: f64,
}

/// 오프셋 포화 곡선들과 상수의 조합.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub constant_bar: f64,
    pub offsets: Vec<SaturationOffset>,
}

/// 온도와 인덱스가 일치하는 압력 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub temps_c: Vec<f64>,
    pub pressures_bar: Vec<f64>,
}

impl Curve {
    pub fn new(temps_c: Vec<f64>, pressures_bar: Vec<f64>) -> Self {
        debug_assert_eq!(temps_c.len(), pressures_bar.len());
        Self {
            temps_c,
            pressures_bar,
        }
    }

    pub fn len(&self) -> usize {
        self.temps_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temps_c.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temps_c
            .iter()
            .copied()
            .zip(self.pressures_bar.iter().copied())
    }

    pub fn first(&self) -> Option<f64> {
        self.pressures_bar.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.pressures_bar.last().copied()
    }

    /// 압력의 (최소, 최대). 빈 곡선이면 `None`.
    pub fn pressure_span(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let min = self.pressures_bar.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .pressures_bar
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// 다이어그램의 모든 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// 전체 구간의 포화 곡선(오프셋 없음).
    pub saturation: Curve,
    /// AN/GV 구간의 포화압력 + NPSH 여유.
    pub npsh_margin: Curve,
    pub rra_max: Curve,
    pub rra_min: Curve,
    pub angv_max: Curve,
    pub angv_min: Curve,
    pub rp: Curve,
}

/// 구간의 모든 온도에서 같은 값.
pub fn constant_limit(range: TemperatureRange, bar: f64) -> Curve {
    let temps = range.values();
    let pressures = vec![bar; temps.len()];
    Curve::new(temps, pressures)
}

/// 계단형 한계. 첫 단보다 낮은 온도는 첫 단의 값을 쓴다.
///
/// `steps`는 `from_c` 순으로 정렬되어 있어야 한다.
pub fn step_limit(range: TemperatureRange, steps: &[Step]) -> Curve {
    let temps = range.values();
    let pressures = temps
        .iter()
        .map(|&t| {
            steps
                .iter()
                .take_while(|s| s.from_c <= t)
                .last()
                .or_else(|| steps.first())
                .map_or(f64::NAN, |s| s.bar)
        })
        .collect();
    Curve::new(temps, pressures)
}

/// 오프셋 포화 곡선들과 상수의 원소별 최솟값.
pub fn ceiling<C>(correlation: &C, range: TemperatureRange, bound: &Bound) -> Curve
where
    C: SaturationCorrelation + ?Sized,
{
    combine(correlation, range, bound, f64::min)
}

/// 오프셋 포화 곡선들과 상수의 원소별 최댓값.
pub fn floor<C>(correlation: &C, range: TemperatureRange, bound: &Bound) -> Curve
where
    C: SaturationCorrelation + ?Sized,
{
    combine(correlation, range, bound, f64::max)
}

fn combine<C>(
    correlation: &C,
    range: TemperatureRange,
    bound: &Bound,
    pick: fn(f64, f64) -> f64,
) -> Curve
where
    C: SaturationCorrelation + ?Sized,
{
    let temps = range.values();
    let mut pressures = vec![bound.constant_bar; temps.len()];
    for offset in &bound.offsets {
        let curve = saturation_curve(correlation, &temps, *offset);
        for (acc, p) in pressures.iter_mut().zip(curve) {
            *acc = pick(*acc, p);
        }
    }
    Curve::new(temps, pressures)
}

/// 다이어그램의 모든 곡선을 만든다.
pub fn build_envelope<C>(correlation: &C, bands: &Bands, limits: &Limits) -> Envelope
where
    C: SaturationCorrelation + ?Sized,
{
    let full = bands.full.values();
    let saturation = Curve::new(
        full.clone(),
        saturation_curve(correlation, &full, SaturationOffset::NONE),
    );

    let angv = bands.angv.values();
    let npsh_margin = Curve::new(
        angv.clone(),
        saturation_curve(correlation, &angv, limits.npsh_margin),
    );

    Envelope {
        saturation,
        npsh_margin,
        rra_max: constant_limit(bands.rra, limits.rra_max_bar),
        rra_min: step_limit(bands.rra, &limits.rra_min_steps),
        angv_max: ceiling(correlation, bands.angv, &limits.angv_ceiling),
        angv_min: floor(correlation, bands.angv, &limits.angv_floor),
        rp: constant_limit(bands.rp, limits.rp_bar),
    }
}
