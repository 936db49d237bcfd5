//! IAPWS-IF97 Region 4(포화선) 백엔드.
//! 입력: 온도(K), 건도
//! 출력: 포화압력(MPa)

use serde::{Deserialize, Serialize};
use seuif97::{tx, OP};

use crate::units::{kelvin_to_celsius, ZERO_CELSIUS_K};

/// 임계 온도. Region 4의 상한.
pub const T_CRIT_K: f64 = 647.096;
/// 임계 압력.
pub const P_CRIT_MPA: f64 = 22.064;
/// 다이어그램에서 쓰는 Region 4 하한(0 °C).
pub const T_MIN_K: f64 = ZERO_CELSIUS_K;

// IF97 eq. 30 coefficients n1..n10.
const R4_N: [f64; 10] = [
    1_167.052_145_276_7,
    -724_213.167_032_06,
    -17.073_846_940_092,
    12_020.824_702_47,
    -3_232_555.032_233_3,
    14.915_108_613_53,
    -4_823.265_736_159_1,
    405_113.405_420_57,
    -0.238_555_575_678_49,
    650.175_348_447_98,
];

/// 물의 포화압력을 돌려주는 상관식.
///
/// `quality`는 건도(0 = 포화수). 포화선 위에서 압력은 건도와 무관하지만
/// 백엔드는 항상 `(T, x)` 상태 전체를 받는다.
pub trait SaturationCorrelation {
    fn saturation_pressure_mpa(&self, t_k: f64, quality: f64) -> f64;
}

/// seuif97 크레이트에 위임한다(`tx`는 °C 입력).
#[derive(Debug, Clone, Copy, Default)]
pub struct Seuif97;

impl SaturationCorrelation for Seuif97 {
    fn saturation_pressure_mpa(&self, t_k: f64, quality: f64) -> f64 {
        // 647.096 K does not round-trip through °C exactly; the line ends at pc.
        if t_k >= T_CRIT_K {
            return P_CRIT_MPA;
        }
        tx(kelvin_to_celsius(t_k), quality, OP)
    }
}

/// Region 4 포화압력 식(IF97 식 30)을 직접 계산한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Region4;

impl SaturationCorrelation for Region4 {
    fn saturation_pressure_mpa(&self, t_k: f64, _quality: f64) -> f64 {
        let theta = t_k + R4_N[8] / (t_k - R4_N[9]);
        let a = theta * theta + R4_N[0] * theta + R4_N[1];
        let b = R4_N[2] * theta * theta + R4_N[3] * theta + R4_N[4];
        let c = R4_N[5] * theta * theta + R4_N[6] * theta + R4_N[7];
        // disc can dip a hair below zero near the critical point
        let disc = (b * b - 4.0 * a * c).max(0.0);
        (2.0 * c / (-b + disc.sqrt())).powi(4)
    }
}

/// 설정 파일에 적는 백엔드 선택값.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationKind {
    #[default]
    Seuif97,
    Region4,
}

impl CorrelationKind {
    /// 해당 백엔드를 생성한다.
    pub fn backend(self) -> Box<dyn SaturationCorrelation> {
        match self {
            CorrelationKind::Seuif97 => Box::new(Seuif97),
            CorrelationKind::Region4 => Box::new(Region4),
        }
    }
}
