use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::envelope::{Bound, Step, TemperatureRange};
use crate::steam::{CorrelationKind, SaturationOffset};

/// 구간 경계로 허용하는 온도 범위(°C).
pub const BAND_MIN_C: i32 = -273;
pub const BAND_MAX_C: i32 = 2000;

/// 다이어그램의 온도 구간(°C, 반개구간).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bands {
    /// 전체 구간. 오프셋 없는 포화 곡선에 쓴다.
    pub full: TemperatureRange,
    /// 잔열제거계통 정상 정지(AN/RRA).
    pub rra: TemperatureRange,
    /// 증기발생기 정상 정지(AN/GV).
    pub angv: TemperatureRange,
    /// 출력 운전(RP).
    pub rp: TemperatureRange,
}

impl Default for Bands {
    fn default() -> Self {
        Self {
            full: TemperatureRange::new(10, 306),
            rra: TemperatureRange::new(10, 160),
            angv: TemperatureRange::new(160, 297),
            rp: TemperatureRange::new(297, 306),
        }
    }
}

/// 구간별 압력 한계(bar abs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub rra_max_bar: f64,
    pub rp_bar: f64,
    pub rra_min_steps: Vec<Step>,
    /// 점선 NPSH 근사 곡선의 오프셋.
    pub npsh_margin: SaturationOffset,
    pub angv_ceiling: Bound,
    pub angv_floor: Bound,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            rra_max_bar: 31.0,
            rp_bar: 155.0,
            rra_min_steps: vec![
                Step {
                    from_c: 10.0,
                    bar: 5.0,
                },
                Step {
                    from_c: 70.0,
                    bar: 25.0,
                },
            ],
            npsh_margin: SaturationOffset::pressure(17.0),
            angv_ceiling: Bound {
                offsets: vec![
                    SaturationOffset::temperature(-110.0),
                    SaturationOffset::pressure(110.0),
                ],
                constant_bar: 155.0,
            },
            angv_floor: Bound {
                offsets: vec![
                    SaturationOffset::temperature(-30.0),
                    SaturationOffset::pressure(17.0),
                ],
                constant_bar: 27.0,
            },
        }
    }
}

/// 데이터 좌표의 축 정렬 사각형: 왼쪽 아래 꼭짓점 + 크기.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 데이터 좌표의 텍스트 기준점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// 그림 크기와 주석 배치.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// RP 전환 지점 점선 수직선의 윗끝.
    pub transition_line_top_bar: f64,
    pub api_domain: RectSpec,
    pub connection_zone: RectSpec,
    pub rra_label: Anchor,
    pub angv_label: Anchor,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_px: 1024,
            height_px: 768,
            x_range: (0.0, 350.0),
            y_range: (0.0, 160.0),
            transition_line_top_bar: 200.0,
            api_domain: RectSpec {
                x: 10.0,
                y: 0.0,
                width: 50.0,
                height: 5.0,
            },
            connection_zone: RectSpec {
                x: 160.0,
                y: 27.0,
                width: 20.0,
                height: 4.0,
            },
            rra_label: Anchor { x: 30.0, y: 20.0 },
            angv_label: Anchor { x: 200.0, y: 80.0 },
        }
    }
}

/// 다이어그램 설정. 시작 시 한 번 로드한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `fr`, `en`, `auto` 중 하나.
    pub language: String,
    pub correlation: CorrelationKind,
    pub bands: Bands,
    pub limits: Limits,
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            correlation: CorrelationKind::default(),
            bands: Bands::default(),
            limits: Limits::default(),
            chart: ChartConfig::default(),
        }
    }
}

/// 설정 로드/검증/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 다이어그램을 만들 수 없는 값
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// `path`에서 설정을 로드한다. `None`이면 내장 기본값을 쓴다.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let cfg = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Config::from_toml(&content)?
        }
        None => Config::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    /// TOML 문서를 파싱한다. 빠진 키는 기본값을 유지한다.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 TOML로 `path`에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// 운전 영역이나 차트가 처리할 수 없는 값을 거부한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = [
            ("full", self.bands.full),
            ("rra", self.bands.rra),
            ("angv", self.bands.angv),
            ("rp", self.bands.rp),
        ];
        for (name, band) in bands {
            if band.start < BAND_MIN_C || band.end > BAND_MAX_C {
                return Err(ConfigError::Invalid(format!(
                    "band `{name}` ({}..{}) leaves {BAND_MIN_C}..{BAND_MAX_C} °C",
                    band.start, band.end
                )));
            }
            if band.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "band `{name}` is empty ({}..{})",
                    band.start, band.end
                )));
            }
        }

        let steps = &self.limits.rra_min_steps;
        if steps.is_empty() {
            return Err(ConfigError::Invalid("rra_min_steps is empty".into()));
        }
        if steps.windows(2).any(|w| w[0].from_c >= w[1].from_c) {
            return Err(ConfigError::Invalid(
                "rra_min_steps must be sorted by strictly increasing from_c".into(),
            ));
        }

        let chart = &self.chart;
        if chart.width_px == 0 || chart.height_px == 0 {
            return Err(ConfigError::Invalid("image size must be positive".into()));
        }
        if chart.x_range.0 >= chart.x_range.1 || chart.y_range.0 >= chart.y_range.1 {
            return Err(ConfigError::Invalid("axis ranges must be increasing".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().expect("default config");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = Config::from_toml("[limits]\nrp_bar = 150.0\n").expect("parse");
        assert_eq!(cfg.limits.rp_bar, 150.0);
        assert_eq!(cfg.limits.rra_max_bar, 31.0);
        assert_eq!(cfg.bands, Bands::default());
    }
}
