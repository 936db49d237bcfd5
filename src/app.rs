use std::path::PathBuf;

use crate::chart::{self, RenderError};
use crate::config::{Config, ConfigError};
use crate::envelope::{build_envelope, Envelope};
use crate::i18n::{keys, Translator};

/// 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 로드/저장/검증 오류
    Config(ConfigError),
    /// 차트 그리기 오류
    Render(RenderError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Render(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        AppError::Render(value)
    }
}

/// 한 번의 실행 옵션(출력 경로, 요약 출력 여부).
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub summary: bool,
}

/// 설정된 상관식으로 운전 영역을 계산한다.
pub fn compute(config: &Config) -> Envelope {
    let correlation = config.correlation.backend();
    build_envelope(&*correlation, &config.bands, &config.limits)
}

/// 곡선마다 한 줄: 이름, 최소/최대 압력.
pub fn summary_lines(envelope: &Envelope, tr: &Translator) -> Vec<String> {
    let curves = [
        (keys::SERIES_SATURATION, &envelope.saturation),
        (keys::SERIES_NPSH, &envelope.npsh_margin),
        (keys::SERIES_RRA_MIN, &envelope.rra_min),
        (keys::SERIES_RRA_MAX, &envelope.rra_max),
        (keys::SERIES_ANGV_MIN, &envelope.angv_min),
        (keys::SERIES_ANGV_MAX, &envelope.angv_max),
        (keys::SERIES_RP, &envelope.rp),
    ];
    let mut lines = vec![tr.t(keys::SUMMARY_HEADING).to_string()];
    for (key, curve) in curves {
        if let Some((min, max)) = curve.pressure_span() {
            lines.push(format!("{:<28} {min:>8.2} {max:>8.2}", tr.t(key)));
        }
    }
    lines
}

/// 다이어그램을 만들어 `opts.output`에 저장한다.
pub fn run(config: &Config, tr: &Translator, opts: &RunOptions) -> Result<(), AppError> {
    let envelope = compute(config);
    if opts.summary {
        for line in summary_lines(&envelope, tr) {
            println!("{line}");
        }
    }
    let figure = chart::layout(&envelope, &config.chart, tr);
    chart::render_to_file(&figure, &opts.output)?;
    println!("{} {}", tr.t(keys::DIAGRAM_WRITTEN), opts.output.display());
    Ok(())
}
