//! 백엔드와 무관한 socks 다이어그램 기술.
//!
//! [`layout`]이 [`Envelope`]를 [`Figure`]로 바꾸고, [`render`]가 그린다.

pub mod render;

use crate::config::{ChartConfig, RectSpec};
use crate::envelope::{Curve, Envelope};
use crate::i18n::{keys, Translator};

pub use render::{render_to_file, ImageFormat, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// 데이터 좌표(°C, bar abs)의 꺾은선.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
}

/// 두 점을 잇는 기준선.
#[derive(Debug, Clone, PartialEq)]
pub struct RefLine {
    pub label: Option<String>,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub style: LineStyle,
    pub thin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub label: String,
    pub rect: RectSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub at: (f64, f64),
}

/// 그리기 단계. 뒤에 오는 단계가 앞 단계를 덮는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Rectangles,
    RefLines,
    Series,
    Labels,
}

impl Layer {
    /// 뒤에서 앞 순서. 곡선은 기준선 위에 그린다(RP 곡선과 155 bar 선이 겹친다).
    pub const BACK_TO_FRONT: [Layer; 4] = [
        Layer::Rectangles,
        Layer::RefLines,
        Layer::Series,
        Layer::Labels,
    ];
}

/// 차트에 그려지는 모든 요소.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub size_px: (u32, u32),
    pub series: Vec<Series>,
    pub rectangles: Vec<Annotation>,
    pub ref_lines: Vec<RefLine>,
    pub labels: Vec<TextLabel>,
}

fn vertical(
    label: Option<String>,
    x: f64,
    y0: f64,
    y1: f64,
    style: LineStyle,
    thin: bool,
) -> RefLine {
    RefLine {
        label,
        from: (x, y0),
        to: (x, y1),
        style,
        thin,
    }
}

/// `envelope`의 다이어그램을 배치한다.
pub fn layout(envelope: &Envelope, chart: &ChartConfig, tr: &Translator) -> Figure {
    let series_of = |key: &str, curve: &Curve, style: LineStyle| Series {
        label: tr.t(key).to_string(),
        points: curve.points().collect(),
        style,
    };

    let series = vec![
        series_of(keys::SERIES_SATURATION, &envelope.saturation, LineStyle::Dashed),
        series_of(keys::SERIES_NPSH, &envelope.npsh_margin, LineStyle::Dashed),
        series_of(keys::SERIES_RRA_MIN, &envelope.rra_min, LineStyle::Solid),
        series_of(keys::SERIES_RRA_MAX, &envelope.rra_max, LineStyle::Solid),
        series_of(keys::SERIES_ANGV_MAX, &envelope.angv_max, LineStyle::Solid),
        series_of(keys::SERIES_ANGV_MIN, &envelope.angv_min, LineStyle::Solid),
        series_of(keys::SERIES_RP, &envelope.rp, LineStyle::Solid),
    ];

    let rectangles = vec![
        Annotation {
            label: tr.t(keys::RECT_API).to_string(),
            rect: chart.api_domain,
        },
        Annotation {
            label: tr.t(keys::RECT_CONNECTION).to_string(),
            rect: chart.connection_zone,
        },
    ];

    let (x0, x1) = chart.x_range;
    let (y0, _) = chart.y_range;
    let rp_bar = envelope.rp.first().unwrap_or(f64::NAN);
    let rp_start = envelope.rp.temps_c.first().copied().unwrap_or(x1);

    let mut ref_lines = vec![
        RefLine {
            label: Some(format!("{rp_bar} bar")),
            from: (x0, rp_bar),
            to: (x1, rp_bar),
            style: LineStyle::Dashed,
            thin: true,
        },
        vertical(
            None,
            rp_start,
            y0,
            chart.transition_line_top_bar,
            LineStyle::Dashed,
            true,
        ),
    ];

    // Band edges close the zones: RRA start, RRA -> AN/GV, AN/GV -> RP.
    let first_temp = |c: &Curve| c.temps_c.first().copied();
    let edges = [
        (
            keys::LINE_RRA_START,
            first_temp(&envelope.rra_min),
            envelope.rra_min.first(),
            envelope.rra_max.first(),
        ),
        (
            keys::LINE_ANGV_START,
            first_temp(&envelope.angv_max),
            envelope.rra_min.last(),
            envelope.angv_max.first(),
        ),
        (
            keys::LINE_ANGV_END,
            first_temp(&envelope.rp),
            envelope.angv_min.last(),
            envelope.angv_max.last(),
        ),
    ];
    for (key, x, lo, hi) in edges {
        if let (Some(x), Some(lo), Some(hi)) = (x, lo, hi) {
            ref_lines.push(vertical(
                Some(tr.t(key).to_string()),
                x,
                lo,
                hi,
                LineStyle::Solid,
                false,
            ));
        }
    }

    let labels = vec![
        TextLabel {
            text: tr.t(keys::LABEL_RRA).to_string(),
            at: (chart.rra_label.x, chart.rra_label.y),
        },
        TextLabel {
            text: tr.t(keys::LABEL_ANGV).to_string(),
            at: (chart.angv_label.x, chart.angv_label.y),
        },
    ];

    Figure {
        title: tr.t(keys::CHART_TITLE).to_string(),
        x_desc: tr.t(keys::AXIS_X).to_string(),
        y_desc: tr.t(keys::AXIS_Y).to_string(),
        x_range: chart.x_range,
        y_range: chart.y_range,
        size_px: (chart.width_px, chart.height_px),
        series,
        rectangles,
        ref_lines,
        labels,
    }
}
