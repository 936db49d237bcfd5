//! plotters로 [`Figure`]를 그린다. 확장자에 따라 PNG 또는 SVG.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

use super::{Figure, Layer, LineStyle};

const PALETTE: [RGBColor; 7] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
];

/// 그리기 오류. 백엔드 오류는 문자열로 보관한다.
#[derive(Debug)]
pub enum RenderError {
    Drawing(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Drawing(msg) => write!(f, "drawing failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

fn drawing_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(e.to_string())
}

/// 파일 확장자로 고른 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg`(대소문자 무관)는 SVG, 나머지는 PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// `figure`를 `path`에 렌더링한다.
pub fn render_to_file(figure: &Figure, path: &Path) -> Result<ImageFormat, RenderError> {
    let format = ImageFormat::from_path(path);
    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, figure.size_px).into_drawing_area();
            draw(figure, &root)?;
            root.present().map_err(drawing_err)?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, figure.size_px).into_drawing_area();
            draw(figure, &root)?;
            root.present().map_err(drawing_err)?;
        }
    }
    Ok(format)
}

fn draw<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(drawing_err)?;

    let (x0, x1) = figure.x_range;
    let (y0, y1) = figure.y_range;
    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(drawing_err)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_desc.clone())
        .y_desc(figure.y_desc.clone())
        .axis_desc_style(("sans-serif", 15))
        .draw()
        .map_err(drawing_err)?;

    for layer in Layer::BACK_TO_FRONT {
        match layer {
            Layer::Rectangles => draw_rectangles(figure, &mut chart)?,
            Layer::RefLines => draw_ref_lines(figure, &mut chart)?,
            Layer::Series => draw_curves(figure, &mut chart)?,
            Layer::Labels => draw_labels(figure, &mut chart)?,
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing_err)?;

    Ok(())
}

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_curves<DB: DrawingBackend>(
    figure: &Figure,
    chart: &mut Chart<'_, DB>,
) -> Result<(), RenderError> {
    for (i, series) in figure.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let style = color.stroke_width(2);
        let points = series.points.iter().copied();
        let anno = match series.style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, style)),
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 8, 5, style)),
        }
        .map_err(drawing_err)?;
        anno.label(series.label.clone()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }
    Ok(())
}

fn draw_rectangles<DB: DrawingBackend>(
    figure: &Figure,
    chart: &mut Chart<'_, DB>,
) -> Result<(), RenderError> {
    for annotation in &figure.rectangles {
        let r = annotation.rect;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(r.x, r.y), (r.x + r.width, r.y + r.height)],
                BLACK.stroke_width(2),
            )))
            .map_err(drawing_err)?
            .label(annotation.label.clone())
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLACK.stroke_width(2)));
    }
    Ok(())
}

fn draw_ref_lines<DB: DrawingBackend>(
    figure: &Figure,
    chart: &mut Chart<'_, DB>,
) -> Result<(), RenderError> {
    for line in &figure.ref_lines {
        let width = if line.thin { 1 } else { 2 };
        let style = BLACK.stroke_width(width);
        let points = [line.from, line.to];
        let anno = match line.style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, style)),
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 6, 4, style)),
        }
        .map_err(drawing_err)?;
        if let Some(label) = &line.label {
            anno.label(label.clone()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(width))
            });
        }
    }
    Ok(())
}

fn draw_labels<DB: DrawingBackend>(
    figure: &Figure,
    chart: &mut Chart<'_, DB>,
) -> Result<(), RenderError> {
    for label in &figure.labels {
        chart
            .draw_series(std::iter::once(Text::new(
                label.text.clone(),
                label.at,
                ("sans-serif", 16).into_font(),
            )))
            .map_err(drawing_err)?;
    }
    Ok(())
}
