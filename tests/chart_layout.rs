//! 기본 운전 영역으로 만든 그림 내용.
use socks_diagram::app;
use socks_diagram::chart::{layout, Layer, LineStyle};
use socks_diagram::config::Config;
use socks_diagram::i18n::Translator;

fn figure(lang: &str) -> socks_diagram::chart::Figure {
    let cfg = Config::default();
    let env = app::compute(&cfg);
    layout(&env, &cfg.chart, &Translator::new(lang))
}

#[test]
fn axes_follow_chart_config() {
    let fig = figure("fr");
    assert_eq!(fig.x_range, (0.0, 350.0));
    assert_eq!(fig.y_range, (0.0, 160.0));
    assert_eq!(fig.size_px, (1024, 768));
    assert_eq!(fig.title, "Diagramme Pression, température");
    assert_eq!(fig.y_desc, "Pression (bar abs.)");
}

#[test]
fn all_curves_are_plotted() {
    let fig = figure("fr");
    assert_eq!(fig.series.len(), 7);
    let dashed: Vec<_> = fig
        .series
        .iter()
        .filter(|s| s.style == LineStyle::Dashed)
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(dashed, ["Courbe de saturation", "NPSH approximation"]);
    assert_eq!(fig.series[0].points.len(), 296);
    assert_eq!(fig.series[0].points[0].0, 10.0);
}

#[test]
fn annotation_rectangles() {
    let fig = figure("fr");
    assert_eq!(fig.rectangles.len(), 2);
    let api = fig.rectangles[0].rect;
    assert_eq!((api.x, api.y, api.width, api.height), (10.0, 0.0, 50.0, 5.0));
    let conn = fig.rectangles[1].rect;
    assert_eq!((conn.x, conn.y, conn.width, conn.height), (160.0, 27.0, 20.0, 4.0));
}

#[test]
fn reference_lines_close_the_bands() {
    let fig = figure("fr");
    assert_eq!(fig.ref_lines.len(), 5);

    let horizontal = &fig.ref_lines[0];
    assert_eq!(horizontal.from, (0.0, 155.0));
    assert_eq!(horizontal.to, (350.0, 155.0));
    assert_eq!(horizontal.label.as_deref(), Some("155 bar"));
    assert_eq!(horizontal.style, LineStyle::Dashed);

    let rp_edge = &fig.ref_lines[1];
    assert_eq!(rp_edge.from, (297.0, 0.0));
    assert_eq!(rp_edge.to, (297.0, 200.0));

    let rra_start = &fig.ref_lines[2];
    assert_eq!(rra_start.from, (10.0, 5.0));
    assert_eq!(rra_start.to, (10.0, 31.0));

    let angv_start = &fig.ref_lines[3];
    assert_eq!(angv_start.from.0, 160.0);
    assert_eq!(angv_start.from.1, 25.0);

    let angv_end = &fig.ref_lines[4];
    assert_eq!(angv_end.from.0, 297.0);
    assert_eq!(angv_end.to.1, 155.0);
    assert!(angv_end.from.1 < angv_end.to.1);
}

#[test]
fn zone_labels_sit_inside_their_zones() {
    let cfg = Config::default();
    let env = app::compute(&cfg);
    let fig = layout(&env, &cfg.chart, &Translator::new("fr"));
    assert_eq!(fig.labels.len(), 2);

    let rra = &fig.labels[0];
    assert_eq!(rra.text, "AN/RRA");
    let (t, p) = rra.at;
    let i = env.rra_min.temps_c.iter().position(|&x| x == t).expect("in RRA band");
    assert!(env.rra_min.pressures_bar[i] < p && p < env.rra_max.pressures_bar[i]);

    let angv = &fig.labels[1];
    assert_eq!(angv.text, "AN/GV");
    let (t, p) = angv.at;
    let i = env.angv_min.temps_c.iter().position(|&x| x == t).expect("in AN/GV band");
    assert!(env.angv_min.pressures_bar[i] < p && p < env.angv_max.pressures_bar[i]);
}

#[test]
fn english_labels() {
    let fig = figure("en");
    assert_eq!(fig.title, "Pressure-temperature diagram");
    assert_eq!(fig.series[0].label, "Saturation curve");
    assert_eq!(fig.labels[1].text, "AN/GV");
}

#[test]
fn curves_are_drawn_over_reference_lines() {
    let order = Layer::BACK_TO_FRONT;
    let pos = |layer| order.iter().position(|&l| l == layer).expect("layer");
    assert!(pos(Layer::RefLines) < pos(Layer::Series));
    assert!(pos(Layer::Rectangles) < pos(Layer::Series));
    assert_eq!(order.last(), Some(&Layer::Labels));

    // the RP curve sits exactly on the 155 bar line
    let fig = figure("fr");
    let rp = fig.series.last().expect("rp series");
    let cap = &fig.ref_lines[0];
    assert!(rp.points.iter().all(|&(_, p)| p == cap.from.1));
}
