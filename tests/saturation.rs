//! 포화압력 계산: 영역 고정과 오프셋.
use std::cell::RefCell;

use socks_diagram::steam::if97::{P_CRIT_MPA, T_CRIT_K};
use socks_diagram::steam::{
    saturation_curve, saturation_pressure_bar, Region4, SaturationCorrelation, SaturationOffset,
    Seuif97,
};
use socks_diagram::units::celsius_to_kelvin;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// T/100 MPa를 돌려주고 호출을 기록한다.
#[derive(Default)]
struct Fixture {
    calls: RefCell<Vec<(f64, f64)>>,
}

impl SaturationCorrelation for Fixture {
    fn saturation_pressure_mpa(&self, t_k: f64, quality: f64) -> f64 {
        self.calls.borrow_mut().push((t_k, quality));
        t_k / 100.0
    }
}

#[test]
fn boiling_point_is_one_atmosphere() {
    let p = saturation_pressure_bar(&Seuif97, 100.0, SaturationOffset::NONE);
    assert!((p - 1.014).abs() < 0.01, "p={p}");
}

#[test]
fn backends_agree_over_the_diagram_range() {
    let temps: Vec<f64> = (0..=373).map(f64::from).collect();
    let a = saturation_curve(&Seuif97, &temps, SaturationOffset::NONE);
    let b = saturation_curve(&Region4, &temps, SaturationOffset::NONE);
    for ((t, pa), pb) in temps.iter().zip(&a).zip(&b) {
        assert_close(&format!("psat({t})"), *pa, *pb, 1e-6);
    }
}

#[test]
fn in_domain_values_are_the_correlation_result() {
    let temps = [0.0, 10.0, 150.0, 300.0, 373.0];
    let curve = saturation_curve(&Region4, &temps, SaturationOffset::NONE);
    for (t, p) in temps.iter().zip(curve) {
        let expected = Region4.saturation_pressure_mpa(celsius_to_kelvin(*t), 0.0) * 10.0;
        assert_close(&format!("psat({t})"), p, expected, 1e-12);
    }
}

#[test]
fn correlation_is_called_with_saturated_liquid() {
    let fixture = Fixture::default();
    saturation_curve(&fixture, &[20.0, 40.0], SaturationOffset::temperature(-10.0));
    let calls = fixture.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_close("T0", calls[0].0, 303.15, 1e-12);
    assert_close("T1", calls[1].0, 323.15, 1e-12);
    assert!(calls.iter().all(|&(_, x)| x == 0.0));
}

#[test]
fn above_critical_point_returns_critical_pressure_plus_offset() {
    let offset = SaturationOffset {
        delta_t_c: -110.0,
        delta_p_bar: 3.0,
    };
    // 280 + 110 = 390 °C, past 373.946 °C
    let p = saturation_pressure_bar(&Region4, 280.0, offset);
    let critical = Region4.saturation_pressure_mpa(T_CRIT_K, 0.0) * 10.0;
    assert_close("clamped", p, critical + 3.0, 1e-12);

    let p = saturation_pressure_bar(&Seuif97, 280.0, offset);
    assert_close("clamped seuif97", p, P_CRIT_MPA * 10.0 + 3.0, 1e-12);
}

#[test]
fn below_freezing_is_also_pinned_to_critical_point() {
    let fixture = Fixture::default();
    let p = saturation_pressure_bar(&fixture, -1.0, SaturationOffset::NONE);
    assert_close("frozen", p, T_CRIT_K / 10.0, 1e-12);
    let p = saturation_pressure_bar(&fixture, 10.0, SaturationOffset::temperature(30.0));
    assert_close("shifted below 0", p, T_CRIT_K / 10.0, 1e-12);
}

#[test]
fn pressure_offset_is_added_in_bar() {
    let fixture = Fixture::default();
    let base = saturation_pressure_bar(&fixture, 200.0, SaturationOffset::NONE);
    let shifted = saturation_pressure_bar(&fixture, 200.0, SaturationOffset::pressure(17.0));
    assert_close("delta p", shifted - base, 17.0, 1e-12);
}

#[test]
fn curve_keeps_length_and_order() {
    let temps: Vec<f64> = (10..306).map(f64::from).collect();
    let curve = saturation_curve(&Seuif97, &temps, SaturationOffset::NONE);
    assert_eq!(curve.len(), temps.len());
    assert!(curve.windows(2).all(|w| w[0] < w[1]));
}
