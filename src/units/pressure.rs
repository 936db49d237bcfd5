const BAR_PER_MPA: f64 = 10.0;

/// MPa(IF97 기본 단위)를 bar로 변환한다.
pub fn mpa_to_bar(p_mpa: f64) -> f64 {
    p_mpa * BAR_PER_MPA
}

/// bar를 MPa로 변환한다.
pub fn bar_to_mpa(p_bar: f64) -> f64 {
    p_bar / BAR_PER_MPA
}
