//! 가압경수로 1차 계통의 압력-온도 운전 영역("socks") 다이어그램.
//! IAPWS-IF97 포화선을 기반으로 한다.

pub mod app;
pub mod chart;
pub mod config;
pub mod envelope;
pub mod i18n;
pub mod steam;
pub mod units;
