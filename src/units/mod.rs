//! IF97 호출 전후에 쓰는 스칼라 단위 변환.

pub mod pressure;
pub mod temperature;

pub use pressure::{bar_to_mpa, mpa_to_bar};
pub use temperature::{celsius_to_kelvin, kelvin_to_celsius, ZERO_CELSIUS_K};
