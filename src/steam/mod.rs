//! 물/증기 포화 물성.

pub mod if97;
pub mod saturation;

pub use if97::{CorrelationKind, Region4, SaturationCorrelation, Seuif97};
pub use saturation::{saturation_curve, saturation_pressure_bar, SaturationOffset};
