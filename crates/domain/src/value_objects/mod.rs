//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod stop_result;
mod wheelchair_boarding;

pub use coordinates::Coordinates;
pub use stop_result::StopResult;
pub use wheelchair_boarding::WheelchairBoarding;
