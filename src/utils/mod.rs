pub mod coerce;
pub mod validation;
