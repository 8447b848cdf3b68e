pub mod coerce;
pub mod summary;
pub mod totals;
