use serde::Serialize;

/// The four monthly sums shown under the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_distance: f64,
    pub total_working: f64,
    pub total_extra: f64,
    pub total_payment: f64,
}
