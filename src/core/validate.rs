use crate::models::RecordSet;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProblemKind {
    NegativeKm,
    NegativePayment,
}

/// A validation warning with the (0-based) positions of the rows behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub kind: ProblemKind,
    pub rows: Vec<usize>,
}

impl Problem {
    pub fn message(&self) -> &'static str {
        match self.kind {
            ProblemKind::NegativeKm => "Some KM values are negative.",
            ProblemKind::NegativePayment => "Some payment values are negative.",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Look for negative KM and negative payments. Empty result means valid.
///
/// Read-only; malformed cells are read as 0 and never reported here.
pub fn validate(records: &RecordSet) -> Vec<Problem> {
    let mut km_rows = Vec::new();
    let mut pay_rows = Vec::new();

    for (idx, row) in records.iter().enumerate() {
        if row.distance.as_f64() < 0.0 {
            km_rows.push(idx);
        }
        if row.working_payment.as_f64() < 0.0 || row.extra_payment.as_f64() < 0.0 {
            pay_rows.push(idx);
        }
    }

    let mut problems = Vec::new();
    if !km_rows.is_empty() {
        problems.push(Problem {
            kind: ProblemKind::NegativeKm,
            rows: km_rows,
        });
    }
    if !pay_rows.is_empty() {
        problems.push(Problem {
            kind: ProblemKind::NegativePayment,
            rows: pay_rows,
        });
    }
    problems
}
