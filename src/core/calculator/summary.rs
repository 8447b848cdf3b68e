use crate::models::{RecordSet, Summary};

/// Sum every numeric column over the current rows.
pub fn summarize(records: &RecordSet) -> Summary {
    records.iter().fold(Summary::default(), |mut acc, row| {
        acc.total_distance += row.distance.as_f64();
        acc.total_working += row.working_payment.as_f64();
        acc.total_extra += row.extra_payment.as_f64();
        acc.total_payment += row.total_payment.as_f64();
        acc
    })
}
