use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// The six visible columns of the ledger, in display/export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Date,
    City,
    Km,
    WorkingPayment,
    ExtraPayment,
    TotalPayment,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Date,
        Field::City,
        Field::Km,
        Field::WorkingPayment,
        Field::ExtraPayment,
        Field::TotalPayment,
    ];

    /// Column header as written in the export file.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::City => "City",
            Field::Km => "KM",
            Field::WorkingPayment => "Working Payment",
            Field::ExtraPayment => "Extra Payment",
            Field::TotalPayment => "Total Payment",
        }
    }

    /// Short name used by the interactive shell.
    pub fn short(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::City => "city",
            Field::Km => "km",
            Field::WorkingPayment => "working",
            Field::ExtraPayment => "extra",
            Field::TotalPayment => "total",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::Km | Field::WorkingPayment | Field::ExtraPayment | Field::TotalPayment
        )
    }

    /// Helper: header or short alias, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim().to_lowercase().replace(['_', '-'], " ");
        match n.as_str() {
            "date" | "day" => Some(Field::Date),
            "city" | "location" => Some(Field::City),
            "km" | "distance" => Some(Field::Km),
            "working payment" | "working" | "work" => Some(Field::WorkingPayment),
            "extra payment" | "extra" => Some(Field::ExtraPayment),
            "total payment" | "total" => Some(Field::TotalPayment),
            _ => None,
        }
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| AppError::InvalidField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
