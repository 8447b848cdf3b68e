pub mod cell;
pub mod day_record;
pub mod field;
pub mod record_set;
pub mod summary;

pub use cell::CellValue;
pub use day_record::DayRecord;
pub use field::Field;
pub use record_set::RecordSet;
pub use summary::Summary;
