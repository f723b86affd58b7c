pub mod fields;
pub mod json;
pub mod spreadsheet;

pub use fields::parse_flexible_date;
pub use json::{export_json, import_json};
pub use spreadsheet::{export_csv, import_csv};
