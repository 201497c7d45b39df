pub mod extractor;
pub mod file_magic;
pub mod jwt;
pub mod multipart;
pub mod names;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod subject_scan;
pub mod tabular;
pub mod validate;

pub use extractor::SafeIDI64;
pub use file_magic::{SpreadsheetKind, detect_spreadsheet_kind};
pub use names::normalize_name;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{contains_pattern, escape_like_pattern};
pub use subject_scan::extract_subjects;
