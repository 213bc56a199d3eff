//! Workbook encoding: sanitized sheets in, downloadable bytes out.

pub mod naming;
pub mod xlsx;

pub use naming::{OUTPUT_EXTENSION, anonymized_filename, anonymized_filename_at};
pub use xlsx::encode_workbook;
