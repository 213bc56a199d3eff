//! Workbook decoding: uploaded bytes in, ordered sheets of rows out.

pub mod xlsx;

pub use xlsx::decode_workbook;
