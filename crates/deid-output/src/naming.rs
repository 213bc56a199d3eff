use chrono::Utc;

/// Extension of every generated file; the encoder always writes an xlsx
/// container.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// File name for a sanitized download, stamped with the current time.
pub fn anonymized_filename() -> String {
    anonymized_filename_at(Utc::now().timestamp_millis())
}

/// Pure variant for callers that stamp their own clock.
pub fn anonymized_filename_at(epoch_millis: i64) -> String {
    format!("phi_anonymized_{epoch_millis}.{OUTPUT_EXTENSION}")
}
