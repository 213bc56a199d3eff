use std::path::PathBuf;

use deid_model::TransformReport;

/// Outcome of one `anonymize` invocation.
#[derive(Debug)]
pub struct AnonymizeResult {
    pub input: PathBuf,
    pub output_path: PathBuf,
    pub report: TransformReport,
}
