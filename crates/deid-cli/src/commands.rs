use std::fs;
use std::path::Path;
use std::time::Instant;

use comfy_table::Table;
use tracing::{info, info_span};

use deid_model::{DeidError, Result, TransformOptions};
use deid_output::anonymized_filename;
use deid_transform::{PHI_KEYWORDS, anonymize_xlsx};

use crate::cli::AnonymizeArgs;
use crate::logging::redact_value;
use crate::summary::apply_table_style;
use crate::types::AnonymizeResult;

/// Upload size ceiling; oversized files are rejected before the
/// transform runs.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

pub fn run_keywords() {
    let mut table = Table::new();
    table.set_header(vec!["Masking keyword"]);
    apply_table_style(&mut table);
    for keyword in PHI_KEYWORDS {
        table.add_row(vec![*keyword]);
    }
    println!("{table}");
}

pub fn run_anonymize(args: &AnonymizeArgs) -> Result<AnonymizeResult> {
    check_upload(&args.input, args.max_bytes)?;

    let span = info_span!("upload", file = %args.input.display());
    let _guard = span.enter();
    if let Some(key) = &args.subject_key {
        info!(
            subject_key = redact_value(key),
            collapse = args.collapse_unkeyed,
            "subject key supplied"
        );
    }

    let bytes = fs::read(&args.input)?;
    let mut options =
        TransformOptions::new().with_collapse_unkeyed_sheets(args.collapse_unkeyed);
    if let Some(key) = &args.subject_key {
        options = options.with_subject_key(key.clone());
    }

    let start = Instant::now();
    let (sanitized, report) = anonymize_xlsx(&bytes, &options)?;

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args.input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    fs::create_dir_all(&output_dir)?;
    let output_path = output_dir.join(anonymized_filename());
    fs::write(&output_path, &sanitized)?;
    info!(
        output = %output_path.display(),
        bytes = sanitized.len(),
        duration_ms = start.elapsed().as_millis(),
        "anonymize complete"
    );

    Ok(AnonymizeResult {
        input: args.input.clone(),
        output_path,
        report,
    })
}

/// Upload boundary: missing files, wrong types and oversized payloads
/// are client faults, rejected before any decoding happens.
fn check_upload(input: &Path, max_bytes: u64) -> Result<()> {
    if !input.is_file() {
        return Err(DeidError::MissingInput);
    }
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DeidError::UnsupportedFileType(extension));
    }
    let size = fs::metadata(input)?.len();
    if size > max_bytes {
        return Err(DeidError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}
