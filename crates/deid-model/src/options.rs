//! Caller-supplied configuration for one transform.

use serde::{Deserialize, Serialize};

/// Options controlling how sheets without an identifier column are
/// masked.
///
/// By default every data row in such a sheet receives a fresh random
/// identity, keeping rows unlinkable. When the caller supplies an
/// external subject key for the whole upload (e.g. a wallet-style
/// string) *and* sets `collapse_unkeyed_sheets`, those sheets collapse
/// to the single identity derived from that key instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformOptions {
    /// External subject key for the whole upload. Only consulted when
    /// `collapse_unkeyed_sheets` is set.
    pub subject_key: Option<String>,

    /// Collapse sheets without an identifier column to the single
    /// identity derived from `subject_key` instead of one random
    /// identity per row.
    pub collapse_unkeyed_sheets: bool,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_subject_key(mut self, key: impl Into<String>) -> Self {
        self.subject_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_collapse_unkeyed_sheets(mut self, enable: bool) -> Self {
        self.collapse_unkeyed_sheets = enable;
        self
    }

    /// The whole-sheet single-identity path applies only when the caller
    /// both supplied a key and asked for the collapse. Neither alone
    /// changes the per-row-random behavior.
    pub fn collapse_key(&self) -> Option<&str> {
        if self.collapse_unkeyed_sheets {
            self.subject_key.as_deref()
        } else {
            None
        }
    }
}
