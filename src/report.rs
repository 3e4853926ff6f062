//! Diagnostics for missing entries.
//!
//! Every missing entry gets its own diagnostic, but the correction is one
//! batch: only the first diagnostic of a function carries the fix, and that
//! fix inserts every missing entry at once.

use crate::detect::Detection;
use crate::fix;
use crate::model::DocEntry;

/// Rewrites a function's documentation entries to add everything missing.
#[derive(Debug, Clone)]
pub struct Fix {
    detection: Detection,
    tag: String,
}

impl Fix {
    pub fn apply(&self, entries: &mut Vec<DocEntry>) {
        fix::apply(&self.detection, entries, &self.tag);
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Missing documented name, dotted for nested fields.
    pub name: String,
    pub message: String,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

pub fn message(tag: &str, name: &str) -> String {
    format!("Missing @{tag} \"{name}\" declaration.")
}

/// One diagnostic per missing record, the fix attached to the first.
pub fn emit(detection: Detection, tag: &str, enable_fixer: bool) -> Vec<Diagnostic> {
    let mut fix = if enable_fixer && !detection.is_empty() {
        Some(Fix {
            detection: detection.clone(),
            tag: tag.to_string(),
        })
    } else {
        None
    };

    detection
        .records
        .into_iter()
        .map(|record| Diagnostic {
            message: message(tag, &record.name),
            name: record.name,
            fix: fix.take(),
        })
        .collect()
}
