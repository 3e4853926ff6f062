//! The missing-parameter rule: configuration in, diagnostics out.

use crate::config::{Config, Options};
use crate::detect::detect;
use crate::model::{DocEntry, FunctionDoc, ParameterShape};
use crate::report::{self, Diagnostic};
use tracing::debug;

/// Canonical name of the parameter description tag.
pub const PARAM_TAG: &str = "param";

pub struct RequireParam {
    /// Tag label in use, `None` when the tag is switched off.
    tag: Option<String>,
    options: Options,
}

impl RequireParam {
    pub fn new(config: &Config) -> Self {
        RequireParam {
            tag: config.settings.preferred_tag_name(PARAM_TAG),
            options: config.options.clone(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Check one function, honouring its skip flag.
    pub fn check_function(&self, function: &FunctionDoc) -> Vec<Diagnostic> {
        if function.skip {
            debug!(function = %function.name, "skipped");
            return Vec::new();
        }
        self.check(&function.params, &function.tags)
    }

    /// Report every parameter missing from `entries`.
    pub fn check(&self, params: &[ParameterShape], entries: &[DocEntry]) -> Vec<Diagnostic> {
        let Some(tag) = self.tag() else {
            return Vec::new();
        };
        let detection = detect(params, entries, tag, self.options.root_names());
        report::emit(detection, tag, self.options.enable_fixer)
    }
}
