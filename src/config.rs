//! Rule configuration.
//!
//! Read from a JSON file shaped like a linter rule entry:
//!
//! ```json
//! {
//!   "options": { "autoIncrementBase": 0, "unnamedRootBase": ["root"], "enableFixer": true },
//!   "settings": { "tagNamePreference": { "param": "arg" } }
//! }
//! ```
//!
//! Unknown keys and wrongly typed values are rejected here, so the rule
//! only ever sees validated options. The applicability options of the same
//! rule entry (`checkConstructors`, `checkGetters`, `checkSetters`,
//! `contexts`, `exemptedBy`) are accepted and left to the extractor.

use crate::error::{Error, Result};
use crate::namer::RootNameCursor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub options: Options,
    pub settings: Settings,
}

impl Config {
    pub fn from_json(content: &str, origin: &str) -> Result<Config> {
        serde_json::from_str(content).map_err(|source| Error::Json {
            what: "configuration",
            origin: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_json(&content, &path.display().to_string())
    }
}

/// Options of the missing-parameter rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// First numeric suffix for generated root names.
    pub auto_increment_base: i64,
    /// Preferred bases for generated root names.
    pub unnamed_root_base: Vec<String>,
    /// Offer a fix with the first diagnostic of each function.
    pub enable_fixer: bool,

    // Applicability options. The extractor decides which functions are in
    // scope and marks the rest with `skip`; they are accepted here so shared
    // rule configurations load, and are otherwise unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_constructors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_getters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_setters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempted_by: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            auto_increment_base: 0,
            unnamed_root_base: vec!["root".to_string()],
            enable_fixer: true,
            check_constructors: None,
            check_getters: None,
            check_setters: None,
            contexts: None,
            exempted_by: None,
        }
    }
}

impl Options {
    /// Fresh name cursor for one function.
    pub fn root_names(&self) -> RootNameCursor {
        RootNameCursor::new(&self.unnamed_root_base, self.auto_increment_base)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Canonical tag name to the label used in this code base, or `false`
    /// to switch the tag off.
    pub tag_name_preference: BTreeMap<String, TagPreference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagPreference {
    Name(String),
    Enabled(bool),
}

impl Settings {
    /// Label to use for `canonical`, or `None` if the tag is disabled.
    pub fn preferred_tag_name(&self, canonical: &str) -> Option<String> {
        match self.tag_name_preference.get(canonical) {
            Some(TagPreference::Name(name)) => Some(name.clone()),
            Some(TagPreference::Enabled(false)) => None,
            Some(TagPreference::Enabled(true)) | None => Some(canonical.to_string()),
        }
    }
}
