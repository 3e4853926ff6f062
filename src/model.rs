//! Data model shared by the detector, the fixer and the front end.

use serde::{Deserialize, Serialize};

/// Nesting separator inside documented parameter names (`opts.verbose`).
pub const SEPARATOR: char = '.';

/// Pre-extracted description of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDocument {
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,
}

/// A function as seen by the rule: its declared parameters and the tags of
/// its documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDoc {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Set by the extractor when the function is out of scope.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip: bool,
    #[serde(default)]
    pub params: Vec<ParameterShape>,
    #[serde(default)]
    pub tags: Vec<DocEntry>,
}

/// One declared function parameter, in declaration order.
///
/// In input documents a simple parameter is a bare string and a destructured
/// one is an object: `"a"` / `{"root": "opts", "children": ["x", "y"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterShape {
    Simple(String),
    Structured(Destructured),
}

/// Payload of a destructured parameter. Unknown keys are rejected so a
/// misspelt `root` cannot silently turn a named aggregate into an unnamed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Destructured {
    /// Name given to the aggregate itself, if the source declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Destructured field names, in order.
    pub children: Vec<String>,
}

impl ParameterShape {
    pub fn simple(name: impl Into<String>) -> Self {
        ParameterShape::Simple(name.into())
    }

    pub fn structured<I, S>(root: Option<&str>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParameterShape::Structured(Destructured {
            root: root.map(str::to_string),
            children: children.into_iter().map(Into::into).collect(),
        })
    }
}

/// A documentation tag attached to the function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocEntry {
    /// Tag label without the `@`, e.g. `param` or `returns`.
    #[serde(rename = "tag")]
    pub kind: String,
    /// Dotted path for nested fields. Empty for a placeholder slot.
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set on entries created by the fixer during the current batch.
    #[serde(skip)]
    pub synthetic: bool,
}

impl DocEntry {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        DocEntry {
            kind: kind.into(),
            name: name.into(),
            type_expr: None,
            description: None,
            synthetic: false,
        }
    }

    /// Entry produced by the fixer.
    pub fn synthetic(kind: impl Into<String>, name: impl Into<String>) -> Self {
        DocEntry {
            synthetic: true,
            ..DocEntry::new(kind, name)
        }
    }

    pub fn is_shallow(&self) -> bool {
        !self.name.contains(SEPARATOR)
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

/// An undocumented parameter found by the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRecord {
    /// Position in parameter order used to place the new entry. For a
    /// blank-slot replacement, the position of the blank entry instead.
    pub hint: Option<usize>,
    /// Full documented name, dotted for nested fields.
    pub name: String,
    /// Rename the blank entry at `hint` rather than inserting.
    pub replace_blank: bool,
}

/// The names one declared parameter answers to once its root is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSlot {
    Simple(String),
    Structured { root: String, children: Vec<String> },
}

impl ParamSlot {
    /// Name recorded in the tag position index.
    pub fn top_level(&self) -> &str {
        match self {
            ParamSlot::Simple(name) => name,
            ParamSlot::Structured { root, .. } => root,
        }
    }

    /// Whether a documented name describes this parameter: the simple name,
    /// or for an aggregate its root, any `root.`-prefixed path, or a bare
    /// child name.
    pub fn answers_to(&self, name: &str) -> bool {
        match self {
            ParamSlot::Simple(own) => own == name,
            ParamSlot::Structured { root, children } => {
                name == root
                    || name
                        .strip_prefix(root.as_str())
                        .is_some_and(|rest| rest.starts_with(SEPARATOR))
                    || children.iter().any(|child| child == name)
            }
        }
    }
}
