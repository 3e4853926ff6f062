//! Missing-entry detection.
//!
//! Walks the declared parameters in order and compares them with the
//! documentation entries of the parameter tag kind. Destructured parameters
//! are documented as a root entry followed by one dotted entry per field;
//! when the source gives the aggregate no name, the root is taken from the
//! documentation entry at the same shallow position, or generated.

use crate::index::TagPositionIndex;
use crate::model::{Destructured, DocEntry, MissingRecord, ParamSlot, ParameterShape, SEPARATOR};
use crate::namer::RootNameCursor;
use tracing::debug;

/// Result of one detection pass over a function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Missing entries in declaration order, each root before its fields.
    pub records: Vec<MissingRecord>,
    /// Resolved parameters, one per declared parameter.
    pub layout: Vec<ParamSlot>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Find the documentation entries missing for `params`.
///
/// Only entries whose kind equals `tag` are considered. `cursor` advances
/// once per aggregate parameter, so the generated name of an aggregate
/// depends only on how many aggregates precede it.
pub fn detect(
    params: &[ParameterShape],
    entries: &[DocEntry],
    tag: &str,
    cursor: RootNameCursor,
) -> Detection {
    let documented: Vec<(usize, &DocEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.kind == tag)
        .collect();
    let layout = resolve_layout(params, &documented, cursor);
    let index = TagPositionIndex::build(layout.iter().map(ParamSlot::top_level));

    let is_documented =
        |name: &str| documented.iter().any(|(_, entry)| entry.name == name);
    let mut blank_slot = documented
        .iter()
        .find(|(_, entry)| entry.is_blank())
        .map(|(pos, _)| *pos);

    let mut records: Vec<MissingRecord> = Vec::new();
    for (param, slot) in params.iter().zip(&layout) {
        match slot {
            ParamSlot::Simple(name) => {
                if !is_documented(name) {
                    records.push(MissingRecord {
                        hint: index.position(name),
                        name: name.clone(),
                        replace_blank: false,
                    });
                }
            }
            ParamSlot::Structured { root, children } => {
                let already_reported = records.iter().any(|record| &record.name == root);
                if !is_documented(root) && !already_reported {
                    let record = match blank_slot.take() {
                        Some(pos) => MissingRecord {
                            hint: Some(pos),
                            name: root.clone(),
                            replace_blank: true,
                        },
                        None => MissingRecord {
                            hint: index.position(root),
                            name: root.clone(),
                            replace_blank: false,
                        },
                    };
                    records.push(record);
                }

                let named = matches!(
                    param,
                    ParameterShape::Structured(Destructured { root: Some(_), .. })
                );
                for child in children {
                    let full = format!("{root}{SEPARATOR}{child}");
                    if is_documented(&full) {
                        continue;
                    }
                    // Named aggregates look up the dotted path, unnamed ones
                    // the bare field name.
                    let hint = if named {
                        index.position(&full)
                    } else {
                        index.position(child)
                    };
                    records.push(MissingRecord {
                        hint,
                        name: full,
                        replace_blank: false,
                    });
                }
            }
        }
    }

    for record in &records {
        debug!(
            name = %record.name,
            hint = ?record.hint,
            replace_blank = record.replace_blank,
            "missing documentation entry"
        );
    }

    Detection { records, layout }
}

/// Settle the name of every parameter. Unnamed aggregates take the shallow
/// documented name at the same position if there is one, else the name
/// generated for their ordinal.
fn resolve_layout(
    params: &[ParameterShape],
    documented: &[(usize, &DocEntry)],
    mut cursor: RootNameCursor,
) -> Vec<ParamSlot> {
    let shallow: Vec<&DocEntry> = documented
        .iter()
        .map(|(_, entry)| *entry)
        .filter(|entry| entry.is_shallow())
        .collect();

    let mut layout = Vec::with_capacity(params.len());
    for (idx, param) in params.iter().enumerate() {
        let slot = match param {
            ParameterShape::Simple(name) => ParamSlot::Simple(name.clone()),
            ParameterShape::Structured(Destructured { root, children }) => {
                let (generated, next) = cursor.advance();
                cursor = next;
                let root = match (root, shallow.get(idx)) {
                    (Some(explicit), _) => explicit.clone(),
                    (None, Some(entry)) if !entry.is_blank() => entry.name.clone(),
                    (None, _) => generated,
                };
                debug!(position = idx, root = %root, "resolved aggregate parameter name");
                ParamSlot::Structured {
                    root,
                    children: children.clone(),
                }
            }
        };
        layout.push(slot);
    }
    layout
}
