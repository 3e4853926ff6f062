//! Batch correction of a documentation block.
//!
//! Records are applied one after another against the same entry sequence,
//! so every insertion position is computed on the sequence as already
//! modified by the records before it.

use crate::detect::Detection;
use crate::model::{DocEntry, ParamSlot};
use tracing::{debug, trace};

/// Position at which a new entry for the parameter at `hint` belongs.
///
/// The entry goes in front of the first pre-existing entry (of kind `tag`) that
/// documents this parameter or a later one. Without such an entry, or without
/// a hint, the position is the number of entries of kind `tag`.
pub fn resolve(
    entries: &[DocEntry],
    layout: &[ParamSlot],
    hint: Option<usize>,
    tag: &str,
) -> usize {
    if let Some(start) = hint {
        let remaining = layout.get(start..).unwrap_or_default();
        let anchor = entries.iter().position(|entry| {
            !entry.synthetic
                && entry.kind == tag
                && remaining.iter().any(|slot| slot.answers_to(&entry.name))
        });
        if let Some(pos) = anchor {
            trace!(
                hint = start,
                position = pos,
                anchor = %entries[pos].name,
                "insert before anchor"
            );
            return pos;
        }
    }

    let pos = entries.iter().filter(|entry| entry.kind == tag).count();
    trace!(hint = ?hint, position = pos, "append to parameter group");
    pos
}

/// Apply every record of `detection` to `entries`, in order.
pub fn apply(detection: &Detection, entries: &mut Vec<DocEntry>, tag: &str) {
    for record in &detection.records {
        let entry = DocEntry::synthetic(tag, record.name.as_str());
        if record.replace_blank {
            // The blank entry may have shifted if something was inserted in
            // front of it earlier in this batch.
            let blank = entries
                .iter()
                .position(|e| e.kind == tag && e.is_blank() && !e.synthetic)
                .or(record.hint.filter(|pos| *pos < entries.len()));
            if let Some(pos) = blank {
                debug!(name = %record.name, position = pos, "renaming blank entry");
                entries[pos] = entry;
                continue;
            }
        }

        let pos = resolve(entries, &detection.layout, record.hint, tag);
        debug!(name = %record.name, position = pos, "inserting entry");
        entries.insert(pos, entry);
    }
}
