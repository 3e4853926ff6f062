//! Declaration-order positions of top-level parameter names.

use std::collections::HashMap;

/// Maps each top-level parameter name to its position. A destructured
/// parameter occupies one position under its root name.
#[derive(Debug, Default)]
pub struct TagPositionIndex {
    positions: HashMap<String, usize>,
}

impl TagPositionIndex {
    pub fn build<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let positions = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect();
        TagPositionIndex { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}
