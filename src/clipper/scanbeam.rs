use std::collections::BTreeSet;

/// Pending sweep stops. Pops run from the largest Y down and never repeat a value.
#[derive(Debug, Default)]
pub struct Scanbeam {
    values: BTreeSet<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, y: i64) {
        self.values.insert(y);
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop_last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
