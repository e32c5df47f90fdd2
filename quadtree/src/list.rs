use std::slice;

use crate::node::Entry;

/// Growable, unordered collection of area-query matches.
///
/// Designed as a reusable scratch buffer: [`ResultList::reset`] empties the
/// list while keeping its backing storage, so a list created once can absorb
/// one query per entity per tick without per-tick allocation churn. Storage
/// grows by the configured increment whenever an append hits capacity; it
/// never shrinks. Allocation failure aborts the process via the global
/// allocator, which is deliberate: the simulation cannot limp on without its
/// spatial index.
pub struct ResultList<T> {
    items: Vec<Entry<T>>,
    grow: usize,
}

impl<T> ResultList<T> {
    /// Creates a list with `initial` capacity; the growth increment is the
    /// initial capacity, with a minimum of one.
    pub fn new(initial: usize) -> Self {
        let grow = initial.max(1);
        Self {
            items: Vec::with_capacity(grow),
            grow,
        }
    }

    /// Appends a match, growing the backing storage by the increment when
    /// full. Previously appended entries are always preserved.
    pub fn append(&mut self, entry: Entry<T>) {
        if self.items.len() == self.items.capacity() {
            self.items.reserve_exact(self.grow);
        }
        self.items.push(entry);
    }

    /// Logically empties the list. Deallocates nothing; subsequent appends
    /// reuse the existing storage until capacity is exceeded again.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The configured growth increment.
    pub fn grow(&self) -> usize {
        self.grow
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry<T>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Entry<T>] {
        self.items.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a ResultList<T> {
    type Item = &'a Entry<T>;
    type IntoIter = slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
