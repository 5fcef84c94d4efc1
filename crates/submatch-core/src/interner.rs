//! Request-scoped id interning.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps arbitrary key tuples to dense sequential ids.
///
/// Equal keys always yield the same id, and ids are handed out in first-seen
/// order starting at zero. One interner is created per matching request (or
/// per derivation stage) and dropped with it, so concurrent requests never
/// observe each other's ids.
#[derive(Clone, Debug, Default)]
pub struct IdInterner<K> {
    ids: HashMap<K, u32>,
    next: u32,
}

impl<K: Eq + Hash> IdInterner<K> {
    /// Creates an empty interner.
    pub fn new() -> Self {
        IdInterner {
            ids: HashMap::new(),
            next: 0,
        }
    }

    /// Returns the id for `key`, assigning the next sequential id on first
    /// sight.
    pub fn intern(&mut self, key: K) -> u32 {
        *self.ids.entry(key).or_insert_with(|| {
            let id = self.next;
            self.next += 1;
            id
        })
    }

    /// Returns the id for `key` if it was interned before.
    pub fn get(&self, key: &K) -> Option<u32> {
        self.ids.get(key).copied()
    }

    /// Number of distinct keys interned so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing was interned yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_yield_equal_ids() {
        let mut interner = IdInterner::new();
        let a = interner.intern((9i64, 1i64));
        let b = interner.intern((9i64, 2i64));
        let a_again = interner.intern((9i64, 1i64));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(a, a_again);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn separate_interners_are_isolated() {
        let mut first = IdInterner::new();
        let mut second = IdInterner::new();
        first.intern("x");
        first.intern("y");

        // a fresh interner restarts from zero
        assert_eq!(second.intern("y"), 0);
    }

    #[test]
    fn get_does_not_assign() {
        let mut interner = IdInterner::new();
        assert_eq!(interner.get(&"a"), None);
        interner.intern("a");
        assert_eq!(interner.get(&"a"), Some(0));
    }
}
