// File: src/core/word_set.rs
use std::collections::HashSet;
use std::hash::Hash;

/// Plain membership set. O(1) expected for every operation, no ordering.
#[derive(Debug, Clone)]
pub struct WordSet<T: Eq + Hash> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> WordSet<T> {
    pub fn new() -> Self {
        Self { elements: HashSet::new() }
    }

    pub fn add(&mut self, element: T) {
        self.elements.insert(element);
    }

    pub fn delete<Q>(&mut self, element: &Q)
    where
        T: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.elements.remove(element);
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.elements.contains(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Eq + Hash> Default for WordSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
