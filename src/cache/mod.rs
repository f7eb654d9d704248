/// Holds the last non-empty list a screen delivered.
///
/// There is no expiry. The owning screen calls [`ResultCache::clear`] when
/// it goes away or wants a forced refresh.
#[derive(Debug, Clone)]
pub struct ResultCache<T> {
    items: Vec<T>,
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Clone> ResultCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, if one has been stored.
    pub fn get(&self) -> Option<&[T]> {
        if self.items.is_empty() {
            None
        } else {
            Some(&self.items)
        }
    }

    /// Replace the cached list. Storing an empty list leaves the cache empty.
    pub fn store(&mut self, items: &[T]) {
        self.items = items.to_vec();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
