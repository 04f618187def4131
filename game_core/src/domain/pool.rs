// Owned collections of transient entities (enemies, bullets).

/// Ordered pool of same-kind entities.
///
/// Removal shifts later elements down one slot. Any caller that removes while
/// walking the pool must walk from the highest index to the lowest: every
/// element that moves has already been visited, so nothing is skipped or seen
/// twice. [`EntityPool::remove_where`] does this for the common case.
#[derive(Debug)]
pub struct EntityPool<T> {
    items: Vec<T>,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityPool<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Removes and returns the entity at `index`.
    ///
    /// Panics when `index` is out of range; callers only pass indices they
    /// just obtained from this pool.
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "pool index {index} out of range (len {})",
            self.items.len()
        );
        self.items.remove(index)
    }

    /// Walks the pool in reverse and removes every entity matching `predicate`.
    ///
    /// Removed entities are returned in the order they were visited.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let mut removed = Vec::new();
        for i in (0..self.items.len()).rev() {
            if predicate(&self.items[i]) {
                removed.push(self.remove_at(i));
            }
        }
        removed
    }

    /// Empties the pool, handing back everything it held.
    pub fn clear(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lazy traversal of every live entity; a fresh walk can start any time.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn for_each_alive(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(values: &[i32]) -> EntityPool<i32> {
        let mut pool = EntityPool::new();
        for v in values {
            pool.add(*v);
        }
        pool
    }

    #[test]
    fn when_entities_are_added_then_they_are_iterated_in_insertion_order() {
        let pool = pool_of(&[1, 2, 3]);

        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn when_removing_during_reverse_walk_then_every_element_is_visited_once() {
        let mut pool = pool_of(&[1, 2, 3, 4, 5, 6]);
        let mut visited = Vec::new();

        for i in (0..pool.len()).rev() {
            let value = *pool.get(i).expect("index within bounds");
            visited.push(value);
            if value % 2 == 0 {
                pool.remove_at(i);
            }
        }

        assert_eq!(visited, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn when_adjacent_entities_match_then_remove_where_takes_both() {
        let mut pool = pool_of(&[10, 20, 21, 30]);

        let removed = pool.remove_where(|v| *v >= 20 && *v < 30);

        assert_eq!(removed, vec![21, 20]);
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn when_pool_is_walked_twice_then_both_walks_see_the_same_entities() {
        let pool = pool_of(&[4, 5]);
        let mut first = Vec::new();
        let mut second = Vec::new();

        pool.for_each_alive(|v| first.push(*v));
        pool.for_each_alive(|v| second.push(*v));

        assert_eq!(first, second);
    }

    #[test]
    fn when_cleared_then_pool_is_empty_and_contents_are_returned() {
        let mut pool = pool_of(&[1, 2]);

        let drained = pool.clear();

        assert_eq!(drained, vec![1, 2]);
        assert!(pool.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn when_index_is_out_of_range_then_remove_at_panics() {
        let mut pool = pool_of(&[1]);
        pool.remove_at(1);
    }
}
