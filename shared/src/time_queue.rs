use std::{collections::VecDeque, time::Instant};

/// Fire-once items ordered by the instant they come due.
///
/// Items added with equal due instants pop in insertion order. Pending items
/// can be dropped with [`TimeQueue::clear`], which is how scheduled work is
/// cancelled.
pub struct TimeQueue<T> {
    items: VecDeque<(Instant, T)>,
}

impl<T> TimeQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn add_item(&mut self, due: Instant, item: T) {
        let index = self.items.partition_point(|(item_due, _)| *item_due <= due);
        self.items.insert(index, (due, item));
    }

    /// Returns true if the front item is due at `now`
    pub fn has_item(&self, now: &Instant) -> bool {
        match self.items.front() {
            Some((due, _)) => due <= now,
            None => false,
        }
    }

    pub fn pop_item(&mut self, now: &Instant) -> Option<T> {
        if !self.has_item(now) {
            return None;
        }
        self.items.pop_front().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every pending item, returning how many were cancelled
    pub fn clear(&mut self) -> usize {
        let cancelled = self.items.len();
        self.items.clear();
        cancelled
    }
}

impl<T> Default for TimeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
