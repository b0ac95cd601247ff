use std::collections::VecDeque;

use crate::core::Priority;

/// Strict FIFO queue
#[derive(Debug, Clone)]
pub struct TicketQueue<T> {
    items: VecDeque<T>,
}

impl<T: PartialEq> TicketQueue<T> {
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the earliest-enqueued item
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Drops the first occurrence of `item`; returns whether one was found
    pub fn remove(&mut self, item: &T) -> bool {
        remove_first(&mut self.items, item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> Default for TicketQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deque that puts high-priority items at the front
///
/// This is not a heap: a newly enqueued high item jumps ahead of every
/// item already queued (LIFO among highs), while normal items join the
/// tail (FIFO among normals). Dequeue always takes the front.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: VecDeque<T>,
}

impl<T: PartialEq> PriorityQueue<T> {
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T, priority: Priority) {
        match priority {
            Priority::High => self.items.push_front(item),
            Priority::Normal => self.items.push_back(item),
        }
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn remove(&mut self, item: &T) -> bool {
        remove_first(&mut self.items, item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_first<T: PartialEq>(items: &mut VecDeque<T>, item: &T) -> bool {
    items
        .iter()
        .position(|queued| queued == item)
        .and_then(|index| items.remove(index))
        .is_some()
}
