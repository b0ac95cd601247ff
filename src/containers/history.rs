//! Singly linked list recording tickets in creation order

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Append-only singly linked list
///
/// Entries are never removed; lookups walk the list from the head.
pub struct History<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> History<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Appends at the tail
    ///
    /// Walks from the head, so appending is linear in the list length. The
    /// list owns its nodes through `Box` links only, which rules out a
    /// second mutable handle on the tail without `unsafe`. One entry is
    /// appended per ticket created at the menu, so lists stay short.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// First entry matching `predicate`, by linear scan
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Entries in append order. Each call starts again from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for History<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long lists don't recurse on drop
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for History<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
