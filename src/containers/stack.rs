/// LIFO log of reversible actions
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    items: Vec<T>,
}

impl<T> UndoStack<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Most recent entry, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo() {
        let mut stack = UndoStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);

        stack.push("create");
        stack.push("close");
        assert_eq!(stack.peek(), Some(&"close"));
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop(), Some("close"));
        assert_eq!(stack.pop(), Some("create"));
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }
}
