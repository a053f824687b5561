use std::fmt;

/// A last-in first-out stack. Only the top is reachable through the
/// public interface.
pub struct Stack<T> {
    // Bottom of the stack at index 0, top at the end.
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.top_down()).finish()
    }
}

impl<T> Stack<T> {
    /// Creates an empty `Stack`.
    pub fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    /// The number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push `data` onto the top of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Stack;
    ///
    /// let mut s = Stack::new();
    /// s.push(1);
    /// s.push(2);
    ///
    /// assert_eq!(Some(&2), s.peek());
    /// assert_eq!(Some(2), s.pop());
    /// assert_eq!(Some(1), s.pop());
    /// assert_eq!(None, s.pop());
    /// ```
    pub fn push(&mut self, data: T) {
        self.items.push(data);
    }

    /// Remove the top of the stack and return it. If the stack is
    /// empty, `None` is returned.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Get the top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub(crate) fn bottom(&self) -> Option<&T> {
        self.items.first()
    }

    pub(crate) fn top_down(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    pub(crate) fn bottom_up(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
