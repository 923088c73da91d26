use crate::EvalError;

/// Capacity of the per-call stacks. Matches the original engine's
/// fixed 64-slot stacks, which keeps overflow a real, reportable error.
pub const STACK_CAPACITY: usize = 64;

/// A bounded LIFO used for both evaluation values and the converter's
/// pending tokens. Created per call, dropped with it; nothing escapes.
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), EvalError> {
        if self.items.len() == self.capacity {
            return Err(EvalError::StackOverflow);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, EvalError> {
        self.items.pop().ok_or(EvalError::StackUnderflow)
    }

    /// The most recently pushed item, if any. Callers decide what an
    /// empty stack means at their point in the grammar.
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
