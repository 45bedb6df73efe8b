use std::{collections::VecDeque, fmt::Display};

use crate::{core::word::Word, error::Error};

/// The [`Stack`] struct represents the VM's operand stack.
/// It is a LIFO data structure that holds a VecDeque of [`Word`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Stack {
    /// The collection of words in LIFO order.
    ///
    /// The front of the deque represents the top of the stack.
    pub stack: VecDeque<Word>,
}

impl Stack {
    /// Creates a new [`Stack`].
    ///
    /// ```
    /// use minievm_vm::core::stack::Stack;
    ///
    /// let stack = Stack::new();
    /// assert_eq!(stack.size(), 0);
    /// ```
    pub fn new() -> Stack {
        Stack { stack: VecDeque::with_capacity(1024) }
    }

    /// Push a value onto the stack. Depth limits are enforced by the dispatcher, not here.
    ///
    /// ```
    /// use minievm_vm::core::{stack::Stack, word::Word};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Word::from(0x00));
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn push(&mut self, value: Word) {
        self.stack.push_front(value);
    }

    /// Pop a value off the stack.
    ///
    /// ```
    /// use minievm_vm::core::{stack::Stack, word::Word};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Word::from(0x00));
    ///
    /// assert_eq!(stack.pop(), Ok(Word::from(0x00)));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<Word, Error> {
        self.stack.pop_front().ok_or(Error::StackUnderflow {
            opcode: "POP",
            required: 1,
            available: 0,
        })
    }

    /// Pop n values off the stack, top first.
    ///
    /// Fails without touching the stack when fewer than n values are present.
    ///
    /// ```
    /// use minievm_vm::core::{stack::Stack, word::Word};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Word::from(0x00));
    /// stack.push(Word::from(0x01));
    /// stack.push(Word::from(0x02));
    ///
    /// // stack is now [0x02, 0x01, 0x00]
    /// let values = stack.pop_n(2).unwrap();
    /// assert_eq!(values, vec![Word::from(0x02), Word::from(0x01)]);
    ///
    /// // stack is now [0x00]
    /// assert!(stack.pop_n(2).is_err());
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<Word>, Error> {
        if self.stack.len() < n {
            return Err(Error::StackUnderflow {
                opcode: "POP",
                required: n,
                available: self.stack.len(),
            });
        }
        Ok(self.stack.drain(0..n).collect())
    }

    /// Peek at the value `index` slots below the top, or zero if the stack is not that deep.
    ///
    /// ```
    /// use minievm_vm::core::{stack::Stack, word::Word};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Word::from(0x07));
    ///
    /// assert_eq!(stack.peek(0), Word::from(0x07));
    /// assert_eq!(stack.peek(1), Word::ZERO);
    /// ```
    pub fn peek(&self, index: usize) -> Word {
        self.stack.get(index).copied().unwrap_or_default()
    }

    /// gets the top n values of the stack
    pub fn peek_n(&self, n: usize) -> Vec<Word> {
        self.stack.iter().take(n).copied().collect()
    }

    /// Get the size of the stack
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Snapshot of the stack ordered bottom to top, the order values were pushed in.
    ///
    /// ```
    /// use minievm_vm::core::{stack::Stack, word::Word};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Word::from(1));
    /// stack.push(Word::from(2));
    ///
    /// assert_eq!(stack.to_vec(), vec![Word::from(1), Word::from(2)]);
    /// ```
    pub fn to_vec(&self) -> Vec<Word> {
        self.stack.iter().rev().copied().collect()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values =
            self.stack.iter().rev().map(|value| format!("{value:#x}")).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{stack::Stack, word::Word},
        error::Error,
    };

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(Word::from(1));
        stack.push(Word::from(2));
        assert_eq!(stack.pop().unwrap(), Word::from(2));
        assert_eq!(stack.pop().unwrap(), Word::from(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut stack = Stack::new();
        assert!(matches!(stack.pop(), Err(Error::StackUnderflow { available: 0, .. })));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_n() {
        let mut stack = Stack::new();
        stack.push(Word::from(1));
        stack.push(Word::from(2));
        stack.push(Word::from(3));
        let values = stack.pop_n(2).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], Word::from(3));
        assert_eq!(values[1], Word::from(2));
        assert_eq!(stack.pop().unwrap(), Word::from(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_n_is_atomic() {
        let mut stack = Stack::new();
        stack.push(Word::from(1));
        assert_eq!(
            stack.pop_n(2),
            Err(Error::StackUnderflow { opcode: "POP", required: 2, available: 1 })
        );
        assert_eq!(stack.to_vec(), vec![Word::from(1)]);
    }

    #[test]
    fn test_peek() {
        let mut stack = Stack::new();
        stack.push(Word::from(1));
        stack.push(Word::from(2));
        stack.push(Word::from(3));
        assert_eq!(stack.peek(0), Word::from(3));
        assert_eq!(stack.peek(1), Word::from(2));
        assert_eq!(stack.peek(2), Word::from(1));
        assert_eq!(stack.peek(3), Word::from(0));
        assert_eq!(stack.peek_n(2), vec![Word::from(3), Word::from(2)]);
    }

    #[test]
    fn test_display_is_bottom_to_top() {
        let mut stack = Stack::new();
        stack.push(Word::from(1));
        stack.push(Word::from(0xff));
        assert_eq!(stack.to_string(), "[0x1, 0xff]");
    }
}
