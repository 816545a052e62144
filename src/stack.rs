//! The operand stack: a growable LIFO of values awaiting an operation
use crate::internal::*;
use std::fmt;

// ----- S T R U C T   S T A C K -------------------------------------------------------

/// A plain LIFO stack. The top of the stack is the *last* element of the
/// underlying `Vec`, so push and pop are amortized O(1), and the storage
/// doubles when it runs full.
///
/// Elements are never handed out mutably: readers get copies or
/// shared references through [`Stack::peek`] and [`Stack::iter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack {
            elements: Vec::new(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Remove and return the top-of-stack (TOS). Popping an empty stack is
    /// an error: it is up to the caller to decide whether that is worth
    /// bothering the user with.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.elements.pop().ok_or(Error::EmptyStack)
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterate from the top of the stack to the bottom. The iterator is
    /// lazy and finite, and a new one may be obtained at any time.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.elements.iter().rev()
    }
}

impl<T: Clone> Stack<T> {
    /// A bottom-to-top copy of the stack contents
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Items are pushed in iteration order, so the last one ends up on top
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

/// Renders as `[top, ..., bottom]`
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop() -> Result<(), Error> {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());

        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));

        // LIFO
        assert_eq!(stack.pop()?, 3);
        assert_eq!(stack.pop()?, 2);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop()?, 1);

        // Underflow is reported, not swallowed
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert!(stack.is_empty());
        Ok(())
    }

    #[test]
    fn grows_past_any_initial_capacity() -> Result<(), Error> {
        let mut stack: Stack<usize> = (0..1000).collect();
        assert_eq!(stack.len(), 1000);
        assert_eq!(stack.peek(), Some(&999));
        stack.extend([1000, 1001]);
        assert_eq!(stack.pop()?, 1001);
        assert_eq!(stack.len(), 1001);
        Ok(())
    }

    #[test]
    fn iteration_order() {
        let stack: Stack<f64> = [10., 5., 0.25].into_iter().collect();

        let top_down: Vec<f64> = stack.iter().copied().collect();
        assert_eq!(top_down, [0.25, 5., 10.]);

        // Restartable, and the reversed view walks bottom-up
        assert_eq!(stack.iter().count(), 3);
        assert_eq!(stack.iter().next_back(), Some(&10.));

        // The array view is bottom-up, and a copy
        let mut copy = stack.to_vec();
        copy[0] = 42.;
        assert_eq!(stack.to_vec(), [10., 5., 0.25]);

        let mut n = 0;
        for _ in &stack {
            n += 1;
        }
        assert_eq!(n, 3);
    }

    #[test]
    fn display() {
        let mut stack: Stack<f64> = Stack::default();
        assert_eq!(stack.to_string(), "[]");
        stack.push(10.);
        stack.push(5.);
        assert_eq!(stack.to_string(), "[5, 10]");
        stack.push(-4.5);
        assert_eq!(stack.to_string(), "[-4.5, 5, 10]");
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.to_string(), "[]");
    }
}
