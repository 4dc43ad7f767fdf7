
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
///
/// A stack can optionally be constructed with a fixed capacity, in
/// which case pushes beyond that capacity fail with
/// [`StackError::Overflow`].
///
/// Every successful pop is recorded in an undo history, so that
/// [`Stack::undo`] can restore popped values in reverse removal
/// order. The history accumulates across pops until drained by undo
/// calls; pushes never clear it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
  capacity: Option<usize>,
  history: Vec<T>,
}

impl<T> Stack<T> {

  /// A new, empty stack with no capacity bound.
  pub fn new() -> Self {
    Self::default()
  }

  /// A new, empty stack which will hold at most `capacity` elements.
  pub fn new_bounded(capacity: usize) -> Self {
    Self {
      elements: Vec::with_capacity(capacity),
      capacity: Some(capacity),
      history: Vec::new(),
    }
  }

  /// The configured capacity bound, or `None` if the stack is
  /// unbounded.
  pub fn capacity(&self) -> Option<usize> {
    self.capacity
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::Underflow)
    } else {
      Ok(())
    }
  }

  /// Asserts that the stack has room for `additional` more elements
  /// but does not push anything. Always succeeds on an unbounded
  /// stack.
  pub fn check_remaining_capacity(&self, additional: usize) -> Result<(), StackError> {
    match self.capacity {
      Some(capacity) if self.len() + additional > capacity =>
        Err(StackError::Overflow { capacity }),
      _ => Ok(()),
    }
  }

  /// Pushes a single element onto the top of the stack. Fails with
  /// [`StackError::Overflow`] if the stack is at its capacity bound,
  /// in which case the stack is unchanged.
  pub fn push(&mut self, element: T) -> Result<(), StackError> {
    self.check_remaining_capacity(1)?;
    self.elements.push(element);
    Ok(())
  }

  /// Push in the order we see them, so that the last element in the
  /// iterable is at the top of the resulting stack. If the elements
  /// would exceed the capacity bound, nothing is pushed at all.
  pub fn push_several(&mut self, elements: impl IntoIterator<Item = T>) -> Result<(), StackError> {
    let elements: Vec<_> = elements.into_iter().collect();
    self.check_remaining_capacity(elements.len())?;
    self.elements.extend(elements);
    Ok(())
  }

  /// Returns a reference to the top of the stack, without popping.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.elements.last().ok_or(StackError::Underflow)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Returns true if any popped values are available to [`Stack::undo`].
  pub fn has_undos(&self) -> bool {
    !self.history.is_empty()
  }

  /// Discards the undo history, so that `self.has_undos()` is false.
  /// The stack elements themselves are unaffected.
  pub fn clear_history(&mut self) {
    self.history.clear();
  }

  /// Restores the most recently popped value to the top of the stack,
  /// returning a reference to it. Repeated calls replay pops in
  /// reverse chronological order. Returns `None`, without modifying
  /// anything, if the history is empty.
  ///
  /// Undo does NOT re-check the capacity bound: restoring history
  /// always succeeds while the history is non-empty, even if the
  /// stack transiently exceeds its configured capacity.
  pub fn undo(&mut self) -> Option<&T> {
    let value = self.history.pop()?;
    self.elements.push(value);
    self.elements.last()
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

}

impl<T: Clone> Stack<T> {

  /// Pops a single element from the top of the stack and records it
  /// in the undo history. Fails with [`StackError::Underflow`] if the
  /// stack is empty, in which case the stack is unchanged.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let value = self.elements.pop().ok_or(StackError::Underflow)?;
    self.history.push(value.clone());
    Ok(value)
  }

  /// As [`Stack::pop`], but with no result value. Use this function
  /// if you don't plan to use the result and don't care if the `pop`
  /// call fails due to an empty stack.
  pub fn pop_and_discard(&mut self) {
    let _ = self.pop();
  }

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  ///
  /// Each removed element enters the undo history in pop order, so a
  /// subsequent run of [`Stack::undo`] calls restores the whole run.
  pub fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_stack_size(count)?;
    let popped = self.elements.split_off(self.len() - count);
    self.history.extend(popped.iter().rev().cloned());
    Ok(popped)
  }

  /// Pops all elements off the stack and returns them, bottom first.
  pub fn pop_all(&mut self) -> Vec<T> {
    // unwrap: We're popping exactly as many elements as the stack contains.
    self.pop_several(self.len()).unwrap()
  }

}

impl<T> IntoIterator for Stack<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<Self::Item>;

  /// Iterates (by value) from the bottom of the stack.
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

/// Converts a vector to an unbounded stack, where the top of the
/// stack is at the end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self {
      elements,
      capacity: None,
      history: Vec::new(),
    }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
      capacity: None,
      history: Vec::new(),
    }
  }

}
