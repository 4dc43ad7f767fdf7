
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StackError {
  /// A push was attempted on a stack already holding `capacity`
  /// elements.
  #[error("Stack is full, capacity is {capacity}.")]
  Overflow {
    capacity: usize,
  },
  /// A pop or peek was attempted on an empty stack.
  #[error("Stack is empty.")]
  Underflow,
}
