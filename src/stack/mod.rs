
mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  /// A bounded stack pre-filled with the given elements, top at the
  /// end.
  pub fn bounded_stack_of<T>(capacity: usize, vec: Vec<T>) -> Stack<T> {
    let mut stack = Stack::new_bounded(capacity);
    stack.push_several(vec).unwrap();
    stack
  }
}
