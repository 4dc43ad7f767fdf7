
//! Bracket balance checking over the three recognized bracket kinds.

use super::source::SourceOffset;
use super::token::{symbols, BracketKind, Symbol};
use crate::stack::Stack;

use thiserror::Error;

/// The first violation found in an unbalanced expression.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BalanceError {
  /// A closing glyph with no bracket group open at all.
  #[error("Unexpected '{glyph}' at position {position}")]
  UnexpectedClose {
    glyph: char,
    position: SourceOffset,
  },
  /// A closing glyph whose kind disagrees with the innermost open
  /// bracket.
  #[error("Expected '{expected}' but found '{found}' at position {position}")]
  MismatchedClose {
    expected: char,
    found: char,
    position: SourceOffset,
  },
  /// A bracket still open at the end of the input, reported at its
  /// opening offset.
  #[error("Unclosed '{glyph}' at position {position}")]
  Unclosed {
    glyph: char,
    position: SourceOffset,
  },
}

/// Scans the expression and reports the first bracket violation, if
/// any. Characters other than the six bracket glyphs are ignored.
///
/// A single linear pass; the auxiliary stack grows with the maximum
/// nesting depth.
pub fn check_balance(expression: &str) -> Result<(), BalanceError> {
  // Fresh stack per call; nothing persists across checks.
  let mut open_brackets: Stack<(SourceOffset, BracketKind)> = Stack::new();

  for (position, symbol) in symbols(expression) {
    match symbol {
      Symbol::Open(kind) => {
        // unwrap: The bracket stack is unbounded, so push cannot overflow.
        open_brackets.push((position, kind)).unwrap();
      }
      Symbol::Close(kind) => {
        let Ok((_, open_kind)) = open_brackets.pop() else {
          return Err(BalanceError::UnexpectedClose {
            glyph: kind.close_glyph(),
            position,
          });
        };
        if open_kind != kind {
          return Err(BalanceError::MismatchedClose {
            expected: open_kind.close_glyph(),
            found: kind.close_glyph(),
            position,
          });
        }
      }
      Symbol::Operand(_) | Symbol::Operator(_) => {}
    }
  }

  match open_brackets.pop() {
    Ok((position, kind)) => Err(BalanceError::Unclosed {
      glyph: kind.open_glyph(),
      position,
    }),
    Err(_) => Ok(()),
  }
}

/// Returns true if every bracket in the expression is properly
/// matched and nested.
pub fn is_balanced(expression: &str) -> bool {
  check_balance(expression).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_balanced() {
    assert!(is_balanced("()"));
    assert!(is_balanced("({[]})"));
    assert!(is_balanced("[](){}"));
    assert!(is_balanced(""));
  }

  #[test]
  fn test_non_bracket_characters_are_ignored() {
    assert!(is_balanced("A+B*C"));
    assert!(is_balanced("(A+[B*C])/{D}"));
  }

  #[test]
  fn test_interleaved_kinds_are_unbalanced() {
    assert!(!is_balanced("([)]"));
  }

  #[test]
  fn test_unclosed_bracket() {
    assert!(!is_balanced("(()"));
  }

  #[test]
  fn test_close_without_open() {
    assert!(!is_balanced(")("));
    assert!(!is_balanced("A)"));
  }

  #[test]
  fn test_mismatched_close_position() {
    assert_eq!(
      check_balance("([)]"),
      Err(BalanceError::MismatchedClose {
        expected: ']',
        found: ')',
        position: SourceOffset(2),
      }),
    );
  }

  #[test]
  fn test_unexpected_close_position() {
    assert_eq!(
      check_balance("A+B)"),
      Err(BalanceError::UnexpectedClose { glyph: ')', position: SourceOffset(3) }),
    );
  }

  #[test]
  fn test_unclosed_position_is_the_opening_offset() {
    assert_eq!(
      check_balance("(()"),
      Err(BalanceError::Unclosed { glyph: '(', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_innermost_unclosed_reported_first() {
    assert_eq!(
      check_balance("({"),
      Err(BalanceError::Unclosed { glyph: '{', position: SourceOffset(1) }),
    );
  }
}
