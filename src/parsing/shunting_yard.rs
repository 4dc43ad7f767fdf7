
//! Infix to postfix conversion via the shunting yard algorithm.

use super::source::SourceOffset;
use super::token::{symbols, BinaryOp, BracketKind, Symbol};
use crate::stack::Stack;

use thiserror::Error;

/// Values held on the converter's operator stack. Opening brackets
/// remember where they were scanned, for error reporting if they turn
/// out to be unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpStackValue {
  Operator(BinaryOp),
  Open(BracketKind, SourceOffset),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("Unmatched bracket '{glyph}' at position {position}")]
  UnmatchedBracket {
    glyph: char,
    position: SourceOffset,
  },
  /// Catch-all for scan inconsistencies. No current scan path
  /// produces this variant, but callers should treat it as a
  /// rejection of the whole expression.
  #[error("Malformed expression")]
  MalformedExpression,
}

/// Converts an infix expression to postfix notation, scanning one
/// character at a time.
///
/// Only `+ - * /` are treated as operators (`*` and `/` binding more
/// tightly, ties grouping left to right) and only the three bracket
/// kinds group subexpressions. Every other character is an operand
/// and is copied to the output as-is. Brackets are consumed by the
/// conversion and never appear in the output; closing a group also
/// emits any operators pending beneath it, down to the next
/// enclosing bracket.
///
/// Fails closed: an unmatched bracket of either direction aborts the
/// conversion with [`ConversionError::UnmatchedBracket`] and no
/// partial output.
pub fn convert_infix_to_postfix(expression: &str) -> Result<String, ConversionError> {
  // Fresh operator stack per call; nothing persists across conversions.
  let mut operators: Stack<OpStackValue> = Stack::new();
  let mut output = String::with_capacity(expression.len());

  for (position, symbol) in symbols(expression) {
    match symbol {
      Symbol::Operand(ch) => {
        output.push(ch);
      }
      Symbol::Open(kind) => {
        // unwrap: The operator stack is unbounded, so push cannot overflow.
        operators.push(OpStackValue::Open(kind, position)).unwrap();
      }
      Symbol::Close(kind) => {
        // Pop operators to the output until the matching open. Any
        // opening kind matches; kind-exact matching is the balance
        // checker's concern, not the converter's.
        loop {
          match operators.pop() {
            Ok(OpStackValue::Operator(op)) => output.push(op.glyph()),
            Ok(OpStackValue::Open(..)) => break,
            Err(_) => {
              return Err(ConversionError::UnmatchedBracket {
                glyph: kind.close_glyph(),
                position,
              });
            }
          }
        }
        // A closed group also emits the operators pending beneath it,
        // down to the next enclosing bracket.
        while let Ok(&OpStackValue::Operator(top)) = operators.peek() {
          operators.pop_and_discard();
          output.push(top.glyph());
        }
      }
      Symbol::Operator(op) => {
        // Pop operators of greater or equal precedence, so that
        // equal-precedence operators evaluate left to right.
        while let Ok(&OpStackValue::Operator(top)) = operators.peek() {
          if top.precedence() >= op.precedence() {
            operators.pop_and_discard();
            output.push(top.glyph());
          } else {
            break;
          }
        }
        // unwrap: The operator stack is unbounded, so push cannot overflow.
        operators.push(OpStackValue::Operator(op)).unwrap();
      }
    }
  }

  // Drain the remaining operators. A leftover opening bracket was
  // never closed.
  while let Ok(symbol) = operators.pop() {
    match symbol {
      OpStackValue::Operator(op) => output.push(op.glyph()),
      OpStackValue::Open(kind, position) => {
        return Err(ConversionError::UnmatchedBracket {
          glyph: kind.open_glyph(),
          position,
        });
      }
    }
  }

  Ok(output)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_single_operand() {
    assert_eq!(convert_infix_to_postfix("A"), Ok("A".to_string()));
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(convert_infix_to_postfix(""), Ok(String::new()));
  }

  #[test]
  fn test_precedence() {
    assert_eq!(convert_infix_to_postfix("A+B*C"), Ok("ABC*+".to_string()));
  }

  #[test]
  fn test_brackets_override_precedence() {
    assert_eq!(convert_infix_to_postfix("A*(B+C)/D"), Ok("ABC+*D/".to_string()));
  }

  #[test]
  fn test_nested_brackets() {
    assert_eq!(convert_infix_to_postfix("A+((B*C)-(D/E))/F"), Ok("ABC*DE/-+F/".to_string()));
  }

  #[test]
  fn test_equal_precedence_groups_left_to_right() {
    assert_eq!(convert_infix_to_postfix("A-B+C"), Ok("AB-C+".to_string()));
    assert_eq!(convert_infix_to_postfix("A/B*C"), Ok("AB/C*".to_string()));
  }

  #[test]
  fn test_square_and_curly_brackets() {
    assert_eq!(convert_infix_to_postfix("A*[B+C]"), Ok("ABC+*".to_string()));
    assert_eq!(convert_infix_to_postfix("{A+B}*C"), Ok("AB+C*".to_string()));
  }

  #[test]
  fn test_operators_flushed_when_group_closes() {
    assert_eq!(convert_infix_to_postfix("A+(B*C)*D"), Ok("ABC*+D*".to_string()));
  }

  #[test]
  fn test_close_matches_any_open_kind() {
    // The converter does not check bracket kinds against each other.
    assert_eq!(convert_infix_to_postfix("(A+B]*C"), Ok("AB+C*".to_string()));
  }

  #[test]
  fn test_unrecognized_characters_pass_through_as_operands() {
    assert_eq!(convert_infix_to_postfix("A^B"), Ok("A^B".to_string()));
    assert_eq!(convert_infix_to_postfix("A%B+C"), Ok("A%BC+".to_string()));
  }

  #[test]
  fn test_unmatched_close() {
    assert_eq!(
      convert_infix_to_postfix("A+B)"),
      Err(ConversionError::UnmatchedBracket { glyph: ')', position: SourceOffset(3) }),
    );
  }

  #[test]
  fn test_unmatched_close_on_empty_stack() {
    assert_eq!(
      convert_infix_to_postfix(")"),
      Err(ConversionError::UnmatchedBracket { glyph: ')', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_unmatched_open() {
    assert_eq!(
      convert_infix_to_postfix("(A+B"),
      Err(ConversionError::UnmatchedBracket { glyph: '(', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_unmatched_inner_open_reported_first() {
    assert_eq!(
      convert_infix_to_postfix("(A+[B"),
      Err(ConversionError::UnmatchedBracket { glyph: '[', position: SourceOffset(3) }),
    );
  }
}
