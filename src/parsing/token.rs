
//! Classification of input characters into the symbols the conversion
//! and balance algorithms operate on.

use super::source::SourceOffset;

/// The binding strength of a binary operator. Higher precedences bind
/// more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Precedence {
  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }
}

/// The kinds of brackets recognized by the scanners, each with a
/// distinguished opening and closing glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
  Paren,
  Square,
  Curly,
}

impl BracketKind {

  /// The bracket kind whose opening glyph is `ch`, if any.
  pub fn of_open(ch: char) -> Option<BracketKind> {
    match ch {
      '(' => Some(BracketKind::Paren),
      '[' => Some(BracketKind::Square),
      '{' => Some(BracketKind::Curly),
      _ => None,
    }
  }

  /// The bracket kind whose closing glyph is `ch`, if any.
  pub fn of_close(ch: char) -> Option<BracketKind> {
    match ch {
      ')' => Some(BracketKind::Paren),
      ']' => Some(BracketKind::Square),
      '}' => Some(BracketKind::Curly),
      _ => None,
    }
  }

  pub fn open_glyph(self) -> char {
    match self {
      BracketKind::Paren => '(',
      BracketKind::Square => '[',
      BracketKind::Curly => '{',
    }
  }

  pub fn close_glyph(self) -> char {
    match self {
      BracketKind::Paren => ')',
      BracketKind::Square => ']',
      BracketKind::Curly => '}',
    }
  }

}

/// A binary arithmetic operator. These four characters are the only
/// ones ever classified as operators; everything else that isn't a
/// bracket scans as a plain operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {

  pub fn of_char(ch: char) -> Option<BinaryOp> {
    match ch {
      '+' => Some(BinaryOp::Add),
      '-' => Some(BinaryOp::Sub),
      '*' => Some(BinaryOp::Mul),
      '/' => Some(BinaryOp::Div),
      _ => None,
    }
  }

  pub fn glyph(self) -> char {
    match self {
      BinaryOp::Add => '+',
      BinaryOp::Sub => '-',
      BinaryOp::Mul => '*',
      BinaryOp::Div => '/',
    }
  }

  /// Multiplicative operators bind more tightly than additive ones.
  /// Operators of equal precedence group left to right.
  pub fn precedence(self) -> Precedence {
    match self {
      BinaryOp::Mul | BinaryOp::Div => Precedence::new(2),
      BinaryOp::Add | BinaryOp::Sub => Precedence::new(1),
    }
  }

}

/// A single classified input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
  /// Any character which is not an operator or a bracket glyph,
  /// including whitespace and symbols such as `^` or `%`.
  Operand(char),
  Operator(BinaryOp),
  Open(BracketKind),
  Close(BracketKind),
}

impl Symbol {

  /// Classifies a character. Total over `char`; anything unrecognized
  /// falls through to [`Symbol::Operand`].
  pub fn classify(ch: char) -> Symbol {
    if let Some(op) = BinaryOp::of_char(ch) {
      Symbol::Operator(op)
    } else if let Some(kind) = BracketKind::of_open(ch) {
      Symbol::Open(kind)
    } else if let Some(kind) = BracketKind::of_close(ch) {
      Symbol::Close(kind)
    } else {
      Symbol::Operand(ch)
    }
  }

}

/// Scans the input one character at a time, pairing each symbol with
/// the byte offset it was found at.
pub fn symbols(input: &str) -> impl Iterator<Item = (SourceOffset, Symbol)> + '_ {
  input.char_indices().map(|(i, ch)| (SourceOffset(i), Symbol::classify(ch)))
}
