
pub mod error;
pub mod parsing;
pub mod stack;

pub use parsing::{check_balance, convert_infix_to_postfix, is_balanced};
pub use stack::Stack;
