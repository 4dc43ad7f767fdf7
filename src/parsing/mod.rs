
//! Scanning of raw expression text, together with the two algorithms
//! built on the character-level symbols: infix to postfix conversion
//! and bracket balance checking.

pub mod balance;
pub mod shunting_yard;
pub mod source;
pub mod token;

pub use balance::{check_balance, is_balanced, BalanceError};
pub use shunting_yard::{convert_infix_to_postfix, ConversionError};
