
use crate::parsing::balance::BalanceError;
use crate::parsing::shunting_yard::ConversionError;
use crate::stack::StackError;

use thiserror::Error;

/// Any error the crate can produce, for callers that don't care to
/// distinguish the source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("{0}")]
  ConversionError(#[from] ConversionError),
  #[error("{0}")]
  BalanceError(#[from] BalanceError),
}
