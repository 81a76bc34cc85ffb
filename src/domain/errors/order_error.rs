//! Ordering session error types.

use thiserror::Error;

use super::LookupError;
use crate::domain::entities::{CartLineId, MenuItemId};

/// A session operation was called while its precondition does not hold.
///
/// The operation is aborted and the session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum InvalidOperation {
    #[error("menu item {item} has options and must go through the option picker")]
    ItemHasOptions { item: MenuItemId },

    #[error("menu item {item} has no options to pick")]
    ItemHasNoOptions { item: MenuItemId },

    #[error("the option picker is not open")]
    PickerClosed,

    #[error("option {option} is not offered by the open picker")]
    UnknownOption { option: MenuItemId },

    #[error("cart line {line} is not in the cart")]
    UnknownCartLine { line: CartLineId },

    #[error("there is no category at position {index}")]
    UnknownCategory { index: usize },
}

/// Errors returned by ordering session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Invalid(#[from] InvalidOperation),
}
