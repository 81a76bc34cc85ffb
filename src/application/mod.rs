//! Application layer with the ordering session and use cases.

/// Data transfer objects.
pub mod dto;
/// Ordering session state.
pub mod session;
/// Use case implementations.
pub mod use_cases;

pub use dto::CatalogSummary;
pub use session::{AddOutcome, CartLine, CategoryPanel, OptionPicker, OrderSession};
pub use use_cases::LoadMenuUseCase;
