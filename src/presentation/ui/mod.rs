//! UI screens.

mod app;
mod option_picker_modal;
mod order_screen;
/// Layout and text helpers.
pub mod utils;

pub use app::App;
pub use option_picker_modal::OptionPickerModal;
pub use order_screen::{OrderFocus, OrderScreen, OrderScreenState};
