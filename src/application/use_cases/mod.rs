//! Use case implementations.

mod load_menu_use_case;

pub use load_menu_use_case::LoadMenuUseCase;
