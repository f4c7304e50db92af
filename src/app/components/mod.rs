//! Shared UI components.

mod error_alert;
mod form_inputs;
mod layout;
mod nav;

pub use error_alert::FormError;
pub use form_inputs::{NumberInput, TextInput, ToggleInput};
pub use layout::Layout;
pub use nav::NavSection;
