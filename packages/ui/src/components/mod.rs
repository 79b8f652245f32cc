//! Small form controls shared by both views.

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::FormField;
