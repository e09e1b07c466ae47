//! Small form controls shared by the views.

mod button;
mod input;

pub use button::{Button, ButtonVariant};
pub use input::Input;
