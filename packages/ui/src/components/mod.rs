//! Form primitives shared by every page. Styling hooks are `data-*` attributes so that
//! callers stay free to pass their own `class`.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::{FieldError, Label};

mod textarea;
pub use textarea::Textarea;
