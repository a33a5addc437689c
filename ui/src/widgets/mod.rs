pub mod fields;
pub mod flags;
pub mod login_form;

pub use fields::{FieldState, FormFields};
pub use flags::flags;
pub use login_form::login_form;
