mod login_view;
mod signup_view;

pub use login_view::*;
pub use signup_view::*;
