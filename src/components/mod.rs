pub mod crud_dialog;
pub mod data_table;
pub mod form_field;
pub mod login_prompt;
pub mod navbar;
pub mod snackbar;

pub use crud_dialog::CrudDialog;
pub use data_table::{DataTable, TableRow};
pub use form_field::{FormField, RadioGroup, SelectField};
pub use login_prompt::LoginPrompt;
pub use navbar::Navbar;
pub use snackbar::Snackbar;
