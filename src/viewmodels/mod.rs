pub mod auth_viewmodel;
pub mod crud_viewmodel;
pub mod resources;

pub use auth_viewmodel::{AuthError, AuthViewModel};
pub use crud_viewmodel::{CrudResource, CrudViewModel, LoadOutcome, SubmitOutcome, WriteMode};
pub use resources::{BusinessResource, SaleResource};
