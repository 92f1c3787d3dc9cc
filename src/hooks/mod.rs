pub mod session_context;
pub mod use_crud;
pub mod use_form;
pub mod use_notifications;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_crud::{use_crud, UseCrudHandle};
pub use use_form::{use_form, UseFormHandle};
pub use use_notifications::{use_notifications, UseNotificationsHandle};
pub use use_session::{use_session, UseSessionHandle};
