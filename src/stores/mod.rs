// ============================================================================
// STORES - Estado de UI reducible (formularios, CRUD, notificaciones)
// ============================================================================

pub mod crud_store;
pub mod form_store;
pub mod notification_store;

pub use crud_store::{CrudAction, CrudStore, DialogMode};
pub use form_store::{FormAction, FormState};
pub use notification_store::{NotificationAction, NotificationSlot, ShownNotification};
