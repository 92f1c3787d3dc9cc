// ============================================================================
// USE NOTIFICATIONS HOOK - Snackbar de una página
// ============================================================================

use yew::prelude::*;

use crate::models::Notification;
use crate::stores::{NotificationAction, NotificationSlot, ShownNotification};

#[derive(Clone, PartialEq)]
pub struct UseNotificationsHandle {
    pub current: Option<ShownNotification>,
    pub show: Callback<Notification>,
    pub dismiss: Callback<u32>,
}

#[hook]
pub fn use_notifications() -> UseNotificationsHandle {
    let slot = use_reducer(NotificationSlot::default);

    let show = {
        let dispatcher = slot.dispatcher();
        Callback::from(move |notification: Notification| {
            dispatcher.dispatch(NotificationAction::Show(notification));
        })
    };

    let dismiss = {
        let dispatcher = slot.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(NotificationAction::Dismiss(id)))
    };

    UseNotificationsHandle {
        current: slot.current().cloned(),
        show,
        dismiss,
    }
}
