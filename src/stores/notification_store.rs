// ============================================================================
// NOTIFICATION STORE - Un snackbar visible por página
// ============================================================================
// Cada `show` asigna un id nuevo. El timer de auto-hide cierra por id, así
// una notificación reemplazada no puede ocultar a la siguiente.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::Notification;

#[derive(Clone, Debug, PartialEq)]
pub struct ShownNotification {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<ShownNotification>,
    last_id: u32,
}

impl NotificationSlot {
    /// Reemplaza la visible y devuelve el id asignado
    pub fn show(&mut self, notification: Notification) -> u32 {
        self.last_id = self.last_id.wrapping_add(1);
        self.current = Some(ShownNotification {
            id: self.last_id,
            notification,
        });
        self.last_id
    }

    /// Cierra solo si `id` sigue siendo la visible
    pub fn dismiss(&mut self, id: u32) -> bool {
        match &self.current {
            Some(shown) if shown.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&ShownNotification> {
        self.current.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Show(Notification),
    Dismiss(u32),
}

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Show(notification) => {
                next.show(notification);
            }
            NotificationAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}
