// ============================================================================
// TOKEN STORE - Persistencia del token de sesión
// ============================================================================
// En navegador: sessionStorage (se pierde al cerrar la pestaña).
// ============================================================================

use gloo_storage::{SessionStorage, Storage};

use crate::utils::constants::AUTH_TOKEN_KEY;

pub trait TokenStore {
    /// Token guardado, si hay uno no vacío
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// sessionStorage del navegador, valor crudo (sin JSON) bajo `authToken`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        SessionStorage::raw()
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        SessionStorage::raw()
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|_| "Error guardando el token en sessionStorage".to_string())
    }

    fn clear(&self) {
        SessionStorage::delete(AUTH_TOKEN_KEY);
    }
}

#[cfg(test)]
pub use memory::MemoryTokenStore;
