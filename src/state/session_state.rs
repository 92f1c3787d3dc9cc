// ============================================================================
// SESSION STATE - Sesión explícita (token opaco o ausente)
// ============================================================================
// Se inyecta en cada página vía contexto; `is_authenticated()` es el único
// chequeo de autorización en cliente. Nada de lecturas sueltas del storage.
// ============================================================================

use crate::services::TokenStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Token vacío o solo espacios cuenta como ausente
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: Some(token).filter(|t| !t.trim().is_empty()),
        }
    }

    /// Sesión persistida en el store (al arrancar la app)
    pub fn restore(store: &dyn TokenStore) -> Self {
        match store.load() {
            Some(token) => {
                log::info!("💾 Sesión restaurada desde sessionStorage");
                Self::with_token(token)
            }
            None => Self::anonymous(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
