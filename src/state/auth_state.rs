// ============================================================================
// AUTH STATE - Fase del flujo de login
// ============================================================================
// anonymous → authenticating → authenticated. Un fallo vuelve a anonymous.
// El logout no pasa por aquí: la página de login monta un estado nuevo.
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    phase: AuthPhase,
}

impl AuthState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            phase: if authenticated {
                AuthPhase::Authenticated
            } else {
                AuthPhase::Anonymous
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }

    /// Empieza un intento; `false` si ya hay uno en curso (doble submit)
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = AuthPhase::Authenticating;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = AuthPhase::Authenticated;
    }

    pub fn fail(&mut self) {
        self.phase = AuthPhase::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_lifecycle() {
        let mut state = AuthState::new(false);
        assert_eq!(state.phase, AuthPhase::Anonymous);

        assert!(state.begin());
        assert!(state.is_busy());
        assert!(!state.begin(), "second submit while authenticating is ignored");

        state.succeed();
        assert_eq!(state.phase, AuthPhase::Authenticated);
        assert!(!state.is_busy());
    }

    #[test]
    fn failure_returns_to_anonymous_and_allows_retry() {
        let mut state = AuthState::default();
        assert!(state.begin());
        state.fail();
        assert_eq!(state.phase, AuthPhase::Anonymous);
        assert!(state.begin());
    }
}
