// ============================================================================
// USE SESSION HOOK - Sesión de la app (token en sessionStorage)
// ============================================================================
// Se carga una sola vez al montar el provider. Login y logout pasan por
// aquí para que todas las páginas vean el cambio.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::{AdminApi, ApiClient, BrowserTokenStore, TokenStore};
use crate::state::Session;
use crate::viewmodels::AuthViewModel;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: Session,
    /// Sesión nueva tras un login correcto (el token ya está persistido)
    pub on_login: Callback<Session>,
    pub on_logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Cliente HTTP con el bearer de la sesión actual
    pub fn api(&self) -> Rc<dyn AdminApi> {
        api_for(&self.session)
    }

    pub fn auth_viewmodel(&self) -> AuthViewModel {
        AuthViewModel::new(self.api(), token_store())
    }
}

pub fn api_for(session: &Session) -> Rc<dyn AdminApi> {
    Rc::new(ApiClient::new().with_token(session.token().map(str::to_string)))
}

pub fn token_store() -> Rc<dyn TokenStore> {
    Rc::new(BrowserTokenStore)
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(|| Session::restore(&BrowserTokenStore));

    let on_login = {
        let session = session.clone();
        Callback::from(move |next: Session| {
            log::info!("🔐 Sesión iniciada");
            session.set(next);
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let vm = AuthViewModel::new(api_for(&*session), token_store());
            session.set(vm.logout());
        })
    };

    UseSessionHandle {
        session: (*session).clone(),
        on_login,
        on_logout,
    }
}
