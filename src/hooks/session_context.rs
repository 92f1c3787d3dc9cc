// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre páginas
// ============================================================================
// Usa Context API de Yew: cada página lee la sesión inyectada en vez de
// consultar el storage por su cuenta.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};
use crate::state::Session;

/// Provider que envuelve la app y proporciona la sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Sesión del contexto. Fuera del provider se comporta como anónima.
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    match use_context::<UseSessionHandle>() {
        Some(handle) => handle,
        None => {
            log::warn!("⚠️ use_session_context fuera de SessionContextProvider");
            UseSessionHandle {
                session: Session::anonymous(),
                on_login: Callback::noop(),
                on_logout: Callback::noop(),
            }
        }
    }
}
