// ============================================================================
// USE CRUD HOOK - Página tabla + diálogo de un recurso
// ============================================================================
// Descarga la lista al montar (y al cambiar la sesión) y envía el diálogo.
// El estado vive en `CrudStore`; la lógica en `CrudViewModel`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::hooks::use_session::api_for;
use crate::state::Session;
use crate::stores::{CrudAction, CrudStore};
use crate::viewmodels::{CrudResource, CrudViewModel};

pub struct UseCrudHandle<R: CrudResource> {
    pub store: UseReducerHandle<CrudStore<R>>,
    pub submit: Callback<()>,
}

impl<R: CrudResource> Clone for UseCrudHandle<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            submit: self.submit.clone(),
        }
    }
}

impl<R: CrudResource> UseCrudHandle<R> {
    /// Callback que despacha la acción construida a partir del evento
    pub fn action<IN, F>(&self, build: F) -> Callback<IN>
    where
        IN: 'static,
        F: Fn(IN) -> CrudAction<R> + 'static,
    {
        let dispatcher = self.store.dispatcher();
        Callback::from(move |input: IN| dispatcher.dispatch(build(input)))
    }
}

fn viewmodel<R: CrudResource>(session: &Session, resource: R) -> CrudViewModel<R> {
    CrudViewModel::new(api_for(session), session.clone(), resource)
}

/// Siguiente número de secuencia de lista (cargas y envíos comparten contador)
fn next_seq(counter: &RefCell<u32>) -> u32 {
    let mut counter = counter.borrow_mut();
    *counter = counter.wrapping_add(1);
    *counter
}

#[hook]
pub fn use_crud<R>(resource: R) -> UseCrudHandle<R>
where
    R: CrudResource,
{
    let session = use_session_context().session;
    let store = {
        let resource = resource.clone();
        use_reducer(move || CrudStore::new(resource))
    };
    // Evita dos escrituras en vuelo aunque el render aún no refleje `submitting`
    let in_flight = use_mut_ref(|| false);
    let fetch_seq = use_mut_ref(|| 0u32);

    let reload = {
        let dispatcher = store.dispatcher();
        let session = session.clone();
        let resource = resource.clone();
        let fetch_seq = fetch_seq.clone();
        Callback::from(move |_: ()| {
            let vm = viewmodel(&session, resource.clone());
            let dispatcher = dispatcher.clone();
            let seq = next_seq(&fetch_seq);
            dispatcher.dispatch(CrudAction::FetchStarted(seq));
            spawn_local(async move {
                let outcome = vm.load().await;
                dispatcher.dispatch(CrudAction::Fetched(seq, outcome));
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(session.clone(), move |_| {
            reload.emit(());
            || ()
        });
    }

    let submit = {
        let store = store.clone();
        let session = session.clone();
        let in_flight: Rc<RefCell<bool>> = in_flight.clone();
        let fetch_seq = fetch_seq.clone();
        Callback::from(move |_| {
            let Some(mode) = store.dialog.write_mode() else {
                return;
            };
            if *in_flight.borrow() || store.submitting {
                log::warn!("⏳ Envío en curso, se ignora el segundo submit");
                return;
            }
            if !store.form.schema().validate(store.form.values()).is_empty() {
                store.dispatch(CrudAction::RevealErrors);
                return;
            }

            *in_flight.borrow_mut() = true;
            store.dispatch(CrudAction::SubmitStarted);
            let seq = next_seq(&fetch_seq);

            let vm = viewmodel(&session, store.resource.clone());
            let form = store.form.clone();
            let dispatcher = store.dispatcher();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let outcome = vm.submit(mode, &form).await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(CrudAction::Submitted(seq, outcome));
            });
        })
    };

    UseCrudHandle { store, submit }
}
