// ============================================================================
// USE FORM HOOK - Formulario con validación por campo
// ============================================================================

use yew::prelude::*;

use crate::stores::{FormAction, FormState};
use crate::utils::validation::Schema;

#[derive(Clone, PartialEq)]
pub struct UseFormHandle {
    pub state: UseReducerHandle<FormState>,
    /// (campo, valor) en cada input
    pub on_change: Callback<(String, String)>,
    pub on_blur: Callback<String>,
}

impl UseFormHandle {
    /// Antes de enviar: si algo es inválido marca todo y devuelve `false`
    pub fn check(&self) -> bool {
        let valid = self.state.schema().validate(self.state.values()).is_empty();
        if !valid {
            self.state.dispatch(FormAction::TouchAll);
        }
        valid
    }

    pub fn reset(&self) {
        self.state.dispatch(FormAction::Reset);
    }
}

#[hook]
pub fn use_form(schema: &'static Schema) -> UseFormHandle {
    let state = use_reducer(move || FormState::new(schema));

    let on_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            dispatcher.dispatch(FormAction::SetField(name, value));
        })
    };

    let on_blur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |name: String| dispatcher.dispatch(FormAction::Blur(name)))
    };

    UseFormHandle {
        state,
        on_change,
        on_blur,
    }
}
