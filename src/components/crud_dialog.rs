// ============================================================================
// CRUD DIALOG - Modal crear / editar
// ============================================================================

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CrudDialogProps {
    pub open: bool,
    pub title: &'static str,
    pub submit_label: &'static str,
    /// Escritura en vuelo: botón deshabilitado
    #[prop_or_default]
    pub submitting: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    pub children: Children,
}

#[function_component(CrudDialog)]
pub fn crud_dialog(props: &CrudDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{props.title}</h2>
                    <button type="button" class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="modal-body" {onsubmit} novalidate=true>
                    {props.children.clone()}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_close}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Saving..." } else { props.submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
