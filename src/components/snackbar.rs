// ============================================================================
// SNACKBAR - Notificación transitoria
// ============================================================================
// El timer se crea por id: si llega otra notificación el efecto se limpia
// (se cancela el Timeout) y el dismiss por id tampoco afectaría a la nueva.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::stores::ShownNotification;

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub notification: Option<ShownNotification>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let timer = props
            .notification
            .as_ref()
            .and_then(|shown| shown.notification.auto_hide_ms.map(|ms| (shown.id, ms)));
        use_effect_with(timer, move |timer| {
            let timeout = timer.map(|(id, ms)| Timeout::new(ms, move || on_dismiss.emit(id)));
            move || drop(timeout)
        });
    }

    let Some(shown) = props.notification.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = shown.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("snackbar", shown.notification.severity.css_class())} role="alert">
            <span class="snackbar-message">{&shown.notification.message}</span>
            <button type="button" class="btn-close" aria-label="Close" {onclick}>{"✕"}</button>
        </div>
    }
}
