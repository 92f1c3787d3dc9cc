// ============================================================================
// LOGIN VIEW
// ============================================================================
// Valida, hace login y tras un momento redirige al dashboard. El token que
// se guarda es el que devuelve el servidor.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{FormField, Snackbar};
use crate::config::CONFIG;
use crate::hooks::{use_form, use_notifications, use_session_context};
use crate::models::Notification;
use crate::state::AuthState;
use crate::stores::FormAction;
use crate::viewmodels::auth_viewmodel::{LOGIN_SCHEMA, LOGIN_SUCCESS};
use crate::viewmodels::AuthError;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session_context();
    let form = use_form(&LOGIN_SCHEMA);
    let notifications = use_notifications();
    let navigator = use_navigator();
    let auth = use_mut_ref(|| AuthState::new(session.is_authenticated()));
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let session = session.clone();
        let show = notifications.show.clone();
        let auth = auth.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.check() {
                return;
            }
            if !auth.borrow_mut().begin() {
                log::warn!("⏳ Login en curso, se ignora el segundo submit");
                return;
            }
            busy.set(true);

            let vm = session.auth_viewmodel();
            let values = (*form.state).clone();
            let form = form.clone();
            let on_login = session.on_login.clone();
            let show = show.clone();
            let auth = auth.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let duration = CONFIG.notifications.login_duration_ms;
                match vm.login(&values).await {
                    Ok(next) => {
                        auth.borrow_mut().succeed();
                        show.emit(Notification::success(LOGIN_SUCCESS, duration));
                        on_login.emit(next);
                        Timeout::new(CONFIG.redirect_delay_ms, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        })
                        .forget();
                    }
                    Err(AuthError::Invalid) => {
                        auth.borrow_mut().fail();
                        form.state.dispatch(FormAction::TouchAll);
                    }
                    Err(AuthError::Rejected(message)) => {
                        auth.borrow_mut().fail();
                        show.emit(Notification::error(message, duration));
                    }
                }
                busy.set(false);
            });
        })
    };

    let state = &*form.state;

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">{"LOGIN TO YOUR ACCOUNT"}</h1>
                <form class="auth-form" onsubmit={on_submit} novalidate=true autocomplete="off">
                    <FormField
                        name="email"
                        label="Email Address"
                        input_type="email"
                        value={state.value("email").to_string()}
                        error={state.visible_error("email")}
                        on_change={form.on_change.clone()}
                        on_blur={form.on_blur.clone()}
                    />
                    <FormField
                        name="password"
                        label="Password"
                        input_type="password"
                        value={state.value("password").to_string()}
                        error={state.visible_error("password")}
                        on_change={form.on_change.clone()}
                        on_blur={form.on_blur.clone()}
                    />
                    <button type="submit" class="btn-primary btn-block" disabled={*busy}>
                        {if *busy { "Logging in..." } else { "Login" }}
                    </button>
                    <p class="auth-switch">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Signup}>{"Sign Up"}</Link<Route>>
                    </p>
                </form>
            </div>
            <Snackbar notification={notifications.current.clone()} on_dismiss={notifications.dismiss.clone()} />
        </div>
    }
}
