// ============================================================================
// SIGN-UP VIEW
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{FormField, RadioGroup, SelectField, Snackbar};
use crate::config::CONFIG;
use crate::hooks::{use_form, use_notifications, use_session_context};
use crate::models::auth::ROLES;
use crate::models::{Gender, Notification};
use crate::stores::FormAction;
use crate::viewmodels::auth_viewmodel::{SIGNUP_SCHEMA, SIGNUP_SUCCESS};
use crate::viewmodels::AuthError;

#[function_component(SignupView)]
pub fn signup_view() -> Html {
    let session = use_session_context();
    let form = use_form(&SIGNUP_SCHEMA);
    let notifications = use_notifications();
    let navigator = use_navigator();
    let in_flight = use_mut_ref(|| false);
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let session = session.clone();
        let show = notifications.show.clone();
        let in_flight = in_flight.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.check() || *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;
            busy.set(true);

            let vm = session.auth_viewmodel();
            let values = (*form.state).clone();
            let form = form.clone();
            let show = show.clone();
            let in_flight = in_flight.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let duration = CONFIG.notifications.signup_duration_ms;
                match vm.signup(&values).await {
                    Ok(()) => {
                        show.emit(Notification::success(SIGNUP_SUCCESS, duration));
                        form.reset();
                        Timeout::new(CONFIG.redirect_delay_ms, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(AuthError::Invalid) => form.state.dispatch(FormAction::TouchAll),
                    Err(AuthError::Rejected(message)) => {
                        show.emit(Notification::error(message, duration));
                    }
                }
                *in_flight.borrow_mut() = false;
                busy.set(false);
            });
        })
    };

    let state = &*form.state;
    let text_field = |name: &'static str, label: &'static str, input_type: &'static str| {
        html! {
            <FormField
                {name}
                {label}
                {input_type}
                value={state.value(name).to_string()}
                error={state.visible_error(name)}
                on_change={form.on_change.clone()}
                on_blur={form.on_blur.clone()}
            />
        }
    };
    let genders: Vec<(&'static str, &'static str)> =
        Gender::ALL.iter().map(|g| (g.form_value(), g.label())).collect();
    let roles: Vec<(&'static str, &'static str)> = ROLES.iter().map(|(_, name)| (*name, *name)).collect();

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">{"SIGN UP"}</h1>
                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    {text_field("first_name", "First Name", "text")}
                    {text_field("last_name", "Last Name", "text")}
                    <RadioGroup
                        name="gender"
                        label="Gender"
                        value={state.value("gender").to_string()}
                        options={genders}
                        error={state.visible_error("gender")}
                        on_change={form.on_change.clone()}
                        on_blur={form.on_blur.clone()}
                    />
                    {text_field("email", "Email", "email")}
                    {text_field("contact_number", "Contact Number", "tel")}
                    {text_field("password", "Password", "password")}
                    {text_field("confirm_password", "Confirm Password", "password")}
                    <SelectField
                        name="role"
                        label="Role"
                        value={state.value("role").to_string()}
                        options={roles}
                        error={state.visible_error("role")}
                        on_change={form.on_change.clone()}
                        on_blur={form.on_blur.clone()}
                    />
                    <button type="submit" class="btn-primary btn-block" disabled={*busy}>
                        {if *busy { "Signing up..." } else { "Sign Up" }}
                    </button>
                    <p class="auth-switch">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    </p>
                </form>
            </div>
            <Snackbar notification={notifications.current.clone()} on_dismiss={notifications.dismiss.clone()} />
        </div>
    }
}
