use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Lo que ve una página protegida sin sesión
#[function_component(LoginPrompt)]
pub fn login_prompt() -> Html {
    let navigator = use_navigator();

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="login-prompt">
            <h2 class="login-prompt-title">{"Please Log In to Continue"}</h2>
            <button type="button" class="btn-primary btn-pill" {onclick}>
                {"Go to Login"}
            </button>
        </div>
    }
}
