// ============================================================================
// NAVBAR - Navegación según sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_session_context;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();

    let on_logout = {
        let on_logout = session.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <header class="navbar">
            <span class="navbar-title">{"Business Dashboard"}</span>
            <nav class="navbar-links">
                if session.is_authenticated() {
                    <>
                        <Link<Route> to={Route::Home} classes="nav-link">{"🏠 Home"}</Link<Route>>
                        <Link<Route> to={Route::Business} classes="nav-link">{"🏢 Businesses"}</Link<Route>>
                        <Link<Route> to={Route::Sales} classes="nav-link">{"💲 Sales"}</Link<Route>>
                        <button type="button" class="nav-link btn-logout" onclick={on_logout}>
                            {"⎋ Logout"}
                        </button>
                    </>
                } else {
                    <Link<Route> to={Route::Login} classes="nav-link">{"⎆ Login"}</Link<Route>>
                }
            </nav>
        </header>
    }
}
