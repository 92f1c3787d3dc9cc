// ============================================================================
// APP - Router y provider de sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionContextProvider;
use crate::views::{BusinessView, HomeView, LoginView, SalesView, SignupView};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/business")]
    Business,
    #[at("/sales")]
    Sales,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Signup => html! { <SignupView /> },
        Route::Login => html! { <LoginView /> },
        Route::Home => html! { <HomeView /> },
        Route::Business => html! { <BusinessView /> },
        Route::Sales => html! { <SalesView /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionContextProvider>
                <Switch<Route> render={switch} />
            </SessionContextProvider>
        </BrowserRouter>
    }
}
