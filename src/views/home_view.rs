// ============================================================================
// HOME VIEW - Dashboard con una tarjeta por business
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{LoginPrompt, Navbar};
use crate::hooks::use_session::api_for;
use crate::hooks::use_session_context;
use crate::models::Business;
use crate::viewmodels::{BusinessResource, CrudViewModel, LoadOutcome};

pub const HOME_FETCH_ERROR: &str = "Failed to fetch businesses. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
enum HomeState {
    Loading,
    Loaded(Vec<Business>),
    Failed,
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let session = use_session_context().session;
    let state = use_state(|| HomeState::Loading);

    {
        let state = state.clone();
        use_effect_with(session.clone(), move |session| {
            let vm = CrudViewModel::new(api_for(session), session.clone(), BusinessResource);
            state.set(HomeState::Loading);
            spawn_local(async move {
                let next = match vm.load().await {
                    LoadOutcome::Loaded(businesses) => HomeState::Loaded(businesses),
                    LoadOutcome::NotAuthenticated => HomeState::Loaded(Vec::new()),
                    LoadOutcome::Failed(_) => HomeState::Failed,
                };
                state.set(next);
            });
            || ()
        });
    }

    let content = match &*state {
        HomeState::Loading => html! { <div class="spinner-wrap"><div class="spinner"></div></div> },
        HomeState::Failed => html! { <p class="home-error">{HOME_FETCH_ERROR}</p> },
        HomeState::Loaded(businesses) => html! {
            <div class="card-grid">
                { for businesses.iter().map(|business| html! {
                    <div class="business-card" key={business.business_id.to_string()}>
                        <h3>{&business.business_name}</h3>
                        <p>{format!("City: {}", business.city)}</p>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        <>
            <Navbar />
            <main class="home-container">
                if session.is_authenticated() {
                    <h1 class="home-title">{"Welcome to Your Dashboard"}</h1>
                    <p class="home-subtitle">{"Explore and manage your businesses with style and ease."}</p>
                    {content}
                } else {
                    <LoginPrompt />
                }
            </main>
        </>
    }
}
