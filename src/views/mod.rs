pub mod auth;
pub mod business_view;
pub mod home_view;
pub mod sales_view;

pub use auth::{LoginView, SignupView};
pub use business_view::BusinessView;
pub use home_view::HomeView;
pub use sales_view::SalesView;

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use yew::prelude::*;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    use super::*;
    use crate::hooks::UseSessionHandle;
    use crate::services::mock_api::MockApi;
    use crate::services::{MemoryTokenStore, TokenStore};
    use crate::state::Session;
    use crate::viewmodels::AuthViewModel;

    const LOGIN_CTA: &str = "Please Log In to Continue";

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Page {
        Home,
        Business,
        Sales,
    }

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        page: Page,
        session: Session,
    }

    #[function_component(Shell)]
    fn shell(props: &ShellProps) -> Html {
        let handle = UseSessionHandle {
            session: props.session.clone(),
            on_login: Callback::noop(),
            on_logout: Callback::noop(),
        };
        let page = match props.page {
            Page::Home => html! { <HomeView /> },
            Page::Business => html! { <BusinessView /> },
            Page::Sales => html! { <SalesView /> },
        };

        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <ContextProvider<UseSessionHandle> context={handle}>
                    {page}
                </ContextProvider<UseSessionHandle>>
            </Router>
        }
    }

    fn render(page: Page, session: Session) -> String {
        block_on(ServerRenderer::<Shell>::with_props(move || ShellProps { page, session }).render())
    }

    #[test]
    fn protected_pages_ask_anonymous_users_to_log_in() {
        for page in [Page::Home, Page::Business, Page::Sales] {
            let html = render(page, Session::anonymous());
            assert!(html.contains(LOGIN_CTA), "{page:?}: {html}");
            assert!(!html.contains("Welcome to Your Dashboard"), "{page:?}");
            assert!(!html.contains("Manage Businesses"), "{page:?}");
            assert!(!html.contains("Manage Sales"), "{page:?}");
        }
    }

    #[test]
    fn pages_render_their_content_with_a_session() {
        let session = Session::with_token("tok-1");
        assert!(render(Page::Business, session.clone()).contains("Manage Businesses"));
        assert!(render(Page::Sales, session.clone()).contains("Manage Sales"));

        let home = render(Page::Home, session);
        assert!(home.contains("Welcome to Your Dashboard"));
        assert!(!home.contains(LOGIN_CTA));
    }

    #[test]
    fn render_after_logout_shows_login_prompt_again() {
        let store = Rc::new(MemoryTokenStore::with_token("tok-1"));
        let restored = Session::restore(store.as_ref());
        assert!(render(Page::Business, restored).contains("Manage Businesses"));

        let vm = AuthViewModel::new(Rc::new(MockApi::default()), store.clone());
        let session = vm.logout();
        assert_eq!(store.load(), None);

        for page in [Page::Home, Page::Business, Page::Sales] {
            assert!(render(page, session.clone()).contains(LOGIN_CTA), "{page:?}");
        }
    }
}
