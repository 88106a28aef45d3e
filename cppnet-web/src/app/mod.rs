#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;
pub mod state;
pub mod view;

pub use state::PortalStore;
pub use view::{PortalHandlers, PortalView};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let store = state::use_portal_state(route);

    routing::use_route_sync(&store, navigator.clone(), route);

    let locale = store.state().locale();
    use_effect_with(locale, |locale| crate::i18n::apply_document_locale(*locale));

    let on_action = {
        let dispatcher = store.dispatcher();
        Callback::from(move |action| dispatcher.dispatch(action))
    };

    if route == Some(Route::NotFound) {
        let home = Route::from_page(store.state().page());
        let on_go_home = Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&home);
            }
        });
        return html! {
            <crate::pages::not_found::NotFound {locale} {on_go_home} />
        };
    }

    html! { <PortalView state={store.state()} {on_action} /> }
}
