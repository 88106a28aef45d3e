#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use cppnet_core::{AppState, Page};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// What the router effect should do to bring the URL and the store back in
/// line.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteSync {
    Idle,
    Dispatch(Page),
    Push(Route),
    Replace(Route),
}

/// A changed URL drives the store; otherwise the store drives the URL.
/// URLs the current role may not open are replaced with the store's page.
#[cfg(any(target_arch = "wasm32", test))]
fn plan_sync(state: &AppState, route: Option<Route>, route_changed: bool) -> RouteSync {
    let target = Route::from_page(state.page());
    let Some(route) = route else {
        return RouteSync::Idle;
    };
    if route == target {
        return RouteSync::Idle;
    }
    if !route_changed {
        return RouteSync::Push(target);
    }
    match route.to_page() {
        None => RouteSync::Idle,
        Some(page) => match state.try_navigate(page) {
            Ok(_) => RouteSync::Dispatch(page),
            Err(err) => {
                log::warn!("ignoring url {}: {err}", route.to_path());
                RouteSync::Replace(target)
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_route_sync(
    store: &UseReducerHandle<super::state::PortalStore>,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let last_route = use_mut_ref(|| None::<Route>);
    let state = store.state();
    let dispatcher = store.dispatcher();
    use_effect_with((state, route), move |(state, route)| {
        let route_changed = *last_route.borrow() != *route;
        *last_route.borrow_mut() = *route;
        match plan_sync(state, *route, route_changed) {
            RouteSync::Idle => {}
            RouteSync::Dispatch(page) => dispatcher.dispatch(cppnet_core::Action::Navigate(page)),
            RouteSync::Push(target) => {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&target);
                }
            }
            RouteSync::Replace(target) => {
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&target);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppnet_core::Role;

    #[test]
    fn matching_route_needs_no_work() {
        let state = AppState::new();
        assert_eq!(plan_sync(&state, Some(Route::Home), true), RouteSync::Idle);
        assert_eq!(plan_sync(&state, Some(Route::Home), false), RouteSync::Idle);
        assert_eq!(plan_sync(&state, None, true), RouteSync::Idle);
    }

    #[test]
    fn state_change_pushes_new_url() {
        let state = AppState::new().request_login();
        assert_eq!(
            plan_sync(&state, Some(Route::Home), false),
            RouteSync::Push(Route::Login)
        );
        let admin = AppState::new().complete_login(Role::Admin);
        assert_eq!(
            plan_sync(&admin, Some(Route::Login), false),
            RouteSync::Push(Route::Dashboard)
        );
    }

    #[test]
    fn url_change_dispatches_allowed_pages() {
        let admin = AppState::new().complete_login(Role::Admin);
        assert_eq!(
            plan_sync(&admin, Some(Route::Users), true),
            RouteSync::Dispatch(Page::Users)
        );
        assert_eq!(
            plan_sync(&AppState::new(), Some(Route::Affiliates), true),
            RouteSync::Dispatch(Page::Affiliates)
        );
    }

    #[test]
    fn url_change_to_gated_page_is_replaced() {
        assert_eq!(
            plan_sync(&AppState::new(), Some(Route::Offers), true),
            RouteSync::Replace(Route::Home)
        );
        let affiliate = AppState::new().complete_login(Role::Affiliate);
        assert_eq!(
            plan_sync(&affiliate, Some(Route::Users), true),
            RouteSync::Replace(Route::Dashboard)
        );
    }

    #[test]
    fn unknown_url_is_left_for_the_not_found_view() {
        assert_eq!(
            plan_sync(&AppState::new(), Some(Route::NotFound), true),
            RouteSync::Idle
        );
    }
}
