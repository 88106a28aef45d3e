use crate::router::Route;
use cppnet_core::{Action, AppState};
use std::rc::Rc;
use yew::prelude::*;

/// Root store: the single [`AppState`] value behind a reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortalStore(pub AppState);

impl PortalStore {
    /// Store for a fresh load at `route`. Pages the anonymous visitor may not
    /// open leave the store on the landing page.
    #[must_use]
    pub fn for_route(route: Option<Route>) -> Self {
        let state = AppState::new();
        match route.and_then(Route::to_page) {
            Some(page) => Self(state.navigate(page)),
            None => Self(state),
        }
    }

    #[must_use]
    pub const fn state(&self) -> AppState {
        self.0
    }
}

impl Reducible for PortalStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[hook]
pub fn use_portal_state(route: Option<Route>) -> UseReducerHandle<PortalStore> {
    use_reducer(move || PortalStore::for_route(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppnet_core::{Locale, Page, Role};

    #[test]
    fn fresh_load_follows_public_routes() {
        assert_eq!(PortalStore::for_route(None).state().page(), Page::Landing);
        assert_eq!(
            PortalStore::for_route(Some(Route::Advertisers)).state().page(),
            Page::Advertisers
        );
        assert_eq!(
            PortalStore::for_route(Some(Route::Login)).state().page(),
            Page::Login
        );
        assert_eq!(
            PortalStore::for_route(Some(Route::NotFound)).state().page(),
            Page::Landing
        );
    }

    #[test]
    fn fresh_load_ignores_gated_routes() {
        for route in [Route::Dashboard, Route::Offers, Route::Marketplace] {
            let state = PortalStore::for_route(Some(route)).state();
            assert_eq!(state.page(), Page::Landing);
            assert!(!state.is_authenticated());
        }
    }

    #[test]
    fn reduce_keeps_the_same_rc_when_nothing_changes() {
        let store = Rc::new(PortalStore::default());
        let same = Rc::clone(&store).reduce(Action::Navigate(Page::Offers));
        assert!(Rc::ptr_eq(&store, &same));

        let changed = Rc::clone(&store).reduce(Action::ToggleLocale);
        assert!(!Rc::ptr_eq(&store, &changed));
        assert_eq!(changed.state().locale(), Locale::Ar);
    }

    #[test]
    fn reduce_applies_login() {
        let store = Rc::new(PortalStore::default());
        let next = store.reduce(Action::CompleteLogin(Role::Admin));
        assert_eq!(next.state().role(), Some(Role::Admin));
        assert_eq!(next.state().page(), Page::Dashboard);
    }
}
