//! Navigation state machine.
//!
//! [`AppState`] is an immutable value. Every transition borrows the current
//! state and returns its replacement, so a renderer only ever sees a state
//! that is complete.

use crate::catalog::OfferId;
use crate::i18n::Locale;
use crate::page::Page;
use crate::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppState {
    locale: Locale,
    role: Option<Role>,
    page: Page,
    sidebar_open: bool,
    selected_offer: Option<OfferId>,
}

/// A transition request, as dispatched by buttons and menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RequestLogin,
    CompleteLogin(Role),
    Logout,
    Navigate(Page),
    SetLocale(Locale),
    ToggleLocale,
    ToggleSidebar,
    SetSidebarOpen(bool),
    SelectOffer(OfferId),
    ClearSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("page '{0}' requires a signed-in role")]
    LoginRequired(Page),
    #[error("page '{page}' is not available to role '{role}'")]
    Forbidden { page: Page, role: Role },
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Anonymous visitor on the landing page, English, sidebar expanded, no
    /// overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locale: Locale::En,
            role: None,
            page: Page::Landing,
            sidebar_open: true,
            selected_offer: None,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub const fn selected_offer(&self) -> Option<OfferId> {
        self.selected_offer
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    #[must_use]
    pub const fn request_login(&self) -> Self {
        Self {
            page: Page::Login,
            ..*self
        }
    }

    /// Demo sign-in: any caller may take any role.
    #[must_use]
    pub const fn complete_login(&self, role: Role) -> Self {
        Self {
            role: Some(role),
            page: Page::Dashboard,
            ..*self
        }
    }

    /// Sign out and drop any open overlay along with the role.
    #[must_use]
    pub const fn logout(&self) -> Self {
        Self {
            role: None,
            page: Page::Landing,
            selected_offer: None,
            ..*self
        }
    }

    /// Move to `page` if the current role may see it.
    ///
    /// # Errors
    ///
    /// [`TransitionError::LoginRequired`] for an authenticated page while
    /// signed out, [`TransitionError::Forbidden`] for a page outside the
    /// role's menu.
    pub fn try_navigate(&self, page: Page) -> Result<Self, TransitionError> {
        if page.permits(self.role) {
            return Ok(Self { page, ..*self });
        }
        Err(match self.role {
            None => TransitionError::LoginRequired(page),
            Some(role) => TransitionError::Forbidden { page, role },
        })
    }

    /// Like [`Self::try_navigate`], but a rejected request leaves the state
    /// as it was.
    #[must_use]
    pub fn navigate(&self, page: Page) -> Self {
        self.try_navigate(page).unwrap_or_else(|err| {
            log::warn!("navigation to '{page}' rejected: {err}");
            *self
        })
    }

    #[must_use]
    pub const fn set_locale(&self, locale: Locale) -> Self {
        Self { locale, ..*self }
    }

    #[must_use]
    pub const fn toggle_locale(&self) -> Self {
        self.set_locale(self.locale.toggled())
    }

    #[must_use]
    pub const fn toggle_sidebar(&self) -> Self {
        self.set_sidebar_open(!self.sidebar_open)
    }

    #[must_use]
    pub const fn set_sidebar_open(&self, sidebar_open: bool) -> Self {
        Self {
            sidebar_open,
            ..*self
        }
    }

    /// Open the overlay for `id`, replacing any overlay already open.
    #[must_use]
    pub const fn select_offer(&self, id: OfferId) -> Self {
        Self {
            selected_offer: Some(id),
            ..*self
        }
    }

    #[must_use]
    pub const fn clear_selection(&self) -> Self {
        Self {
            selected_offer: None,
            ..*self
        }
    }

    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        let next = match action {
            Action::RequestLogin => self.request_login(),
            Action::CompleteLogin(role) => self.complete_login(role),
            Action::Logout => self.logout(),
            Action::Navigate(page) => self.navigate(page),
            Action::SetLocale(locale) => self.set_locale(locale),
            Action::ToggleLocale => self.toggle_locale(),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::SetSidebarOpen(open) => self.set_sidebar_open(open),
            Action::SelectOffer(id) => self.select_offer(id),
            Action::ClearSelection => self.clear_selection(),
        };
        log::debug!("{action:?}: {} -> {}", self.page, next.page);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_anonymous_landing() {
        let state = AppState::new();
        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.role(), None);
        assert_eq!(state.page(), Page::Landing);
        assert!(state.sidebar_open());
        assert_eq!(state.selected_offer(), None);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn anonymous_navigation_to_dashboard_is_rejected() {
        let state = AppState::new();
        assert_eq!(
            state.try_navigate(Page::Dashboard),
            Err(TransitionError::LoginRequired(Page::Dashboard))
        );
        assert_eq!(state.navigate(Page::Dashboard), state);
        assert_eq!(state.navigate(Page::Affiliates).page(), Page::Affiliates);
        assert_eq!(state.navigate(Page::Login).page(), Page::Login);
    }

    #[test]
    fn role_menu_gates_management_pages() {
        let affiliate = AppState::new().complete_login(Role::Affiliate);
        assert_eq!(
            affiliate.try_navigate(Page::Offers),
            Err(TransitionError::Forbidden {
                page: Page::Offers,
                role: Role::Affiliate
            })
        );
        assert_eq!(
            affiliate.navigate(Page::Marketplace).page(),
            Page::Marketplace
        );

        let admin = AppState::new().complete_login(Role::Admin);
        assert_eq!(admin.navigate(Page::Users).page(), Page::Users);
        assert_eq!(admin.navigate(Page::Marketplace), admin);
    }

    #[test]
    fn sidebar_is_cosmetic() {
        let state = AppState::new().complete_login(Role::Admin);
        let closed = state.toggle_sidebar();
        assert!(!closed.sidebar_open());
        assert_eq!(closed.page(), state.page());
        assert_eq!(closed.role(), state.role());
        assert_eq!(closed.toggle_sidebar(), state);
        assert_eq!(state.set_sidebar_open(true), state);
    }

    #[test]
    fn selecting_replaces_existing_overlay() {
        let state = AppState::new().select_offer(OfferId(1)).select_offer(OfferId(4));
        assert_eq!(state.selected_offer(), Some(OfferId(4)));
    }

    #[test]
    fn apply_routes_each_action() {
        let state = AppState::new()
            .apply(Action::RequestLogin)
            .apply(Action::CompleteLogin(Role::Affiliate))
            .apply(Action::Navigate(Page::Marketplace))
            .apply(Action::SelectOffer(OfferId(2)))
            .apply(Action::ToggleLocale)
            .apply(Action::SetSidebarOpen(false));
        assert_eq!(state.page(), Page::Marketplace);
        assert_eq!(state.role(), Some(Role::Affiliate));
        assert_eq!(state.selected_offer(), Some(OfferId(2)));
        assert_eq!(state.locale(), Locale::Ar);
        assert!(!state.sidebar_open());

        let state = state
            .apply(Action::ClearSelection)
            .apply(Action::SetLocale(Locale::En))
            .apply(Action::ToggleSidebar)
            .apply(Action::Logout);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn transition_errors_describe_the_request() {
        assert_eq!(
            TransitionError::LoginRequired(Page::Reports).to_string(),
            "page 'reports' requires a signed-in role"
        );
        assert_eq!(
            TransitionError::Forbidden {
                page: Page::Users,
                role: Role::Affiliate
            }
            .to_string(),
            "page 'users' is not available to role 'affiliate'"
        );
    }
}
