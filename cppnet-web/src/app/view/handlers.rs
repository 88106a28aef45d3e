use cppnet_core::{Action, OfferId, Page, Role};
use yew::prelude::*;

/// Every callback a shell or page may fire. Each one only dispatches an
/// [`Action`]; nothing below the root touches state directly.
#[derive(Clone, PartialEq)]
pub struct PortalHandlers {
    pub navigate: Callback<Page>,
    pub request_login: Callback<()>,
    pub complete_login: Callback<Role>,
    pub register: Callback<()>,
    pub logout: Callback<()>,
    pub toggle_locale: Callback<()>,
    pub toggle_sidebar: Callback<()>,
    pub select_offer: Callback<OfferId>,
    pub clear_selection: Callback<()>,
    pub copy_link: Callback<String>,
}

impl PortalHandlers {
    #[must_use]
    pub fn new(dispatch: &Callback<Action>) -> Self {
        Self {
            navigate: dispatch.reform(Action::Navigate),
            request_login: dispatch.reform(|()| Action::RequestLogin),
            complete_login: dispatch.reform(Action::CompleteLogin),
            register: dispatch.reform(|()| Action::CompleteLogin(Role::Affiliate)),
            logout: dispatch.reform(|()| Action::Logout),
            toggle_locale: dispatch.reform(|()| Action::ToggleLocale),
            toggle_sidebar: dispatch.reform(|()| Action::ToggleSidebar),
            select_offer: dispatch.reform(Action::SelectOffer),
            clear_selection: dispatch.reform(|()| Action::ClearSelection),
            copy_link: Callback::from(crate::dom::spawn_copy),
        }
    }

    /// Handlers that do nothing, for rendering pages in isolation.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(&Callback::noop())
    }
}
