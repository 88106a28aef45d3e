use cppnet_core::{Action, AppState, Locale, Role};
use cppnet_web::app::view::PortalViewProps;
use cppnet_web::app::PortalHandlers;
use cppnet_web::pages::roster::AffiliateRosterPageProps;
use yew::Callback;

#[test]
fn portal_view_props_compare_state_by_value() {
    let on_action = Callback::<Action>::noop();
    let a = PortalViewProps {
        state: AppState::new().complete_login(Role::Admin),
        on_action: on_action.clone(),
    };
    let b = PortalViewProps {
        state: AppState::new().complete_login(Role::Admin),
        on_action: on_action.clone(),
    };
    assert!(a == b);

    let c = PortalViewProps {
        state: AppState::new().complete_login(Role::Affiliate),
        on_action,
    };
    assert!(a != c);
}

#[test]
fn handlers_compare_by_callback_identity() {
    let handlers = PortalHandlers::noop();
    assert!(handlers == handlers.clone());
    assert!(handlers != PortalHandlers::noop());
}

#[test]
fn locale_only_props_compare_by_value() {
    let en = AffiliateRosterPageProps { locale: Locale::En };
    assert!(en == AffiliateRosterPageProps { locale: Locale::En });
    assert!(en != AffiliateRosterPageProps { locale: Locale::Ar });
}
