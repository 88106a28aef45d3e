mod handlers;

pub use handlers::PortalHandlers;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::offer_modal::OfferModal;
use crate::components::public_shell::PublicShell;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::advertisers::AdvertisersPage;
use crate::pages::affiliate_dashboard::AffiliateDashboardPage;
use crate::pages::affiliates::AffiliatesPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::marketplace::MarketplacePage;
use crate::pages::offer_manager::OfferManagerPage;
use crate::pages::placeholder::{PlaceholderPage, ReportsPage};
use crate::pages::roster::AffiliateRosterPage;
use cppnet_core::{Action, AppState, Catalog, Locale, RenderPlan, Shell, View, render_plan};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PortalViewProps {
    pub state: AppState,
    pub on_action: Callback<Action>,
}

/// Renders whatever the plan for `state` calls for: one shell, one view and
/// at most one overlay.
#[function_component(PortalView)]
pub fn portal_view(p: &PortalViewProps) -> Html {
    let handlers = PortalHandlers::new(&p.on_action);
    let plan = render_plan(&p.state, Catalog::shared());
    render_portal(&plan, &handlers)
}

fn render_view(view: View, locale: Locale, handlers: &PortalHandlers) -> Html {
    let handlers = handlers.clone();
    match view {
        View::Landing => html! { <LandingPage {locale} {handlers} /> },
        View::Advertisers => html! { <AdvertisersPage {locale} /> },
        View::Affiliates => html! { <AffiliatesPage {locale} {handlers} /> },
        View::Login => html! { <LoginPage {locale} {handlers} /> },
        View::AffiliateMetrics => html! { <AffiliateDashboardPage {locale} {handlers} /> },
        View::AdminMetrics => html! { <AdminDashboardPage {locale} {handlers} /> },
        View::Marketplace => html! { <MarketplacePage {locale} {handlers} /> },
        View::OfferManager => html! { <OfferManagerPage {locale} /> },
        View::AffiliateRoster => html! { <AffiliateRosterPage {locale} /> },
        View::Reports => html! { <ReportsPage {locale} /> },
        View::Placeholder(page) => html! { <PlaceholderPage {locale} {page} /> },
    }
}

pub fn render_portal(plan: &RenderPlan<'_>, handlers: &PortalHandlers) -> Html {
    let locale = plan.locale;
    let view = render_view(plan.view, locale, handlers);

    let title_key = plan.shell.title_key();
    let body = match &plan.shell {
        Shell::Public { active } => html! {
            <PublicShell {locale} active={*active} handlers={handlers.clone()}>
                { view }
            </PublicShell>
        },
        Shell::Dashboard {
            role,
            menu,
            active,
            sidebar_open,
        } => html! {
            <DashboardShell
                {locale}
                role={*role}
                menu={menu.clone()}
                active={*active}
                sidebar_open={*sidebar_open}
                title_key={title_key.unwrap_or_else(|| active.label_key())}
                handlers={handlers.clone()}
            >
                { view }
            </DashboardShell>
        },
        Shell::Standalone => view,
    };

    let overlay = plan.overlay.map(|offer| {
        html! {
            <OfferModal
                key={offer.id.to_string()}
                offer={offer.clone()}
                {locale}
                on_close={handlers.clear_selection.clone()}
                on_copy={handlers.copy_link.clone()}
            />
        }
    });

    html! {
        <div class="portal" lang={locale.code()} dir={plan.direction.as_str()}>
            <style>{ crate::a11y::visible_focus_css() }</style>
            { body }
            { overlay.unwrap_or_default() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppnet_core::{OfferId, Page, Role};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(state: AppState) -> String {
        let props = PortalViewProps {
            state,
            on_action: Callback::noop(),
        };
        block_on(LocalServerRenderer::<PortalView>::with_props(props).render())
    }

    #[test]
    fn initial_state_renders_public_landing() {
        let html = render(AppState::new());
        assert!(html.contains("data-testid=\"public-shell\""));
        assert!(html.contains("data-testid=\"view-landing\""));
        assert!(!html.contains("role=\"dialog\""));
        assert!(html.contains("dir=\"ltr\""));
    }

    #[test]
    fn login_page_has_no_shell() {
        let html = render(AppState::new().request_login());
        assert!(html.contains("data-testid=\"view-login\""));
        assert!(!html.contains("public-shell"));
        assert!(!html.contains("dashboard-shell"));
    }

    #[test]
    fn admin_dashboard_uses_dashboard_shell_with_admin_menu() {
        let html = render(AppState::new().complete_login(Role::Admin));
        assert!(html.contains("data-testid=\"dashboard-shell\""));
        assert!(html.contains("data-testid=\"view-admin-metrics\""));
        assert!(html.contains("data-testid=\"menu-offers\""));
        assert!(html.contains("data-testid=\"menu-users\""));
        assert!(!html.contains("data-testid=\"menu-marketplace\""));
    }

    #[test]
    fn affiliate_menu_hides_admin_entries() {
        let html = render(AppState::new().complete_login(Role::Affiliate));
        assert!(html.contains("data-testid=\"view-affiliate-metrics\""));
        assert!(html.contains("data-testid=\"menu-marketplace\""));
        assert!(!html.contains("data-testid=\"menu-offers\""));
        assert!(!html.contains("data-testid=\"menu-users\""));
    }

    #[test]
    fn selection_layers_modal_over_active_page() {
        let state = AppState::new()
            .complete_login(Role::Affiliate)
            .navigate(Page::Marketplace)
            .select_offer(OfferId(3));
        let html = render(state);
        assert!(html.contains("data-testid=\"view-marketplace\""));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("data-offer-id=\"3\""));
        assert!(html.contains("offer_id=3&amp;aff_id=1234") || html.contains("offer_id=3&aff_id=1234"));
    }

    #[test]
    fn dangling_selection_renders_no_modal() {
        let html = render(AppState::new().select_offer(OfferId(77)));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn arabic_renders_right_to_left() {
        let html = render(AppState::new().complete_login(Role::Admin).set_locale(Locale::Ar));
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("lang=\"ar\""));
        assert!(html.contains("لوحة التحكم"));
    }

    #[test]
    fn dashboard_header_shows_active_entry_title() {
        let state = AppState::new()
            .complete_login(Role::Admin)
            .navigate(Page::Users);
        let html = render(state);
        let title = cppnet_core::t(Locale::En, Page::Users.label_key());
        assert!(html.contains(&format!("<h1 class=\"dashboard-header__title\">{title}</h1>")));
    }

    #[test]
    fn collapsed_sidebar_hides_labels() {
        let open = render(AppState::new().complete_login(Role::Admin));
        let closed = render(AppState::new().complete_login(Role::Admin).toggle_sidebar());
        assert!(open.contains("sidebar__label"));
        assert!(!closed.contains("sidebar__label"));
        assert!(closed.contains("dashboard-shell--collapsed"));
    }
}
