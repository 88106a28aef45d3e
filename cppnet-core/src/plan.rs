//! Pure mapping from [`AppState`] to what should be on screen.

use crate::catalog::{Catalog, Offer};
use crate::i18n::{Locale, TextDirection};
use crate::page::{Menu, Page, PageGroup, menu_for};
use crate::role::Role;
use crate::state::AppState;

/// Chrome that surrounds the active view. Exactly one is mounted at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    /// Marketing header, navigation and footer.
    Public { active: Page },
    /// Sidebar plus header bar. `active` is always an entry of `menu`.
    Dashboard {
        role: Role,
        menu: Menu,
        active: Page,
        sidebar_open: bool,
    },
    /// No chrome at all; used by the login page.
    Standalone,
}

impl Shell {
    /// Dictionary key for the dashboard header title.
    #[must_use]
    pub const fn title_key(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard { active, .. } => Some(active.label_key()),
            Self::Public { .. } | Self::Standalone => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Advertisers,
    Affiliates,
    Login,
    AffiliateMetrics,
    AdminMetrics,
    Marketplace,
    OfferManager,
    AffiliateRoster,
    Reports,
    /// Generic "coming soon" body naming the page.
    Placeholder(Page),
}

impl View {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Landing | Self::Advertisers | Self::Affiliates)
    }

    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !self.is_public() && !matches!(self, Self::Login)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<'a> {
    pub shell: Shell,
    pub view: View,
    pub overlay: Option<&'a Offer>,
    pub locale: Locale,
    pub direction: TextDirection,
}

const fn dashboard_home(role: Role) -> View {
    match role {
        Role::Affiliate => View::AffiliateMetrics,
        Role::Admin => View::AdminMetrics,
    }
}

/// View for an authenticated page, or `None` when `role` has no such entry.
const fn member_view(page: Page, role: Role) -> Option<View> {
    match (page, role) {
        (Page::Dashboard, _) => Some(dashboard_home(role)),
        (Page::Marketplace, Role::Affiliate) => Some(View::Marketplace),
        (Page::Offers, Role::Admin) => Some(View::OfferManager),
        (Page::Users, Role::Admin) => Some(View::AffiliateRoster),
        (Page::Reports, _) => Some(View::Reports),
        (Page::Payouts | Page::Settings, _) => Some(View::Placeholder(page)),
        _ => None,
    }
}

const fn public_view(page: Page) -> View {
    match page {
        Page::Advertisers => View::Advertisers,
        Page::Affiliates => View::Affiliates,
        _ => View::Landing,
    }
}

/// Decide shell, view and overlay for `state`.
///
/// An anonymous viewer on an authenticated page gets the login view, and a
/// page missing from the role's menu falls back to that role's dashboard.
/// Neither is reachable through [`AppState::navigate`].
#[must_use]
pub fn render_plan<'a>(state: &AppState, catalog: &'a Catalog) -> RenderPlan<'a> {
    let page = state.page();
    let (shell, view) = match (page.group(), state.role()) {
        (PageGroup::Public, _) => (Shell::Public { active: page }, public_view(page)),
        (PageGroup::Login, _) | (PageGroup::Authenticated, None) => {
            (Shell::Standalone, View::Login)
        }
        (PageGroup::Authenticated, Some(role)) => {
            let (active, view) = match member_view(page, role) {
                Some(view) => (page, view),
                None => {
                    log::warn!("page '{page}' is not in the {role} menu; showing dashboard");
                    (Page::Dashboard, dashboard_home(role))
                }
            };
            let shell = Shell::Dashboard {
                role,
                menu: menu_for(role),
                active,
                sidebar_open: state.sidebar_open(),
            };
            (shell, view)
        }
    };

    let overlay = state.selected_offer().and_then(|id| catalog.offer(id));
    if overlay.is_none() && state.selected_offer().is_some() {
        log::debug!("selection does not resolve in catalog; no overlay");
    }

    RenderPlan {
        shell,
        view,
        overlay,
        locale: state.locale(),
        direction: state.locale().direction(),
    }
}
