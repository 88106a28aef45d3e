//! Closed set of page identifiers and the role-derived dashboard menu.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Landing,
    Advertisers,
    Affiliates,
    Login,
    Dashboard,
    Marketplace,
    Offers,
    Users,
    Reports,
    Payouts,
    Settings,
}

/// Disjoint partition of [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageGroup {
    Public,
    Login,
    Authenticated,
}

/// Dashboard menu as shown for one role. Never longer than the full catalog.
pub type Menu = SmallVec<[Page; 7]>;

/// Every page the dashboard sidebar can ever list, in display order.
pub const MENU_CATALOG: [Page; 7] = [
    Page::Dashboard,
    Page::Marketplace,
    Page::Offers,
    Page::Users,
    Page::Reports,
    Page::Payouts,
    Page::Settings,
];

impl Page {
    pub const ALL: [Self; 11] = [
        Self::Landing,
        Self::Advertisers,
        Self::Affiliates,
        Self::Login,
        Self::Dashboard,
        Self::Marketplace,
        Self::Offers,
        Self::Users,
        Self::Reports,
        Self::Payouts,
        Self::Settings,
    ];

    pub const PUBLIC: [Self; 3] = [Self::Landing, Self::Advertisers, Self::Affiliates];

    #[must_use]
    pub const fn group(self) -> PageGroup {
        match self {
            Self::Landing | Self::Advertisers | Self::Affiliates => PageGroup::Public,
            Self::Login => PageGroup::Login,
            Self::Dashboard
            | Self::Marketplace
            | Self::Offers
            | Self::Users
            | Self::Reports
            | Self::Payouts
            | Self::Settings => PageGroup::Authenticated,
        }
    }

    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self.group(), PageGroup::Public)
    }

    #[must_use]
    pub const fn requires_login(self) -> bool {
        matches!(self.group(), PageGroup::Authenticated)
    }

    /// Stable lowercase identifier, also used for URLs and test ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Advertisers => "advertisers",
            Self::Affiliates => "affiliates",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Marketplace => "marketplace",
            Self::Offers => "offers",
            Self::Users => "users",
            Self::Reports => "reports",
            Self::Payouts => "payouts",
            Self::Settings => "settings",
        }
    }

    /// Dictionary key of the navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Landing => "nav.home",
            Self::Advertisers => "nav.advertisers",
            Self::Affiliates => "nav.affiliates",
            Self::Login => "nav.login",
            Self::Dashboard => "nav.dashboard",
            Self::Marketplace => "nav.marketplace",
            Self::Offers => "nav.offers",
            Self::Users => "nav.users",
            Self::Reports => "nav.reports",
            Self::Payouts => "nav.payouts",
            Self::Settings => "nav.settings",
        }
    }

    /// Whether a viewer with `role` may have this page active.
    ///
    /// Public pages and the login page are open to everyone. Authenticated
    /// pages need a role whose menu lists them.
    #[must_use]
    pub fn permits(self, role: Option<Role>) -> bool {
        match (self.group(), role) {
            (PageGroup::Public | PageGroup::Login, _) => true,
            (PageGroup::Authenticated, None) => false,
            (PageGroup::Authenticated, Some(role)) => menu_for(role).contains(&self),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Sidebar entries for `role`, derived fresh on every call.
#[must_use]
pub fn menu_for(role: Role) -> Menu {
    MENU_CATALOG
        .iter()
        .copied()
        .filter(|page| match role {
            Role::Admin => !matches!(page, Page::Marketplace),
            Role::Affiliate => !matches!(page, Page::Offers | Page::Users),
        })
        .collect()
}
