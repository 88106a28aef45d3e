use cppnet_core::Page;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/advertisers")]
    Advertisers,
    #[at("/affiliates")]
    Affiliates,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/marketplace")]
    Marketplace,
    #[at("/offers")]
    Offers,
    #[at("/users")]
    Users,
    #[at("/reports")]
    Reports,
    #[at("/payouts")]
    Payouts,
    #[at("/settings")]
    Settings,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Landing => Self::Home,
            Page::Advertisers => Self::Advertisers,
            Page::Affiliates => Self::Affiliates,
            Page::Login => Self::Login,
            Page::Dashboard => Self::Dashboard,
            Page::Marketplace => Self::Marketplace,
            Page::Offers => Self::Offers,
            Page::Users => Self::Users,
            Page::Reports => Self::Reports,
            Page::Payouts => Self::Payouts,
            Page::Settings => Self::Settings,
        }
    }

    #[must_use]
    pub const fn to_page(self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Landing),
            Self::Advertisers => Some(Page::Advertisers),
            Self::Affiliates => Some(Page::Affiliates),
            Self::Login => Some(Page::Login),
            Self::Dashboard => Some(Page::Dashboard),
            Self::Marketplace => Some(Page::Marketplace),
            Self::Offers => Some(Page::Offers),
            Self::Users => Some(Page::Users),
            Self::Reports => Some(Page::Reports),
            Self::Payouts => Some(Page::Payouts),
            Self::Settings => Some(Page::Settings),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_route() {
        for page in Page::ALL {
            assert_eq!(Route::from_page(page).to_page(), Some(page));
        }
        assert_eq!(Route::NotFound.to_page(), None);
    }

    #[test]
    fn paths_match_page_slugs() {
        assert_eq!(Route::Home.to_path(), "/");
        for page in Page::ALL.into_iter().filter(|p| *p != Page::Landing) {
            assert_eq!(Route::from_page(page).to_path(), format!("/{}", page.slug()));
        }
        assert_eq!(Route::recognize("/offers"), Some(Route::Offers));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
