use crate::i18n::{t, tr};
use cppnet_core::{Locale, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportsPageProps {
    pub locale: Locale,
}

#[function_component(ReportsPage)]
pub fn reports_page(p: &ReportsPageProps) -> Html {
    html! {
        <div class="page placeholder" data-testid="view-reports">
            <span class="placeholder__icon" aria-hidden="true">{"▤"}</span>
            <h2>{ t(p.locale, "placeholder.reports_title") }</h2>
            <p>{ t(p.locale, "placeholder.reports_body") }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlaceholderPageProps {
    pub locale: Locale,
    pub page: Page,
}

/// "Coming soon" body for pages that have no content yet.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(p: &PlaceholderPageProps) -> Html {
    let name = t(p.locale, p.page.label_key());
    html! {
        <div class="page placeholder" data-testid={format!("view-placeholder-{}", p.page.slug())}>
            <h2>{ tr(p.locale, "placeholder.coming_soon", &[("page", name.as_str())]) }</h2>
            <p>{ t(p.locale, "placeholder.body") }</p>
        </div>
    }
}
