use crate::app::view::PortalHandlers;
use crate::components::status_badge::StatusBadge;
use crate::i18n::{fmt_currency, t};
use cppnet_core::{Catalog, Locale, Offer, OfferId, Page};
use yew::prelude::*;

/// Offers shown in the landing page grid.
pub const FEATURED_COUNT: usize = 4;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "home.feature_payouts_title", "home.feature_payouts_body"),
    ("★", "home.feature_offers_title", "home.feature_offers_body"),
    ("☎", "home.feature_support_title", "home.feature_support_body"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
}

/// Clickable card for one offer; opens the detail overlay.
pub fn offer_card(offer: &Offer, locale: Locale, select: &Callback<OfferId>) -> Html {
    let id = offer.id;
    let onclick = {
        let select = select.clone();
        Callback::from(move |_: MouseEvent| select.emit(id))
    };
    html! {
        <button
            type="button"
            id={format!("offer-{id}")}
            class="offer-card"
            data-testid={format!("offer-card-{id}")}
            {onclick}
        >
            { offer.image.as_ref().map(|src| html! {
                <img class="offer-card__image" src={src.clone()} alt="" loading="lazy" />
            }).unwrap_or_default() }
            <span class="offer-card__name">{ offer.name.clone() }</span>
            <span class="offer-card__meta">
                <span dir="ltr">{ format!("{} {}", fmt_currency(offer.payout_cents, locale), offer.model.label()) }</span>
                <span class="offer-card__category">{ offer.category.clone() }</span>
                <StatusBadge status={offer.status} {locale} />
            </span>
        </button>
    }
}

#[function_component(LandingPage)]
pub fn landing_page(p: &LandingPageProps) -> Html {
    let locale = p.locale;
    let catalog = Catalog::shared();
    let network = catalog.network();

    let on_start = {
        let cb = p.handlers.register.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_learn_more = {
        let navigate = p.handlers.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Page::Affiliates))
    };

    let stats = [
        (network.affiliates.as_str(), "home.stat_affiliates"),
        (network.paid_out.as_str(), "home.stat_paid"),
        (network.offers.as_str(), "home.stat_offers"),
    ];

    html! {
        <div class="page page--landing" data-testid="view-landing">
            <section class="hero">
                <h1>{ t(locale, "home.hero_title") }</h1>
                <p class="hero__subtitle">{ t(locale, "home.hero_subtitle") }</p>
                <div class="hero__actions">
                    <button type="button" class="btn btn--primary" data-testid="cta-start" onclick={on_start.clone()}>
                        { t(locale, "home.get_started") }
                    </button>
                    <button type="button" class="btn btn--ghost" onclick={on_learn_more}>
                        { t(locale, "home.learn_more") }
                    </button>
                </div>
                <dl class="hero__stats">
                    { for stats.iter().map(|(value, key)| html! {
                        <div>
                            <dt dir="ltr">{ *value }</dt>
                            <dd>{ t(locale, key) }</dd>
                        </div>
                    }) }
                </dl>
            </section>
            <section class="section">
                <h2>{ t(locale, "home.featured") }</h2>
                <div class="offer-grid">
                    { for catalog.featured(FEATURED_COUNT).iter().map(|offer| offer_card(offer, locale, &p.handlers.select_offer)) }
                </div>
            </section>
            <section class="section section--features">
                <h2>{ t(locale, "home.why_title") }</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <article class="feature">
                            <span class="feature__icon" aria-hidden="true">{ *icon }</span>
                            <h3>{ t(locale, title) }</h3>
                            <p>{ t(locale, body) }</p>
                        </article>
                    }) }
                </div>
            </section>
            <section class="cta">
                <h2>{ t(locale, "home.cta_title") }</h2>
                <p>{ t(locale, "home.cta_body") }</p>
                <button type="button" class="btn btn--light" onclick={on_start}>
                    { t(locale, "home.get_started") }
                </button>
            </section>
        </div>
    }
}
