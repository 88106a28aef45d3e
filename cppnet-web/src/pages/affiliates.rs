use crate::app::view::PortalHandlers;
use crate::i18n::{fmt_currency, t, tr};
use cppnet_core::{Catalog, Locale};
use yew::prelude::*;

const BENEFITS: [(&str, &str); 3] = [
    ("affiliates.payouts_title", "affiliates.payouts_body"),
    ("affiliates.weekly_title", "affiliates.weekly_body"),
    ("affiliates.exclusive_title", "affiliates.exclusive_body"),
];

const STEPS: [(&str, &str); 4] = [
    ("affiliates.step_account_title", "affiliates.step_account_body"),
    ("affiliates.step_select_title", "affiliates.step_select_body"),
    ("affiliates.step_promote_title", "affiliates.step_promote_body"),
    ("affiliates.step_paid_title", "affiliates.step_paid_body"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct AffiliatesPageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
}

#[function_component(AffiliatesPage)]
pub fn affiliates_page(p: &AffiliatesPageProps) -> Html {
    let locale = p.locale;
    let on_join = {
        let cb = p.handlers.register.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let feed = Catalog::shared().recent_payouts().iter().map(|event| {
        let minutes = event.minutes_ago.to_string();
        let initial = event.user.chars().next().unwrap_or('?').to_string();
        html! {
            <li class="payout-feed__item">
                <span class="avatar" aria-hidden="true">{ initial }</span>
                <span class="payout-feed__user">{ event.user.clone() }</span>
                <span class="payout-feed__method">{ event.method.clone() }</span>
                <span class="payout-feed__amount" dir="ltr">{ fmt_currency(event.amount_cents, locale) }</span>
                <span class="payout-feed__ago">{ tr(locale, "affiliates.minutes_ago", &[("minutes", minutes.as_str())]) }</span>
            </li>
        }
    });

    html! {
        <div class="page page--affiliates" data-testid="view-affiliates">
            <section class="hero hero--accent">
                <h1>{ t(locale, "affiliates.hero_title") }</h1>
                <p class="hero__subtitle">{ t(locale, "affiliates.hero_subtitle") }</p>
                <button type="button" class="btn btn--light" data-testid="cta-join" onclick={on_join}>
                    { t(locale, "affiliates.join") }
                </button>
            </section>
            <section class="section">
                <h2>{ t(locale, "affiliates.why_title") }</h2>
                <div class="feature-grid">
                    { for BENEFITS.iter().map(|(title, body)| html! {
                        <article class="feature">
                            <h3>{ t(locale, title) }</h3>
                            <p>{ t(locale, body) }</p>
                        </article>
                    }) }
                </div>
            </section>
            <section class="section section--split">
                <div>
                    <h2>{ t(locale, "affiliates.how_title") }</h2>
                    <ol class="steps">
                        { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <li class="step">
                                <span class="step__number" aria-hidden="true">{ (i + 1).to_string() }</span>
                                <div>
                                    <h3>{ t(locale, title) }</h3>
                                    <p>{ t(locale, body) }</p>
                                </div>
                            </li>
                        }) }
                    </ol>
                </div>
                <div class="payout-feed">
                    <h2>{ t(locale, "affiliates.feed_title") }</h2>
                    <ul>{ for feed }</ul>
                </div>
            </section>
        </div>
    }
}
