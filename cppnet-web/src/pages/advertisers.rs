use crate::i18n::t;
use cppnet_core::Locale;
use yew::prelude::*;

const SELLING_POINTS: [(&str, &str); 4] = [
    ("advertisers.targeting_title", "advertisers.targeting_body"),
    ("advertisers.fraud_title", "advertisers.fraud_body"),
    ("advertisers.analytics_title", "advertisers.analytics_body"),
    ("advertisers.vetted_title", "advertisers.vetted_body"),
];

const BUDGETS: [&str; 4] = [
    "$1,000 - $5,000",
    "$5,000 - $25,000",
    "$25,000 - $100,000",
    "$100,000+",
];

#[derive(Properties, PartialEq, Clone)]
pub struct AdvertisersPageProps {
    pub locale: Locale,
}

fn field(locale: Locale, id: &str, key: &str, kind: &'static str) -> Html {
    html! {
        <label class="field" for={id.to_string()}>
            <span>{ t(locale, key) }</span>
            <input id={id.to_string()} type={kind} />
        </label>
    }
}

/// Pitch for advertisers with a display-only contact form.
#[function_component(AdvertisersPage)]
pub fn advertisers_page(p: &AdvertisersPageProps) -> Html {
    let locale = p.locale;
    html! {
        <div class="page page--advertisers" data-testid="view-advertisers">
            <section class="hero hero--dark">
                <h1>{ t(locale, "advertisers.hero_title") }</h1>
                <p class="hero__subtitle">{ t(locale, "advertisers.hero_subtitle") }</p>
                <a class="btn btn--primary" href="#contact">{ t(locale, "advertisers.become") }</a>
            </section>
            <section class="section">
                <h2>{ t(locale, "advertisers.why_title") }</h2>
                <ul class="point-list">
                    { for SELLING_POINTS.iter().map(|(title, body)| html! {
                        <li class="point">
                            <h3>{ t(locale, title) }</h3>
                            <p>{ t(locale, body) }</p>
                        </li>
                    }) }
                </ul>
            </section>
            <section id="contact" class="section section--form">
                <h2>{ t(locale, "advertisers.contact_title") }</h2>
                <form class="contact-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    { field(locale, "first-name", "advertisers.first_name", "text") }
                    { field(locale, "last-name", "advertisers.last_name", "text") }
                    { field(locale, "email", "login.email", "email") }
                    { field(locale, "website", "advertisers.website", "url") }
                    <label class="field" for="budget">
                        <span>{ t(locale, "advertisers.budget") }</span>
                        <select id="budget" dir="ltr">
                            { for BUDGETS.iter().map(|range| html! { <option>{ *range }</option> }) }
                        </select>
                    </label>
                    <label class="field field--wide" for="message">
                        <span>{ t(locale, "advertisers.message") }</span>
                        <textarea id="message" rows="4"></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary">{ t(locale, "advertisers.contact_title") }</button>
                </form>
            </section>
        </div>
    }
}
