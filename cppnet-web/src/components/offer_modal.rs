use crate::components::modal::Modal;
use crate::i18n::{fmt_currency, t, tr};
use cppnet_core::{DEMO_AFFILIATE_ID, Locale, Offer};
use yew::prelude::*;

const TRAFFIC_KEYS: [&str; 4] = [
    "modal.traffic.social",
    "modal.traffic.seo",
    "modal.traffic.blog",
    "modal.traffic.email",
];

const RULE_KEYS: [&str; 3] = [
    "modal.rules.incentivized",
    "modal.rules.adult",
    "modal.rules.brand",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub offer: Offer,
    pub locale: Locale,
    pub on_close: Callback<()>,
    pub on_copy: Callback<String>,
}

/// Full details for one offer, layered over whatever page is active.
#[function_component(OfferModal)]
pub fn offer_modal(p: &Props) -> Html {
    let locale = p.locale;
    let offer = &p.offer;
    let link = offer.tracking_link(DEMO_AFFILIATE_ID);
    let offer_id = offer.id.to_string();

    let on_copy = {
        let cb = p.on_copy.clone();
        let link = link.clone();
        Callback::from(move |_: MouseEvent| cb.emit(link.clone()))
    };
    let on_close_click = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let footer = html! {
        <button type="button" class="btn btn--secondary" data-testid="modal-close" onclick={on_close_click}>
            { t(locale, "modal.close") }
        </button>
    };

    html! {
        <Modal
            title={offer.name.clone()}
            subtitle={tr(locale, "modal.offer_id", &[("id", offer_id.as_str())])}
            description={t(locale, "modal.description")}
            close_label={t(locale, "modal.close_label")}
            on_close={p.on_close.clone()}
            return_focus_id={format!("offer-{}", offer.id)}
            {footer}
        >
            <div class="offer-detail" data-testid="offer-modal" data-offer-id={offer_id.clone()}>
                <div class="offer-detail__media">
                    { match &offer.image {
                        Some(src) => html! { <img src={src.clone()} alt={offer.name.clone()} /> },
                        None => html! { <span class="offer-detail__initial">{ offer.initial().to_string() }</span> },
                    } }
                </div>
                <dl class="offer-detail__facts">
                    <div>
                        <dt>{ t(locale, "modal.payout") }</dt>
                        <dd dir="ltr">{ format!("{} {}", fmt_currency(offer.payout_cents, locale), offer.model.label()) }</dd>
                    </div>
                    <div>
                        <dt>{ t(locale, "modal.geos") }</dt>
                        <dd dir="ltr">{ offer.geo_label() }</dd>
                    </div>
                    <div>
                        <dt>{ t(locale, "modal.conversion_rate") }</dt>
                        <dd dir="ltr">{ format!("{:.1}%", offer.conversion_rate) }</dd>
                    </div>
                </dl>
                <label class="offer-detail__link">
                    <span>{ t(locale, "modal.tracking_link") }</span>
                    <div class="offer-detail__link-row" dir="ltr">
                        <input type="text" readonly=true value={link} />
                        <button type="button" class="btn btn--primary" data-testid="copy-link" onclick={on_copy}>
                            { t(locale, "modal.copy") }
                        </button>
                    </div>
                </label>
                <div class="offer-detail__rules">
                    <section>
                        <h3>{ t(locale, "modal.allowed_traffic") }</h3>
                        <ul class="list list--allowed">
                            { for TRAFFIC_KEYS.iter().map(|key| html! { <li>{ t(locale, key) }</li> }) }
                        </ul>
                    </section>
                    <section>
                        <h3>{ t(locale, "modal.restrictions") }</h3>
                        <ul class="list list--denied">
                            { for RULE_KEYS.iter().map(|key| html! { <li>{ t(locale, key) }</li> }) }
                        </ul>
                    </section>
                </div>
            </div>
        </Modal>
    }
}
