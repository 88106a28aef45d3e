use crate::app::view::PortalHandlers;
use crate::components::search_box::SearchBox;
use crate::components::status_badge::StatusBadge;
use crate::i18n::{fmt_currency, t};
use cppnet_core::{Catalog, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MarketplacePageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
    #[prop_or_default]
    pub initial_query: AttrValue,
}

/// Searchable offer table for affiliates. Each row opens the detail overlay.
#[function_component(MarketplacePage)]
pub fn marketplace_page(p: &MarketplacePageProps) -> Html {
    let locale = p.locale;
    let query = use_state(|| p.initial_query.to_string());
    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let offers = Catalog::shared().search(&query);

    let rows = offers.iter().map(|offer| {
        let id = offer.id;
        let onclick = {
            let select = p.handlers.select_offer.clone();
            Callback::from(move |_: MouseEvent| select.emit(id))
        };
        html! {
            <tr data-testid={format!("market-row-{id}")}>
                <td>
                    <span class="offer-cell__name">{ offer.name.clone() }</span>
                    <span class="offer-cell__category">{ offer.category.clone() }</span>
                </td>
                <td dir="ltr">{ format!("{} {}", fmt_currency(offer.payout_cents, locale), offer.model.label()) }</td>
                <td dir="ltr">{ offer.geo_label() }</td>
                <td dir="ltr">{ format!("{:.1}%", offer.conversion_rate) }</td>
                <td><StatusBadge status={offer.status} {locale} /></td>
                <td>
                    <button type="button" id={format!("offer-{id}")} class="btn btn--small" {onclick}>
                        { t(locale, "marketplace.details") }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="page page--marketplace card" data-testid="view-marketplace">
            <div class="toolbar">
                <SearchBox value={(*query).clone()} placeholder={t(locale, "marketplace.search")} {on_input} />
                <button type="button" class="btn btn--ghost">{ t(locale, "marketplace.filter") }</button>
            </div>
            if offers.is_empty() {
                <p class="empty" data-testid="market-empty">{ t(locale, "marketplace.empty") }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th scope="col">{ t(locale, "table.offer") }</th>
                            <th scope="col">{ t(locale, "table.payout") }</th>
                            <th scope="col">{ t(locale, "table.geo") }</th>
                            <th scope="col">{ t(locale, "table.conversion_rate") }</th>
                            <th scope="col">{ t(locale, "table.status") }</th>
                            <th scope="col">{ t(locale, "table.actions") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </div>
    }
}
