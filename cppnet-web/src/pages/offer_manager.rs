use crate::components::search_box::SearchBox;
use crate::components::status_badge::StatusBadge;
use crate::i18n::{fmt_currency, t};
use cppnet_core::{Catalog, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OfferManagerPageProps {
    pub locale: Locale,
    #[prop_or_default]
    pub initial_query: AttrValue,
}

/// Administrator offer table. Row actions are display only.
#[function_component(OfferManagerPage)]
pub fn offer_manager_page(p: &OfferManagerPageProps) -> Html {
    let locale = p.locale;
    let query = use_state(|| p.initial_query.to_string());
    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let offers = Catalog::shared().search(&query);

    html! {
        <div class="page page--offer-manager card" data-testid="view-offer-manager">
            <div class="toolbar">
                <SearchBox value={(*query).clone()} placeholder={t(locale, "manager.search")} {on_input} />
                <button type="button" class="btn btn--primary">{ format!("+ {}", t(locale, "manager.add")) }</button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th scope="col">{ t(locale, "table.id") }</th>
                        <th scope="col">{ t(locale, "table.name") }</th>
                        <th scope="col">{ t(locale, "table.payout") }</th>
                        <th scope="col">{ t(locale, "table.geo") }</th>
                        <th scope="col">{ t(locale, "table.status") }</th>
                        <th scope="col">{ t(locale, "table.actions") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for offers.iter().map(|offer| html! {
                        <tr data-testid={format!("manager-row-{}", offer.id)}>
                            <td dir="ltr">{ format!("#{}", offer.id) }</td>
                            <td>
                                <span class="offer-cell__name">{ offer.name.clone() }</span>
                                <span class="offer-cell__category">{ offer.category.clone() }</span>
                            </td>
                            <td dir="ltr">{ format!("{} {}", fmt_currency(offer.payout_cents, locale), offer.model.label()) }</td>
                            <td dir="ltr">{ offer.geo_label() }</td>
                            <td><StatusBadge status={offer.status} {locale} /></td>
                            <td class="row-actions">
                                <button type="button" class="icon-btn" title={t(locale, "manager.edit")} aria-label={t(locale, "manager.edit")}>{"✎"}</button>
                                <button type="button" class="icon-btn" title={t(locale, "manager.pause")} aria-label={t(locale, "manager.pause")}>{"⏸"}</button>
                                <button type="button" class="icon-btn icon-btn--danger" title={t(locale, "manager.delete")} aria-label={t(locale, "manager.delete")}>{"🗑"}</button>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
