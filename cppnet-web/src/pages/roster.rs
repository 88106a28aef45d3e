use crate::i18n::{fmt_currency, t};
use cppnet_core::{Locale, ROSTER_SEED, RosterEntry, affiliate_roster};
use yew::prelude::*;

/// Rows on the full roster page.
pub const ROSTER_SIZE: usize = 12;

#[derive(Properties, PartialEq, Clone)]
pub struct AffiliateRosterPageProps {
    pub locale: Locale,
}

pub fn roster_table(entries: &[RosterEntry], locale: Locale) -> Html {
    html! {
        <table class="table" data-testid="roster-table">
            <thead>
                <tr>
                    <th scope="col">{ t(locale, "table.rank") }</th>
                    <th scope="col">{ t(locale, "table.affiliate") }</th>
                    <th scope="col">{ t(locale, "table.earnings") }</th>
                </tr>
            </thead>
            <tbody>
                { for entries.iter().enumerate().map(|(i, entry)| html! {
                    <tr>
                        <td>{ (i + 1).to_string() }</td>
                        <td>{ entry.name.clone() }</td>
                        <td dir="ltr">{ fmt_currency(entry.earnings_cents, locale) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[function_component(AffiliateRosterPage)]
pub fn affiliate_roster_page(p: &AffiliateRosterPageProps) -> Html {
    let roster = affiliate_roster(ROSTER_SIZE, ROSTER_SEED);
    html! {
        <div class="page page--roster card" data-testid="view-affiliate-roster">
            { roster_table(&roster, p.locale) }
        </div>
    }
}
