use crate::app::view::PortalHandlers;
use crate::components::bar_chart::BarChart;
use crate::components::stat_card::StatCard;
use crate::i18n::{fmt_currency, fmt_number, t};
use cppnet_core::{Catalog, Locale};
use yew::prelude::*;

/// Rows in the "Top Offers" card.
pub const TOP_OFFERS: usize = 3;

#[derive(Properties, PartialEq, Clone)]
pub struct AffiliateDashboardPageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
}

#[function_component(AffiliateDashboardPage)]
pub fn affiliate_dashboard_page(p: &AffiliateDashboardPageProps) -> Html {
    let locale = p.locale;
    let catalog = Catalog::shared();
    let stats = catalog.affiliate_stats();

    let top_offers = catalog.featured(TOP_OFFERS).iter().map(|offer| {
        let id = offer.id;
        let onclick = {
            let select = p.handlers.select_offer.clone();
            Callback::from(move |_: MouseEvent| select.emit(id))
        };
        html! {
            <li>
                <button type="button" id={format!("offer-{id}")} class="top-offer" data-testid={format!("top-offer-{id}")} {onclick}>
                    <span class="top-offer__initial" aria-hidden="true">{ offer.initial().to_string() }</span>
                    <span class="top-offer__name">{ offer.name.clone() }</span>
                    <span class="top-offer__payout" dir="ltr">{ fmt_currency(offer.payout_cents, locale) }</span>
                </button>
            </li>
        }
    });

    html! {
        <div class="page page--affiliate-dashboard" data-testid="view-affiliate-metrics">
            <h2 class="page__greeting">{ t(locale, "dashboard.welcome") }</h2>
            <div class="stat-grid">
                <StatCard label={t(locale, "stats.total_earnings")} value={fmt_currency(stats.earnings_cents, locale)} trend={stats.earnings_trend} {locale} />
                <StatCard label={t(locale, "stats.available_balance")} value={fmt_currency(stats.balance_cents, locale)} {locale} />
                <StatCard label={t(locale, "stats.total_conversions")} value={fmt_number(stats.conversions, locale)} trend={stats.conversions_trend} {locale} />
                <StatCard label={t(locale, "stats.epc")} value={fmt_currency(stats.epc_cents, locale)} trend={stats.epc_trend} {locale} />
            </div>
            <div class="dashboard-grid">
                <section class="card card--wide">
                    <BarChart title={t(locale, "dashboard.recent_activity")} series={stats.series.clone()} {locale} />
                </section>
                <section class="card">
                    <h3>{ t(locale, "dashboard.top_offers") }</h3>
                    <ul class="top-offers">{ for top_offers }</ul>
                </section>
            </div>
        </div>
    }
}
