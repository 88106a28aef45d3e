use crate::app::view::PortalHandlers;
use crate::components::bar_chart::BarChart;
use crate::components::stat_card::StatCard;
use crate::i18n::{fmt_currency, fmt_number, t};
use crate::pages::roster::roster_table;
use cppnet_core::{Catalog, Locale, Page, ROSTER_SEED, affiliate_roster};
use yew::prelude::*;

/// Rows in the dashboard roster preview.
pub const ROSTER_PREVIEW: usize = 5;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminDashboardPageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(p: &AdminDashboardPageProps) -> Html {
    let locale = p.locale;
    let stats = Catalog::shared().admin_stats();
    let roster = affiliate_roster(ROSTER_PREVIEW, ROSTER_SEED);
    let view_all = {
        let navigate = p.handlers.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Page::Users))
    };

    html! {
        <div class="page page--admin-dashboard" data-testid="view-admin-metrics">
            <div class="stat-grid">
                <StatCard label={t(locale, "stats.revenue")} value={fmt_currency(stats.revenue_cents, locale)} trend={stats.revenue_trend} {locale} />
                <StatCard label={t(locale, "stats.active_offers")} value={fmt_number(stats.active_offers, locale)} {locale} />
                <StatCard label={t(locale, "stats.active_affiliates")} value={fmt_number(stats.active_affiliates, locale)} trend={stats.affiliates_trend} {locale} />
                <StatCard label={t(locale, "stats.pending_payouts")} value={fmt_currency(stats.pending_payouts_cents, locale)} {locale} />
            </div>
            <div class="dashboard-grid">
                <section class="card card--wide">
                    <BarChart title={t(locale, "dashboard.revenue_overview")} series={stats.series.clone()} {locale} />
                </section>
                <section class="card">
                    <div class="card__header">
                        <h3>{ t(locale, "dashboard.top_affiliates") }</h3>
                        <button type="button" class="link" data-testid="roster-view-all" onclick={view_all}>
                            { t(locale, "dashboard.view_all") }
                        </button>
                    </div>
                    { roster_table(&roster, locale) }
                </section>
            </div>
        </div>
    }
}
