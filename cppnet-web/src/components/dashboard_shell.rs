use crate::app::view::PortalHandlers;
use crate::components::language_toggle::LanguageToggle;
use crate::components::logo::Logo;
use crate::i18n::t;
use cppnet_core::{Locale, Menu, Page, Role};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub locale: Locale,
    pub role: Role,
    pub menu: Menu,
    pub active: Page,
    pub sidebar_open: bool,
    /// Dictionary key of the header title.
    pub title_key: &'static str,
    pub handlers: PortalHandlers,
    #[prop_or_default]
    pub children: Children,
}

const fn menu_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "▦",
        Page::Marketplace => "🛍",
        Page::Offers => "◎",
        Page::Users => "👥",
        Page::Reports => "▤",
        Page::Payouts => "$",
        Page::Settings => "⚙",
        Page::Landing | Page::Advertisers | Page::Affiliates | Page::Login => "•",
    }
}

/// Authenticated chrome: collapsible sidebar with the role's menu, header bar
/// with the active entry's title.
#[function_component(DashboardShell)]
pub fn dashboard_shell(p: &Props) -> Html {
    let locale = p.locale;
    let h = &p.handlers;

    let entries = p
        .menu
        .iter()
        .map(|page| {
            let page = *page;
            let is_active = page == p.active;
            let onclick = {
                let navigate = h.navigate.clone();
                Callback::from(move |_: MouseEvent| navigate.emit(page))
            };
            html! {
                <li>
                    <button
                        type="button"
                        class={classes!("sidebar__item", is_active.then_some("sidebar__item--active"))}
                        aria-current={is_active.then_some("page")}
                        data-testid={format!("menu-{}", page.slug())}
                        title={t(locale, page.label_key())}
                        {onclick}
                    >
                        <span class="sidebar__icon" aria-hidden="true">{ menu_icon(page) }</span>
                        if p.sidebar_open {
                            <span class="sidebar__label">{ t(locale, page.label_key()) }</span>
                        }
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let on_logout = {
        let cb = h.logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_toggle_sidebar = {
        let cb = h.toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div
            class={classes!("dashboard-shell", (!p.sidebar_open).then_some("dashboard-shell--collapsed"))}
            dir={locale.direction().as_str()}
            data-testid="dashboard-shell"
            data-role={p.role.key()}
        >
            <aside class="sidebar" aria-label={t(locale, "sidebar.label")}>
                <Logo {locale} />
                <nav>
                    <ul class="sidebar__menu">{ entries }</ul>
                </nav>
                <button type="button" class="sidebar__logout" data-testid="logout" onclick={on_logout}>
                    <span aria-hidden="true">{"⎋"}</span>
                    if p.sidebar_open {
                        <span>{ t(locale, "nav.logout") }</span>
                    }
                </button>
            </aside>
            <div class="dashboard-main">
                <header class="dashboard-header" role="banner">
                    <button
                        type="button"
                        class="dashboard-header__toggle"
                        data-testid="sidebar-toggle"
                        aria-label={t(locale, "sidebar.toggle")}
                        aria-expanded={p.sidebar_open.to_string()}
                        onclick={on_toggle_sidebar}
                    >
                        {"☰"}
                    </button>
                    <h1 class="dashboard-header__title">{ t(locale, p.title_key) }</h1>
                    <div class="dashboard-header__actions">
                        <LanguageToggle {locale} on_toggle={h.toggle_locale.clone()} />
                        <span class="avatar" aria-hidden="true">{ p.role.avatar().to_string() }</span>
                    </div>
                </header>
                <main id="main" class="dashboard-content" role="main">
                    { for p.children.iter() }
                </main>
            </div>
        </div>
    }
}
