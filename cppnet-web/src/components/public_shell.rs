use crate::app::view::PortalHandlers;
use crate::components::language_toggle::LanguageToggle;
use crate::components::logo::Logo;
use crate::i18n::t;
use cppnet_core::{Locale, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub locale: Locale,
    pub active: Page,
    pub handlers: PortalHandlers,
    #[prop_or_default]
    pub children: Children,
}

fn nav_link(locale: Locale, page: Page, active: Page, navigate: &Callback<Page>) -> Html {
    let onclick = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(page))
    };
    let current = (page == active).then_some("page");
    html! {
        <button
            type="button"
            class={classes!("nav-link", (page == active).then_some("nav-link--active"))}
            aria-current={current}
            data-testid={format!("nav-{}", page.slug())}
            {onclick}
        >
            { t(locale, page.label_key()) }
        </button>
    }
}

/// Marketing chrome: header with navigation, footer with contact details.
#[function_component(PublicShell)]
pub fn public_shell(p: &Props) -> Html {
    let menu_open = use_state(|| false);
    let locale = p.locale;
    let h = &p.handlers;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let go_home = {
        let navigate = h.navigate.clone();
        Callback::from(move |()| navigate.emit(Page::Landing))
    };
    let on_login = {
        let cb = h.request_login.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_register = {
        let cb = h.register.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let links = Page::PUBLIC
        .iter()
        .map(|page| nav_link(locale, *page, p.active, &h.navigate))
        .collect::<Html>();
    let quick_links = Page::PUBLIC
        .iter()
        .chain(std::iter::once(&Page::Login))
        .map(|page| {
            let page = *page;
            let onclick = if page == Page::Login {
                on_login.clone()
            } else {
                let navigate = h.navigate.clone();
                Callback::from(move |_: MouseEvent| navigate.emit(page))
            };
            html! {
                <li><button type="button" class="footer-link" {onclick}>{ t(locale, page.label_key()) }</button></li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="public-shell" dir={locale.direction().as_str()} data-testid="public-shell">
            <header class="public-header" role="banner">
                <Logo {locale} on_click={go_home} />
                <nav
                    class={classes!("public-nav", (*menu_open).then_some("public-nav--open"))}
                    aria-label={t(locale, "nav.main")}
                >
                    { links }
                </nav>
                <div class="public-header__actions">
                    <LanguageToggle {locale} on_toggle={h.toggle_locale.clone()} />
                    <button type="button" class="btn btn--ghost" data-testid="header-login" onclick={on_login}>
                        { t(locale, "nav.login") }
                    </button>
                    <button type="button" class="btn btn--primary" data-testid="header-register" onclick={on_register}>
                        { t(locale, "nav.register") }
                    </button>
                    <button
                        type="button"
                        class="public-header__menu"
                        aria-label={t(locale, "nav.menu")}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        {"☰"}
                    </button>
                </div>
            </header>
            <main id="main" role="main">
                { for p.children.iter() }
            </main>
            <footer class="public-footer" role="contentinfo">
                <div class="public-footer__about">
                    <Logo {locale} />
                    <p>{ t(locale, "footer.about") }</p>
                </div>
                <div>
                    <h3>{ t(locale, "footer.quick_links") }</h3>
                    <ul>{ quick_links }</ul>
                </div>
                <div>
                    <h3>{ t(locale, "footer.contact") }</h3>
                    <ul>
                        <li dir="ltr">{ t(locale, "footer.email") }</li>
                        <li dir="ltr">{ t(locale, "footer.phone") }</li>
                        <li>{ t(locale, "footer.address") }</li>
                    </ul>
                </div>
                <p class="public-footer__rights">{ t(locale, "footer.rights") }</p>
            </footer>
        </div>
    }
}
