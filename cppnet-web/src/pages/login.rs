use crate::app::view::PortalHandlers;
use crate::components::language_toggle::LanguageToggle;
use crate::components::logo::Logo;
use crate::i18n::t;
use cppnet_core::{Locale, Page, Role};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginPageProps {
    pub locale: Locale,
    pub handlers: PortalHandlers,
}

/// Demo sign-in. Credentials are not checked; each button picks a role.
#[function_component(LoginPage)]
pub fn login_page(p: &LoginPageProps) -> Html {
    let locale = p.locale;
    let h = &p.handlers;
    let login_as = |role: Role| {
        let cb = h.complete_login.clone();
        Callback::from(move |_: MouseEvent| cb.emit(role))
    };
    let go_home = {
        let navigate = h.navigate.clone();
        Callback::from(move |()| navigate.emit(Page::Landing))
    };
    let on_back = {
        let go_home = go_home.clone();
        Callback::from(move |_: MouseEvent| go_home.emit(()))
    };
    let on_register = {
        let cb = h.register.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="login-screen" dir={locale.direction().as_str()} data-testid="view-login">
            <div class="login-screen__toggle">
                <LanguageToggle {locale} on_toggle={h.toggle_locale.clone()} />
            </div>
            <main id="main" class="login-card" role="main">
                <Logo {locale} on_click={go_home} />
                <h1>{ t(locale, "login.title") }</h1>
                <p class="login-card__subtitle">{ t(locale, "login.subtitle") }</p>
                <form class="login-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label class="field" for="login-email">
                        <span>{ t(locale, "login.email") }</span>
                        <input id="login-email" type="email" autocomplete="username" dir="ltr" />
                    </label>
                    <label class="field" for="login-password">
                        <span>{ t(locale, "login.password") }</span>
                        <input id="login-password" type="password" autocomplete="current-password" dir="ltr" />
                    </label>
                    <button type="button" class="btn btn--primary btn--block" data-testid="login-affiliate" onclick={login_as(Role::Affiliate)}>
                        { t(locale, "login.affiliate_demo") }
                    </button>
                    <button type="button" class="btn btn--dark btn--block" data-testid="login-admin" onclick={login_as(Role::Admin)}>
                        { t(locale, "login.admin_demo") }
                    </button>
                </form>
                <p class="login-card__register">
                    { t(locale, "login.no_account") }
                    {" "}
                    <button type="button" class="link" data-testid="login-register" onclick={on_register}>
                        { t(locale, "login.register") }
                    </button>
                </p>
                <button type="button" class="link login-card__back" onclick={on_back}>
                    { t(locale, "login.back") }
                </button>
            </main>
        </div>
    }
}
