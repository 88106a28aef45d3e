use cppnet_core::Locale;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub locale: Locale,
    pub on_toggle: Callback<()>,
}

/// Button labelled with the native name of the locale it switches to.
#[function_component(LanguageToggle)]
pub fn language_toggle(p: &Props) -> Html {
    let target = p.locale.toggled();
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <button
            type="button"
            class="lang-toggle"
            data-testid="lang-toggle"
            aria-label={t(p.locale, "lang.switch")}
            lang={target.code()}
            {onclick}
        >
            <span aria-hidden="true">{"🌐"}</span>
            <span>{ target.native_name() }</span>
        </button>
    }
}
