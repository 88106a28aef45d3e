use crate::i18n::t;
use cppnet_core::Locale;
use yew::prelude::*;

/// Not-found page to show when the URL matches no page.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub locale: Locale,
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let locale = props.locale;

    html! {
        <section class="panel not-found" dir={locale.direction().as_str()} aria-live="assertive" data-testid="view-not-found">
            <h1>{ t(locale, "not_found.title") }</h1>
            <p>{ t(locale, "not_found.body") }</p>
            <button type="button" onclick={go_home}>
                { t(locale, "not_found.home") }
            </button>
        </section>
    }
}
