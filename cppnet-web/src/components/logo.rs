use cppnet_core::Locale;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub locale: Locale,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

/// Brand mark. Clickable when `on_click` is set.
#[function_component(Logo)]
pub fn logo(p: &Props) -> Html {
    let mark = html! {
        <>
            <span class="logo__icon" aria-hidden="true">{"↗"}</span>
            <span class="logo__text">
                { t(p.locale, "app.brand_primary") }
                <span class="logo__accent">{ t(p.locale, "app.brand_secondary") }</span>
            </span>
        </>
    };
    match &p.on_click {
        Some(cb) => {
            let cb = cb.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
            html! {
                <button type="button" class="logo" aria-label={t(p.locale, "app.title")} {onclick}>
                    { mark }
                </button>
            }
        }
        None => html! { <div class="logo">{ mark }</div> },
    }
}
