use cppnet_core::{Locale, OfferStatus};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: OfferStatus,
    pub locale: Locale,
}

#[function_component(StatusBadge)]
pub fn status_badge(p: &Props) -> Html {
    let modifier = match p.status {
        OfferStatus::Active => "badge--active",
        OfferStatus::Private => "badge--private",
        OfferStatus::Paused => "badge--paused",
    };
    html! {
        <span class={classes!("badge", modifier)}>{ t(p.locale, p.status.label_key()) }</span>
    }
}
