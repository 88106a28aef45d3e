use cppnet_core::Locale;
use crate::i18n::{fmt_trend, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub value: AttrValue,
    pub locale: Locale,
    #[prop_or_default]
    pub trend: Option<f64>,
}

/// Headline figure with an optional up/down trend badge.
#[function_component(StatCard)]
pub fn stat_card(p: &Props) -> Html {
    let trend = p.trend.map(|pct| {
        let (class, key) = if pct >= 0.0 {
            ("trend trend--up", "stats.trend_up")
        } else {
            ("trend trend--down", "stats.trend_down")
        };
        let magnitude = format!("{:.1}", pct.abs());
        html! {
            <span class={class} aria-label={crate::i18n::tr(p.locale, key, &[("value", magnitude.as_str())])}>
                { fmt_trend(pct) }
            </span>
        }
    });
    html! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{ p.label.clone() }</span>
                { trend.unwrap_or_default() }
            </div>
            <div class="stat-card__value" dir="ltr">{ p.value.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn negative_trend_is_marked_down() {
        let props = Props {
            label: AttrValue::from(t(Locale::En, "stats.epc")),
            value: AttrValue::from("$0.45"),
            locale: Locale::En,
            trend: Some(-2.1),
        };
        let html = block_on(LocalServerRenderer::<StatCard>::with_props(props).render());
        assert!(html.contains("trend--down"));
        assert!(html.contains("-2.1%"));
        assert!(html.contains("Down 2.1%"));
    }

    #[test]
    fn trend_is_optional() {
        let props = Props {
            label: AttrValue::from("Active Offers"),
            value: AttrValue::from("124"),
            locale: Locale::En,
            trend: None,
        };
        let html = block_on(LocalServerRenderer::<StatCard>::with_props(props).render());
        assert!(!html.contains("trend"));
        assert!(html.contains("124"));
    }
}
