use cppnet_core::{Locale, SeriesPoint};
use crate::i18n::{fmt_number, tr};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub series: Vec<SeriesPoint>,
    pub locale: Locale,
}

/// Bar height as a percentage of the tallest bar.
fn bar_height(value: u64, max: u64) -> u64 {
    if max == 0 { 0 } else { value * 100 / max }
}

#[function_component(BarChart)]
pub fn bar_chart(p: &Props) -> Html {
    let max = p.series.iter().map(|point| point.value).max().unwrap_or(0);
    let label = tr(p.locale, "dashboard.chart_label", &[("title", p.title.as_str())]);
    html! {
        <figure class="chart" role="img" aria-label={label}>
            <figcaption class="chart__title">{ p.title.clone() }</figcaption>
            <div class="chart__bars">
                { for p.series.iter().map(|point| {
                    let style = format!("height: {}%", bar_height(point.value, max));
                    html! {
                        <div class="chart__column" title={fmt_number(point.value, p.locale)}>
                            <div class="chart__bar" {style}></div>
                            <span class="chart__label">{ point.label.clone() }</span>
                        </div>
                    }
                }) }
            </div>
        </figure>
    }
}
