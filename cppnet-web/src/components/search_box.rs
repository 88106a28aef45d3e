use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <div class="search-box">
            <span class="search-box__icon" aria-hidden="true">{"⌕"}</span>
            <input
                type="search"
                class="search-box__input"
                placeholder={p.placeholder.clone()}
                aria-label={p.placeholder.clone()}
                value={p.value.clone()}
                {oninput}
            />
        </div>
    }
}
