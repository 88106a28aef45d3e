use crate::a11y::{focus_first_in, restore_focus};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

/// Dialog chrome: backdrop, title bar with close button, body.
///
/// Mounted only while something is on display; every close path (the `×`
/// button, a backdrop click, Escape) emits `on_close`.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub close_label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_id = format!("modal-{}", *modal_id);
    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    {
        let container_id = container_id.clone();
        let return_focus = props.return_focus_id.clone();
        use_effect_with(props.return_focus_id.clone(), move |_| {
            focus_first_in(&container_id);
            move || {
                if let Some(id) = return_focus.as_ref() {
                    restore_focus(id);
                }
            }
        });
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                tabindex="-1"
                onclick={swallow}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <div>
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        { props.subtitle.as_ref().map(|sub| html! {
                            <p class="modal__subtitle">{ sub.clone() }</p>
                        }).unwrap_or_default() }
                    </div>
                    <button
                        type="button"
                        class="modal__close"
                        data-testid="modal-close-x"
                        aria-label={props.close_label.clone()}
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| html! {
                    <p id={desc_id.clone()} class="sr-only">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
                <div class="modal__footer">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}
