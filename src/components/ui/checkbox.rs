use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Boolean field bound to the config document, rendered as a native
/// checkbox.
#[component]
pub fn Checkbox(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,

    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "size-4 shrink-0 rounded-[4px] border border-input accent-primary shadow-xs outline-none hover:cursor-pointer",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                on_change.run(input.checked());
            }
        }
    };

    view! {
        <input
            data-name="Checkbox"
            type="checkbox"
            class=merged_class
            id=id
            prop:checked=move || checked.get()
            on:change=on_input
        />
    }
    .into_any()
}
