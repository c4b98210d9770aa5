use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::icons::SpinIcon;

const BUTTON_CLASSES: &str = "h-10 flex justify-center items-center space-x-4 w-full text-white bg-sky-700 hover:bg-sky-800 focus:ring-4 focus:outline-none focus:ring-sky-300 font-medium rounded-lg text-lg text-center disabled:opacity-60";

/// Submit button of a form, showing a spinner and `busy_label` while `busy_reader` is set
#[component]
pub fn SubmitButton(
    #[prop(into)] busy_reader: Signal<bool>,
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
) -> impl IntoView {
    view! {
        <button type="submit" class=BUTTON_CLASSES disabled=move || busy_reader.get()>
            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="animate-spin h-5 w-5 mr-2 text-white" />
            </Show>
            {move || if busy_reader.get() { busy_label.clone() } else { label.clone() }}
        </button>
    }
}

/// A plain button that ignores clicks while `busy_reader` or `disabled` is set
#[component]
pub fn Button(
    #[prop(into)] busy_reader: Signal<bool>,
    #[prop(into, optional)] disabled: Signal<bool>,
    on_click: impl Fn(MouseEvent) + 'static,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] busy_label: &'static str,
    #[prop(default = crate::DEFAULT_BUTTON_CLASSES)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=class
            disabled=move || busy_reader.get() || disabled.get()
            on:click=move |ev| {
                if !busy_reader.get() && !disabled.get() {
                    on_click(ev);
                }
            }
        >
            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="inline animate-spin h-5 w-5 mr-2 text-white" />
            </Show>
            {move || if busy_reader.get() { busy_label.to_string() } else { label.to_string() }}
        </button>
    }
}
