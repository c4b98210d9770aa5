//! Transient notifications in the corner of the screen

use bookshelf_shared::{Notification, Status};
use leptos::prelude::*;

use crate::icons::{CheckIcon, CloseIcon, InfoIcon};

/// Handle for showing notifications, provided as context by the App.
///
/// Every notification dismisses itself after its duration.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}
impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let duration = notification.duration;
        self.toasts.update(|t| t.push((id, notification)));
        let this = *self;
        set_timeout(move || this.dismiss(id), duration);
    }

    pub fn dismiss(&self, id: u64) {
        // the App may already be gone when a timeout fires
        self.toasts.try_update(|t| t.retain(|(i, _)| *i != id));
    }
}

#[component]
fn Toast(id: u64, notification: Notification, toaster: Toaster) -> impl IntoView {
    let closable = notification.closable;
    let (border, icon) = match notification.status {
        Status::Success => (
            "border-green-500",
            view! { <CheckIcon inner_class="h-6 w-6 text-green-500" /> }.into_any(),
        ),
        Status::Error => (
            "border-rose-500",
            view! { <InfoIcon inner_class="h-6 w-6 text-rose-500" /> }.into_any(),
        ),
    };
    view! {
        <li
            role="status"
            class=format!("flex w-80 items-start gap-x-3 rounded-lg border-l-4 bg-slate-800 p-3 shadow-lg {border}")
        >
            {icon}
            <div class="grow">
                <p class="font-bold">{notification.title}</p>
                <p class="text-sm text-slate-300">{notification.description}</p>
            </div>
            <Show when=move || closable>
                <button aria-label="Close" on:click=move |_| toaster.dismiss(id)>
                    <CloseIcon inner_class="h-5 w-5 text-slate-400 hover:text-slate-50" />
                </button>
            </Show>
        </li>
    }
}

/// Renders whatever the [`Toaster`] currently holds
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <ul class="fixed bottom-4 right-4 z-50 flex flex-col gap-y-2">
            <For
                each=move || toaster.toasts.get()
                key=|(id, _)| *id
                let:toast>
                <Toast id=toast.0 notification=toast.1 toaster=toaster />
            </For>
        </ul>
    }
}
