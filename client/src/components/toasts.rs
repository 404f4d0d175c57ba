//! Toast stack rendered above the page.

use leptos::prelude::*;

use launchpad::notify::NoticeKind;

use crate::state::toasts::ToastState;

/// Shows queued toasts; clicking one dismisses it early.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
