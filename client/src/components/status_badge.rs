//! Fixed build badge in the bottom-right corner.

use leptos::prelude::*;

#[component]
pub fn StatusBadge() -> impl IntoView {
    view! {
        <div class="status-badge">
            <span class="status-badge__dot"></span>
            <span class="status-badge__label">"АЛЬФА 0"</span>
        </div>
    }
}
