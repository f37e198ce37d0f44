use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header(
    /// Whether the beta gate has been passed
    unlocked: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge">"Beta"</span>
            </div>
            <div class="header-right">
                <span class="access-dot" class:unlocked=move || unlocked.get()></span>
                <span>{move || if unlocked.get() { "Access granted" } else { "Locked" }}</span>
            </div>
        </header>
    }
}
