//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="mailto:hello@buyermap.app" class="footer-link">
                    "Contact"
                </a>
            </div>
        </footer>
    }
}
