//! Hero section component

use leptos::*;

use crate::CONTENT;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{CONTENT.hero.headline}</h1>
            <p class="subtitle">{CONTENT.hero.description}</p>
            <a href="#beta" class="btn btn-primary">{CONTENT.hero.cta}</a>
        </div>
    }
}
