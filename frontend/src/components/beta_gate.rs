//! Beta access form.
//!
//! Sends the password to the backend and unlocks the flow on a match.

use leptos::*;
use web_sys::SubmitEvent;

use crate::services::verify_beta_password;
use crate::{BACKEND_URL, CONTENT};

#[component]
pub fn BetaGate(set_unlocked: WriteSignal<bool>) -> impl IntoView {
    let (password, set_password) = create_signal(String::new());
    let (is_checking, set_is_checking) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_checking.get_untracked() {
            return;
        }

        let submitted = password.get_untracked();
        set_error.set(None);

        spawn_local(async move {
            set_is_checking.set(true);

            match verify_beta_password(&submitted, BACKEND_URL).await {
                Ok(true) => {
                    log::info!("🔓 Beta access granted");
                    set_unlocked.set(true);
                }
                Ok(false) => {
                    log::info!("🔒 Beta password rejected");
                    set_error.set(Some(CONTENT.beta.wrong_password.to_string()));
                }
                Err(e) => {
                    log::error!("❌ Beta check failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }

            set_is_checking.set(false);
        });
    };

    view! {
        <div class="beta-gate" id="beta">
            <h2>{CONTENT.beta.title}</h2>
            <p class="subtitle">{CONTENT.beta.description}</p>
            <form on:submit=on_submit>
                <input
                    type="password"
                    placeholder=CONTENT.beta.password_placeholder
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || is_checking.get()>
                    {move || if is_checking.get() { CONTENT.beta.checking } else { CONTENT.beta.unlock }}
                </button>
            </form>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
