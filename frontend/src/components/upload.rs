//! Upload placeholder.
//!
//! Shows the upload call-to-action and reports completion to the parent.
//! No file is read yet: activating the placeholder counts as a finished
//! upload.

use leptos::*;

use crate::CONTENT;

/// Build the activation handler for the placeholder.
///
/// The returned closure is the only path to `on_complete`: it forwards
/// one call per activation and keeps no state between calls.
fn activation_handler(on_complete: Callback<()>) -> impl Fn() + Copy + 'static {
    move || {
        log::debug!("upload placeholder activated");
        on_complete.call(());
    }
}

#[component]
pub fn UploadPlaceholder(
    /// Called once per activation
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let activate = activation_handler(on_complete);

    // Clicks on the button bubble up here, so one click is one activation.
    view! {
        <div class="upload-section" on:click=move |_| activate()>
            <div class="upload-icon">"📤"</div>
            <button type="button" class="upload-button">
                {CONTENT.ui.upload_cta}
            </button>
            <div class="upload-hint">{CONTENT.ui.upload_hint}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_callback() -> (Callback<()>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let on_complete = Callback::new(move |_| counter.set(counter.get() + 1));
        (on_complete, calls)
    }

    #[test]
    fn test_building_the_handler_does_not_call_back() {
        let runtime = create_runtime();

        let (on_complete, calls) = counting_callback();
        let _activate = activation_handler(on_complete);
        assert_eq!(calls.get(), 0);

        runtime.dispose();
    }

    #[test]
    fn test_each_activation_calls_back_once() {
        let runtime = create_runtime();

        let (on_complete, calls) = counting_callback();
        let activate = activation_handler(on_complete);

        activate();
        assert_eq!(calls.get(), 1);

        activate();
        activate();
        assert_eq!(calls.get(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_handler_copies_share_the_callback() {
        let runtime = create_runtime();

        let (on_complete, calls) = counting_callback();
        let activate = activation_handler(on_complete);
        let copy = activate;

        activate();
        copy();
        assert_eq!(calls.get(), 2);

        runtime.dispose();
    }
}
