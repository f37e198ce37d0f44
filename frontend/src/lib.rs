//! BuyerMap - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that takes a user through uploading sales
//! materials and interviews, then shows how well the two line up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (beta access status)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero + BetaGate (until unlocked)                       │
//! │  ├── StepIndicator                                          │
//! │  ├── UploadPlaceholder (steps 1-2)                          │
//! │  └── AlignmentResults (step 4)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`content`] - Display copy registry
//! - [`styling`] - Outcome label to color tokens
//! - [`types`] - Common types (AlignmentReport, AppError, etc.)
//! - [`components`] - UI components (StepIndicator, UploadPlaceholder, etc.)
//! - [`services`] - Backend communication and report data

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod content;
pub mod styling;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Content and styling
pub use content::CONTENT;
pub use styling::{outcome_style, OutcomeCategory, OutcomeStyle};

// Types
pub use types::{
    // Report
    AlignmentReport, AssumptionResult,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Flow steps
// =============================================================================

const STEP_SALES_MATERIALS: u32 = 1;
const STEP_INTERVIEWS: u32 = 2;
const STEP_ANALYSIS: u32 = 3;
const STEP_REPORT: u32 = 4;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 BuyerMap - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (unlocked, set_unlocked) = create_signal(false);
    let (current_step, set_current_step) = create_signal(STEP_SALES_MATERIALS);

    let start_analysis = move || {
        set_current_step.set(STEP_ANALYSIS);
        log::info!("🔎 Comparing sales materials with interviews...");
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ANALYSIS_DELAY_MS).await;
            // Ignore if the user started over meanwhile
            if current_step.get_untracked() == STEP_ANALYSIS {
                set_current_step.set(STEP_REPORT);
            }
        });
    };

    let step_view = move || match current_step.get() {
        STEP_SALES_MATERIALS => view! {
            <div class="step-panel">
                <h2>{CONTENT.steps.sales_materials}</h2>
                <p class="upload-hint">{CONTENT.steps.sales_materials_hint}</p>
                <UploadPlaceholder on_complete=move |_| set_current_step.set(STEP_INTERVIEWS)/>
            </div>
        }
        .into_view(),
        STEP_INTERVIEWS => view! {
            <div class="step-panel">
                <h2>{CONTENT.steps.interviews}</h2>
                <p class="upload-hint">{CONTENT.steps.interviews_hint}</p>
                <UploadPlaceholder on_complete=move |_| start_analysis()/>
                <button class="btn btn-secondary" on:click=move |_| set_current_step.set(STEP_SALES_MATERIALS)>
                    {CONTENT.ui.back}
                </button>
            </div>
        }
        .into_view(),
        STEP_ANALYSIS => view! {
            <div class="step-panel">
                <h2>{CONTENT.steps.analysis}</h2>
                <p class="upload-hint">{CONTENT.steps.analysis_hint}</p>
                <div class="spinner">{CONTENT.ui.loading}</div>
            </div>
        }
        .into_view(),
        _ => view! {
            <div class="step-panel">
                <h2>{CONTENT.steps.report}</h2>
                <AlignmentResults report=sample_report()/>
                <button class="btn btn-secondary" on:click=move |_| set_current_step.set(STEP_SALES_MATERIALS)>
                    {CONTENT.ui.start_over}
                </button>
            </div>
        }
        .into_view(),
    };

    view! {
        <Header unlocked=unlocked/>

        <div class="container">
            <Show
                when=move || unlocked.get()
                fallback=move || view! {
                    <Hero/>
                    <BetaGate set_unlocked=set_unlocked/>
                }
            >
                <StepIndicator current_step=current_step/>
                {step_view}
            </Show>
        </div>

        <Footer/>
    }
}
