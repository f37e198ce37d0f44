//! Alignment report view.
//!
//! Each assumption is rendered with the style of its outcome label; the
//! tabs filter by outcome.

use leptos::*;

use crate::services::count_outcomes;
use crate::styling::{outcome_style, OutcomeCategory};
use crate::types::{AlignmentReport, AssumptionResult};
use crate::CONTENT;

/// Result tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsTab {
    All,
    Aligned,
    Misaligned,
    NewInsights,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 4] = [
        ResultsTab::All,
        ResultsTab::Aligned,
        ResultsTab::Misaligned,
        ResultsTab::NewInsights,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::All => CONTENT.tabs.all,
            ResultsTab::Aligned => CONTENT.tabs.aligned,
            ResultsTab::Misaligned => CONTENT.tabs.misaligned,
            ResultsTab::NewInsights => CONTENT.tabs.new_insights,
        }
    }

    /// Whether an assumption belongs on this tab.
    ///
    /// Challenged and unrecognized outcomes only show under "All".
    pub fn includes(&self, result: &AssumptionResult) -> bool {
        let category = result.outcome_category();
        match self {
            ResultsTab::All => true,
            ResultsTab::Aligned => category == Some(OutcomeCategory::Aligned),
            ResultsTab::Misaligned => category == Some(OutcomeCategory::Misaligned),
            ResultsTab::NewInsights => matches!(
                category,
                Some(OutcomeCategory::NewDataAdded | OutcomeCategory::Refined)
            ),
        }
    }
}

/// Outcome label rendered in its style.
#[component]
pub fn OutcomeBadge(#[prop(into)] label: String) -> impl IntoView {
    let style = outcome_style(Some(label.as_str()));
    let icon = OutcomeCategory::parse(&label).map(|c| c.icon()).unwrap_or("•");

    view! {
        <span class=format!("outcome-badge border {}", style.container_class())>
            <span class=style.icon_color>{icon}</span>
            " "
            {label}
        </span>
    }
}

#[component]
pub fn AlignmentResults(report: AlignmentReport) -> impl IntoView {
    let (tab, set_tab) = create_signal(ResultsTab::All);
    let counts = count_outcomes(&report.assumptions);
    let assumptions = store_value(report.assumptions);

    view! {
        <div class="results-section">
            <div class="score-card">
                <div class="score-title">{CONTENT.alignment_score.title}</div>
                <div class="score-value">{report.score} "%"</div>
                <div class="score-description">{CONTENT.alignment_score.description}</div>
                <div class="score-breakdown">
                    <span>{CONTENT.alignment_score.aligned} ": " {counts.aligned}</span>
                    <span>{CONTENT.alignment_score.misaligned} ": " {counts.misaligned}</span>
                    <span>{CONTENT.alignment_score.new_insights} ": " {counts.new_insights}</span>
                    <span>{CONTENT.alignment_score.assumptions_tested} ": " {counts.total()}</span>
                </div>
            </div>

            <div class="tabs">
                {ResultsTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="tab"
                            class:active=move || tab.get() == t
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="assumption-list">
                <For
                    each=move || {
                        let current = tab.get();
                        assumptions.with_value(|all| {
                            all.iter()
                                .filter(|a| current.includes(a))
                                .cloned()
                                .enumerate()
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|(idx, a)| (*idx, a.assumption.clone())
                    children=move |(_, result)| {
                        let style = outcome_style(Some(result.outcome.as_str()));
                        view! {
                            <div class=format!("assumption-item border {}", style.container_class())>
                                <div class="assumption-header">
                                    <span class="assumption-category">{result.category.clone()}</span>
                                    <OutcomeBadge label=result.outcome.clone()/>
                                </div>
                                <div class="assumption-text">{result.assumption.clone()}</div>
                                <div class="assumption-evidence">
                                    <strong>{CONTENT.ui.evidence} ": "</strong>
                                    {result.evidence.clone()}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
