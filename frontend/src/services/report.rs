//! Alignment report data.
//!
//! The scoring engine runs outside this application; until it is wired
//! in, the flow shows [`sample_report`].

use crate::content::CONTENT;
use crate::styling::OutcomeCategory;
use crate::types::{AlignmentReport, AssumptionResult};

/// Per-outcome totals for the score summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub aligned: usize,
    pub misaligned: usize,
    /// New data added or refined
    pub new_insights: usize,
    pub challenged: usize,
    /// Labels no category recognizes
    pub unclassified: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.aligned + self.misaligned + self.new_insights + self.challenged + self.unclassified
    }
}

/// Count assumptions by outcome.
pub fn count_outcomes(assumptions: &[AssumptionResult]) -> OutcomeCounts {
    assumptions
        .iter()
        .fold(OutcomeCounts::default(), |mut counts, result| {
            match result.outcome_category() {
                Some(OutcomeCategory::Aligned) => counts.aligned += 1,
                Some(OutcomeCategory::Misaligned) => counts.misaligned += 1,
                Some(OutcomeCategory::NewDataAdded | OutcomeCategory::Refined) => {
                    counts.new_insights += 1
                }
                Some(OutcomeCategory::Challenged) => counts.challenged += 1,
                None => counts.unclassified += 1,
            }
            counts
        })
}

/// Share of assumptions confirmed by evidence, rounded to a whole percent.
///
/// An empty report scores 0.
pub fn alignment_score(counts: &OutcomeCounts) -> u8 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }
    ((counts.aligned * 100 + total / 2) / total) as u8
}

fn assumption(category: &str, assumption: &str, outcome: &str, evidence: &str) -> AssumptionResult {
    AssumptionResult {
        category: category.to_string(),
        assumption: assumption.to_string(),
        outcome: outcome.to_string(),
        evidence: evidence.to_string(),
    }
}

/// Report shown at the end of the flow.
pub fn sample_report() -> AlignmentReport {
    let categories = &CONTENT.categories;
    let status = &CONTENT.status;

    let assumptions = vec![
        assumption(
            categories.buyer_titles,
            "Heads of Sales Operations own the purchase",
            status.aligned,
            "5 of 6 interviewees were in RevOps or Sales Ops leadership",
        ),
        assumption(
            categories.company_size,
            "Mid-market companies with 200-1000 employees",
            status.refined,
            "Strongest pull came from 300-600 employee companies with a dedicated ops team",
        ),
        assumption(
            categories.pain_points,
            "Forecasts are inaccurate because CRM data is stale",
            status.aligned,
            "\"We re-key pipeline numbers into a spreadsheet every Friday\"",
        ),
        assumption(
            categories.desired_outcomes,
            "Buyers want AI-generated forecasts",
            status.misaligned,
            "Interviewees asked for clean data first and distrusted automated predictions",
        ),
        assumption(
            categories.triggers,
            "New CRO hire triggers evaluation",
            status.challenged,
            "Two interviews agreed; three pointed to board reporting deadlines instead",
        ),
        assumption(
            categories.barriers,
            "Security review is the main blocker",
            status.new_data_added,
            "Integration effort with existing BI tools came up more often than security",
        ),
        assumption(
            categories.messaging_emphasis,
            "Lead with time saved",
            status.aligned,
            "Every interviewee quantified hours lost to manual reporting",
        ),
    ];

    AlignmentReport {
        score: alignment_score(&count_outcomes(&assumptions)),
        assumptions,
    }
}
