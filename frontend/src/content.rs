//! Display copy for the whole application.
//!
//! Every string the UI shows lives in [`CONTENT`], grouped by concern.
//! Components read fields directly (`CONTENT.hero.headline`), so a
//! missing key is a compile error rather than a runtime lookup failure.

/// Landing copy.
#[derive(Debug)]
pub struct HeroContent {
    pub headline: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

/// Labels around the alignment score.
#[derive(Debug)]
pub struct AlignmentScoreContent {
    pub title: &'static str,
    pub description: &'static str,
    pub aligned: &'static str,
    pub misaligned: &'static str,
    pub new_insights: &'static str,
    pub assumptions_tested: &'static str,
}

/// Result tab labels.
#[derive(Debug)]
pub struct TabContent {
    pub all: &'static str,
    pub aligned: &'static str,
    pub misaligned: &'static str,
    pub new_insights: &'static str,
}

/// Labels for the assumption categories of a buyer profile.
#[derive(Debug)]
pub struct CategoryContent {
    pub buyer_titles: &'static str,
    pub company_size: &'static str,
    pub pain_points: &'static str,
    pub desired_outcomes: &'static str,
    pub triggers: &'static str,
    pub barriers: &'static str,
    pub messaging_emphasis: &'static str,
}

/// Outcome status labels.
///
/// These are the labels the outcome styling recognizes.
#[derive(Debug)]
pub struct StatusContent {
    pub aligned: &'static str,
    pub misaligned: &'static str,
    pub new_data_added: &'static str,
    pub refined: &'static str,
    pub challenged: &'static str,
}

/// Step titles and descriptions of the validation flow.
#[derive(Debug)]
pub struct StepContent {
    pub sales_materials: &'static str,
    pub sales_materials_hint: &'static str,
    pub interviews: &'static str,
    pub interviews_hint: &'static str,
    pub analysis: &'static str,
    pub analysis_hint: &'static str,
    pub report: &'static str,
}

/// Beta gate copy.
#[derive(Debug)]
pub struct BetaContent {
    pub title: &'static str,
    pub description: &'static str,
    pub password_placeholder: &'static str,
    pub unlock: &'static str,
    pub checking: &'static str,
    pub wrong_password: &'static str,
}

/// Generic UI actions.
#[derive(Debug)]
pub struct UiContent {
    pub upload_cta: &'static str,
    pub upload_hint: &'static str,
    pub continue_label: &'static str,
    pub back: &'static str,
    pub start_over: &'static str,
    pub evidence: &'static str,
    pub loading: &'static str,
}

/// All display copy.
#[derive(Debug)]
pub struct Content {
    pub hero: HeroContent,
    pub alignment_score: AlignmentScoreContent,
    pub tabs: TabContent,
    pub categories: CategoryContent,
    pub status: StatusContent,
    pub steps: StepContent,
    pub beta: BetaContent,
    pub ui: UiContent,
}

pub static CONTENT: Content = Content {
    hero: HeroContent {
        headline: "Know if your sales story matches what buyers actually say",
        description: "Upload your sales deck and your customer interviews. BuyerMap compares \
                      every assumption about your buyer against interview evidence and shows \
                      where your messaging is aligned, off, or missing something.",
        cta: "Validate my assumptions",
    },
    alignment_score: AlignmentScoreContent {
        title: "Alignment Score",
        description: "Share of your assumptions confirmed by interview evidence",
        aligned: "Aligned",
        misaligned: "Misaligned",
        new_insights: "New insights",
        assumptions_tested: "Assumptions tested",
    },
    tabs: TabContent {
        all: "All",
        aligned: "Aligned",
        misaligned: "Misaligned",
        new_insights: "New Insights",
    },
    categories: CategoryContent {
        buyer_titles: "Buyer Titles",
        company_size: "Company Size",
        pain_points: "Pain Points",
        desired_outcomes: "Desired Outcomes",
        triggers: "Triggers",
        barriers: "Barriers",
        messaging_emphasis: "Messaging Emphasis",
    },
    status: StatusContent {
        aligned: "Aligned",
        misaligned: "Misaligned",
        new_data_added: "New Data Added",
        refined: "Refined",
        challenged: "Challenged",
    },
    steps: StepContent {
        sales_materials: "Upload sales materials",
        sales_materials_hint: "Pitch decks, one-pagers, website copy (PDF, DOCX, TXT)",
        interviews: "Upload customer interviews",
        interviews_hint: "Call transcripts or interview notes",
        analysis: "Comparing assumptions with evidence",
        analysis_hint: "This usually takes a few seconds",
        report: "Your alignment report",
    },
    beta: BetaContent {
        title: "Private beta",
        description: "BuyerMap is invite-only for now. Enter the beta password to continue.",
        password_placeholder: "Beta password",
        unlock: "Unlock",
        checking: "Checking...",
        wrong_password: "That password is not right. Try again.",
    },
    ui: UiContent {
        upload_cta: "Choose files",
        upload_hint: "or drag and drop them here",
        continue_label: "Continue",
        back: "Back",
        start_over: "Start over",
        evidence: "Evidence",
        loading: "Loading...",
    },
};
