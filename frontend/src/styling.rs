//! Outcome styling.
//!
//! Maps an outcome label ("Aligned", "Misaligned", ...) to the color
//! tokens used to render it. The mapping is total: unknown, empty or
//! missing labels get the neutral gray style.

/// Recognized outcome categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeCategory {
    /// Assumption confirmed by interviews
    Aligned,
    /// Assumption contradicted by interviews
    Misaligned,
    /// Interviews surfaced something the materials did not mention
    NewDataAdded,
    /// Assumption holds but was sharpened
    Refined,
    /// Assumption is disputed by part of the evidence
    Challenged,
}

impl OutcomeCategory {
    pub const ALL: [OutcomeCategory; 5] = [
        OutcomeCategory::Aligned,
        OutcomeCategory::Misaligned,
        OutcomeCategory::NewDataAdded,
        OutcomeCategory::Refined,
        OutcomeCategory::Challenged,
    ];

    /// Parse a label, ignoring case.
    ///
    /// Only case is normalized: surrounding whitespace or typos make the
    /// label unrecognized.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "aligned" => Some(OutcomeCategory::Aligned),
            "misaligned" => Some(OutcomeCategory::Misaligned),
            "new data added" => Some(OutcomeCategory::NewDataAdded),
            "refined" => Some(OutcomeCategory::Refined),
            "challenged" => Some(OutcomeCategory::Challenged),
            _ => None,
        }
    }

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeCategory::Aligned => "aligned",
            OutcomeCategory::Misaligned => "misaligned",
            OutcomeCategory::NewDataAdded => "new data added",
            OutcomeCategory::Refined => "refined",
            OutcomeCategory::Challenged => "challenged",
        }
    }

    pub fn style(&self) -> OutcomeStyle {
        match self {
            OutcomeCategory::Aligned => OutcomeStyle::GREEN,
            OutcomeCategory::Misaligned => OutcomeStyle::RED,
            // Both are informational updates
            OutcomeCategory::NewDataAdded | OutcomeCategory::Refined => OutcomeStyle::BLUE,
            OutcomeCategory::Challenged => OutcomeStyle::ORANGE,
        }
    }

    /// Get emoji prefix for display.
    pub fn icon(&self) -> &'static str {
        match self {
            OutcomeCategory::Aligned => "✅",
            OutcomeCategory::Misaligned => "❌",
            OutcomeCategory::NewDataAdded => "➕",
            OutcomeCategory::Refined => "🔧",
            OutcomeCategory::Challenged => "⚠️",
        }
    }
}

/// Color tokens for one outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeStyle {
    pub text_color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
    pub icon_color: &'static str,
}

impl OutcomeStyle {
    pub const GREEN: OutcomeStyle = OutcomeStyle {
        text_color: "text-green-800",
        bg_color: "bg-green-50",
        border_color: "border-green-200",
        icon_color: "text-green-500",
    };

    pub const RED: OutcomeStyle = OutcomeStyle {
        text_color: "text-red-800",
        bg_color: "bg-red-50",
        border_color: "border-red-200",
        icon_color: "text-red-500",
    };

    pub const BLUE: OutcomeStyle = OutcomeStyle {
        text_color: "text-blue-800",
        bg_color: "bg-blue-50",
        border_color: "border-blue-200",
        icon_color: "text-blue-500",
    };

    pub const ORANGE: OutcomeStyle = OutcomeStyle {
        text_color: "text-orange-800",
        bg_color: "bg-orange-50",
        border_color: "border-orange-200",
        icon_color: "text-orange-500",
    };

    /// Neutral style for unrecognized labels.
    pub const NEUTRAL: OutcomeStyle = OutcomeStyle {
        text_color: "text-gray-800",
        bg_color: "bg-gray-50",
        border_color: "border-gray-200",
        icon_color: "text-gray-500",
    };

    /// Class list for a bordered container (text, background, border).
    pub fn container_class(&self) -> String {
        format!("{} {} {}", self.text_color, self.bg_color, self.border_color)
    }
}

impl Default for OutcomeStyle {
    fn default() -> Self {
        OutcomeStyle::NEUTRAL
    }
}

/// Resolve the style for an outcome label.
pub fn outcome_style(label: Option<&str>) -> OutcomeStyle {
    label
        .and_then(OutcomeCategory::parse)
        .map(|category| category.style())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_labels() {
        assert_eq!(outcome_style(Some("aligned")), OutcomeStyle::GREEN);
        assert_eq!(outcome_style(Some("misaligned")), OutcomeStyle::RED);
        assert_eq!(outcome_style(Some("new data added")), OutcomeStyle::BLUE);
        assert_eq!(outcome_style(Some("refined")), OutcomeStyle::BLUE);
        assert_eq!(outcome_style(Some("challenged")), OutcomeStyle::ORANGE);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(outcome_style(Some("ALIGNED")), OutcomeStyle::GREEN);
        assert_eq!(outcome_style(Some("Misaligned")), OutcomeStyle::RED);
        assert_eq!(outcome_style(Some("New Data Added")), OutcomeStyle::BLUE);
        assert_eq!(outcome_style(Some("rEfInEd")), OutcomeStyle::BLUE);
        assert_eq!(outcome_style(Some("CHALLENGED")), OutcomeStyle::ORANGE);
    }

    #[test]
    fn test_unrecognized_labels_fall_back_to_neutral() {
        for label in ["", "unknown", "alligned", " aligned", "new-data-added", "aligned."] {
            assert_eq!(outcome_style(Some(label)), OutcomeStyle::NEUTRAL, "{label:?}");
        }
        assert_eq!(outcome_style(None), OutcomeStyle::NEUTRAL);
    }

    #[test]
    fn test_only_informational_labels_share_a_style() {
        let styles: Vec<OutcomeStyle> = OutcomeCategory::ALL.iter().map(|c| c.style()).collect();
        for (i, a) in styles.iter().enumerate() {
            for (j, b) in styles.iter().enumerate().skip(i + 1) {
                let shared = (OutcomeCategory::ALL[i], OutcomeCategory::ALL[j])
                    == (OutcomeCategory::NewDataAdded, OutcomeCategory::Refined);
                assert_eq!(a == b, shared, "{:?} vs {:?}", OutcomeCategory::ALL[i], OutcomeCategory::ALL[j]);
            }
        }
        assert!(styles.iter().all(|s| *s != OutcomeStyle::NEUTRAL));
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for category in OutcomeCategory::ALL {
            assert_eq!(OutcomeCategory::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn test_container_class() {
        assert_eq!(
            OutcomeStyle::GREEN.container_class(),
            "text-green-800 bg-green-50 border-green-200"
        );
    }
}
