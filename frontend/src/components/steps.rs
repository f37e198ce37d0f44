//! Step indicator for the validation flow.
//!
//! Rendering is driven by [`step_track`], a pure function of the current
//! step and the step count.

use leptos::*;

use crate::DEFAULT_TOTAL_STEPS;

/// One numbered marker (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepMarker {
    pub index: u32,
    /// Highlighted when the flow has reached this step
    pub reached: bool,
}

/// Connector between marker `from` and marker `from + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepConnector {
    pub from: u32,
    /// Highlighted once the flow has moved past `from`
    pub highlighted: bool,
}

/// Markers and connectors for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepTrack {
    pub markers: Vec<StepMarker>,
    pub connectors: Vec<StepConnector>,
}

/// Classify every step against `current_step`.
///
/// Out-of-range steps are not clamped: step 0 reaches nothing and a
/// step past the end reaches everything.
pub fn step_track(current_step: u32, total_steps: u32) -> StepTrack {
    let markers = (1..=total_steps)
        .map(|index| StepMarker {
            index,
            reached: current_step >= index,
        })
        .collect();

    let connectors = (1..total_steps)
        .map(|from| StepConnector {
            from,
            highlighted: current_step > from,
        })
        .collect();

    StepTrack { markers, connectors }
}

fn marker_class(reached: bool) -> &'static str {
    if reached {
        "step-marker bg-blue-600 text-white"
    } else {
        "step-marker bg-gray-200 text-gray-600"
    }
}

fn connector_class(highlighted: bool) -> &'static str {
    if highlighted {
        "step-connector bg-blue-600"
    } else {
        "step-connector bg-gray-200"
    }
}

#[component]
pub fn StepIndicator(
    /// Current step, 1-based
    #[prop(into)]
    current_step: MaybeSignal<u32>,
    /// Number of steps
    #[prop(default = DEFAULT_TOTAL_STEPS)]
    total_steps: u32,
) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {move || {
                let StepTrack { markers, connectors } = step_track(current_step.get(), total_steps);
                markers
                    .into_iter()
                    .map(|marker| {
                        let connector = connectors.get(marker.index as usize - 1).copied();
                        view! {
                            <div class=marker_class(marker.reached)>{marker.index}</div>
                            {connector.map(|c| view! { <div class=connector_class(c.highlighted)></div> })}
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_total() {
        for total in 1..=8 {
            for current in 0..=total + 2 {
                let track = step_track(current, total);
                assert_eq!(track.markers.len(), total as usize);
                assert_eq!(track.connectors.len(), total as usize - 1);
            }
        }
    }

    #[test]
    fn test_reached_and_highlighted_rules() {
        for total in 1..=6 {
            for current in 0..=total + 1 {
                let track = step_track(current, total);
                for m in &track.markers {
                    assert_eq!(m.reached, current >= m.index);
                }
                for c in &track.connectors {
                    assert_eq!(c.highlighted, current > c.from);
                }
            }
        }
    }

    #[test]
    fn test_default_flow_on_step_two() {
        let track = step_track(2, DEFAULT_TOTAL_STEPS);
        let reached: Vec<bool> = track.markers.iter().map(|m| m.reached).collect();
        let highlighted: Vec<bool> = track.connectors.iter().map(|c| c.highlighted).collect();

        assert_eq!(reached, vec![true, true, false, false]);
        assert_eq!(highlighted, vec![true, false, false]);
    }

    #[test]
    fn test_out_of_range_steps() {
        let before = step_track(0, 4);
        assert!(before.markers.iter().all(|m| !m.reached));
        assert!(before.connectors.iter().all(|c| !c.highlighted));

        let past = step_track(9, 4);
        assert!(past.markers.iter().all(|m| m.reached));
        assert!(past.connectors.iter().all(|c| c.highlighted));
    }

    #[test]
    fn test_single_step_has_no_connector() {
        let track = step_track(1, 1);
        assert_eq!(track.markers, vec![StepMarker { index: 1, reached: true }]);
        assert!(track.connectors.is_empty());
    }

    #[test]
    fn test_zero_steps_renders_nothing() {
        let track = step_track(1, 0);
        assert!(track.markers.is_empty());
        assert!(track.connectors.is_empty());
    }

    #[test]
    fn test_track_is_deterministic() {
        assert_eq!(step_track(3, 5), step_track(3, 5));
    }
}
