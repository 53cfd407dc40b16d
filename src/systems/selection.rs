//! Overlay selection observer.
//!
//! Reacts to [`LocationChangedEvent`] by scanning the [`RuleStore`] in order.
//! The first rule whose property value equals the location's value becomes
//! active at frame 0; if no rule matches, the selection is cleared. The whole
//! list is considered before deciding, so a non-matching rule never clears a
//! later match.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::locationchanged::LocationChangedEvent;
use crate::resources::overlayconfig::OverlayConfig;
use crate::resources::rulestore::RuleStore;
use crate::resources::selection::OverlaySelection;

/// Apply the "first match wins, else none" rule to `selection`.
pub fn select_overlay(
    rules: &RuleStore,
    selection: &mut OverlaySelection,
    property_value: Option<&str>,
) {
    let previous = selection.active_rule;
    match property_value.and_then(|value| rules.find(value)) {
        Some(index) => {
            selection.activate(index);
            if let Some(rule) = rules.get(index) {
                info!(
                    "Overlay '{}' activated ({})",
                    rule.property_value, rule.image_path
                );
            }
        }
        None => {
            selection.clear();
            if previous.is_some() {
                info!("Overlay cleared");
            }
        }
    }
}

/// Observer that updates the [`OverlaySelection`] on every location change.
pub fn select_overlay_observer(
    trigger: On<LocationChangedEvent>,
    config: Res<OverlayConfig>,
    rules: Res<RuleStore>,
    mut selection: ResMut<OverlaySelection>,
) {
    if !config.enabled {
        return;
    }
    select_overlay(
        &rules,
        &mut selection,
        trigger.event().property_value.as_deref(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::rulestore::{AnimationSpec, OverlayRule};

    fn rule(value: &str) -> OverlayRule {
        OverlayRule {
            property_value: value.to_string(),
            image_path: format!("{value}.png"),
            animation: AnimationSpec::new(1, 60),
            frame_textures: vec![],
        }
    }

    fn store(values: &[&str]) -> RuleStore {
        RuleStore {
            rules: values.iter().map(|v| rule(v)).collect(),
        }
    }

    #[test]
    fn test_match_activates_at_frame_zero() {
        let rules = store(&["Rain", "Cave"]);
        let mut selection = OverlaySelection {
            active_rule: Some(0),
            frame_index: 3,
        };
        select_overlay(&rules, &mut selection, Some("Cave"));
        assert_eq!(selection.active_rule, Some(1));
        assert_eq!(selection.frame_index, 0);
    }

    #[test]
    fn test_later_match_is_not_cleared_by_earlier_rules() {
        let rules = store(&["A", "B", "C"]);
        let mut selection = OverlaySelection::default();
        select_overlay(&rules, &mut selection, Some("C"));
        assert_eq!(selection.active_rule, Some(2));
    }

    #[test]
    fn test_first_match_wins() {
        let rules = store(&["Cave", "Cave"]);
        let mut selection = OverlaySelection::default();
        select_overlay(&rules, &mut selection, Some("Cave"));
        assert_eq!(selection.active_rule, Some(0));
    }

    #[test]
    fn test_no_match_clears() {
        let rules = store(&["Cave"]);
        let mut selection = OverlaySelection {
            active_rule: Some(0),
            frame_index: 0,
        };
        select_overlay(&rules, &mut selection, Some("Beach"));
        assert_eq!(selection, OverlaySelection::default());

        selection.activate(0);
        select_overlay(&rules, &mut selection, None);
        assert!(!selection.is_active());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rules = store(&["Cave"]);
        let mut selection = OverlaySelection::default();
        select_overlay(&rules, &mut selection, Some("cave"));
        assert!(!selection.is_active());
    }
}
