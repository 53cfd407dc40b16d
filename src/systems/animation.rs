//! Overlay frame animation.
//!
//! [`advance_overlay_frame_observer`] runs once per [`TickedEvent`]. For an
//! active animated rule it advances the visible frame whenever the host tick
//! counter crosses a multiple of the rule's frame duration, wrapping back to
//! frame 0 after the last one.
//!
//! The animation is phase-locked to the global tick counter, not to the tick
//! at which the rule became active. Activation still resets to frame 0; the
//! next boundary of the global counter then moves on to frame 1.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::ticked::TickedEvent;
use crate::resources::overlayconfig::OverlayConfig;
use crate::resources::rulestore::{AnimationSpec, RuleStore};
use crate::resources::selection::OverlaySelection;

/// Advance `selection` for tick `ticks`. Returns true if the frame changed.
///
/// No-op for static rules, for non-positive frame durations, and for tick 0
/// (the counter's starting value is not a boundary).
pub fn advance_frame(selection: &mut OverlaySelection, animation: AnimationSpec, ticks: u64) -> bool {
    if !animation.is_animated() || animation.frame_duration_ticks <= 0 || ticks == 0 {
        return false;
    }
    if ticks % animation.frame_duration_ticks as u64 != 0 {
        return false;
    }
    let frame_count = animation.frame_count as usize;
    selection.frame_index = if selection.frame_index + 1 >= frame_count {
        0
    } else {
        selection.frame_index + 1
    };
    true
}

/// Observer that drives the [`OverlaySelection`] frame index from ticks.
///
/// Contract
/// - Does nothing when overlays are disabled or no rule is active.
/// - Reads the tick counter from the event and the active rule's
///   [`AnimationSpec`] from the [`RuleStore`].
pub fn advance_overlay_frame_observer(
    trigger: On<TickedEvent>,
    config: Res<OverlayConfig>,
    rules: Res<RuleStore>,
    mut selection: ResMut<OverlaySelection>,
) {
    if !config.enabled {
        return;
    }
    let Some(rule) = selection.active_rule.and_then(|index| rules.get(index)) else {
        return;
    };
    let animation = rule.animation;
    advance_frame(&mut selection, animation, trigger.event().ticks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> OverlaySelection {
        let mut s = OverlaySelection::default();
        s.activate(0);
        s
    }

    #[test]
    fn test_static_rule_never_advances() {
        let mut selection = active();
        let spec = AnimationSpec::new(1, 1);
        for tick in 0..500 {
            assert!(!advance_frame(&mut selection, spec, tick));
            assert_eq!(selection.frame_index, 0);
        }
    }

    #[test]
    fn test_advances_on_boundaries_only() {
        let mut selection = active();
        let spec = AnimationSpec::new(3, 10);
        let mut seen = Vec::new();
        for tick in 0..40 {
            advance_frame(&mut selection, spec, tick);
            seen.push(selection.frame_index);
        }
        assert!(seen[0..10].iter().all(|&f| f == 0));
        assert!(seen[10..20].iter().all(|&f| f == 1));
        assert!(seen[20..30].iter().all(|&f| f == 2));
        assert!(seen[30..40].iter().all(|&f| f == 0));
    }

    #[test]
    fn test_k_boundaries_give_k_mod_frame_count() {
        let spec = AnimationSpec::new(4, 7);
        let mut selection = active();
        for k in 1..=20u64 {
            for tick in (k - 1) * 7 + 1..=k * 7 {
                advance_frame(&mut selection, spec, tick);
            }
            assert_eq!(selection.frame_index, (k % 4) as usize);
        }
    }

    #[test]
    fn test_phase_locked_to_global_counter() {
        let spec = AnimationSpec::new(2, 10);
        let mut selection = active();
        // activated mid-period: next boundary is tick 40, not 35 + 10
        for tick in 35..40 {
            advance_frame(&mut selection, spec, tick);
        }
        assert_eq!(selection.frame_index, 0);
        assert!(advance_frame(&mut selection, spec, 40));
        assert_eq!(selection.frame_index, 1);
    }

    #[test]
    fn test_non_positive_duration_is_ignored() {
        let mut selection = active();
        assert!(!advance_frame(&mut selection, AnimationSpec::new(3, 0), 10));
        assert!(!advance_frame(&mut selection, AnimationSpec::new(3, -5), 10));
        assert_eq!(selection.frame_index, 0);
    }
}
