//! Overlay selection resource.
//!
//! Tracks which rule of the [`RuleStore`](crate::resources::rulestore::RuleStore)
//! is currently shown and which of its frames is visible. The active rule is
//! an index into the store, which outlives the selection.

use bevy_ecs::prelude::Resource;

/// Currently active overlay rule and frame.
///
/// Only the selection observer changes `active_rule`; only the frame
/// animator changes `frame_index` after activation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlaySelection {
    /// Index of the active rule in the rule store.
    pub active_rule: Option<usize>,
    /// 0-based index of the visible frame.
    pub frame_index: usize,
}

impl OverlaySelection {
    /// Activate `rule`, restarting at frame 0.
    pub fn activate(&mut self, rule: usize) {
        self.active_rule = Some(rule);
        self.frame_index = 0;
    }

    /// Clear the active rule.
    pub fn clear(&mut self) {
        self.active_rule = None;
        self.frame_index = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active_rule.is_some()
    }
}
