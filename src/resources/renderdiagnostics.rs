//! Render diagnostics resource.
//!
//! Remembers which (rule, frame) pairs the render pass already skipped
//! because the frame never loaded, so each gap is logged once instead of
//! once per frame drawn.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Clone, Default)]
pub struct RenderDiagnostics {
    /// (rule index, frame index) pairs already reported.
    pub missing_frames: FxHashSet<(usize, usize)>,
}

impl RenderDiagnostics {
    /// Record a missing frame. Returns true the first time a pair is seen.
    pub fn report_missing(&mut self, rule: usize, frame: usize) -> bool {
        self.missing_frames.insert((rule, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_missing_once_per_pair() {
        let mut diagnostics = RenderDiagnostics::default();
        assert!(diagnostics.report_missing(0, 2));
        assert!(!diagnostics.report_missing(0, 2));
        assert!(diagnostics.report_missing(1, 2));
        assert_eq!(diagnostics.missing_frames.len(), 2);
    }
}
