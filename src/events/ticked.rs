//! Tick event.
//!
//! The host triggers [`TickedEvent`] once per simulation step, carrying its
//! monotonic tick counter. Observed by the frame animator
//! ([`advance_overlay_frame_observer`](crate::systems::animation::advance_overlay_frame_observer))
//! and the geometry tracker
//! ([`check_screen_geometry_observer`](crate::systems::geometry::check_screen_geometry_observer)).

use bevy_ecs::prelude::*;

/// One discrete game tick has elapsed.
#[derive(Event, Debug, Clone, Copy)]
pub struct TickedEvent {
    /// Host tick counter for this step.
    pub ticks: u64,
}
