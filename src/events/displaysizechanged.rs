//! Display size change event.
//!
//! Triggered by the host after the window client area or the display mode
//! changed. The host updates [`DisplayState`](crate::resources::screengeometry::DisplayState)
//! first; [`recompute_geometry_observer`](crate::systems::geometry::recompute_geometry_observer)
//! then refreshes the tracked screen geometry.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct DisplaySizeChangedEvent {}
