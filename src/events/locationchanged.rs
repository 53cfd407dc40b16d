//! Player location change event.
//!
//! [`LocationChangedEvent`] carries the value of the designated map property
//! read from the player's new location. It is observed by
//! [`select_overlay_observer`](crate::systems::selection::select_overlay_observer).

use bevy_ecs::prelude::*;

use crate::resources::maplocation::MapPropertySource;

/// The player moved to a new location.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct LocationChangedEvent {
    /// Value of the designated map property, `None` if the location lacks it.
    pub property_value: Option<String>,
}

impl LocationChangedEvent {
    /// Build the event by reading property `key` from `location`.
    pub fn read_from(location: &(impl MapPropertySource + ?Sized), key: &str) -> Self {
        Self {
            property_value: location.map_property(key),
        }
    }
}
