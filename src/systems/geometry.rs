//! Screen geometry tracking.
//!
//! Keeps [`ScreenGeometry`] in sync with the host [`DisplayState`]:
//! - [`recompute_geometry_observer`] on every [`DisplaySizeChangedEvent`]
//! - [`check_screen_geometry_observer`] on the first [`TickedEvent`] and on
//!   any tick where the fullscreen flag differs from the previous tick

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::displaysizechanged::DisplaySizeChangedEvent;
use crate::events::ticked::TickedEvent;
use crate::resources::overlayconfig::OverlayConfig;
use crate::resources::screengeometry::{DisplayState, GeometryCheck, ScreenGeometry};

fn recompute(display: &DisplayState, geometry: &mut ScreenGeometry, check: &mut GeometryCheck) {
    *geometry = ScreenGeometry::from_display(display);
    check.last_fullscreen = display.fullscreen;
    info!(
        "Overlay geometry set to {}x{} ({})",
        geometry.w,
        geometry.h,
        if display.fullscreen { "fullscreen" } else { "windowed" }
    );
}

/// Observer that recomputes the geometry when the host reports a resize.
pub fn recompute_geometry_observer(
    _trigger: On<DisplaySizeChangedEvent>,
    config: Res<OverlayConfig>,
    display: Res<DisplayState>,
    mut geometry: ResMut<ScreenGeometry>,
    mut check: ResMut<GeometryCheck>,
) {
    if !config.enabled {
        return;
    }
    recompute(&display, &mut geometry, &mut check);
}

/// Observer that recomputes the geometry on the first tick and whenever the
/// display switched in or out of fullscreen since the last tick.
pub fn check_screen_geometry_observer(
    _trigger: On<TickedEvent>,
    config: Res<OverlayConfig>,
    display: Res<DisplayState>,
    mut geometry: ResMut<ScreenGeometry>,
    mut check: ResMut<GeometryCheck>,
) {
    if !config.enabled {
        return;
    }
    if !check.initial_done || check.last_fullscreen != display.fullscreen {
        recompute(&display, &mut geometry, &mut check);
        check.initial_done = true;
    }
}
