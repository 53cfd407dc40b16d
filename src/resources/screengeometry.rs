//! Screen geometry resources.
//!
//! [`DisplayState`] is what the host reports about its window: whether it is
//! in exclusive fullscreen, the configured back-buffer size, and the current
//! client area. [`ScreenGeometry`] is the area the overlay is stretched over,
//! recomputed from the display state on display-size changes, on the first
//! tick, and whenever the fullscreen flag flips.

use bevy_ecs::prelude::Resource;

/// Host-reported display state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Exclusive fullscreen mode.
    pub fullscreen: bool,
    /// Configured fullscreen back-buffer width in pixels.
    pub back_buffer_width: i32,
    /// Configured fullscreen back-buffer height in pixels.
    pub back_buffer_height: i32,
    /// Windowed client-area width in pixels.
    pub client_width: i32,
    /// Windowed client-area height in pixels.
    pub client_height: i32,
}

impl DisplayState {
    /// A windowed display with the given client area.
    pub fn windowed(width: i32, height: i32) -> Self {
        Self {
            fullscreen: false,
            back_buffer_width: width,
            back_buffer_height: height,
            client_width: width,
            client_height: height,
        }
    }
}

/// Renderable screen area in pixels.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenGeometry {
    /// Geometry for the given display: back buffer in fullscreen, client
    /// area otherwise. Prior values play no part.
    pub fn from_display(display: &DisplayState) -> Self {
        if display.fullscreen {
            Self {
                w: display.back_buffer_width,
                h: display.back_buffer_height,
            }
        } else {
            Self {
                w: display.client_width,
                h: display.client_height,
            }
        }
    }
}

/// Bookkeeping for geometry recomputes driven by ticks.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GeometryCheck {
    /// Set once the first-tick recompute has run.
    pub initial_done: bool,
    /// Fullscreen flag seen on the previous tick.
    pub last_fullscreen: bool,
}
