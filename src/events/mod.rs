//! Host events consumed by the overlay extension.
//!
//! Each event is dispatched with `World::trigger` and handled by observers
//! registered in [`crate::overlay::register_observers`].
//!
//! Submodules:
//! - [`displaysizechanged`] – the window or display mode changed size
//! - [`locationchanged`] – the player warped to a new location
//! - [`ticked`] – one simulation tick elapsed
pub mod displaysizechanged;
pub mod locationchanged;
pub mod ticked;
