//! Overlay systems.
//!
//! Submodules overview
//! - [`animation`] – advance the active overlay's frame on tick boundaries
//! - [`geometry`] – keep the tracked screen size in sync with the display
//! - [`render`] – draw the active frame stretched over the screen
//! - [`selection`] – pick the active rule when the player changes location

pub mod animation;
pub mod geometry;
pub mod render;
pub mod selection;
