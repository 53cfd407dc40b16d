//! Map overlay extension library.
//!
//! Overlays a full-screen image on the game view while the player stands in a
//! location whose designated map property matches a configured rule,
//! optionally cycling through animation frames on a fixed tick interval.
//!
//! - [`error`] – error taxonomy shared by loaders
//! - [`events`] – host events (tick, location change, display resize)
//! - [`overlay`] – extension entry point and event registration
//! - [`resources`] – ECS resources holding rules, selection and geometry
//! - [`systems`] – observers and the render pass

pub mod error;
pub mod events;
pub mod overlay;
pub mod resources;
pub mod systems;
