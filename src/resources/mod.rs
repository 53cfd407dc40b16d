//! ECS resources holding the extension state.
//!
//! All long-lived state is stored as resources in the world owned by
//! [`crate::overlay::OverlayExtension`].
//!
//! Overview
//! - `maplocation` – map property lookup seam and a table-backed location
//! - `overlayconfig` – INI configuration, including the enabled flag
//! - `overlaydata` – raw JSON overlay rule document
//! - `renderdiagnostics` – log-once bookkeeping for missing frames
//! - `rulestore` – validated, immutable overlay rules
//! - `screengeometry` – host display state and tracked screen size
//! - `selection` – active rule and frame index
//! - `texture` – texture handles and the host loader seam
pub mod maplocation;
pub mod overlayconfig;
pub mod overlaydata;
pub mod renderdiagnostics;
pub mod rulestore;
pub mod screengeometry;
pub mod selection;
pub mod texture;
