//! Texture handles and the host image loader seam.
//!
//! Textures are owned by the host. The extension only keeps opaque
//! [`TextureHandle`]s returned by a [`TextureLoader`] and hands them back to
//! the host's [`DrawSurface`](crate::systems::render::DrawSurface).

use crate::error::OverlayError;

/// Opaque id of a texture owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Image-asset loader provided by the host.
///
/// Each call may fail independently; the caller logs the failure and keeps
/// going with the remaining paths.
pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureHandle, OverlayError>;
}
